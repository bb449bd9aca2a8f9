//! Explicitly optional field values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional value that is either present or explicitly absent.
///
/// `Absent` serializes as JSON `null` and never as an empty string, so the
/// backend can tell "no value" apart from "empty text". Missing keys and
/// `null` both deserialize to `Absent`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Field<T> {
    Present(T),
    #[default]
    Absent,
}

impl<T> Field<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Present(value) => Field::Present(value),
            Field::Absent => Field::Absent,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Present(value) => Field::Present(f(value)),
            Field::Absent => Field::Absent,
        }
    }
}

impl Field<String> {
    /// Build a text field from user input; blank input is `Absent`.
    pub fn from_text(text: impl AsRef<str>) -> Self {
        let text = text.as_ref().trim();
        if text.is_empty() {
            Field::Absent
        } else {
            Field::Present(text.to_string())
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.as_option().map(String::as_str)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Absent,
        }
    }
}

impl<T> From<Field<T>> for Option<T> {
    fn from(value: Field<T>) -> Self {
        match value {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Present(value) => serializer.serialize_some(value),
            Field::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(default)]
        phone: Field<u64>,
    }

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(Field::from_text(""), Field::Absent);
        assert_eq!(Field::from_text("   "), Field::Absent);
        assert_eq!(Field::from_text(" Lima "), Field::Present("Lima".to_string()));
    }

    #[test]
    fn absent_serializes_as_null() {
        let json = serde_json::to_value(Holder { phone: Field::Absent }).unwrap();
        assert!(json["phone"].is_null());
        assert!(json.as_object().unwrap().contains_key("phone"));
    }

    #[test]
    fn missing_key_and_null_deserialize_as_absent() {
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert!(missing.phone.is_absent());
        let null: Holder = serde_json::from_str(r#"{"phone":null}"#).unwrap();
        assert!(null.phone.is_absent());
        let present: Holder = serde_json::from_str(r#"{"phone":987654321}"#).unwrap();
        assert_eq!(present.phone, Field::Present(987654321));
    }
}
