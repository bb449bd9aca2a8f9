//! The client record as stored by the backend.

use serde::{Deserialize, Serialize};

use crate::types::{BirthDate, ClientId, Field};

/// A single client entity.
///
/// Field names on the wire follow the backend's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Backend-assigned identifier.
    pub id: ClientId,

    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellidos")]
    pub last_name: String,

    /// Eight-digit national document number.
    #[serde(rename = "numero_documento")]
    pub document_number: u64,

    #[serde(rename = "direccion", default)]
    pub address: Field<String>,

    #[serde(default)]
    pub email: String,

    #[serde(rename = "edad")]
    pub age: u32,

    #[serde(rename = "telefono", default)]
    pub phone: Field<u64>,

    /// ISO calendar date on the wire.
    #[serde(rename = "fecha_nacimiento", default)]
    pub birth_date: Field<BirthDate>,

    #[serde(rename = "pais", default)]
    pub country: Field<String>,

    #[serde(rename = "habilitado")]
    pub enabled: bool,
}

impl ClientRecord {
    /// Returns "first last" for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_backend_shape() {
        let record: ClientRecord = serde_json::from_value(json!({
            "id": 3,
            "nombre": "Ana",
            "apellidos": "Quispe Rojas",
            "direccion": null,
            "numero_documento": 45678912,
            "email": "ana@example.pe",
            "edad": 34,
            "telefono": 987654321,
            "fecha_nacimiento": "1990-06-15",
            "pais": "Peru",
            "habilitado": true
        }))
        .unwrap();

        assert_eq!(record.id, ClientId::new(3));
        assert_eq!(record.full_name(), "Ana Quispe Rojas");
        assert!(record.address.is_absent());
        assert_eq!(record.phone, Field::Present(987654321));
        assert_eq!(
            record.birth_date.as_option().map(BirthDate::to_dmy).as_deref(),
            Some("15/06/1990")
        );
        assert!(record.enabled);
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let record: ClientRecord = serde_json::from_value(json!({
            "id": 9,
            "nombre": "Luis",
            "apellidos": "Paz",
            "numero_documento": 12345678,
            "email": "luis@example.com",
            "edad": 20,
            "habilitado": false
        }))
        .unwrap();

        assert!(record.phone.is_absent());
        assert!(record.birth_date.is_absent());
        assert!(record.country.is_absent());
        assert!(!record.enabled);
    }
}
