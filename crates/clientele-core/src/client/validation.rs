//! Local form validation.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{BirthDate, Field};

use super::ClientFormInput;

/// Minimum age accepted when registering a new client.
pub const MIN_NEW_CLIENT_AGE: u32 = 18;

/// Exact number of digits in a document number.
pub const DOCUMENT_DIGITS: usize = 8;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 9;

/// The fields of a client form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    DocumentNumber,
    Address,
    Email,
    Age,
    Phone,
    BirthDate,
    Country,
}

impl FormField {
    /// Fields whose text input is parsed as an integer by the masking layer.
    pub const NUMERIC: [FormField; 3] = [FormField::DocumentNumber, FormField::Age, FormField::Phone];

    pub const ALL: [FormField; 9] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::DocumentNumber,
        FormField::Address,
        FormField::Email,
        FormField::Age,
        FormField::Phone,
        FormField::BirthDate,
        FormField::Country,
    ];

    pub fn is_numeric(self) -> bool {
        Self::NUMERIC.contains(&self)
    }

    /// Human-readable field label.
    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "first name",
            FormField::LastName => "last name",
            FormField::DocumentNumber => "document number",
            FormField::Address => "address",
            FormField::Email => "email",
            FormField::Age => "age",
            FormField::Phone => "phone",
            FormField::BirthDate => "birth date",
            FormField::Country => "country",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a form registers a new client or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn min_age(self) -> u32 {
        match self {
            FormMode::Create => MIN_NEW_CLIENT_AGE,
            FormMode::Edit => 1,
        }
    }
}

/// One message per failing form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure; the first message for a field wins.
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Basic email shape check: `local@domain.tld` with a letters-only TLD of
/// at least two characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    local_ok && host_ok && tld_ok
}

fn digit_count(n: u64) -> usize {
    n.to_string().len()
}

pub(super) fn document_number_error(document: Option<u64>) -> Option<&'static str> {
    match document {
        None => Some("Document number is required"),
        Some(n) if digit_count(n) != DOCUMENT_DIGITS => Some("Document number must be 8 digits."),
        Some(_) => None,
    }
}

pub(super) fn age_error(age: Option<u32>, mode: FormMode) -> Option<&'static str> {
    match age {
        None => Some("Age is required"),
        Some(age) if age < mode.min_age() => Some(match mode {
            FormMode::Create => "Client must be at least 18 years old",
            FormMode::Edit => "Age must be greater than 0",
        }),
        Some(_) => None,
    }
}

pub(super) const INVALID_DATE: &str = "Invalid date. Use DD/MM/YYYY";

impl ClientFormInput {
    /// Validate the form locally.
    ///
    /// Returns every failing field at once; nothing here touches the
    /// network.
    pub fn validate(&self, mode: FormMode) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.first_name.trim().is_empty() {
            errors.add(FormField::FirstName, "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.add(FormField::LastName, "Last name is required");
        }
        if let Some(message) = document_number_error(self.document_number) {
            errors.add(FormField::DocumentNumber, message);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.add(FormField::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.add(FormField::Email, "Email is not valid");
        }

        if let Some(message) = age_error(self.age, mode) {
            errors.add(FormField::Age, message);
        }

        if let Field::Present(phone) = self.phone
            && digit_count(phone) < MIN_PHONE_DIGITS
        {
            errors.add(FormField::Phone, "Phone must have at least 9 digits");
        }

        if let Field::Present(text) = &self.birth_date
            && BirthDate::parse_dmy(text).is_err()
        {
            errors.add(FormField::BirthDate, INVALID_DATE);
        }

        errors.into_result()
    }
}
