//! Form input and the transmitted payload.

use serde::Serialize;

use crate::types::{BirthDate, Field};

use super::masking::{mask_date_input, parse_numeric_input};
use super::validation::{INVALID_DATE, age_error, document_number_error};
use super::{ClientRecord, FormField, FormMode, ValidationErrors};

/// State of a client form.
///
/// Numeric fields hold already-parsed integers (see
/// [`FormField::NUMERIC`]); the birth date holds the `DD/MM/YYYY` text as
/// typed, since it may still be incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFormInput {
    pub first_name: String,
    pub last_name: String,
    pub document_number: Option<u64>,
    pub address: Field<String>,
    pub email: String,
    pub age: Option<u32>,
    pub phone: Field<u64>,
    pub birth_date: Field<String>,
    pub country: Field<String>,
}

impl ClientFormInput {
    /// Pre-fill an edit form from an existing record.
    pub fn from_record(record: &ClientRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            document_number: Some(record.document_number),
            address: record.address.clone(),
            email: record.email.clone(),
            age: Some(record.age),
            phone: record.phone.clone(),
            birth_date: record.birth_date.as_ref().map(BirthDate::to_dmy),
            country: record.country.clone(),
        }
    }

    /// Apply raw text typed into `field`.
    ///
    /// Numeric fields go through [`parse_numeric_input`], the birth date
    /// through [`mask_date_input`]. Blank optional text becomes `Absent`.
    pub fn set_text(&mut self, field: FormField, text: &str) {
        match field {
            FormField::FirstName => self.first_name = text.to_string(),
            FormField::LastName => self.last_name = text.to_string(),
            FormField::Email => self.email = text.trim().to_string(),
            FormField::Address => self.address = Field::from_text(text),
            FormField::Country => self.country = Field::from_text(text),
            FormField::BirthDate => self.birth_date = Field::from_text(mask_date_input(text)),
            FormField::DocumentNumber => self.document_number = parse_numeric_input(text),
            FormField::Age => {
                self.age = parse_numeric_input(text).and_then(|n| u32::try_from(n).ok());
            }
            FormField::Phone => self.phone = parse_numeric_input(text).into(),
        }
    }

    /// Convert to the body sent on create and update.
    ///
    /// The birth date is converted from `DD/MM/YYYY` to the ISO calendar
    /// form; absent phone and birth date are sent as `null`. Fails when a
    /// required number is missing or the date cannot be parsed.
    pub fn to_payload(&self) -> Result<ClientPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(message) = document_number_error(self.document_number) {
            errors.add(FormField::DocumentNumber, message);
        }
        // Only the edit-mode floor applies here.
        if let Some(message) = age_error(self.age, FormMode::Edit) {
            errors.add(FormField::Age, message);
        }

        let birth_date = match &self.birth_date {
            Field::Present(text) => match BirthDate::parse_dmy(text) {
                Ok(date) => Field::Present(date),
                Err(_) => {
                    errors.add(FormField::BirthDate, INVALID_DATE);
                    Field::Absent
                }
            },
            Field::Absent => Field::Absent,
        };

        let (Some(document_number), Some(age)) = (self.document_number, self.age) else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(ClientPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address: self.address.clone(),
            document_number,
            email: self.email.trim().to_string(),
            age,
            phone: self.phone.clone(),
            birth_date,
            country: self.country.clone(),
        })
    }
}

/// Request body for creating or updating a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientPayload {
    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellidos")]
    pub last_name: String,

    #[serde(rename = "direccion")]
    pub address: Field<String>,

    #[serde(rename = "numero_documento")]
    pub document_number: u64,

    pub email: String,

    #[serde(rename = "edad")]
    pub age: u32,

    #[serde(rename = "telefono")]
    pub phone: Field<u64>,

    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: Field<BirthDate>,

    #[serde(rename = "pais")]
    pub country: Field<String>,
}
