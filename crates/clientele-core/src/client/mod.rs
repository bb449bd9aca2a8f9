//! Client records, form input and local validation.
//!
//! [`ClientRecord`] is what the backend stores and returns. [`ClientFormInput`]
//! is what a form collects; it is validated locally with
//! [`ClientFormInput::validate`] and converted to a [`ClientPayload`] for
//! transmission.

mod form;
mod masking;
mod record;
mod validation;

pub use form::{ClientFormInput, ClientPayload};
pub use masking::{filter_countries, mask_date_input, parse_numeric_input};
pub use record::ClientRecord;
pub use validation::{FormField, FormMode, ValidationErrors, is_valid_email};
