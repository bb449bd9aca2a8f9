//! Form flags shared by create and update.

use clap::Args;

use clientele_core::{ClientFormInput, FormField};

/// Client fields as typed on the command line.
///
/// Values go through the same masking as interactive input: numeric fields
/// keep their leading digits and the birth date accepts `DDMMYYYY` or
/// `DD/MM/YYYY`.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Eight-digit document number
    #[arg(long)]
    pub document: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub age: Option<String>,

    /// At least nine digits; pass an empty value to clear
    #[arg(long)]
    pub phone: Option<String>,

    /// DD/MM/YYYY; pass an empty value to clear
    #[arg(long)]
    pub birth_date: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub country: Option<String>,
}

impl FormArgs {
    /// Apply every flag that was given to `form`.
    pub fn apply(&self, form: &mut ClientFormInput) {
        let fields = [
            (FormField::FirstName, &self.first_name),
            (FormField::LastName, &self.last_name),
            (FormField::DocumentNumber, &self.document),
            (FormField::Email, &self.email),
            (FormField::Age, &self.age),
            (FormField::Phone, &self.phone),
            (FormField::BirthDate, &self.birth_date),
            (FormField::Address, &self.address),
            (FormField::Country, &self.country),
        ];

        for (field, value) in fields {
            if let Some(text) = value {
                form.set_text(field, text);
            }
        }
    }
}
