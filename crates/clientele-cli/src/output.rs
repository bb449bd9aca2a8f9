//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use clientele_core::{ClientRecord, ValidationErrors};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning.
pub fn warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print one line per failing form field.
pub fn validation(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        error(&format!("{}: {}", field.label(), message));
    }
}

/// Print a record as a single table row.
pub fn record_row(record: &ClientRecord) {
    let status = if record.enabled {
        "enabled".green()
    } else {
        "disabled".red()
    };
    println!(
        "{:>6}  {:<30}  {}  {:<32}  {}",
        record.id.get(),
        record.full_name(),
        record.document_number,
        record.email,
        status
    );
}

/// Print every field of a record.
pub fn record_detail(record: &ClientRecord) {
    field("ID", &record.id.to_string());
    field("Name", &record.full_name());
    field("Document", &record.document_number.to_string());
    field("Email", &record.email);
    field("Age", &record.age.to_string());
    if let Some(phone) = record.phone.as_option() {
        field("Phone", &phone.to_string());
    }
    if let Some(date) = record.birth_date.as_option() {
        field("Birth date", &date.to_dmy());
    }
    if let Some(address) = record.address.as_deref() {
        field("Address", address);
    }
    if let Some(country) = record.country.as_deref() {
        field("Country", country);
    }
    field("Enabled", if record.enabled { "yes" } else { "no" });
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
