//! Core traits for remote services.

mod countries;
mod service;

pub use countries::CountryDirectory;
pub use service::{ClientPage, ClientService};
