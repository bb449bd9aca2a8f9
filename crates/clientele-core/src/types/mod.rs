//! Core value types.
//!
//! These types enforce their invariants at construction time.

mod birth_date;
mod client_id;
mod field;
mod service_url;

pub use birth_date::BirthDate;
pub use client_id::ClientId;
pub use field::Field;
pub use service_url::ServiceUrl;
