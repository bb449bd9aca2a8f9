//! clientele-core - Client record types, service traits and the paginated
//! collection manager.
//!
//! The crate has no network dependency. Remote access goes through the
//! [`ClientService`] and [`CountryDirectory`] traits, implemented over HTTP
//! by `clientele-http`.

pub mod client;
pub mod collection;
pub mod error;
pub mod traits;
pub mod types;

pub use client::{
    ClientFormInput, ClientPayload, ClientRecord, FormField, FormMode, ValidationErrors,
    filter_countries, is_valid_email, mask_date_input, parse_numeric_input,
};
pub use collection::{CollectionManager, CollectionState, DEFAULT_PAGE_SIZE, LoadMore, Mutation};
pub use error::{Error, InvalidInputError, Operation, ServiceError, TransportError};
pub use traits::{ClientPage, ClientService, CountryDirectory};
pub use types::{BirthDate, ClientId, Field, ServiceUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
