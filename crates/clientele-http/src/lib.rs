//! clientele-http - reqwest-backed implementations of the clientele service
//! traits.

mod config;
mod countries;
mod rest;
mod service;

pub use config::{DEFAULT_TIMEOUT, HttpConfig};
pub use countries::{DEFAULT_COUNTRIES_URL, RestCountries};
pub use service::HttpClientService;
