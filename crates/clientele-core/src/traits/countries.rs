//! Country reference lookup trait.

use async_trait::async_trait;

use crate::Result;

/// A read-only source of country names.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Returns the common names of all countries, sorted alphabetically.
    async fn list_countries(&self) -> Result<Vec<String>>;
}
