//! Country reference lookup over the REST Countries API.

use async_trait::async_trait;
use tracing::{debug, instrument};

use clientele_core::{CountryDirectory, Operation, Result, ServiceUrl};

use crate::config::HttpConfig;
use crate::rest::client::RestClient;
use crate::rest::endpoints::{ALL_COUNTRIES, CountryEntry};

/// Default country reference service.
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1";

/// Country names from a REST Countries compatible service.
#[derive(Debug, Clone)]
pub struct RestCountries {
    base: ServiceUrl,
    client: RestClient,
}

impl RestCountries {
    pub fn new(base: ServiceUrl) -> Result<Self> {
        Self::with_config(base, &HttpConfig::default())
    }

    pub fn with_config(base: ServiceUrl, config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            base,
            client: RestClient::new(config)?,
        })
    }

    pub fn url(&self) -> &ServiceUrl {
        &self.base
    }
}

#[async_trait]
impl CountryDirectory for RestCountries {
    #[instrument(skip(self), fields(base = %self.base))]
    async fn list_countries(&self) -> Result<Vec<String>> {
        let entries: Vec<CountryEntry> = self
            .client
            .fetch(Operation::Countries, &self.base.endpoint(&[ALL_COUNTRIES]))
            .await?;

        let mut names: Vec<String> = entries.into_iter().map(|entry| entry.name.common).collect();
        names.sort();
        debug!(count = names.len(), "Fetched countries");
        Ok(names)
    }
}
