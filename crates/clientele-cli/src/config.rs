//! Service configuration from flags and environment.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use clientele_core::{CollectionManager, ServiceUrl};
use clientele_http::{DEFAULT_COUNTRIES_URL, HttpClientService, HttpConfig, RestCountries};

/// Where the backends live and how to talk to them.
#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// Client collection endpoint
    #[arg(
        long,
        env = "CLIENTELE_API_URL",
        default_value = "http://localhost:8080/client",
        global = true
    )]
    pub api_url: String,

    /// Country reference service
    #[arg(
        long,
        env = "CLIENTELE_COUNTRIES_URL",
        default_value = DEFAULT_COUNTRIES_URL,
        global = true
    )]
    pub countries_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CLIENTELE_TIMEOUT", default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Records fetched per page
    #[arg(long, env = "CLIENTELE_PAGE_SIZE", default_value_t = 10, global = true)]
    pub page_size: u64,

    /// Accept plain HTTP URLs for public hosts
    #[arg(long, env = "CLIENTELE_ALLOW_HTTP", global = true)]
    pub allow_http: bool,
}

impl ServiceArgs {
    fn service_url(&self, url: &str) -> clientele_core::Result<ServiceUrl> {
        if self.allow_http {
            ServiceUrl::allowing_plain_http(url)
        } else {
            ServiceUrl::new(url)
        }
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::default().with_timeout(Duration::from_secs(self.timeout))
    }

    pub fn client_service(&self) -> Result<HttpClientService> {
        let url = self.service_url(&self.api_url).context("Invalid API URL")?;
        HttpClientService::with_config(url, &self.http_config())
            .context("Failed to create HTTP client")
    }

    /// A collection manager over the configured backend.
    pub fn manager(&self) -> Result<CollectionManager<HttpClientService>> {
        Ok(CollectionManager::new(self.client_service()?).with_page_size(self.page_size))
    }

    pub fn countries(&self) -> Result<RestCountries> {
        let url = self.service_url(&self.countries_url).context("Invalid countries URL")?;
        RestCountries::with_config(url, &self.http_config()).context("Failed to create HTTP client")
    }
}
