//! HTTP-backed client service.

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};

use clientele_core::{
    ClientFormInput, ClientId, ClientPage, ClientRecord, ClientService, Operation, Result,
    ServiceUrl,
};

use crate::config::HttpConfig;
use crate::rest::client::RestClient;
use crate::rest::endpoints::{DISABLE, ENABLE, ListClientsQuery, ListClientsResponse};

/// A network-backed client service speaking the backend's REST contract.
///
/// `base` is the collection URL, e.g. `http://192.168.1.3:8080/client`.
#[derive(Debug, Clone)]
pub struct HttpClientService {
    base: ServiceUrl,
    client: RestClient,
}

impl HttpClientService {
    /// Create a service for `base` with default HTTP settings.
    pub fn new(base: ServiceUrl) -> Result<Self> {
        Self::with_config(base, &HttpConfig::default())
    }

    pub fn with_config(base: ServiceUrl, config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            base,
            client: RestClient::new(config)?,
        })
    }

    /// Returns the collection URL for this instance.
    pub fn url(&self) -> &ServiceUrl {
        &self.base
    }

    fn record_url(&self, id: ClientId) -> String {
        self.base.endpoint(&[&id.to_string()])
    }
}

#[async_trait]
impl ClientService for HttpClientService {
    #[instrument(skip(self), fields(base = %self.base))]
    async fn list(&self, search: &str, offset: u64, limit: u64) -> Result<ClientPage> {
        debug!("Listing clients");

        let query = ListClientsQuery {
            search,
            start: offset,
            length: limit,
        };

        let response: ListClientsResponse = self
            .client
            .query(Operation::List, self.base.as_str(), &query)
            .await?;

        Ok(ClientPage {
            total: response.meta.matching(),
            unfiltered_total: response.meta.records_total,
            records: response.data,
        })
    }

    #[instrument(skip(self, data), fields(base = %self.base))]
    async fn create(&self, data: &ClientFormInput) -> Result<ClientRecord> {
        debug!("Creating client");
        let payload = data.to_payload()?;
        self.client
            .send_json(Operation::Create, Method::POST, self.base.as_str(), &payload)
            .await
    }

    #[instrument(skip(self, data), fields(base = %self.base))]
    async fn update(&self, id: ClientId, data: &ClientFormInput) -> Result<ClientRecord> {
        debug!("Updating client");
        let payload = data.to_payload()?;
        self.client
            .send_json(Operation::Update, Method::PUT, &self.record_url(id), &payload)
            .await
    }

    #[instrument(skip(self), fields(base = %self.base))]
    async fn remove(&self, id: ClientId) -> Result<()> {
        debug!("Deleting client");
        self.client
            .send_no_content(Operation::Delete, Method::DELETE, &self.record_url(id))
            .await
    }

    #[instrument(skip(self), fields(base = %self.base))]
    async fn toggle_status(&self, id: ClientId, currently_enabled: bool) -> Result<ClientRecord> {
        let action = if currently_enabled { DISABLE } else { ENABLE };
        debug!(action, "Changing client status");

        let url = self.base.endpoint(&[&id.to_string(), action]);
        self.client
            .send_empty(Operation::ToggleStatus, Method::PATCH, &url)
            .await
    }
}
