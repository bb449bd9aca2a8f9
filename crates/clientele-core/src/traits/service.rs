//! Remote client service trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::{ClientFormInput, ClientRecord};
use crate::types::ClientId;
use crate::Result;

/// One page of a filtered client listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPage {
    /// The page's records in server order.
    pub records: Vec<ClientRecord>,

    /// Number of records matching the search term.
    pub total: u64,

    /// Number of records in the backend regardless of the search term.
    pub unfiltered_total: u64,
}

/// A remote store of client records.
///
/// Every operation is a single round-trip. Failures are reported as
/// [`Error::Transport`](crate::Error::Transport) when no response arrived and
/// [`Error::Service`](crate::Error::Service) when the backend answered with an
/// error.
#[async_trait]
pub trait ClientService: Send + Sync {
    /// List one page of clients.
    ///
    /// `search` is a free-text filter applied by the backend; an empty string
    /// means no filter.
    async fn list(&self, search: &str, offset: u64, limit: u64) -> Result<ClientPage>;

    /// Create a client.
    ///
    /// The birth date is converted to its ISO form before transmission.
    async fn create(&self, data: &ClientFormInput) -> Result<ClientRecord>;

    /// Replace the fields of an existing client.
    async fn update(&self, id: ClientId, data: &ClientFormInput) -> Result<ClientRecord>;

    /// Delete a client.
    async fn remove(&self, id: ClientId) -> Result<()>;

    /// Flip a client's status.
    ///
    /// The caller passes the status it currently sees; the service requests
    /// the opposite state explicitly (disable when `currently_enabled`,
    /// enable otherwise).
    async fn toggle_status(&self, id: ClientId, currently_enabled: bool) -> Result<ClientRecord>;
}

#[async_trait]
impl<T: ClientService + ?Sized> ClientService for Arc<T> {
    async fn list(&self, search: &str, offset: u64, limit: u64) -> Result<ClientPage> {
        (**self).list(search, offset, limit).await
    }

    async fn create(&self, data: &ClientFormInput) -> Result<ClientRecord> {
        (**self).create(data).await
    }

    async fn update(&self, id: ClientId, data: &ClientFormInput) -> Result<ClientRecord> {
        (**self).update(id, data).await
    }

    async fn remove(&self, id: ClientId) -> Result<()> {
        (**self).remove(id).await
    }

    async fn toggle_status(&self, id: ClientId, currently_enabled: bool) -> Result<ClientRecord> {
        (**self).toggle_status(id, currently_enabled).await
    }
}
