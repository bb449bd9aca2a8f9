//! Collection manager.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, error, instrument, warn};

use crate::client::{ClientFormInput, ClientRecord, FormMode};
use crate::traits::ClientService;
use crate::types::ClientId;
use crate::{InvalidInputError, Result};

use super::CollectionState;

/// Number of records requested per page unless overridden.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// What a [`CollectionManager::load_more`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// The next page was fetched; holds how many records it added.
    ///
    /// Zero means the backend reported more records than it served.
    Fetched(usize),
    /// Every record the backend reported is already loaded.
    Exhausted,
    /// A full fetch is outstanding.
    Busy,
}

/// Result of a mutation that succeeded remotely.
///
/// `refresh` carries the outcome of the full fetch that follows every
/// mutation, reported separately from the mutation itself.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub refresh: Result<()>,
}

impl<T> Mutation<T> {
    /// Returns true if the follow-up fetch succeeded.
    pub fn refreshed(&self) -> bool {
        self.refresh.is_ok()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Owns the records loaded during one session.
///
/// State lives behind a lock that is never held across an await, so a
/// caller may inspect the collection or call [`load_more`](Self::load_more)
/// while a fetch is outstanding. The manager assumes at most one full fetch
/// at a time; two overlapping full fetches resolve last-writer-wins.
#[derive(Debug)]
pub struct CollectionManager<S> {
    service: S,
    page_size: u64,
    state: RwLock<CollectionState>,
}

impl<S: ClientService> CollectionManager<S> {
    /// Create an empty collection over `service`.
    pub fn new(service: S) -> Self {
        Self {
            service,
            page_size: DEFAULT_PAGE_SIZE,
            state: RwLock::new(CollectionState::default()),
        }
    }

    /// Override the page size (at least 1).
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Fetch one page.
    ///
    /// A non-incremental call or page 0 replaces the collection. An
    /// incremental call for a later page appends only records whose id is
    /// not loaded yet. On failure the collection keeps its previous
    /// contents.
    pub async fn fetch(&self, search: &str, page: u64, incremental: bool) -> Result<()> {
        self.fetch_page(search, page, incremental).await.map(|_| ())
    }

    /// [`fetch`](Self::fetch), returning how many records were added.
    #[instrument(skip(self), fields(page_size = self.page_size))]
    async fn fetch_page(&self, search: &str, page: u64, incremental: bool) -> Result<usize> {
        let offset = page
            .checked_mul(self.page_size)
            .ok_or_else(|| InvalidInputError::Other {
                message: format!("page {page} is out of range"),
            })?;

        let _loading = LoadingFlag::raise(&self.state, !incremental);
        debug!(offset, "Fetching clients");

        let fetched = match self.service.list(search, offset, self.page_size).await {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(error = %err, "Fetch failed; keeping previous collection");
                return Err(err);
            }
        };

        let received = fetched.records.len();
        let mut state = write(&self.state);
        let added = if !incremental || page == 0 {
            state.replace(fetched.records);
            state.items.len()
        } else {
            let appended = state.merge(fetched.records);
            debug!(received, appended, "Merged page");
            appended
        };
        state.total_count = fetched.total;
        state.page = page;
        state.search_term = search.to_string();

        debug!(
            loaded = state.items.len(),
            total = state.total_count,
            "Collection updated"
        );
        Ok(added)
    }

    /// Full fetch of the first unfiltered page.
    pub async fn fetch_all(&self) -> Result<()> {
        self.fetch("", 0, false).await
    }

    /// Start a new search session for `term`.
    pub async fn search(&self, term: &str) -> Result<()> {
        self.fetch(term, 0, false).await
    }

    /// Reload the first page of the active search.
    pub async fn refresh(&self) -> Result<()> {
        let search = read(&self.state).search_term.clone();
        self.fetch(&search, 0, false).await
    }

    /// Fetch the next page of the active search, if there is one.
    pub async fn load_more(&self) -> Result<LoadMore> {
        let (search, next_page) = {
            let state = read(&self.state);
            if state.is_loading {
                debug!("Full fetch outstanding; skipping load more");
                return Ok(LoadMore::Busy);
            }
            let Some(next_page) = state.page.checked_add(1).filter(|_| state.has_more()) else {
                return Ok(LoadMore::Exhausted);
            };
            (state.search_term.clone(), next_page)
        };

        let added = self.fetch_page(&search, next_page, true).await?;
        Ok(LoadMore::Fetched(added))
    }

    /// Create a client, then reload the collection.
    ///
    /// The form is validated for creation first; a validation failure never
    /// reaches the service.
    #[instrument(skip(self, data))]
    pub async fn create(&self, data: &ClientFormInput) -> Result<Mutation<ClientRecord>> {
        data.validate(FormMode::Create)?;
        let record = self
            .service
            .create(data)
            .await
            .inspect_err(|err| warn!(error = %err, "Create failed"))?;
        debug!(id = %record.id, "Client created");
        Ok(self.resync(record).await)
    }

    /// Update a client, then reload the collection.
    #[instrument(skip(self, data))]
    pub async fn update(
        &self,
        id: ClientId,
        data: &ClientFormInput,
    ) -> Result<Mutation<ClientRecord>> {
        data.validate(FormMode::Edit)?;
        let record = self
            .service
            .update(id, data)
            .await
            .inspect_err(|err| warn!(error = %err, "Update failed"))?;
        Ok(self.resync(record).await)
    }

    /// Delete a client, then reload the collection.
    #[instrument(skip(self, record), fields(id = %record.id))]
    pub async fn remove(&self, record: &ClientRecord) -> Result<Mutation<()>> {
        self.service
            .remove(record.id)
            .await
            .inspect_err(|err| warn!(error = %err, "Delete failed"))?;
        Ok(self.resync(()).await)
    }

    /// Flip a client's status, then reload the collection.
    #[instrument(skip(self, record), fields(id = %record.id, enabled = record.enabled))]
    pub async fn toggle_status(&self, record: &ClientRecord) -> Result<Mutation<ClientRecord>> {
        let updated = self
            .service
            .toggle_status(record.id, record.enabled)
            .await
            .inspect_err(|err| warn!(error = %err, "Toggle status failed"))?;
        Ok(self.resync(updated).await)
    }

    /// Full unfiltered reload after a mutation. Drops the active search and
    /// pagination position.
    async fn resync<T>(&self, value: T) -> Mutation<T> {
        let refresh = self
            .fetch_all()
            .await
            .inspect_err(|err| error!(error = %err, "Refresh after mutation failed"));
        Mutation { value, refresh }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> CollectionState {
        read(&self.state).clone()
    }

    pub fn items(&self) -> Vec<ClientRecord> {
        read(&self.state).items.clone()
    }

    pub fn len(&self) -> usize {
        read(&self.state).items.len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.state).items.is_empty()
    }

    pub fn total_count(&self) -> u64 {
        read(&self.state).total_count
    }

    pub fn page(&self) -> u64 {
        read(&self.state).page
    }

    pub fn search_term(&self) -> String {
        read(&self.state).search_term.clone()
    }

    pub fn is_loading(&self) -> bool {
        read(&self.state).is_loading
    }

    pub fn has_more(&self) -> bool {
        read(&self.state).has_more()
    }

    /// Look up a loaded record by id.
    pub fn find(&self, id: ClientId) -> Option<ClientRecord> {
        read(&self.state).find(id).cloned()
    }
}

fn read(state: &RwLock<CollectionState>) -> RwLockReadGuard<'_, CollectionState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(state: &RwLock<CollectionState>) -> RwLockWriteGuard<'_, CollectionState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// Marks a fetch in progress; clears `is_loading` when dropped, including
/// when the fetch future is dropped early.
struct LoadingFlag<'a> {
    state: &'a RwLock<CollectionState>,
}

impl<'a> LoadingFlag<'a> {
    fn raise(state: &'a RwLock<CollectionState>, full: bool) -> Self {
        if full {
            write(state).is_loading = true;
        }
        Self { state }
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        write(self.state).is_loading = false;
    }
}
