//! Collection state.

use std::collections::HashSet;

use crate::client::ClientRecord;
use crate::types::ClientId;

/// The loaded records of one session and the cursor that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionState {
    /// Loaded records in server order. Ids are unique.
    pub items: Vec<ClientRecord>,

    /// Total matching the active search term, as last reported by the
    /// backend. May exceed `items.len()`.
    pub total_count: u64,

    /// Zero-based index of the last page fetched.
    pub page: u64,

    /// Search term of the last fetch; empty means no filter.
    pub search_term: String,

    /// True while a full (non-incremental) fetch is outstanding.
    pub is_loading: bool,
}

impl CollectionState {
    /// Returns true if the backend reports more records than are loaded.
    pub fn has_more(&self) -> bool {
        (self.items.len() as u64) < self.total_count
    }

    pub fn find(&self, id: ClientId) -> Option<&ClientRecord> {
        self.items.iter().find(|record| record.id == id)
    }

    /// Replace all items with `records`, keeping the first of any repeated id.
    pub(crate) fn replace(&mut self, records: Vec<ClientRecord>) {
        self.items.clear();
        self.merge(records);
    }

    /// Append the records whose id is not loaded yet, in order.
    ///
    /// Returns how many were appended. Already-loaded ids are dropped, not
    /// overwritten.
    pub(crate) fn merge(&mut self, records: Vec<ClientRecord>) -> usize {
        let mut seen: HashSet<ClientId> = self.items.iter().map(|record| record.id).collect();
        let before = self.items.len();
        self.items
            .extend(records.into_iter().filter(|record| seen.insert(record.id)));
        self.items.len() - before
    }
}
