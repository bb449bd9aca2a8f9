//! Session-scoped collection of loaded client records.
//!
//! [`CollectionManager`] loads pages from a [`ClientService`](crate::ClientService),
//! merges them into a [`CollectionState`] without duplicating ids, and
//! resynchronises with a full fetch after every mutation.

mod manager;
mod state;

pub use manager::{CollectionManager, DEFAULT_PAGE_SIZE, LoadMore, Mutation};
pub use state::CollectionState;
