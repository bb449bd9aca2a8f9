//! REST endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use clientele_core::ClientRecord;

// ============================================================================
// Path Segments
// ============================================================================

/// PATCH {base}/{id}/habilitar
pub const ENABLE: &str = "habilitar";

/// PATCH {base}/{id}/deshabilitar
pub const DISABLE: &str = "deshabilitar";

/// GET {countries}/all
pub const ALL_COUNTRIES: &str = "all";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the client listing.
#[derive(Debug, Serialize)]
pub struct ListClientsQuery<'a> {
    pub search: &'a str,
    pub start: u64,
    pub length: u64,
}

/// Response from the client listing.
#[derive(Debug, Deserialize)]
pub struct ListClientsResponse {
    pub data: Vec<ClientRecord>,
    pub meta: ListMeta,
}

/// Paging metadata of the client listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub records_total: u64,
    #[serde(default)]
    pub records_filtered: Option<u64>,
}

impl ListMeta {
    /// The count matching the search term, falling back to the overall total
    /// when the backend omits it.
    pub fn matching(&self) -> u64 {
        self.records_filtered.unwrap_or(self.records_total)
    }
}

/// A single entry of the country reference listing.
#[derive(Debug, Deserialize)]
pub struct CountryEntry {
    pub name: CountryName,
}

#[derive(Debug, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// Error body returned by the backend.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
