use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Location normalized for use inside URL paths and subdomains
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSlug {
    /// Lowercased, spaces replaced with hyphens ("austin-tx")
    pub loc_url: String,
    /// `loc_url` with hyphens stripped, for subdomains ("austintx")
    pub loc_clean: String,
}

impl LocationSlug {
    /// Only spaces are rewritten; path segments are slugged, never percent-encoded
    pub fn new(location: &str) -> Self {
        let loc_url = location.replace(' ', "-").to_lowercase();
        let loc_clean = loc_url.replace('-', "");
        Self { loc_url, loc_clean }
    }
}

/// Everything a URL template may substitute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    pub slug: LocationSlug,
    /// Representative search term, query-string encoded
    pub term_query: String,
    /// Fixed "land for sale by owner" phrase, query-string encoded
    pub fsbo_query: String,
}

/// Phrase the marketplace search always uses regardless of derived terms
pub const FSBO_PHRASE: &str = "land for sale by owner";

impl QueryContext {
    pub fn new(location: &str, representative_term: &str) -> Self {
        Self {
            slug: LocationSlug::new(location),
            term_query: encode_query(representative_term),
            fsbo_query: encode_query(FSBO_PHRASE),
        }
    }
}

/// Form-encode a value for a query string (spaces become `+`)
pub fn encode_query(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
