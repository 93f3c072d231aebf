//! Scan response types.

use serde::{Deserialize, Serialize};

use crate::client::CseItem;

/// A single search result listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Result title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Result URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl ResultItem {
    /// Creates a new result item.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

impl From<CseItem> for ResultItem {
    fn from(item: CseItem) -> Self {
        Self {
            title: item.title,
            url: item.link,
        }
    }
}

/// Outcome of a Google Custom Search scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Public page of the search engine that was queried.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub homepage: String,
    /// Number of items returned.
    pub result_count: usize,
    /// Listings in search order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ResultItem>,
}

impl ScanResponse {
    /// Builds the response for an engine from the accumulated API items.
    pub fn new(engine_id: &str, items: Vec<CseItem>) -> Self {
        let result_count = items.len();
        Self {
            homepage: homepage_url(engine_id),
            result_count,
            items: items.into_iter().map(ResultItem::from).collect(),
        }
    }
}

/// Returns the public page of a Custom Search engine.
pub fn homepage_url(engine_id: &str) -> String {
    format!("https://cse.google.com/cse?cx={}", engine_id)
}
