//! Google Custom Search JSON API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, trace};
use url::Url;

use crate::error::CseError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A single listing returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CseItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
}

/// One page of results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsePage {
    pub items: Vec<CseItem>,
    /// Total number of results as reported by the API. Google sends this as a string.
    pub total_results: String,
}

/// A client able to list Custom Search results page by page.
#[async_trait]
pub trait CseClient: Send + Sync {
    /// Lists results for `query` on engine `engine_id`, starting at `start`.
    async fn list(&self, engine_id: &str, query: &str, start: u64) -> Result<CsePage, CseError>;
}

/// Builds a client from an API key.
pub trait ClientFactory: Send + Sync {
    fn connect(&self, api_key: &str) -> Result<Box<dyn CseClient>, CseError>;
}

/// Factory producing [`HttpCseClient`]s.
#[derive(Debug, Clone, Default)]
pub struct HttpClientFactory {
    base_url: Option<String>,
}

impl HttpClientFactory {
    /// Creates a factory targeting the public Google endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom base URL for the clients it builds (useful for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl ClientFactory for HttpClientFactory {
    fn connect(&self, api_key: &str) -> Result<Box<dyn CseClient>, CseError> {
        let mut client = HttpCseClient::new(api_key)?;
        if let Some(base_url) = &self.base_url {
            client = client.with_base_url(base_url)?;
        }
        Ok(Box::new(client))
    }
}

/// Custom Search client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCseClient {
    http_client: Client,
    api_key: String,
    base_url: Url,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    items: Vec<CseItem>,
    #[serde(default)]
    search_information: Option<SearchInformation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchInformation {
    #[serde(default)]
    total_results: String,
}

impl HttpCseClient {
    /// Creates a client for the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CseError> {
        let api_key = api_key.into();
        validate_api_key(&api_key)?;

        let http_client = Client::builder()
            .user_agent(concat!("cse-phone-scan/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CseError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            api_key,
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
        })
    }

    /// Sets a custom base URL for the API.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, CseError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    fn request_url(&self, engine_id: &str, query: &str, start: u64) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("key", &self.api_key)
                .append_pair("cx", engine_id)
                .append_pair("q", query);
            // The API counts from 1 and treats a missing start as the first page.
            if start > 0 {
                pairs.append_pair("start", &start.to_string());
            }
        }
        url
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, CseError> {
    Url::parse(base_url)
        .map_err(|e| CseError::Config(format!("invalid base URL {:?}: {e}", base_url)))
}

/// Drops the request URL from a reqwest error: it carries the API key.
fn network_error(e: reqwest::Error) -> CseError {
    CseError::Network(e.without_url())
}

fn validate_api_key(api_key: &str) -> Result<(), CseError> {
    if api_key.trim().is_empty() {
        return Err(CseError::Config("API key is empty".to_string()));
    }
    if api_key.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(CseError::Config(
            "API key contains whitespace or control characters".to_string(),
        ));
    }
    Ok(())
}

fn parse_page(body: &str) -> Result<CsePage, CseError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| CseError::InvalidResponse(format!("JSON parse error: {e}")))?;

    Ok(CsePage {
        items: response.items,
        total_results: response
            .search_information
            .map(|info| info.total_results)
            .unwrap_or_default(),
    })
}

#[async_trait]
impl CseClient for HttpCseClient {
    async fn list(&self, engine_id: &str, query: &str, start: u64) -> Result<CsePage, CseError> {
        let url = self.request_url(engine_id, query, start);

        debug!(start, "Sending Custom Search request");
        trace!(query = %query, "Search parameters");

        let response = self.http_client.get(url).send().await.map_err(|e| {
            let err = network_error(e);
            error!(error = %err, "Network error during Custom Search request");
            err
        })?;

        let status = response.status();
        debug!(status = %status, "Received response from Custom Search");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Custom Search API error");
            return Err(CseError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(network_error)?;
        trace!(body = %body, "Response body");

        parse_page(&body)
    }
}
