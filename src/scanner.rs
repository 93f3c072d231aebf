//! Google Custom Search phone number scanner.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::client::{ClientFactory, CseClient, CseItem, HttpClientFactory};
use crate::error::StatusCode;
use crate::{DorkSet, PhoneNumber, Result, ScanError, ScanResponse, ScannerConfig};

/// Name reported by [`GoogleCseScanner`].
pub const GOOGLE_CSE: &str = "googlecse";

/// HTTP status the API uses when the query quota is exhausted.
const TOO_MANY_REQUESTS: u16 = 429;

/// Contract of a phone number scanner.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Data produced by a successful scan.
    type Output: Send;

    /// Returns the scanner name.
    fn name(&self) -> &str;

    /// Returns whether the scanner should be run for this number.
    fn should_run(&self, number: &PhoneNumber) -> bool;

    /// Scans a number.
    async fn scan(&self, number: &PhoneNumber) -> Result<Self::Output>;
}

/// Runs search dorks for a phone number against a Google Custom Search engine.
///
/// Dorks are searched one after another and pages within a dork one after
/// another. Any failure aborts the whole scan; partial results are never
/// returned.
pub struct GoogleCseScanner {
    config: ScannerConfig,
    dorks: DorkSet,
    client_factory: Arc<dyn ClientFactory>,
}

impl GoogleCseScanner {
    /// Creates a scanner using the built-in dorks and the HTTP client.
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            dorks: DorkSet::default(),
            client_factory: Arc::new(HttpClientFactory::new()),
        }
    }

    /// Replaces the dork generators.
    pub fn with_dorks(mut self, dorks: DorkSet) -> Self {
        self.dorks = dorks;
        self
    }

    /// Replaces the factory used to build the search client.
    pub fn with_client_factory(mut self, factory: Arc<dyn ClientFactory>) -> Self {
        self.client_factory = factory;
        self
    }

    /// Returns the scanner configuration.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Fetches every page for `query` up to the configured result cap.
    async fn search(&self, client: &dyn CseClient, query: &str) -> Result<Vec<CseItem>> {
        let max_results = self.config.max_results();
        let mut results = Vec::new();
        let mut offset: u64 = 0;

        while offset <= u64::from(max_results) {
            let page = client.list(self.config.engine_id(), query, offset).await?;
            let returned = page.items.len();
            results.extend(page.items);

            let total: i64 = page
                .total_results
                .parse()
                .map_err(|source| ScanError::Parse {
                    value: page.total_results.clone(),
                    source,
                })?;
            debug!(offset, returned, total, "Fetched result page");

            if total <= i64::from(max_results) {
                break;
            }
            if returned == 0 {
                debug!(offset, total, "Empty page, stopping pagination");
                break;
            }
            offset += returned as u64;
        }

        Ok(results)
    }
}

/// Returns whether an error is the API reporting an exhausted quota.
pub fn is_rate_limit<E: StatusCode + ?Sized>(err: &E) -> bool {
    err.status_code() == Some(TOO_MANY_REQUESTS)
}

#[async_trait]
impl Scanner for GoogleCseScanner {
    type Output = ScanResponse;

    fn name(&self) -> &str {
        GOOGLE_CSE
    }

    fn should_run(&self, _number: &PhoneNumber) -> bool {
        self.config.is_configured()
    }

    async fn scan(&self, number: &PhoneNumber) -> Result<ScanResponse> {
        let dorks = self.dorks.generate(number);
        debug!(dorks = dorks.len(), "Starting Google CSE scan");

        let client = self
            .client_factory
            .connect(self.config.api_key())
            .map_err(ScanError::ClientInit)?;

        let mut all_items = Vec::new();
        for dork in &dorks {
            let query = dork.query();
            match self.search(client.as_ref(), &query).await {
                Ok(items) => {
                    debug!(query = %query, items = items.len(), "Dork searched");
                    all_items.extend(items);
                }
                Err(ScanError::SearchRequest(e)) if is_rate_limit(&e) => {
                    warn!(query = %query, "Custom Search rate limit exceeded");
                    return Err(ScanError::RateLimit);
                }
                Err(e) => {
                    warn!(query = %query, error = %e, "Dork search failed");
                    return Err(e);
                }
            }
        }

        Ok(ScanResponse::new(self.config.engine_id(), all_items))
    }
}
