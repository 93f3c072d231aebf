//! Scanner configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable holding the Custom Search engine identifier.
pub const ENV_ENGINE_ID: &str = "GOOGLECSE_CX";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "GOOGLECSE_API_KEY";
/// Environment variable holding the per-dork result cap.
pub const ENV_MAX_RESULTS: &str = "GOOGLECSE_MAX_RESULTS";

/// Result cap used when none (or an invalid one) is configured.
///
/// Custom Search serves at most 10 pages of 10 results, so by default only
/// the first page is fetched for each dork.
pub const DEFAULT_MAX_RESULTS: u32 = 10;
/// Upper bound for the result cap.
pub const MAX_RESULTS_LIMIT: u32 = 100;

/// Configuration for the Google Custom Search scanner.
///
/// Immutable once built; every constructor, deserialization included, goes
/// through [`ScannerConfig::new`] and its clamp.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawScannerConfig")]
pub struct ScannerConfig {
    engine_id: String,
    api_key: String,
    max_results: u32,
}

#[derive(Deserialize)]
struct RawScannerConfig {
    engine_id: String,
    api_key: String,
    #[serde(default = "default_max_results")]
    max_results: u32,
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

impl From<RawScannerConfig> for ScannerConfig {
    fn from(raw: RawScannerConfig) -> Self {
        Self::new(raw.engine_id, raw.api_key, raw.max_results)
    }
}

impl ScannerConfig {
    /// Creates a configuration, clamping `max_results` to [`MAX_RESULTS_LIMIT`].
    pub fn new(engine_id: impl Into<String>, api_key: impl Into<String>, max_results: u32) -> Self {
        Self {
            engine_id: engine_id.into(),
            api_key: api_key.into(),
            max_results: max_results.min(MAX_RESULTS_LIMIT),
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_results = lookup(ENV_MAX_RESULTS)
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|value| u32::try_from(value.min(i64::from(MAX_RESULTS_LIMIT))).ok())
            .unwrap_or(DEFAULT_MAX_RESULTS);

        Self::new(
            lookup(ENV_ENGINE_ID).unwrap_or_default(),
            lookup(ENV_API_KEY).unwrap_or_default(),
            max_results,
        )
    }

    /// Custom Search engine identifier (`cx`).
    pub fn engine_id(&self) -> &str {
        &self.engine_id
    }

    /// API key used to authenticate requests.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Maximum number of results requested per dork, across pages.
    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Returns whether both the engine identifier and API key are set.
    pub fn is_configured(&self) -> bool {
        !self.engine_id.is_empty() && !self.api_key.is_empty()
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::new(String::new(), String::new(), DEFAULT_MAX_RESULTS)
    }
}

impl fmt::Debug for ScannerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScannerConfig")
            .field("engine_id", &self.engine_id)
            .field("api_key", &"[REDACTED]")
            .field("max_results", &self.max_results)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_fields() {
        let config = ScannerConfig::from_lookup(lookup_from(&[
            (ENV_ENGINE_ID, "abc123"),
            (ENV_API_KEY, "secret"),
            (ENV_MAX_RESULTS, "50"),
        ]));
        assert_eq!(config.engine_id, "abc123");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.max_results, 50);
    }

    #[test]
    fn test_max_results_absent_defaults() {
        let config = ScannerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
        assert!(config.engine_id.is_empty());
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_max_results_invalid_defaults() {
        for raw in ["", "ten", "1.5", "-3", " 50", "50\n", "99999999999999999999"] {
            let config = ScannerConfig::from_lookup(lookup_from(&[(ENV_MAX_RESULTS, raw)]));
            assert_eq!(config.max_results, 10, "value {raw:?}");
        }
    }

    #[test]
    fn test_max_results_clamped() {
        for raw in ["101", "250", "4294967296", "99999999999999"] {
            let config = ScannerConfig::from_lookup(lookup_from(&[(ENV_MAX_RESULTS, raw)]));
            assert_eq!(config.max_results, 100, "value {raw:?}");
        }
        let config = ScannerConfig::from_lookup(lookup_from(&[(ENV_MAX_RESULTS, "100")]));
        assert_eq!(config.max_results, 100);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(ScannerConfig::new("cx", "key", 500).max_results, 100);
        assert_eq!(ScannerConfig::new("cx", "key", 0).max_results, 0);
    }

    #[test]
    fn test_is_configured() {
        assert!(ScannerConfig::new("cx", "key", 10).is_configured());
        assert!(!ScannerConfig::new("", "key", 10).is_configured());
        assert!(!ScannerConfig::new("cx", "", 10).is_configured());
        assert!(!ScannerConfig::default().is_configured());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ScannerConfig::new("cx", "super-secret", 10);
        let debug = format!("{:?}", config);
        assert!(debug.contains("cx"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_config_deserialization_default_cap() {
        let json = r#"{"engine_id":"cx","api_key":"k"}"#;
        let config: ScannerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_results, 10);
    }

    #[test]
    fn test_config_deserialization_clamps_cap() {
        let json = r#"{"engine_id":"cx","api_key":"k","max_results":5000}"#;
        let config: ScannerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_results(), 100);
        assert_eq!(config.engine_id(), "cx");
        assert_eq!(config.api_key(), "k");
    }

    #[test]
    fn test_config_serialization_roundtrip_keeps_clamp() {
        let config = ScannerConfig::new("cx", "k", 40);
        let json = serde_json::to_string(&config).unwrap();
        let back: ScannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
