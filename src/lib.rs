//! # cse-phone-scan
//!
//! Phone number OSINT scanner backed by a Google Custom Search engine.
//!
//! The scanner builds search dorks from a number's attributes (disposable
//! SMS providers, reputation sites, people search sites, the general web),
//! runs each one against the Custom Search JSON API, following pagination up
//! to a configurable cap, and returns the listings in a flat response.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cse_phone_scan::{GoogleCseScanner, PhoneNumber, Scanner, ScannerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let scanner = GoogleCseScanner::new(ScannerConfig::from_env());
//!     let number = PhoneNumber::new("+14152229670").with_country_code(1);
//!
//!     if scanner.should_run(&number) {
//!         let response = scanner.scan(&number).await?;
//!         for item in &response.items {
//!             println!("{}: {}", item.title, item.url);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod number;
mod response;

pub mod client;
pub mod dork;
pub mod scanner;

pub use client::{ClientFactory, CseClient, CseItem, CsePage, HttpClientFactory, HttpCseClient};
pub use config::{
    ScannerConfig, DEFAULT_MAX_RESULTS, ENV_API_KEY, ENV_ENGINE_ID, ENV_MAX_RESULTS, MAX_RESULTS_LIMIT,
};
pub use dork::{Dork, DorkCategory, DorkGenerator, DorkSet};
pub use error::{CseError, Result, ScanError, StatusCode, RATE_LIMIT_MESSAGE};
pub use number::PhoneNumber;
pub use response::{homepage_url, ResultItem, ScanResponse};
pub use scanner::{is_rate_limit, GoogleCseScanner, Scanner, GOOGLE_CSE};
