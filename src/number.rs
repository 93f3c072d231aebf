//! Phone number value object.
//!
//! Parsing and validating numbers is left to the caller; this type only
//! carries the attributes the dork generators need.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A phone number and its known attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// E.164 representation, e.g. `+14152229670`.
    pub e164: String,
    /// International digits without the leading `+`, e.g. `14152229670`.
    pub international: String,
    /// Country calling code, e.g. `1`.
    pub country_code: Option<u16>,
    /// ISO country code or name, e.g. `US`.
    pub country: Option<String>,
    /// National number digits without the country code, e.g. `4152229670`.
    pub raw_local: String,
    /// National number as commonly written, e.g. `(415) 222-9670`.
    pub local: String,
    /// Carrier name, if known.
    pub carrier: Option<String>,
}

impl PhoneNumber {
    /// Creates a phone number from an E.164-like string.
    ///
    /// Every non-digit character is dropped. Until a country code is set,
    /// the local forms equal the international digits.
    pub fn new(number: impl AsRef<str>) -> Self {
        let digits: String = number
            .as_ref()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        Self {
            e164: format!("+{}", digits),
            international: digits.clone(),
            country_code: None,
            country: None,
            raw_local: digits.clone(),
            local: digits,
            carrier: None,
        }
    }

    /// Sets the country calling code and derives the national digits from it.
    pub fn with_country_code(mut self, code: u16) -> Self {
        let prefix = code.to_string();
        if let Some(national) = self.international.strip_prefix(prefix.as_str()) {
            self.raw_local = national.to_string();
            if self.local == self.international {
                self.local = national.to_string();
            }
        }
        self.country_code = Some(code);
        self
    }

    /// Sets the national (formatted) representation.
    pub fn with_local(mut self, local: impl Into<String>) -> Self {
        self.local = local.into();
        self
    }

    /// Sets the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the carrier.
    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.e164)?;

        let mut details = Vec::new();
        if let Some(code) = self.country_code {
            details.push(format!("country code {}", code));
        }
        if let Some(country) = &self.country {
            details.push(country.clone());
        }
        if let Some(carrier) = &self.carrier {
            details.push(carrier.clone());
        }
        if !details.is_empty() {
            write!(f, " ({})", details.join(", "))?;
        }
        Ok(())
    }
}
