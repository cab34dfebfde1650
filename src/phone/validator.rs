//! MSISDN validation and E.164-style normalization.
//!
//! Validation runs a strict Kenyan pattern first because domestic numbers are
//! the common, billing-sensitive case needing accurate network-prefix checks;
//! anything that falls through is held to a permissive international pattern
//! so legitimate foreign numbers are not rejected.

use crate::config::{Config, INTERNATIONAL_PHONE_PATTERN, KENYAN_MSISDN_PATTERN};
use crate::error::{ConfigError, ConfigResult, PhoneError, PhoneResult};
use once_cell::sync::Lazy;
use phonenumber::country;
use regex::Regex;

static DEFAULT_KENYAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(KENYAN_MSISDN_PATTERN).expect("built-in Kenyan MSISDN pattern must compile")
});

static DEFAULT_INTERNATIONAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(INTERNATIONAL_PHONE_PATTERN).expect("built-in international pattern must compile")
});

/// Validates phone numbers and normalizes them to international format.
///
/// Stateless per call; a single instance is safe to share across threads.
#[derive(Debug, Clone)]
pub struct PhoneNumberValidator {
    region: country::Id,
    kenyan: Regex,
    international: Regex,
}

impl PhoneNumberValidator {
    /// Build a validator from configuration, compiling the configured
    /// patterns and resolving the parsing region.
    pub fn new(config: &Config) -> ConfigResult<Self> {
        let region = config
            .default_region
            .parse::<country::Id>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "PHONE_DEFAULT_REGION".to_string(),
                reason: format!("unrecognised region code: {}", config.default_region),
            })?;

        let kenyan =
            Regex::new(&config.kenyan_pattern).map_err(|e| ConfigError::InvalidValue {
                var: "KENYAN_MSISDN_PATTERN".to_string(),
                reason: e.to_string(),
            })?;

        let international =
            Regex::new(&config.international_pattern).map_err(|e| ConfigError::InvalidValue {
                var: "INTERNATIONAL_PHONE_PATTERN".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            region,
            kenyan,
            international,
        })
    }

    /// Check whether a raw phone number is acceptable.
    ///
    /// Numbers shorter than ten characters are rejected outright. The strict
    /// Kenyan pattern is decisive when it matches; otherwise the verdict is
    /// the permissive international pattern's. Pure and deterministic.
    pub fn is_valid(&self, msisdn: &str) -> bool {
        if msisdn.len() < 10 {
            return false;
        }
        if self.kenyan.is_match(msisdn) {
            return true;
        }
        self.international.is_match(msisdn)
    }

    /// Normalize a valid phone number to international format,
    /// e.g. `+2547........`.
    ///
    /// The output always starts with `+` followed only by digits: the number
    /// is parsed in the validator's region, formatted internationally, and
    /// stripped of space and hyphen separators.
    ///
    /// # Errors
    ///
    /// - [`PhoneError::InvalidFormat`] if [`Self::is_valid`] rejects the input
    /// - [`PhoneError::Parse`] if the metadata library cannot parse a number
    ///   that passed the pattern gate. The pattern match does not guarantee a
    ///   parseable structure, so this failure is surfaced rather than
    ///   swallowed.
    pub fn normalize(&self, msisdn: &str) -> PhoneResult<String> {
        if !self.is_valid(msisdn) {
            return Err(PhoneError::InvalidFormat(msisdn.to_string()));
        }
        let parsed = phonenumber::parse(Some(self.region), msisdn)?;
        let formatted = parsed
            .format()
            .mode(phonenumber::Mode::International)
            .to_string();
        Ok(formatted
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect())
    }

    /// Region used when parsing numbers without a country prefix.
    pub fn region(&self) -> country::Id {
        self.region
    }
}

impl Default for PhoneNumberValidator {
    /// Validator for the default "KE" region with the built-in patterns.
    fn default() -> Self {
        Self {
            region: country::KE,
            kenyan: DEFAULT_KENYAN.clone(),
            international: DEFAULT_INTERNATIONAL.clone(),
        }
    }
}
