//! Configuration management for the shared utilities.
//!
//! Fixed values from earlier revisions of this package (default phone region,
//! collection names, validation patterns) are configuration fields here so
//! that tests and non-Kenyan deployments can override them without code
//! changes. All fields have defaults; nothing is required.

use crate::error::{ConfigError, ConfigResult};
use phonenumber::country;
use regex::Regex;
use std::env;

/// Default region used when parsing phone numbers without a country prefix.
pub const DEFAULT_REGION: &str = "KE";

/// Strict Kenyan MSISDN pattern: optional `254`/`+254`/`0` prefix followed by
/// a nine digit national number constrained to assigned mobile prefixes.
///
/// The prefix ranges encode telecom assignments and may drift over time;
/// override via [`Config::kenyan_pattern`] rather than editing this constant.
pub const KENYAN_MSISDN_PATTERN: &str =
    r"^(?:254|\+254|0)?((7|1)(?:(?:[129][0-9])|(?:0[0-8])|(4[0-1]))[0-9]{6})$";

/// Permissive international phone pattern: optional country-code prefix or
/// parenthetical, digit groups with separators, optional extension suffix.
pub const INTERNATIONAL_PHONE_PATTERN: &str = r"^(?:(?:\(?(?:00|\+)([1-4]\d\d|[1-9]\d?)\)?)?[-. \\/]?)?((?:\(?\d{1,}\)?[-. \\/]?){0,})(?:[-. \\/]?(?:#|ext\.?|extension|x)[-. \\/]?(\d+))?$";

/// Collection used to persist single use verification codes.
pub const OTP_COLLECTION: &str = "otps";

/// Collection used to persist phone communication opt-ins.
pub const PHONE_OPT_IN_COLLECTION: &str = "phone_opt_ins";

/// Collection used to persist USSD signup session logs.
pub const USSD_SESSION_COLLECTION: &str = "ussd_signup_sessions";

/// Base address used to derive unique test email addresses.
pub const TEST_EMAIL_BASE: &str = "shared.tests@example.com";

/// Configuration for the phone validator and verification gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// ISO 3166-1 alpha-2 region for parsing numbers without a country prefix
    pub default_region: String,

    /// Strict Kenyan MSISDN validation pattern
    pub kenyan_pattern: String,

    /// Permissive international fallback pattern
    pub international_pattern: String,

    /// Logical collection name for verification codes
    pub otp_collection: String,

    /// Logical collection name for phone opt-in records
    pub phone_opt_in_collection: String,

    /// Logical collection name for USSD session logs
    pub ussd_session_collection: String,

    /// Environment suffix appended to collection names (e.g. "staging")
    pub collection_suffix: Option<String>,

    /// Base email address for generated test addresses
    pub test_email_base: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_DEFAULT_REGION`: parsing region (default: "KE")
    /// - `KENYAN_MSISDN_PATTERN`: strict MSISDN pattern override
    /// - `INTERNATIONAL_PHONE_PATTERN`: fallback pattern override
    /// - `OTP_COLLECTION`: verification code collection (default: "otps")
    /// - `PHONE_OPT_IN_COLLECTION`: opt-in collection (default: "phone_opt_ins")
    /// - `USSD_SESSION_COLLECTION`: USSD log collection (default: "ussd_signup_sessions")
    /// - `ROOT_COLLECTION_SUFFIX`: suffix appended to collection names
    /// - `TEST_EMAIL_BASE`: base address for generated test emails
    pub fn from_env() -> ConfigResult<Self> {
        // Load a .env file if present, without failing when absent
        let _ = dotenvy::dotenv();

        let config = Config {
            default_region: Self::env_or("PHONE_DEFAULT_REGION", DEFAULT_REGION),
            kenyan_pattern: Self::env_or("KENYAN_MSISDN_PATTERN", KENYAN_MSISDN_PATTERN),
            international_pattern: Self::env_or(
                "INTERNATIONAL_PHONE_PATTERN",
                INTERNATIONAL_PHONE_PATTERN,
            ),
            otp_collection: Self::env_or("OTP_COLLECTION", OTP_COLLECTION),
            phone_opt_in_collection: Self::env_or(
                "PHONE_OPT_IN_COLLECTION",
                PHONE_OPT_IN_COLLECTION,
            ),
            ussd_session_collection: Self::env_or(
                "USSD_SESSION_COLLECTION",
                USSD_SESSION_COLLECTION,
            ),
            collection_suffix: env::var("ROOT_COLLECTION_SUFFIX")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            test_email_base: Self::env_or("TEST_EMAIL_BASE", TEST_EMAIL_BASE),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that the region is recognised and both patterns compile.
    pub fn validate(&self) -> ConfigResult<()> {
        self.default_region
            .parse::<country::Id>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "PHONE_DEFAULT_REGION".to_string(),
                reason: format!("unrecognised region code: {}", self.default_region),
            })?;

        Regex::new(&self.kenyan_pattern).map_err(|e| ConfigError::InvalidValue {
            var: "KENYAN_MSISDN_PATTERN".to_string(),
            reason: e.to_string(),
        })?;

        Regex::new(&self.international_pattern).map_err(|e| ConfigError::InvalidValue {
            var: "INTERNATIONAL_PHONE_PATTERN".to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Apply the environment suffix to a logical collection name.
    ///
    /// With suffix "staging", "otps" becomes "otps_staging". Without a
    /// suffix the name is returned unchanged.
    pub fn suffixed_collection(&self, name: &str) -> String {
        match &self.collection_suffix {
            Some(suffix) => format!("{}_{}", name, suffix),
            None => name.to_string(),
        }
    }

    fn env_or(var: &str, default: &str) -> String {
        env::var(var).unwrap_or_else(|_| default.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_region: DEFAULT_REGION.to_string(),
            kenyan_pattern: KENYAN_MSISDN_PATTERN.to_string(),
            international_pattern: INTERNATIONAL_PHONE_PATTERN.to_string(),
            otp_collection: OTP_COLLECTION.to_string(),
            phone_opt_in_collection: PHONE_OPT_IN_COLLECTION.to_string(),
            ussd_session_collection: USSD_SESSION_COLLECTION.to_string(),
            collection_suffix: None,
            test_email_base: TEST_EMAIL_BASE.to_string(),
        }
    }
}
