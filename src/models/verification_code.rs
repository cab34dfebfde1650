//! One-time verification code record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single-use verification code tied to a normalized phone number.
///
/// Lifecycle: created with `is_valid = true` when a code is issued, matched
/// during verification, and invalidated (flag set to `false`) on successful
/// use. This crate never retains these records; the document store owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Normalized phone number the code was issued to
    pub msisdn: String,

    /// The one-time authorization code
    #[serde(rename = "authorizationCode")]
    pub authorization_code: String,

    /// Whether the code can still be used
    #[serde(rename = "isValid")]
    pub is_valid: bool,

    /// When the code was issued
    pub timestamp: DateTime<Utc>,
}

impl VerificationCode {
    /// Create a fresh, valid code record issued now.
    pub fn issued_now(msisdn: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            msisdn: msisdn.into(),
            authorization_code: code.into(),
            is_valid: true,
            timestamp: Utc::now(),
        }
    }
}
