//! USSD session log record.

use serde::{Deserialize, Serialize};

/// A log of a USSD signup session, persisted when a number is verified over
/// the USSD channel instead of a one-time code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UssdSessionLog {
    /// The raw phone number the session was started for
    pub msisdn: String,

    /// The USSD session identifier
    #[serde(rename = "sessionID")]
    pub session_id: String,
}
