//! Phone communication opt-in record.

use serde::{Deserialize, Serialize};

/// Persisted record of a phone number opting in to communication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneOptIn {
    /// The normalized phone number that opted in
    pub msisdn: String,

    /// Whether the number is opted in
    #[serde(rename = "optedIn")]
    pub opted_in: bool,
}
