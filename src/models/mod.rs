//! Persisted record types.
//!
//! Field names on the wire match the documents already stored by earlier
//! revisions of this package, so renames here would break existing data.

pub mod phone_opt_in;
pub mod ussd_session;
pub mod verification_code;

pub use phone_opt_in::PhoneOptIn;
pub use ussd_session::UssdSessionLog;
pub use verification_code::VerificationCode;
