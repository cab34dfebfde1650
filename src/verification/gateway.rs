//! Orchestrates phone validation with document store reads and writes.

use crate::config::Config;
use crate::convert::struct_to_map;
use crate::error::{VerificationError, VerificationResult};
use crate::models::{PhoneOptIn, UssdSessionLog, VerificationCode};
use crate::phone::PhoneNumberValidator;
use crate::random::generate_random_with_n_digits;
use crate::store::{DocumentStore, FieldEquals};
use serde_json::Value;
use std::sync::Arc;

/// Thin orchestration layer: validates and normalizes a phone number, then
/// checks or persists verification state in the document store.
///
/// Holds no verification state of its own and never retries; recovery policy
/// belongs to callers and the store.
pub struct VerificationGateway {
    store: Arc<dyn DocumentStore>,
    validator: PhoneNumberValidator,
    otp_collection: String,
    opt_in_collection: String,
    ussd_collection: String,
}

impl VerificationGateway {
    /// Create a gateway. Collection suffixes from the configuration are
    /// resolved once here, so implementations of [`DocumentStore`] always
    /// receive final collection names.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        validator: PhoneNumberValidator,
        config: &Config,
    ) -> Self {
        Self {
            store,
            validator,
            otp_collection: config.suffixed_collection(&config.otp_collection),
            opt_in_collection: config.suffixed_collection(&config.phone_opt_in_collection),
            ussd_collection: config.suffixed_collection(&config.ussd_session_collection),
        }
    }

    /// Issue a fresh verification code for a phone number.
    ///
    /// Normalizes the number, generates a code with the requested digit count
    /// from a CSPRNG, persists it as a valid [`VerificationCode`] and returns
    /// the code for delivery.
    pub async fn issue_code(&self, msisdn: &str, digits: u32) -> VerificationResult<String> {
        let normalized = self.validator.normalize(msisdn)?;
        let code = generate_random_with_n_digits(digits)?;
        let record = VerificationCode::issued_now(normalized, code.clone());
        let data = struct_to_map(&record)?;
        self.store.save(&self.otp_collection, data).await?;
        tracing::debug!(collection = %self.otp_collection, "verification code issued");
        Ok(code)
    }

    /// Verify a phone number against a one-time code.
    ///
    /// Returns the normalized number on success. For USSD verifications the
    /// code is a session id: a [`UssdSessionLog`] is persisted and the number
    /// is accepted without a code lookup. Otherwise every stored code
    /// matching the number, code and validity flag is invalidated so it
    /// cannot be replayed.
    ///
    /// # Errors
    ///
    /// - [`VerificationError::InvalidPhone`] if the number fails validation
    /// - [`VerificationError::NoMatchingCode`] if no valid code matches
    /// - [`VerificationError::Persistence`] if the store fails
    pub async fn verify_code(
        &self,
        msisdn: &str,
        verification_code: &str,
        is_ussd: bool,
    ) -> VerificationResult<String> {
        let normalized = self.validator.normalize(msisdn)?;

        // USSD registrations only log the session
        if is_ussd {
            let log = UssdSessionLog {
                msisdn: msisdn.to_string(),
                session_id: verification_code.to_string(),
            };
            let data = struct_to_map(&log)?;
            self.store.save(&self.ussd_collection, data).await?;
            return Ok(normalized);
        }

        let filters = [
            FieldEquals::new("isValid", true),
            FieldEquals::new("msisdn", normalized.as_str()),
            FieldEquals::new("authorizationCode", verification_code),
        ];
        let matches = self.store.query(&self.otp_collection, &filters).await?;
        if matches.is_empty() {
            return Err(VerificationError::NoMatchingCode);
        }

        for document in matches {
            let mut data = document.data;
            data.insert("isValid".to_string(), Value::Bool(false));
            self.store
                .update(&self.otp_collection, &document.id, data)
                .await?;
        }

        Ok(normalized)
    }

    /// Verify a phone number and optionally record a communication opt-in.
    ///
    /// Delegates to [`Self::verify_code`]; when `opt_in` is set, a
    /// [`PhoneOptIn`] record is persisted for the normalized number after a
    /// successful verification.
    pub async fn verify_and_opt_in(
        &self,
        msisdn: &str,
        verification_code: &str,
        is_ussd: bool,
        opt_in: bool,
    ) -> VerificationResult<String> {
        let normalized = self.verify_code(msisdn, verification_code, is_ussd).await?;

        if opt_in {
            let record = PhoneOptIn {
                msisdn: normalized.clone(),
                opted_in: true,
            };
            let data = struct_to_map(&record)?;
            self.store.save(&self.opt_in_collection, data).await?;
        }

        Ok(normalized)
    }
}
