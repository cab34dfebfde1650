//! Error types for the shared utilities.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Every fallible function returns one of these as an error value;
//! malformed input is never a panic.

use thiserror::Error;

/// Errors that can occur during structural conversion.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The value could not be serialized to JSON
    #[error("unable to serialize value to JSON: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The serialized bytes could not be read back as JSON
    #[error("unable to deserialize JSON: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The value serialized to something other than a JSON object
    #[error("value does not serialize to a JSON object")]
    NotAnObject,

    /// A strict string-map conversion found a non-string value
    #[error("non-string value for key {key:?}: {value} ({kind})")]
    TypeMismatch {
        key: String,
        value: String,
        kind: &'static str,
    },
}

/// Errors that can occur during phone number validation and normalization.
#[derive(Error, Debug)]
pub enum PhoneError {
    /// The number failed format validation
    #[error("invalid phone number: {0}")]
    InvalidFormat(String),

    /// The number passed the format gate but the metadata library rejected it
    #[error("unable to parse phone number: {0}")]
    Parse(#[from] phonenumber::ParseError),
}

/// Errors that can occur while generating random values.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The requested digit count cannot be represented
    #[error("digit count must be between 1 and 19, got {0}")]
    DigitsOutOfRange(u32),
}

/// Errors reported by a document store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No document with the given id exists in the collection
    #[error("document {id} not found in collection {collection}")]
    NotFound { collection: String, id: String },

    /// The backing store failed
    #[error("document store backend error: {0}")]
    Backend(String),
}

/// Errors that can occur during code verification and opt-in persistence.
#[derive(Error, Debug)]
pub enum VerificationError {
    /// The supplied phone number is not valid
    #[error("invalid phone format: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// No valid verification code matched the number and code supplied
    #[error("no matching verification codes found")]
    NoMatchingCode,

    /// A record could not be converted for persistence
    #[error("unable to convert record for persistence: {0}")]
    Record(#[from] ConversionError),

    /// The document store failed
    #[error("document store operation failed: {0}")]
    Persistence(#[from] StoreError),

    /// Code generation failed
    #[error("unable to generate verification code: {0}")]
    CodeGeneration(#[from] GeneratorError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ConversionError
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience type alias for Results with PhoneError
pub type PhoneResult<T> = Result<T, PhoneError>;

/// Convenience type alias for Results with GeneratorError
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with VerificationError
pub type VerificationResult<T> = Result<T, VerificationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
