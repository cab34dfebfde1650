//! Shared conversion, formatting and phone number validation utilities.
//!
//! This library bundles a handful of independent, stateless helpers shared
//! across services: generic struct-to-map conversion through JSON
//! round-tripping, phone number validation and normalization for Kenyan and
//! international numbers, random code/email generation, and a thin
//! verification gateway that persists one-time codes and opt-in records to an
//! external document store.
//!
//! # Architecture
//!
//! - **convert**: serialization-based structural conversion helpers
//! - **phone**: MSISDN validation and E.164-style normalization
//! - **random**: verification code and disambiguated email generation
//! - **collections**: small slice membership helpers
//! - **models**: persisted record types (OTP, opt-in, USSD session)
//! - **store**: the `DocumentStore` trait abstracting the remote store
//! - **verification**: the gateway orchestrating validation and persistence
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod collections;
pub mod config;
pub mod convert;
pub mod error;
pub mod models;
pub mod phone;
pub mod random;
pub mod store;
pub mod verification;

pub use collections::{int_slice_contains, string_slice_contains};
pub use config::Config;
pub use convert::{
    coerce_to_string_map, map_any_to_map_string, map_string_to_map_any, struct_to_map,
};
pub use error::{
    ConfigError, ConversionError, GeneratorError, PhoneError, StoreError, VerificationError,
};
pub use models::{PhoneOptIn, UssdSessionLog, VerificationCode};
pub use phone::PhoneNumberValidator;
pub use random::{generate_random_email, generate_random_with_n_digits};
pub use store::{Document, DocumentStore, FieldEquals};
pub use verification::VerificationGateway;
