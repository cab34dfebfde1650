//! Phone number validation and normalization.

pub mod validator;

pub use validator::PhoneNumberValidator;
