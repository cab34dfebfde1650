//! Phone number verification against stored one-time codes.

pub mod gateway;

pub use gateway::VerificationGateway;
