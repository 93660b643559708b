//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs`: SDK-facing request and response types (camelCase on serialize)
//! - `wire.rs`: Raw serde structs matching the API's snake_case bodies
//! - `convert.rs`: Conversions between the two, including precondition checks
//! - `client.rs`: Sub-client with one method per endpoint

pub mod bank_account;
pub mod corporate;
pub mod exchange_rate;
pub mod kyb;
pub mod kyc;
pub mod process;
pub mod token_preference;
pub mod user;
