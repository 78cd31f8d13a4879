#![no_std]
//! # Shared DAO Contracts Library
//!
//! Reusable constants and validation helpers for the DAO contracts in this
//! workspace.
//!
//! ## Modules
//!
//! - `constants` - Storage TTLs, input limits and default voting rules
//! - `validation` - Input checks and checked counter arithmetic
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! dao-shared = { path = "../shared" }
//! ```
//!
//! ```rust,ignore
//! use dao_shared::constants::MAX_GROUP_NAME_LENGTH;
//! use dao_shared::validation::{validate_text, ValidationError};
//! ```

pub mod constants;
pub mod validation;

pub use validation::{
    quorum_reached, safe_decrement, safe_increment, safe_increment_u64, validate_max_length,
    validate_min_votes, validate_percentage, validate_text, ValidationError,
};
