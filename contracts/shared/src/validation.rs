//! Validation helper utilities for DAO contracts
//!
//! Contracts map [`ValidationError`] into their own `#[contracterror]` enums,
//! so the helpers stay independent of any single contract's error codes.

use soroban_sdk::String;

use crate::constants::MAX_PERCENTAGE;

/// Reasons an input or counter update was rejected
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// Required text was empty
    Empty,
    /// Text exceeded its length limit
    TooLong,
    /// Numeric value outside its allowed range
    OutOfRange,
    /// Counter arithmetic overflowed or underflowed
    Overflow,
}

// ===== Text Validation =====

/// Validate that text is non-empty and at most `max_len` bytes
pub fn validate_text(text: &String, max_len: u32) -> Result<(), ValidationError> {
    if text.len() == 0 {
        return Err(ValidationError::Empty);
    }
    validate_max_length(text, max_len)
}

/// Validate that text is at most `max_len` bytes; empty text is accepted
pub fn validate_max_length(text: &String, max_len: u32) -> Result<(), ValidationError> {
    if text.len() > max_len {
        return Err(ValidationError::TooLong);
    }
    Ok(())
}

// ===== Rule Validation =====

/// Validate a percentage in `1..=100`
pub fn validate_percentage(percentage: u32) -> Result<(), ValidationError> {
    if percentage == 0 || percentage > MAX_PERCENTAGE {
        return Err(ValidationError::OutOfRange);
    }
    Ok(())
}

/// Validate a minimum vote count; at least one vote is always required
pub fn validate_min_votes(min_votes: u32) -> Result<(), ValidationError> {
    if min_votes == 0 {
        return Err(ValidationError::OutOfRange);
    }
    Ok(())
}

// ===== Counter Arithmetic =====

pub fn safe_increment(value: u32) -> Result<u32, ValidationError> {
    value.checked_add(1).ok_or(ValidationError::Overflow)
}

pub fn safe_decrement(value: u32) -> Result<u32, ValidationError> {
    value.checked_sub(1).ok_or(ValidationError::Overflow)
}

pub fn safe_increment_u64(value: u64) -> Result<u64, ValidationError> {
    value.checked_add(1).ok_or(ValidationError::Overflow)
}

// ===== Voting Math =====

/// Whether `spent` out of `total` reaches `quorum_percentage`.
pub fn quorum_reached(spent: u32, total: u32, quorum_percentage: u32) -> bool {
    spent as u64 * MAX_PERCENTAGE as u64 >= total as u64 * quorum_percentage as u64
}
