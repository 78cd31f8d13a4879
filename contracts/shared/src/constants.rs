//! Common constants used across DAO contracts
//!
//! Storage lifetimes, input limits and the default voting rules applied by
//! `initialize`.

// ===== Ledger TTL Constants =====
// At ~5s per ledger one day is 17,280 ledgers.

/// Ledgers per day (~5s close time)
pub const LEDGERS_PER_DAY: u32 = 17_280;

/// Extend persistent entries once their remaining TTL drops below 30 days
pub const PERSISTENT_TTL_THRESHOLD: u32 = 30 * LEDGERS_PER_DAY;

/// Persistent entries are extended to live 120 days
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 120 * LEDGERS_PER_DAY;

/// Extend instance storage once its remaining TTL drops below 7 days
pub const INSTANCE_TTL_THRESHOLD: u32 = 7 * LEDGERS_PER_DAY;

/// Instance storage is extended to live 30 days
pub const INSTANCE_TTL_EXTEND_TO: u32 = 30 * LEDGERS_PER_DAY;

// ===== Input Limits =====

/// Maximum length of the DAO token name and symbol
pub const MAX_TOKEN_NAME_LENGTH: u32 = 64;

/// Maximum length of a group name
pub const MAX_GROUP_NAME_LENGTH: u32 = 64;

/// Maximum length of a membership token URI
pub const MAX_TOKEN_URI_LENGTH: u32 = 256;

/// Maximum length of a proposal description
pub const MAX_DESCRIPTION_LENGTH: u32 = 1_024;

// ===== Governance Constants =====

/// Maximum percentage for any rule (100%)
pub const MAX_PERCENTAGE: u32 = 100;

/// Default share of current group members that must vote before a proposal closes
pub const DEFAULT_QUORUM_PERCENT: u32 = 100;

/// Default minimum number of votes before a proposal closes
pub const DEFAULT_MIN_VOTES: u32 = 2;
