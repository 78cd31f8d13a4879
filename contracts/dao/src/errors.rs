use dao_shared::ValidationError;
use soroban_sdk::contracterror;

/// Error codes returned by the DAO contract
///
/// Ranges:
/// - 1-9: General/Authorization errors
/// - 10-19: Group errors
/// - 20-29: Membership token errors
/// - 30-39: Proposal and voting errors
/// - 40+: Arithmetic errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DaoError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the DAO owner
    Unauthorized = 3,
    Paused = 4,
    InvalidInput = 5,

    GroupNotFound = 10,
    GroupAlreadyExists = 11,
    /// Group is unregistered or nobody holds one of its tokens
    GroupEmpty = 12,

    TokenNotFound = 20,
    NotTokenOwner = 21,
    /// Caller holds no membership token in the group
    NotAMember = 22,

    ProposalNotFound = 30,
    ProposalClosed = 32,
    ProposalOpen = 33,
    AlreadyVoted = 34,

    Overflow = 40,
}

impl From<ValidationError> for DaoError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Overflow => DaoError::Overflow,
            ValidationError::Empty | ValidationError::TooLong | ValidationError::OutOfRange => {
                DaoError::InvalidInput
            }
        }
    }
}
