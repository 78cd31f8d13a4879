use soroban_sdk::{contracttype, Address, String};

/// Rules deciding when a proposal closes
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingRules {
    /// Share of the group's current members that must vote (1-100)
    pub quorum_percentage: u32,
    /// Votes required regardless of group size
    pub min_votes: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoConfig {
    pub owner: Address,
    /// Membership token collection name
    pub name: String,
    pub symbol: String,
    pub rules: VotingRules,
    pub paused: bool,
}

/// A named governance unit
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoGroup {
    pub id: u32,
    pub name: String,
    /// Distinct addresses holding at least one token of the group
    pub member_count: u32,
    /// Tokens ever minted into the group
    pub token_count: u32,
}

/// Non-fungible credential granting voting rights in one group
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MembershipToken {
    pub token_id: u64,
    pub owner: Address,
    pub uri: String,
    pub group_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub group_id: u32,
    pub creator: Address,
    pub description: String,
    pub is_open: bool,
    pub yes_votes: u32,
    pub no_votes: u32,
    /// Group tokens whose vote on this proposal has been used
    pub spent_tokens: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub support: bool,
    /// Ledger sequence the vote was cast in
    pub ledger: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    GroupCount,
    Group(u32),
    TokenCounter,
    Token(u64),
    // (group_id, holder) -> ids of the tokens held in that group
    HolderTokens(u32, Address),
    // holder -> tokens held across all groups
    Balance(Address),
    ProposalCount,
    Proposal(u64),
    GroupProposals(u32),
    Vote(u64, Address), // (proposal_id, voter)
    TokenVote(u64, u64), // (proposal_id, token_id)
}
