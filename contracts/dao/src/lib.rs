#![no_std]
//! # DAO Groups Contract
//!
//! Owner-managed DAO groups whose members hold non-fungible membership
//! tokens. Members open proposals inside their group and vote yes/no on
//! them, one vote per member per proposal.
//!
//! Flow:
//! 1. `initialize` sets the owner and the token collection name/symbol.
//! 2. The owner registers groups with `register_dao_group`.
//! 3. The owner mints membership tokens into groups with `create_nft`.
//! 4. Token holders call `create_proposal` and `vote_on_proposal`.

mod access;
mod errors;
mod events;
mod membership;
mod proposals;
mod registry;
mod storage;
mod types;
mod voting;

pub use errors::DaoError;
pub use types::{DaoConfig, DaoGroup, MembershipToken, Proposal, VoteRecord, VotingRules};

use dao_shared::constants::{DEFAULT_MIN_VOTES, DEFAULT_QUORUM_PERCENT, MAX_TOKEN_NAME_LENGTH};
use dao_shared::{validate_min_votes, validate_percentage, validate_text};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct DaoContract;

#[contractimpl]
impl DaoContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Configure the owner and the membership token collection.
    /// Can only be called once.
    pub fn initialize(env: Env, owner: Address, name: String, symbol: String) -> Result<(), DaoError> {
        if storage::has_config(&env) {
            return Err(DaoError::AlreadyInitialized);
        }
        owner.require_auth();

        validate_text(&name, MAX_TOKEN_NAME_LENGTH)?;
        validate_text(&symbol, MAX_TOKEN_NAME_LENGTH)?;

        storage::set_config(
            &env,
            &DaoConfig {
                owner: owner.clone(),
                name: name.clone(),
                symbol: symbol.clone(),
                rules: VotingRules {
                    quorum_percentage: DEFAULT_QUORUM_PERCENT,
                    min_votes: DEFAULT_MIN_VOTES,
                },
                paused: false,
            },
        );

        events::initialized(&env, &owner, &name, &symbol);
        Ok(())
    }

    /// Membership token collection name.
    pub fn name(env: Env) -> Result<String, DaoError> {
        Ok(storage::get_config(&env)?.name)
    }

    /// Membership token collection symbol.
    pub fn symbol(env: Env) -> Result<String, DaoError> {
        Ok(storage::get_config(&env)?.symbol)
    }

    /// Address allowed to register groups and mint tokens.
    pub fn owner(env: Env) -> Result<Address, DaoError> {
        Ok(storage::get_config(&env)?.owner)
    }

    /// Rules currently used to close proposals.
    pub fn voting_rules(env: Env) -> Result<VotingRules, DaoError> {
        Ok(storage::get_config(&env)?.rules)
    }

    /// Full stored configuration.
    pub fn get_config(env: Env) -> Result<DaoConfig, DaoError> {
        storage::get_config(&env)
    }

    // ── Administration ───────────────────────────────────────────────────────

    /// Hand the owner role to `new_owner`. Owner only.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), DaoError> {
        let mut config = access::require_owner(&env, &caller)?;
        access::require_active(&config)?;
        config.owner = new_owner.clone();
        storage::set_config(&env, &config);

        events::ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    /// Update the closing rules. Proposals already closed stay closed.
    pub fn set_voting_rules(
        env: Env,
        caller: Address,
        quorum_percentage: u32,
        min_votes: u32,
    ) -> Result<(), DaoError> {
        let mut config = access::require_owner(&env, &caller)?;
        access::require_active(&config)?;
        validate_percentage(quorum_percentage)?;
        validate_min_votes(min_votes)?;

        config.rules = VotingRules {
            quorum_percentage,
            min_votes,
        };
        storage::set_config(&env, &config);

        events::voting_rules_updated(&env, &config.rules);
        Ok(())
    }

    /// Block every state change except `unpause`. Owner only.
    pub fn pause(env: Env, caller: Address) -> Result<(), DaoError> {
        let mut config = access::require_owner(&env, &caller)?;
        access::require_active(&config)?;
        config.paused = true;
        storage::set_config(&env, &config);

        events::paused(&env, &caller);
        Ok(())
    }

    /// Lift a pause. Owner only.
    pub fn unpause(env: Env, caller: Address) -> Result<(), DaoError> {
        let mut config = access::require_owner(&env, &caller)?;
        config.paused = false;
        storage::set_config(&env, &config);

        events::unpaused(&env, &caller);
        Ok(())
    }

    /// Whether state changes are currently blocked.
    pub fn is_paused(env: Env) -> Result<bool, DaoError> {
        Ok(storage::get_config(&env)?.paused)
    }

    // ── Groups ───────────────────────────────────────────────────────────────

    /// Register a named group. Fails if `group_id` is already taken.
    pub fn register_dao_group(
        env: Env,
        caller: Address,
        group_id: u32,
        name: String,
    ) -> Result<(), DaoError> {
        let config = access::require_owner(&env, &caller)?;
        access::require_active(&config)?;
        registry::register(&env, group_id, name)
    }

    /// Name of a group, empty when the group is not registered.
    pub fn dao_groups(env: Env, group_id: u32) -> String {
        registry::name_of(&env, group_id)
    }

    /// Full record of a registered group.
    pub fn get_group(env: Env, group_id: u32) -> Result<DaoGroup, DaoError> {
        registry::get(&env, group_id)
    }

    /// Number of registered groups.
    pub fn group_count(env: Env) -> u32 {
        storage::get_group_count(&env)
    }

    // ── Membership Tokens ────────────────────────────────────────────────────

    /// Mint a membership token for `to` into a registered group.
    /// Returns the new token id.
    pub fn create_nft(
        env: Env,
        caller: Address,
        to: Address,
        uri: String,
        group_id: u32,
    ) -> Result<u64, DaoError> {
        let config = access::require_owner(&env, &caller)?;
        access::require_active(&config)?;
        membership::mint(&env, &to, uri, group_id)
    }

    /// Id the next minted token will receive.
    pub fn token_counter(env: Env) -> u64 {
        storage::get_token_counter(&env)
    }

    /// Current holder of a token.
    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, DaoError> {
        Ok(storage::get_token(&env, token_id)?.owner)
    }

    /// Metadata URI a token was minted with.
    pub fn token_uri(env: Env, token_id: u64) -> Result<String, DaoError> {
        Ok(storage::get_token(&env, token_id)?.uri)
    }

    /// Group a token grants membership of.
    pub fn token_group(env: Env, token_id: u64) -> Result<u32, DaoError> {
        Ok(storage::get_token(&env, token_id)?.group_id)
    }

    /// Full record of a token.
    pub fn get_token(env: Env, token_id: u64) -> Result<MembershipToken, DaoError> {
        storage::get_token(&env, token_id)
    }

    /// Tokens held by `holder` across all groups.
    pub fn balance_of(env: Env, holder: Address) -> u32 {
        storage::get_balance(&env, &holder)
    }

    /// Whether `address` holds at least one token of the group.
    pub fn is_member(env: Env, address: Address, group_id: u32) -> bool {
        membership::is_member(&env, &address, group_id)
    }

    /// Distinct holders of the group's tokens, 0 for unknown groups.
    pub fn member_count(env: Env, group_id: u32) -> u32 {
        membership::member_count(&env, group_id)
    }

    /// Move a token to `to`. Votes already cast with it stay spent.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), DaoError> {
        from.require_auth();
        let config = storage::get_config(&env)?;
        access::require_active(&config)?;
        membership::transfer(&env, &from, &to, token_id)
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Open a proposal in a group the caller holds a token of.
    /// Returns the new proposal id.
    pub fn create_proposal(
        env: Env,
        caller: Address,
        group_id: u32,
        description: String,
    ) -> Result<u64, DaoError> {
        caller.require_auth();
        let config = storage::get_config(&env)?;
        access::require_active(&config)?;
        proposals::create(&env, &caller, group_id, description)
    }

    /// Full record of a proposal.
    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, DaoError> {
        storage::get_proposal(&env, proposal_id)
    }

    /// Whether the proposal exists and belongs to the group.
    pub fn is_proposal_in_dao_group(env: Env, group_id: u32, proposal_id: u64) -> bool {
        proposals::belongs_to_group(&env, group_id, proposal_id)
    }

    /// Ids of the proposals created in a group, oldest first.
    pub fn group_proposals(env: Env, group_id: u32) -> Vec<u64> {
        storage::get_group_proposals(&env, group_id)
    }

    /// Number of proposals across all groups.
    pub fn proposals_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast the caller's yes/no vote, spending every token they hold in the
    /// group. Closes the proposal when the voting rules are met.
    pub fn vote_on_proposal(
        env: Env,
        caller: Address,
        group_id: u32,
        proposal_id: u64,
        support: bool,
    ) -> Result<(), DaoError> {
        caller.require_auth();
        let config = storage::get_config(&env)?;
        access::require_active(&config)?;
        voting::cast(&env, &config.rules, &caller, group_id, proposal_id, support)
    }

    /// `(yes_votes, no_votes)` of a proposal.
    pub fn see_proposal_votes(env: Env, proposal_id: u64) -> Result<(u32, u32), DaoError> {
        voting::tally(&env, proposal_id)
    }

    /// Whether `voter` has voted on the proposal.
    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        storage::has_vote(&env, proposal_id, &voter)
    }

    /// Vote `voter` cast on the proposal, if any.
    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<VoteRecord> {
        storage::get_vote(&env, proposal_id, &voter)
    }

    /// Whether the proposal still accepts votes.
    pub fn is_proposal_open(env: Env, proposal_id: u64) -> Result<bool, DaoError> {
        Ok(storage::get_proposal(&env, proposal_id)?.is_open)
    }

    /// Close an open proposal regardless of the voting rules. Owner only.
    pub fn close_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), DaoError> {
        let config = access::require_owner(&env, &caller)?;
        access::require_active(&config)?;
        voting::force_close(&env, proposal_id)
    }

    /// Whether a closed proposal passed (more yes than no votes).
    pub fn proposal_passed(env: Env, proposal_id: u64) -> Result<bool, DaoError> {
        voting::passed(&env, proposal_id)
    }
}
