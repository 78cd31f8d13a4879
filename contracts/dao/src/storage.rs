use dao_shared::constants::{
    INSTANCE_TTL_EXTEND_TO, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO,
    PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env, Vec};

use crate::errors::DaoError;
use crate::types::{DaoConfig, DaoGroup, DataKey, MembershipToken, Proposal, VoteRecord};

// ── TTL ──────────────────────────────────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<DaoConfig, DaoError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(DaoError::NotInitialized)
}

pub fn set_config(env: &Env, config: &DaoConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ── Groups ───────────────────────────────────────────────────────────────────

pub fn get_group_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::GroupCount)
        .unwrap_or(0)
}

pub fn set_group_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::GroupCount, &count);
    bump_instance(env);
}

pub fn has_group(env: &Env, group_id: u32) -> bool {
    env.storage().persistent().has(&DataKey::Group(group_id))
}

pub fn get_group(env: &Env, group_id: u32) -> Option<DaoGroup> {
    env.storage().persistent().get(&DataKey::Group(group_id))
}

pub fn set_group(env: &Env, group: &DaoGroup) {
    let key = DataKey::Group(group.id);
    env.storage().persistent().set(&key, group);
    bump_persistent(env, &key);
}

// ── Membership Tokens ────────────────────────────────────────────────────────

pub fn get_token_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TokenCounter)
        .unwrap_or(0)
}

pub fn set_token_counter(env: &Env, counter: u64) {
    env.storage().instance().set(&DataKey::TokenCounter, &counter);
    bump_instance(env);
}

pub fn get_token(env: &Env, token_id: u64) -> Result<MembershipToken, DaoError> {
    env.storage()
        .persistent()
        .get(&DataKey::Token(token_id))
        .ok_or(DaoError::TokenNotFound)
}

pub fn set_token(env: &Env, token: &MembershipToken) {
    let key = DataKey::Token(token.token_id);
    env.storage().persistent().set(&key, token);
    bump_persistent(env, &key);
}

pub fn get_holder_tokens(env: &Env, group_id: u32, holder: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::HolderTokens(group_id, holder.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

/// An empty list removes the entry.
pub fn set_holder_tokens(env: &Env, group_id: u32, holder: &Address, tokens: &Vec<u64>) {
    let key = DataKey::HolderTokens(group_id, holder.clone());
    if tokens.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, tokens);
    bump_persistent(env, &key);
}

pub fn get_balance(env: &Env, holder: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, holder: &Address, amount: u32) {
    let key = DataKey::Balance(holder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
    bump_instance(env);
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, DaoError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(DaoError::ProposalNotFound)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn get_group_proposals(env: &Env, group_id: u32) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::GroupProposals(group_id))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_group_proposals(env: &Env, group_id: u32, proposals: &Vec<u64>) {
    let key = DataKey::GroupProposals(group_id);
    env.storage().persistent().set(&key, proposals);
    bump_persistent(env, &key);
}

// ── Votes ────────────────────────────────────────────────────────────────────

pub fn has_vote(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn get_vote(env: &Env, proposal_id: u64, voter: &Address) -> Option<VoteRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn set_vote(env: &Env, proposal_id: u64, voter: &Address, record: &VoteRecord) {
    let key = DataKey::Vote(proposal_id, voter.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

pub fn is_token_spent(env: &Env, proposal_id: u64, token_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::TokenVote(proposal_id, token_id))
}

pub fn set_token_spent(env: &Env, proposal_id: u64, token_id: u64) {
    let key = DataKey::TokenVote(proposal_id, token_id);
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
