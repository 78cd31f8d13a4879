//! Vote validation, tallying and proposal closing.
//!
//! Voting power lives in the membership tokens. A vote spends every token
//! the voter holds in the group, so a token passed on after voting cannot
//! vote again. A proposal moves Open -> Closed exactly once: in the vote
//! that spends the quorum share of the group's tokens with at least
//! `min_votes` votes cast, or when the owner closes it explicitly.

use dao_shared::{quorum_reached, safe_increment};
use soroban_sdk::{log, Address, Env};

use crate::errors::DaoError;
use crate::events;
use crate::membership;
use crate::storage;
use crate::types::{Proposal, VoteRecord, VotingRules};

pub fn cast(
    env: &Env,
    rules: &VotingRules,
    voter: &Address,
    group_id: u32,
    proposal_id: u64,
    support: bool,
) -> Result<(), DaoError> {
    let tokens = membership::tokens_in_group(env, voter, group_id);
    if tokens.is_empty() {
        return Err(DaoError::NotAMember);
    }

    let mut proposal = storage::get_proposal(env, proposal_id)?;
    // Holding a token of another group grants no say here
    if proposal.group_id != group_id {
        return Err(DaoError::NotAMember);
    }
    if !proposal.is_open {
        return Err(DaoError::ProposalClosed);
    }
    if storage::has_vote(env, proposal_id, voter) {
        return Err(DaoError::AlreadyVoted);
    }

    let mut spent_now = 0u32;
    for token_id in tokens.iter() {
        if !storage::is_token_spent(env, proposal_id, token_id) {
            storage::set_token_spent(env, proposal_id, token_id);
            spent_now = safe_increment(spent_now)?;
        }
    }
    // Every token held was already used on this proposal by a previous owner
    if spent_now == 0 {
        return Err(DaoError::AlreadyVoted);
    }

    if support {
        proposal.yes_votes = safe_increment(proposal.yes_votes)?;
    } else {
        proposal.no_votes = safe_increment(proposal.no_votes)?;
    }
    proposal.spent_tokens = proposal
        .spent_tokens
        .checked_add(spent_now)
        .ok_or(DaoError::Overflow)?;

    storage::set_vote(
        env,
        proposal_id,
        voter,
        &VoteRecord {
            support,
            ledger: env.ledger().sequence(),
        },
    );
    events::vote_cast(env, proposal_id, voter, support);

    let group = storage::get_group(env, group_id).ok_or(DaoError::GroupNotFound)?;
    if votes_cast(&proposal) >= rules.min_votes
        && quorum_reached(proposal.spent_tokens, group.token_count, rules.quorum_percentage)
    {
        close(env, &mut proposal);
    }

    storage::set_proposal(env, &proposal);

    Ok(())
}

/// Owner override for proposals that cannot reach their threshold.
pub fn force_close(env: &Env, proposal_id: u64) -> Result<(), DaoError> {
    let mut proposal = storage::get_proposal(env, proposal_id)?;
    if !proposal.is_open {
        return Err(DaoError::ProposalClosed);
    }

    close(env, &mut proposal);
    storage::set_proposal(env, &proposal);
    Ok(())
}

pub fn tally(env: &Env, proposal_id: u64) -> Result<(u32, u32), DaoError> {
    let proposal = storage::get_proposal(env, proposal_id)?;
    Ok((proposal.yes_votes, proposal.no_votes))
}

/// Outcome of a closed proposal; a tie does not pass.
pub fn passed(env: &Env, proposal_id: u64) -> Result<bool, DaoError> {
    let proposal = storage::get_proposal(env, proposal_id)?;
    if proposal.is_open {
        return Err(DaoError::ProposalOpen);
    }
    Ok(proposal.yes_votes > proposal.no_votes)
}

fn votes_cast(proposal: &Proposal) -> u32 {
    proposal.yes_votes.saturating_add(proposal.no_votes)
}

fn close(env: &Env, proposal: &mut Proposal) {
    proposal.is_open = false;
    log!(env, "proposal closed", proposal.id);
    events::proposal_closed(env, proposal.id, proposal.yes_votes, proposal.no_votes);
}
