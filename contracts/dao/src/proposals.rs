use dao_shared::constants::MAX_DESCRIPTION_LENGTH;
use dao_shared::{safe_increment_u64, validate_text};
use soroban_sdk::{log, Address, Env, String};

use crate::errors::DaoError;
use crate::events;
use crate::membership;
use crate::storage;
use crate::types::Proposal;

/// Opens a proposal in `group_id` on behalf of one of its members.
pub fn create(
    env: &Env,
    creator: &Address,
    group_id: u32,
    description: String,
) -> Result<u64, DaoError> {
    let has_members = storage::get_group(env, group_id)
        .map(|group| group.member_count > 0)
        .unwrap_or(false);
    if !has_members {
        return Err(DaoError::GroupEmpty);
    }

    if !membership::is_member(env, creator, group_id) {
        return Err(DaoError::NotAMember);
    }

    validate_text(&description, MAX_DESCRIPTION_LENGTH)?;

    let id = storage::get_proposal_count(env);
    let next_count = safe_increment_u64(id)?;

    storage::set_proposal(
        env,
        &Proposal {
            id,
            group_id,
            creator: creator.clone(),
            description,
            is_open: true,
            yes_votes: 0,
            no_votes: 0,
            spent_tokens: 0,
        },
    );

    let mut group_proposals = storage::get_group_proposals(env, group_id);
    group_proposals.push_back(id);
    storage::set_group_proposals(env, group_id, &group_proposals);

    storage::set_proposal_count(env, next_count);

    log!(env, "proposal created", id, group_id);
    events::proposal_created(env, id, group_id, creator);

    Ok(id)
}

pub fn belongs_to_group(env: &Env, group_id: u32, proposal_id: u64) -> bool {
    storage::get_proposal(env, proposal_id)
        .map(|proposal| proposal.group_id == group_id)
        .unwrap_or(false)
}
