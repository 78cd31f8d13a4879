use dao_shared::constants::MAX_TOKEN_URI_LENGTH;
use dao_shared::{safe_decrement, safe_increment, safe_increment_u64, validate_max_length};
use soroban_sdk::{log, Address, Env, String, Vec};

use crate::errors::DaoError;
use crate::events;
use crate::storage;
use crate::types::{DaoGroup, MembershipToken};

/// Mints the next membership token into a registered group.
pub fn mint(env: &Env, to: &Address, uri: String, group_id: u32) -> Result<u64, DaoError> {
    let mut group = storage::get_group(env, group_id).ok_or(DaoError::GroupNotFound)?;
    validate_max_length(&uri, MAX_TOKEN_URI_LENGTH)?;

    let token_id = storage::get_token_counter(env);
    let next_counter = safe_increment_u64(token_id)?;

    add_holding(env, &mut group, to, token_id)?;
    group.token_count = safe_increment(group.token_count)?;

    storage::set_token(
        env,
        &MembershipToken {
            token_id,
            owner: to.clone(),
            uri,
            group_id,
        },
    );
    storage::set_group(env, &group);
    storage::set_token_counter(env, next_counter);

    log!(env, "token minted", token_id, group_id);
    events::token_minted(env, to, token_id, group_id);

    Ok(token_id)
}

/// Moves a token, and with it the membership it grants. Votes already cast
/// with the token stay spent for the recipient.
pub fn transfer(env: &Env, from: &Address, to: &Address, token_id: u64) -> Result<(), DaoError> {
    if from == to {
        return Err(DaoError::InvalidInput);
    }

    let mut token = storage::get_token(env, token_id)?;
    if token.owner != *from {
        return Err(DaoError::NotTokenOwner);
    }

    let mut group = storage::get_group(env, token.group_id).ok_or(DaoError::GroupNotFound)?;
    remove_holding(env, &mut group, from, token_id)?;
    add_holding(env, &mut group, to, token_id)?;
    storage::set_group(env, &group);

    token.owner = to.clone();
    storage::set_token(env, &token);

    events::token_transferred(env, from, to, token_id);

    Ok(())
}

pub fn is_member(env: &Env, address: &Address, group_id: u32) -> bool {
    !storage::get_holder_tokens(env, group_id, address).is_empty()
}

/// Ids of the tokens `holder` owns in `group_id`.
pub fn tokens_in_group(env: &Env, holder: &Address, group_id: u32) -> Vec<u64> {
    storage::get_holder_tokens(env, group_id, holder)
}

pub fn member_count(env: &Env, group_id: u32) -> u32 {
    storage::get_group(env, group_id)
        .map(|group| group.member_count)
        .unwrap_or(0)
}

fn add_holding(
    env: &Env,
    group: &mut DaoGroup,
    holder: &Address,
    token_id: u64,
) -> Result<(), DaoError> {
    let mut tokens = storage::get_holder_tokens(env, group.id, holder);
    if tokens.is_empty() {
        group.member_count = safe_increment(group.member_count)?;
    }
    tokens.push_back(token_id);
    storage::set_holder_tokens(env, group.id, holder, &tokens);

    let balance = storage::get_balance(env, holder);
    storage::set_balance(env, holder, safe_increment(balance)?);
    Ok(())
}

fn remove_holding(
    env: &Env,
    group: &mut DaoGroup,
    holder: &Address,
    token_id: u64,
) -> Result<(), DaoError> {
    let mut tokens = storage::get_holder_tokens(env, group.id, holder);
    let index = tokens
        .first_index_of(token_id)
        .ok_or(DaoError::NotTokenOwner)?;
    tokens.remove(index);
    if tokens.is_empty() {
        group.member_count = safe_decrement(group.member_count)?;
    }
    storage::set_holder_tokens(env, group.id, holder, &tokens);

    let balance = storage::get_balance(env, holder);
    storage::set_balance(env, holder, safe_decrement(balance)?);
    Ok(())
}
