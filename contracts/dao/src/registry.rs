use dao_shared::constants::MAX_GROUP_NAME_LENGTH;
use dao_shared::{safe_increment, validate_text};
use soroban_sdk::{log, Env, String};

use crate::errors::DaoError;
use crate::events;
use crate::storage;
use crate::types::DaoGroup;

/// Registers a new group. Group ids are never reused or overwritten.
pub fn register(env: &Env, group_id: u32, name: String) -> Result<(), DaoError> {
    validate_text(&name, MAX_GROUP_NAME_LENGTH)?;

    if storage::has_group(env, group_id) {
        return Err(DaoError::GroupAlreadyExists);
    }

    let count = safe_increment(storage::get_group_count(env))?;

    storage::set_group(
        env,
        &DaoGroup {
            id: group_id,
            name: name.clone(),
            member_count: 0,
            token_count: 0,
        },
    );
    storage::set_group_count(env, count);

    log!(env, "group registered", group_id);
    events::group_registered(env, group_id, &name);

    Ok(())
}

pub fn get(env: &Env, group_id: u32) -> Result<DaoGroup, DaoError> {
    storage::get_group(env, group_id).ok_or(DaoError::GroupNotFound)
}

/// Stored name, or an empty string for an unregistered id.
pub fn name_of(env: &Env, group_id: u32) -> String {
    storage::get_group(env, group_id)
        .map(|group| group.name)
        .unwrap_or_else(|| String::from_str(env, ""))
}
