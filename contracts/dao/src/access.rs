use soroban_sdk::{Address, Env};

use crate::errors::DaoError;
use crate::storage;
use crate::types::DaoConfig;

/// Authenticates `caller` and checks it is the DAO owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<DaoConfig, DaoError> {
    caller.require_auth();
    let config = storage::get_config(env)?;
    if config.owner != *caller {
        return Err(DaoError::Unauthorized);
    }
    Ok(config)
}

pub fn require_active(config: &DaoConfig) -> Result<(), DaoError> {
    if config.paused {
        return Err(DaoError::Paused);
    }
    Ok(())
}
