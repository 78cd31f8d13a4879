//! Contract events for off-chain indexers.
//!
//! Topics are `(name, subject)`; payloads carry the remaining fields.

use soroban_sdk::{symbol_short, Address, Env, String};

use crate::types::VotingRules;

pub fn initialized(env: &Env, owner: &Address, name: &String, symbol: &String) {
    env.events().publish(
        (symbol_short!("init"),),
        (owner.clone(), name.clone(), symbol.clone()),
    );
}

pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"),),
        (previous.clone(), new_owner.clone()),
    );
}

pub fn paused(env: &Env, owner: &Address) {
    env.events()
        .publish((symbol_short!("paused"),), (owner.clone(),));
}

pub fn unpaused(env: &Env, owner: &Address) {
    env.events()
        .publish((symbol_short!("unpaused"),), (owner.clone(),));
}

pub fn voting_rules_updated(env: &Env, rules: &VotingRules) {
    env.events().publish(
        (symbol_short!("rules"),),
        (rules.quorum_percentage, rules.min_votes),
    );
}

pub fn group_registered(env: &Env, group_id: u32, name: &String) {
    env.events()
        .publish((symbol_short!("group"), group_id), (name.clone(),));
}

pub fn token_minted(env: &Env, to: &Address, token_id: u64, group_id: u32) {
    env.events()
        .publish((symbol_short!("mint"), to.clone()), (token_id, group_id));
}

pub fn token_transferred(env: &Env, from: &Address, to: &Address, token_id: u64) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone()),
        (to.clone(), token_id),
    );
}

pub fn proposal_created(env: &Env, proposal_id: u64, group_id: u32, creator: &Address) {
    env.events().publish(
        (symbol_short!("proposal"), proposal_id),
        (group_id, creator.clone()),
    );
}

pub fn vote_cast(env: &Env, proposal_id: u64, voter: &Address, support: bool) {
    env.events().publish(
        (symbol_short!("vote"), proposal_id),
        (voter.clone(), support),
    );
}

pub fn proposal_closed(env: &Env, proposal_id: u64, yes_votes: u32, no_votes: u32) {
    env.events().publish(
        (symbol_short!("closed"), proposal_id),
        (yes_votes, no_votes),
    );
}
