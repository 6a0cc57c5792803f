use soroban_sdk::{Address, Env, Vec};

use crate::types::{Approval, DataKey, Proposal, SignerRegistry};

// Contract-global state (registry, counter, init flag) lives in instance
// storage; per-proposal records are keyed individually in persistent storage
// and retained after they reach a terminal state.

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn registry(env: &Env) -> SignerRegistry {
    env.storage().instance().get(&DataKey::Registry).unwrap()
}

pub fn set_registry(env: &Env, registry: &SignerRegistry) {
    env.storage().instance().set(&DataKey::Registry, registry);
}

pub fn is_signer(env: &Env, address: &Address) -> bool {
    registry(env).signers.contains(address)
}

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

// Identifiers are monotonic and never reused, even after expiry or
// cancellation.
pub fn next_proposal_id(env: &Env) -> u64 {
    let id = proposal_count(env) + 1;
    env.storage().instance().set(&DataKey::ProposalCount, &id);
    id
}

pub fn proposal(env: &Env, id: u64) -> Option<Proposal> {
    env.storage().persistent().get(&DataKey::Proposal(id))
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
}

pub fn approvals(env: &Env, id: u64) -> Vec<Approval> {
    env.storage()
        .persistent()
        .get(&DataKey::Approvals(id))
        .unwrap_or(Vec::new(env))
}

pub fn set_approvals(env: &Env, id: u64, approvals: &Vec<Approval>) {
    env.storage()
        .persistent()
        .set(&DataKey::Approvals(id), approvals);
}
