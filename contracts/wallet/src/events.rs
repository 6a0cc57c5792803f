use soroban_sdk::{contractevent, Address};

#[contractevent(topics = ["wallet", "init"])]
pub struct WalletInitialized {
    pub signer_count: u32,
    pub threshold: u32,
}

#[contractevent(topics = ["wallet", "proposed"])]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub proposer: Address,
    pub expires_at: Option<u64>,
}

#[contractevent(topics = ["wallet", "approved"])]
pub struct ProposalApproved {
    pub proposal_id: u64,
    pub signer: Address,
    pub approval_count: u32,
    pub threshold: u32,
}

/// Published once per executed proposal. `call_ok` is false when an outgoing
/// contract call failed downstream; the proposal is executed either way.
#[contractevent(topics = ["wallet", "executed"])]
pub struct ProposalExecuted {
    pub proposal_id: u64,
    pub executed_by: Address,
    pub call_ok: bool,
}

#[contractevent(topics = ["wallet", "cancelled"])]
pub struct ProposalCancelled {
    pub proposal_id: u64,
    pub cancelled_by: Address,
}

#[contractevent(topics = ["wallet", "governance"])]
pub struct GovernanceApplied {
    pub proposal_id: u64,
    pub signer_count: u32,
    pub threshold: u32,
    pub version: u64,
}
