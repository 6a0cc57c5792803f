use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Registry,
    ProposalCount,
    Proposal(u64),
    Approvals(u64),
}

/// The committee record: who may propose and approve, and how many distinct
/// approvals a proposal needs. Replaced as a whole by an executed governance
/// proposal; `version` increments on every replacement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRegistry {
    pub signers: Vec<Address>,
    pub threshold: u32,
    pub version: u64,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Executed,
    Expired,
    Cancelled,
}

/// An outgoing contract call. The wallet does not interpret `func` or `args`;
/// they are handed verbatim to the host dispatch once quorum is reached.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallContractPayload {
    pub target: Address,
    pub func: Symbol,
    pub args: Vec<Val>,
}

/// A change to the signer registry. `None` keeps the current value, so a
/// threshold can be changed without restating the signer set and vice versa.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceChange {
    pub signers: Option<Vec<Address>>,
    pub threshold: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalPayload {
    CallContract(CallContractPayload),
    UpdateGovernance(GovernanceChange),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub payload: ProposalPayload,
    pub status: ProposalStatus,
    pub created_at: u64,
    pub expires_at: Option<u64>,
    // Audit trail: the approval that tipped the proposal into execution.
    pub executed_at: Option<u64>,
    pub executed_by: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approval {
    pub signer: Address,
    pub approved_at: u64,
}
