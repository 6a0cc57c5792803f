use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Val, Vec};

use crate::errors::WalletError;
use crate::events::{
    GovernanceApplied, ProposalApproved, ProposalCancelled, ProposalCreated, ProposalExecuted,
    WalletInitialized,
};
use crate::storage;
use crate::types::{
    Approval, GovernanceChange, Proposal, ProposalPayload, ProposalStatus, SignerRegistry,
};

// Expiry window for proposals that carry a deadline (1 hour to 30 days).
const MIN_EXPIRY_SECONDS: u64 = 3600;
const MAX_EXPIRY_SECONDS: u64 = 2_592_000;

#[contract]
pub struct WalletContract;

#[contractimpl]
impl WalletContract {
    pub fn initialize(env: Env, signers: Vec<Address>, threshold: u32) {
        if storage::is_initialized(&env) {
            panic_with_error!(&env, WalletError::AlreadyInitialized);
        }

        Self::validate_committee(&env, &signers, threshold);

        storage::set_initialized(&env);
        storage::set_registry(
            &env,
            &SignerRegistry {
                signers: signers.clone(),
                threshold,
                version: 0,
            },
        );

        WalletInitialized {
            signer_count: signers.len(),
            threshold,
        }
        .publish(&env);
    }

    /// Records a new proposal and the proposer's own approval. With a
    /// threshold of one the proposal executes within this same call.
    pub fn create_proposal(
        env: Env,
        proposer: Address,
        payload: ProposalPayload,
        expires_in_seconds: Option<u64>,
    ) -> u64 {
        Self::require_initialized(&env);
        proposer.require_auth();

        if !storage::is_signer(&env, &proposer) {
            panic_with_error!(&env, WalletError::UnauthorizedProposer);
        }

        // Payloads that can never execute are rejected here rather than
        // stranding a quorate proposal later.
        Self::validate_payload(&env, &payload);

        let now = env.ledger().timestamp();
        let expires_at = expires_in_seconds.map(|seconds| {
            if seconds < MIN_EXPIRY_SECONDS || seconds > MAX_EXPIRY_SECONDS {
                panic_with_error!(&env, WalletError::InvalidExpiryTime);
            }
            now + seconds
        });

        let proposal_id = storage::next_proposal_id(&env);
        let mut proposal = Proposal {
            id: proposal_id,
            proposer: proposer.clone(),
            payload,
            status: ProposalStatus::Pending,
            created_at: now,
            expires_at,
            executed_at: None,
            executed_by: None,
        };
        storage::set_proposal(&env, &proposal);

        ProposalCreated {
            proposal_id,
            proposer: proposer.clone(),
            expires_at,
        }
        .publish(&env);

        Self::record_approval(&env, &mut proposal, proposer);

        proposal_id
    }

    pub fn approve(env: Env, proposal_id: u64, signer: Address) {
        Self::require_initialized(&env);
        signer.require_auth();

        let mut proposal = Self::proposal_or_panic(&env, proposal_id);

        if Self::is_expired(&env, &proposal) {
            panic_with_error!(&env, WalletError::ProposalExpired);
        }

        // Membership is evaluated against the registry as of this call, so a
        // signer removed by an earlier governance execution can no longer
        // approve, whatever the proposal's age.
        if !storage::is_signer(&env, &signer) {
            panic_with_error!(&env, WalletError::UnauthorizedSigner);
        }

        if proposal.status != ProposalStatus::Pending {
            panic_with_error!(&env, WalletError::ProposalNotPending);
        }

        let approvals = storage::approvals(&env, proposal_id);
        for approval in approvals.iter() {
            if approval.signer == signer {
                panic_with_error!(&env, WalletError::DuplicateApproval);
            }
        }

        Self::record_approval(&env, &mut proposal, signer);
    }

    /// Any current signer may withdraw a pending proposal.
    pub fn cancel(env: Env, proposal_id: u64, caller: Address) {
        Self::require_initialized(&env);
        caller.require_auth();

        let mut proposal = Self::proposal_or_panic(&env, proposal_id);

        if Self::is_expired(&env, &proposal) {
            panic_with_error!(&env, WalletError::ProposalExpired);
        }

        if !storage::is_signer(&env, &caller) {
            panic_with_error!(&env, WalletError::UnauthorizedSigner);
        }

        if proposal.status != ProposalStatus::Pending {
            panic_with_error!(&env, WalletError::ProposalNotPending);
        }

        proposal.status = ProposalStatus::Cancelled;
        storage::set_proposal(&env, &proposal);

        ProposalCancelled {
            proposal_id,
            cancelled_by: caller,
        }
        .publish(&env);
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Proposal {
        Self::require_initialized(&env);
        let mut proposal = Self::proposal_or_panic(&env, proposal_id);

        // Expiry is lazy: reads report a deadline that has passed as Expired
        // without requiring a storage write.
        if Self::is_expired(&env, &proposal) {
            proposal.status = ProposalStatus::Expired;
        }

        proposal
    }

    pub fn get_approvals(env: Env, proposal_id: u64) -> Vec<Approval> {
        Self::require_initialized(&env);
        Self::proposal_or_panic(&env, proposal_id);
        storage::approvals(&env, proposal_id)
    }

    pub fn has_approved(env: Env, proposal_id: u64, signer: Address) -> bool {
        Self::require_initialized(&env);
        Self::proposal_or_panic(&env, proposal_id);
        let approvals = storage::approvals(&env, proposal_id);
        for approval in approvals.iter() {
            if approval.signer == signer {
                return true;
            }
        }
        false
    }

    pub fn get_registry(env: Env) -> SignerRegistry {
        Self::require_initialized(&env);
        storage::registry(&env)
    }

    pub fn is_signer(env: Env, address: Address) -> bool {
        Self::require_initialized(&env);
        storage::is_signer(&env, &address)
    }

    pub fn get_proposal_count(env: Env) -> u64 {
        Self::require_initialized(&env);
        storage::proposal_count(&env)
    }

    fn require_initialized(env: &Env) {
        if !storage::is_initialized(env) {
            panic_with_error!(env, WalletError::NotInitialized);
        }
    }

    fn proposal_or_panic(env: &Env, proposal_id: u64) -> Proposal {
        match storage::proposal(env, proposal_id) {
            Some(proposal) => proposal,
            None => panic_with_error!(env, WalletError::ProposalNotFound),
        }
    }

    fn is_expired(env: &Env, proposal: &Proposal) -> bool {
        match proposal.expires_at {
            Some(expires_at) => {
                proposal.status == ProposalStatus::Pending
                    && env.ledger().timestamp() > expires_at
            }
            None => false,
        }
    }

    /// Appends one approval and runs the quorum check. Execution happens
    /// inside the call that records the tipping approval; there is no
    /// separate execute entry point that could be front-run.
    fn record_approval(env: &Env, proposal: &mut Proposal, signer: Address) {
        let mut approvals = storage::approvals(env, proposal.id);
        approvals.push_back(Approval {
            signer: signer.clone(),
            approved_at: env.ledger().timestamp(),
        });
        storage::set_approvals(env, proposal.id, &approvals);

        let registry = storage::registry(env);

        ProposalApproved {
            proposal_id: proposal.id,
            signer: signer.clone(),
            approval_count: approvals.len(),
            threshold: registry.threshold,
        }
        .publish(env);

        if approvals.len() >= registry.threshold {
            Self::execute(env, proposal, &registry, signer);
        }
    }

    fn execute(env: &Env, proposal: &mut Proposal, registry: &SignerRegistry, tipped_by: Address) {
        if proposal.status != ProposalStatus::Pending {
            panic_with_error!(env, WalletError::ProposalNotPending);
        }
        if Self::is_expired(env, proposal) {
            panic_with_error!(env, WalletError::ProposalExpired);
        }

        match proposal.payload.clone() {
            ProposalPayload::UpdateGovernance(change) => {
                // The registry change and the terminal transition commit in
                // the same invocation. A validation failure aborts the whole
                // call, tipping approval included, and leaves the proposal
                // pending so the committee can cancel or recreate it.
                let applied = Self::apply_governance_change(env, registry, &change);
                Self::mark_executed(env, proposal, &tipped_by);

                GovernanceApplied {
                    proposal_id: proposal.id,
                    signer_count: applied.signers.len(),
                    threshold: applied.threshold,
                    version: applied.version,
                }
                .publish(env);

                ProposalExecuted {
                    proposal_id: proposal.id,
                    executed_by: tipped_by,
                    call_ok: true,
                }
                .publish(env);
            }
            ProposalPayload::CallContract(call) => {
                // Authorization is consumed before the outbound dispatch; a
                // failing target cannot re-open the proposal.
                Self::mark_executed(env, proposal, &tipped_by);

                let call_ok = env
                    .try_invoke_contract::<Val, soroban_sdk::Error>(
                        &call.target,
                        &call.func,
                        call.args.clone(),
                    )
                    .is_ok();

                ProposalExecuted {
                    proposal_id: proposal.id,
                    executed_by: tipped_by,
                    call_ok,
                }
                .publish(env);
            }
        }
    }

    fn mark_executed(env: &Env, proposal: &mut Proposal, executed_by: &Address) {
        proposal.status = ProposalStatus::Executed;
        proposal.executed_at = Some(env.ledger().timestamp());
        proposal.executed_by = Some(executed_by.clone());
        storage::set_proposal(env, proposal);
    }

    fn apply_governance_change(
        env: &Env,
        current: &SignerRegistry,
        change: &GovernanceChange,
    ) -> SignerRegistry {
        let signers = match &change.signers {
            Some(signers) => signers.clone(),
            None => current.signers.clone(),
        };
        let threshold = change.threshold.unwrap_or(current.threshold);

        // Create-time checks cannot cover the resolved combination: the
        // registry may have changed between creation and quorum.
        if signers.is_empty()
            || Self::has_duplicates(&signers)
            || threshold == 0
            || threshold > signers.len()
        {
            panic_with_error!(env, WalletError::InvalidGovernanceParameters);
        }

        let updated = SignerRegistry {
            signers,
            threshold,
            version: current.version + 1,
        };
        storage::set_registry(env, &updated);
        updated
    }

    fn validate_committee(env: &Env, signers: &Vec<Address>, threshold: u32) {
        if signers.is_empty() {
            panic_with_error!(env, WalletError::EmptySignersList);
        }
        if threshold == 0 {
            panic_with_error!(env, WalletError::InvalidThreshold);
        }
        if threshold > signers.len() {
            panic_with_error!(env, WalletError::ThresholdExceedsSigners);
        }
        if Self::has_duplicates(signers) {
            panic_with_error!(env, WalletError::DuplicateSigner);
        }
    }

    fn validate_payload(env: &Env, payload: &ProposalPayload) {
        match payload {
            ProposalPayload::CallContract(call) => {
                if call.target == env.current_contract_address() {
                    panic_with_error!(env, WalletError::InvalidPayload);
                }
            }
            ProposalPayload::UpdateGovernance(change) => {
                if change.signers.is_none() && change.threshold.is_none() {
                    panic_with_error!(env, WalletError::InvalidPayload);
                }
                if let Some(signers) = &change.signers {
                    if signers.is_empty() {
                        panic_with_error!(env, WalletError::EmptySignersList);
                    }
                    if Self::has_duplicates(signers) {
                        panic_with_error!(env, WalletError::DuplicateSigner);
                    }
                }
                if let Some(threshold) = change.threshold {
                    if threshold == 0 {
                        panic_with_error!(env, WalletError::InvalidThreshold);
                    }
                    if let Some(signers) = &change.signers {
                        if threshold > signers.len() {
                            panic_with_error!(env, WalletError::ThresholdExceedsSigners);
                        }
                    }
                }
            }
        }
    }

    fn has_duplicates(signers: &Vec<Address>) -> bool {
        for i in 0..signers.len() {
            for j in (i + 1)..signers.len() {
                if signers.get_unchecked(i) == signers.get_unchecked(j) {
                    return true;
                }
            }
        }
        false
    }
}
