#![no_std]

//! A multisig custody wallet: a committee of signers collectively authorizes
//! outgoing contract calls and changes to the committee itself by collecting a
//! quorum of approvals per proposal. A proposal executes at most once, inside
//! the same invocation that records its tipping approval.

mod errors;
mod events;
mod storage;
mod types;
mod wallet;


pub use crate::errors::WalletError;
pub use crate::types::{
    Approval, CallContractPayload, GovernanceChange, Proposal, ProposalPayload, ProposalStatus,
    SignerRegistry,
};
pub use crate::wallet::{WalletContract, WalletContractClient};
