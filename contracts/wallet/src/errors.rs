use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    EmptySignersList = 3,
    InvalidThreshold = 4,
    ThresholdExceedsSigners = 5,
    DuplicateSigner = 6,
    UnauthorizedProposer = 7,
    UnauthorizedSigner = 8,
    ProposalNotFound = 9,
    ProposalNotPending = 10,
    DuplicateApproval = 11,
    InvalidGovernanceParameters = 12,
    ExecutionFailed = 13,
    ProposalExpired = 14,
    InvalidExpiryTime = 15,
    InvalidPayload = 16,
}
