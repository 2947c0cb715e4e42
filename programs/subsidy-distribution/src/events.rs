use anchor_lang::prelude::*;
use crate::states::{ExternalReference, SubsidyParameter};

/// Event emitted when the subsidy program is initialized
#[event]
pub struct SubsidyConfigInitialized {
    /// Subsidy config PDA
    pub config: Pubkey,
    /// Admin authority
    pub admin: Pubkey,
    /// Subsidy pool PDA
    pub pool: Pubkey,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted when a numeric config parameter changes
#[event]
pub struct SubsidyParameterUpdated {
    pub admin: Pubkey,
    pub parameter: SubsidyParameter,
    pub value: u64,
    pub timestamp: i64,
}

/// Event emitted when an external collaborator reference changes
#[event]
pub struct ExternalReferenceUpdated {
    pub admin: Pubkey,
    pub kind: ExternalReference,
    pub reference: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct EligibleLocationAdded {
    pub location: String,
    /// false when the location was already listed
    pub inserted: bool,
    pub timestamp: i64,
}

#[event]
pub struct EligibleLocationRemoved {
    pub location: String,
    /// false when the location was not listed
    pub removed: bool,
    pub timestamp: i64,
}

/// Event emitted when tokens are deposited into the pool
#[event]
pub struct PoolDeposited {
    /// Depositor's wallet address
    pub depositor: Pubkey,
    /// Amount deposited
    pub amount: u64,
    /// Pool balance after the deposit
    pub pool_balance: u64,
    /// Lifetime deposits into the pool
    pub total_deposited: u64,
    /// Timestamp of deposit
    pub timestamp: i64,
}

/// Event emitted when a learner draws a subsidy
#[event]
pub struct SubsidyApplied {
    /// Learner's wallet address
    pub learner: Pubkey,
    /// Registry course id
    pub course_id: u64,
    /// Amount paid to the learner
    pub amount: u64,
    /// Learner's subsidy count after this application
    pub learner_subsidy_count: u32,
    /// Pool balance after the payout
    pub pool_balance: u64,
    /// Lifetime subsidies paid from the pool
    pub total_distributed: u64,
    /// Learner's token account that received the payout
    pub learner_token_account: Pubkey,
    /// Timestamp of application
    pub timestamp: i64,
}

/// Event emitted when the distribution checkpoint advances
#[event]
pub struct DistributionCheckpointAdvanced {
    pub last_distribution_time: i64,
    pub distribution_count: u32,
    pub batch_size: u32,
    pub distribution_fee: u64,
}

#[event]
pub struct ActiveStatusToggled {
    pub admin: Pubkey,
    pub active_status: bool,
    pub timestamp: i64,
}

/// Event emitted when a subsidy is queued for batch payout
#[event]
pub struct PendingDistributionQueued {
    pub id: u64,
    pub learner: Pubkey,
    pub course_id: u64,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when a queued payout is settled and its record closed
#[event]
pub struct PendingDistributionSettled {
    pub id: u64,
    pub learner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
