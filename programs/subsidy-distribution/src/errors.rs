use anchor_lang::prelude::*;

/// Variant order is part of the program ABI: variant n surfaces as custom
/// error 6000 + n. Append new variants at the end.
#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not the subsidy admin")]
    NotAuthorized,
    #[msg("No registry profile exists for this learner")]
    InvalidLearner,
    #[msg("No registry record exists for this course")]
    InvalidCourse,
    #[msg("Subsidy pool balance is too low for this subsidy")]
    InsufficientFunds,
    #[msg("Learner does not meet the eligibility rules")]
    NotEligible,
    #[msg("Subsidy already applied for this learner and course")]
    SubsidyAlreadyApplied,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Oracle cannot be the null address")]
    InvalidOracle,
    #[msg("Oracle contract not set")]
    OracleNotSet,
    #[msg("Distribution interval has not elapsed")]
    InvalidTimestamp,
    #[msg("Distribution failed")]
    DistributionFailed,
    #[msg("Cap must be greater than zero")]
    InvalidCap,
    #[msg("Invalid rate")]
    InvalidRate,
    #[msg("Subsidy program is not active")]
    InvalidStatus,
    #[msg("Learner reached the maximum number of subsidies")]
    MaxSubsidiesExceeded,
    #[msg("Location must be 1 to 100 bytes")]
    InvalidLocation,
    #[msg("Pool vault does not match the configured token")]
    InvalidPool,
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Invalid parameter")]
    InvalidParam,
    #[msg("Already distributed")]
    AlreadyDistributed,
    #[msg("Eligibility threshold must be within 1..=100")]
    InvalidThreshold,
    #[msg("Minimum subsidy cannot exceed the maximum subsidy")]
    InvalidMinSubsidy,
    #[msg("Maximum subsidy cannot be below the minimum subsidy")]
    InvalidMaxSubsidy,
    #[msg("Pool not set")]
    PoolNotSet,
    #[msg("Token contract not set")]
    TokenNotSet,
    #[msg("Registry contract not set")]
    RegistryNotSet,
    #[msg("Management contract not set")]
    ManagementNotSet,
    #[msg("Distribution interval must be greater than zero")]
    InvalidDuration,
    #[msg("Invalid distribution fee")]
    InvalidFee,
    #[msg("Fee transfer failed")]
    FeeTransferFailed,
    #[msg("Recipient cannot be the null address")]
    InvalidRecipient,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
    #[msg("Eligible location list is full")]
    LocationListFull,
    #[msg("Mint does not match the configured token")]
    InvalidToken,
}
