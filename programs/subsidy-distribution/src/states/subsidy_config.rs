use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::states::SubsidyPool;
use crate::constants::{
    DEFAULT_MAX_SUBSIDIES_PER_LEARNER, DEFAULT_SUBSIDY_CAP_PER_COURSE, DEFAULT_MIN_SUBSIDY_AMOUNT,
    DEFAULT_MAX_SUBSIDY_AMOUNT, DEFAULT_ELIGIBILITY_THRESHOLD, DEFAULT_DISTRIBUTION_FEE,
    DEFAULT_DISTRIBUTION_INTERVAL, MAX_ELIGIBILITY_THRESHOLD,
};

/// Admin identity and tunable subsidy parameters.
///
/// Every setter checks the caller against `admin` before validating its
/// argument, and writes exactly one field on success.
#[account]
#[derive(InitSpace, Debug)]
pub struct SubsidyConfig {
    /// Authority allowed to change configuration and run checkpoints
    pub admin: Pubkey,
    /// Upper bound on subsidies a single learner may receive
    pub max_subsidies_per_learner: u32,
    /// Largest amount granted for any one course
    pub subsidy_cap_per_course: u64,
    /// Smallest deposit accepted and smallest subsidy granted
    pub min_subsidy_amount: u64,
    /// Largest subsidy granted
    pub max_subsidy_amount: u64,
    /// Minimum learner eligibility score, within 1..=100
    pub eligibility_threshold: u8,
    /// Fee charged by the external settlement collaborator per distribution
    pub distribution_fee: u64,
    /// Seconds that must pass between distribution checkpoints
    pub distribution_interval: i64,
    /// Kill-switch for all learner-facing operations
    pub active_status: bool,
    /// Price oracle program
    pub oracle: Option<Pubkey>,
    /// SPL mint the pool is denominated in
    pub token: Option<Pubkey>,
    /// Program owning learner profile and course accounts
    pub registry: Option<Pubkey>,
    /// Accreditation authority
    pub management: Option<Pubkey>,
    /// Bump seed for the PDA
    pub bump: u8,
}

/// Numeric parameters reported in `SubsidyParameterUpdated` events.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubsidyParameter {
    MaxSubsidiesPerLearner,
    SubsidyCapPerCourse,
    MinSubsidyAmount,
    MaxSubsidyAmount,
    EligibilityThreshold,
    DistributionFee,
    DistributionInterval,
}

/// External collaborators the config points at.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalReference {
    Oracle,
    Token,
    Registry,
    Management,
}

impl SubsidyConfig {
    /// Creates a config owned by `admin` with default parameters
    pub fn new(admin: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            max_subsidies_per_learner: DEFAULT_MAX_SUBSIDIES_PER_LEARNER,
            subsidy_cap_per_course: DEFAULT_SUBSIDY_CAP_PER_COURSE,
            min_subsidy_amount: DEFAULT_MIN_SUBSIDY_AMOUNT,
            max_subsidy_amount: DEFAULT_MAX_SUBSIDY_AMOUNT,
            eligibility_threshold: DEFAULT_ELIGIBILITY_THRESHOLD,
            distribution_fee: DEFAULT_DISTRIBUTION_FEE,
            distribution_interval: DEFAULT_DISTRIBUTION_INTERVAL,
            active_status: true,
            oracle: None,
            token: None,
            registry: None,
            management: None,
            bump,
        }
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, ErrorCode::NotAuthorized);
        Ok(())
    }

    pub fn require_active(&self) -> Result<()> {
        require!(self.active_status, ErrorCode::InvalidStatus);
        Ok(())
    }

    pub fn require_token(&self) -> Result<Pubkey> {
        self.token.ok_or_else(|| error!(ErrorCode::TokenNotSet))
    }

    pub fn require_registry(&self) -> Result<Pubkey> {
        self.registry.ok_or_else(|| error!(ErrorCode::RegistryNotSet))
    }

    pub fn require_management(&self) -> Result<Pubkey> {
        self.management.ok_or_else(|| error!(ErrorCode::ManagementNotSet))
    }

    pub fn set_subsidy_cap_per_course(&mut self, caller: &Pubkey, cap: u64) -> Result<u64> {
        self.require_admin(caller)?;
        require!(cap > 0, ErrorCode::InvalidCap);
        self.subsidy_cap_per_course = cap;
        Ok(cap)
    }

    pub fn set_max_subsidies_per_learner(&mut self, caller: &Pubkey, max: u32) -> Result<u32> {
        self.require_admin(caller)?;
        require!(max > 0, ErrorCode::InvalidCap);
        self.max_subsidies_per_learner = max;
        Ok(max)
    }

    pub fn set_min_subsidy_amount(&mut self, caller: &Pubkey, min: u64) -> Result<u64> {
        self.require_admin(caller)?;
        require!(min <= self.max_subsidy_amount, ErrorCode::InvalidMinSubsidy);
        self.min_subsidy_amount = min;
        Ok(min)
    }

    pub fn set_max_subsidy_amount(&mut self, caller: &Pubkey, max: u64) -> Result<u64> {
        self.require_admin(caller)?;
        require!(max >= self.min_subsidy_amount, ErrorCode::InvalidMaxSubsidy);
        self.max_subsidy_amount = max;
        Ok(max)
    }

    pub fn set_eligibility_threshold(&mut self, caller: &Pubkey, threshold: u8) -> Result<u8> {
        self.require_admin(caller)?;
        require!(
            threshold > 0 && threshold <= MAX_ELIGIBILITY_THRESHOLD,
            ErrorCode::InvalidThreshold
        );
        self.eligibility_threshold = threshold;
        Ok(threshold)
    }

    pub fn set_distribution_fee(&mut self, caller: &Pubkey, fee: u64) -> Result<u64> {
        self.require_admin(caller)?;
        self.distribution_fee = fee;
        Ok(fee)
    }

    pub fn set_distribution_interval(&mut self, caller: &Pubkey, interval: i64) -> Result<i64> {
        self.require_admin(caller)?;
        require!(interval > 0, ErrorCode::InvalidDuration);
        self.distribution_interval = interval;
        Ok(interval)
    }

    /// Points the config at an external collaborator. The oracle may not be
    /// the null address. The token goes through `set_token`.
    pub fn set_external_reference(
        &mut self,
        caller: &Pubkey,
        kind: ExternalReference,
        reference: Pubkey,
    ) -> Result<()> {
        self.require_admin(caller)?;
        match kind {
            ExternalReference::Oracle => {
                require!(reference != Pubkey::default(), ErrorCode::InvalidOracle);
                self.oracle = Some(reference);
            }
            // The pool balance is denominated in the token, see `set_token`
            ExternalReference::Token => return err!(ErrorCode::InvalidParam),
            ExternalReference::Registry => self.registry = Some(reference),
            ExternalReference::Management => self.management = Some(reference),
        }
        Ok(())
    }

    /// Sets the mint the pool is denominated in. The mint can only change
    /// while the pool holds no balance; re-setting the current mint is fine.
    pub fn set_token(&mut self, caller: &Pubkey, token: Pubkey, pool: &SubsidyPool) -> Result<()> {
        self.require_admin(caller)?;
        require!(
            pool.balance == 0 || self.token == Some(token),
            ErrorCode::InvalidToken
        );
        self.token = Some(token);
        Ok(())
    }

    /// Flips the kill-switch and returns the new status
    pub fn toggle_active_status(&mut self, caller: &Pubkey) -> Result<bool> {
        self.require_admin(caller)?;
        self.active_status = !self.active_status;
        Ok(self.active_status)
    }

    /// Whether `amount` lies within the configured subsidy bounds
    pub fn within_subsidy_bounds(&self, amount: u64) -> bool {
        amount >= self.min_subsidy_amount && amount <= self.max_subsidy_amount
    }
}
