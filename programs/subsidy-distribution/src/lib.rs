use anchor_lang::prelude::*;

declare_id!("5kdVNzkuMVDWZMktvHeFXNeT6AmGPFVbvsZ3vvEPRbwR");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod registry;
pub mod eligibility;


pub use instructions::*;
pub use events::*;
pub use eligibility::EligibilityVerdict;
pub use states::ExternalReference;

#[program]
pub mod subsidy_distribution {
    use super::*;

    pub fn initialize_subsidy_config(ctx: Context<InitializeSubsidyConfig>) -> Result<()> {
        InitializeSubsidyConfig::handle(ctx)
    }

    pub fn set_oracle_contract(ctx: Context<UpdateSubsidyConfig>, oracle: Pubkey) -> Result<bool> {
        UpdateSubsidyConfig::set_external_reference(ctx, ExternalReference::Oracle, oracle)
    }

    pub fn set_token_contract(ctx: Context<SetTokenContract>, token: Pubkey) -> Result<bool> {
        SetTokenContract::handle(ctx, token)
    }

    pub fn set_registry_contract(ctx: Context<UpdateSubsidyConfig>, registry: Pubkey) -> Result<bool> {
        UpdateSubsidyConfig::set_external_reference(ctx, ExternalReference::Registry, registry)
    }

    pub fn set_management_contract(ctx: Context<UpdateSubsidyConfig>, management: Pubkey) -> Result<bool> {
        UpdateSubsidyConfig::set_external_reference(ctx, ExternalReference::Management, management)
    }

    pub fn set_subsidy_cap_per_course(ctx: Context<UpdateSubsidyConfig>, cap: u64) -> Result<u64> {
        UpdateSubsidyConfig::set_subsidy_cap_per_course(ctx, cap)
    }

    pub fn set_max_subsidies_per_learner(ctx: Context<UpdateSubsidyConfig>, max: u32) -> Result<u32> {
        UpdateSubsidyConfig::set_max_subsidies_per_learner(ctx, max)
    }

    pub fn set_min_subsidy_amount(ctx: Context<UpdateSubsidyConfig>, min: u64) -> Result<u64> {
        UpdateSubsidyConfig::set_min_subsidy_amount(ctx, min)
    }

    pub fn set_max_subsidy_amount(ctx: Context<UpdateSubsidyConfig>, max: u64) -> Result<u64> {
        UpdateSubsidyConfig::set_max_subsidy_amount(ctx, max)
    }

    pub fn set_eligibility_threshold(ctx: Context<UpdateSubsidyConfig>, threshold: u8) -> Result<u8> {
        UpdateSubsidyConfig::set_eligibility_threshold(ctx, threshold)
    }

    pub fn set_distribution_fee(ctx: Context<UpdateSubsidyConfig>, fee: u64) -> Result<u64> {
        UpdateSubsidyConfig::set_distribution_fee(ctx, fee)
    }

    pub fn set_distribution_interval(ctx: Context<UpdateSubsidyConfig>, interval: i64) -> Result<i64> {
        UpdateSubsidyConfig::set_distribution_interval(ctx, interval)
    }

    pub fn toggle_active_status(ctx: Context<UpdateSubsidyConfig>) -> Result<bool> {
        UpdateSubsidyConfig::toggle_active_status(ctx)
    }

    pub fn add_eligible_location(ctx: Context<ManageEligibleLocation>, location: String) -> Result<bool> {
        ManageEligibleLocation::add(ctx, location)
    }

    pub fn remove_eligible_location(ctx: Context<ManageEligibleLocation>, location: String) -> Result<bool> {
        ManageEligibleLocation::remove(ctx, location)
    }

    pub fn deposit_to_pool(ctx: Context<DepositToPool>, amount: u64) -> Result<bool> {
        DepositToPool::handle(ctx, amount)
    }

    pub fn check_eligibility(
        ctx: Context<CheckEligibility>,
        learner: Pubkey,
        course_id: u64,
    ) -> Result<EligibilityVerdict> {
        CheckEligibility::handle(ctx, learner, course_id)
    }

    pub fn apply_subsidy(ctx: Context<ApplySubsidy>, course_id: u64) -> Result<u64> {
        ApplySubsidy::handle(ctx, course_id)
    }

    pub fn distribute_funds(ctx: Context<DistributeFunds>, batch_size: u32) -> Result<bool> {
        DistributeFunds::handle(ctx, batch_size)
    }

    pub fn queue_pending_distribution(
        ctx: Context<QueuePendingDistribution>,
        id: u64,
        params: QueuePendingDistributionParams,
    ) -> Result<()> {
        QueuePendingDistribution::handle(ctx, id, params)
    }

    pub fn settle_pending_distribution(ctx: Context<SettlePendingDistribution>, id: u64) -> Result<()> {
        SettlePendingDistribution::handle(ctx, id)
    }

    pub fn get_pool_balance(ctx: Context<QueryPool>) -> Result<u64> {
        QueryPool::pool_balance(ctx)
    }

    pub fn get_total_subsidies_distributed(ctx: Context<QueryPool>) -> Result<u64> {
        QueryPool::total_subsidies_distributed(ctx)
    }

    pub fn get_applied_subsidy(
        ctx: Context<QueryAppliedSubsidy>,
        learner: Pubkey,
        course_id: u64,
    ) -> Result<Option<AppliedSubsidyInfo>> {
        QueryAppliedSubsidy::handle(ctx, learner, course_id)
    }

    pub fn get_learner_subsidy_count(ctx: Context<QueryLearnerSubsidyCount>, learner: Pubkey) -> Result<u32> {
        QueryLearnerSubsidyCount::handle(ctx, learner)
    }

    pub fn get_pending_distribution(
        ctx: Context<QueryPendingDistribution>,
        id: u64,
    ) -> Result<Option<PendingDistributionInfo>> {
        QueryPendingDistribution::handle(ctx, id)
    }
}
