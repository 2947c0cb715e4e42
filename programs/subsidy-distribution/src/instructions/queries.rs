use anchor_lang::prelude::*;
use crate::constants::{
    SUBSIDY_CONFIG_SEED, LOCATION_ALLOW_LIST_SEED, SUBSIDY_POOL_SEED, APPLIED_SUBSIDY_SEED,
    LEARNER_SUBSIDY_COUNT_SEED, PENDING_DISTRIBUTION_SEED,
};
use crate::eligibility::{check_eligibility, EligibilityVerdict};
use crate::registry::RegistryAccounts;
use crate::states::{
    SubsidyConfig, LocationAllowList, SubsidyPool, AppliedSubsidy, LearnerSubsidyCount,
    PendingDistribution,
};

/// Response structure for applied subsidy query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AppliedSubsidyInfo {
    /// The learner's public key
    pub learner: Pubkey,
    /// Registry course id
    pub course_id: u64,
    /// Amount paid out (in smallest unit)
    pub amount: u64,
    /// Timestamp the subsidy was applied
    pub timestamp: i64,
    /// true while active
    pub status: bool,
}

/// Response structure for pending distribution query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PendingDistributionInfo {
    pub id: u64,
    pub learner: Pubkey,
    pub course_id: u64,
    pub amount: u64,
    pub created_at: i64,
}

/// Query instruction to read pool totals
#[derive(Accounts)]
pub struct QueryPool<'info> {
    #[account(
        seeds = [SUBSIDY_POOL_SEED],
        bump = subsidy_pool.bump
    )]
    pub subsidy_pool: Account<'info, SubsidyPool>,
}

impl<'info> QueryPool<'info> {
    pub fn pool_balance(ctx: Context<QueryPool>) -> Result<u64> {
        let balance = ctx.accounts.subsidy_pool.balance;
        msg!("Pool balance: {} units", balance);
        Ok(balance)
    }

    pub fn total_subsidies_distributed(ctx: Context<QueryPool>) -> Result<u64> {
        let total = ctx.accounts.subsidy_pool.total_distributed;
        msg!("Total subsidies distributed: {} units", total);
        Ok(total)
    }
}

/// Query instruction to read one (learner, course) record. The record is
/// optional; pass the program id in its place when it was never created.
#[derive(Accounts)]
#[instruction(learner: Pubkey, course_id: u64)]
pub struct QueryAppliedSubsidy<'info> {
    #[account(
        seeds = [APPLIED_SUBSIDY_SEED, learner.as_ref(), &course_id.to_le_bytes()],
        bump
    )]
    pub applied_subsidy: Option<Account<'info, AppliedSubsidy>>,
}

impl<'info> QueryAppliedSubsidy<'info> {
    pub fn handle(
        ctx: Context<QueryAppliedSubsidy>,
        learner: Pubkey,
        course_id: u64,
    ) -> Result<Option<AppliedSubsidyInfo>> {
        let info = applied_subsidy_info(ctx.accounts.applied_subsidy.as_deref());
        msg!("Applied subsidy for {} course {}: {:?}", learner, course_id, info);
        Ok(info)
    }
}

#[derive(Accounts)]
#[instruction(learner: Pubkey)]
pub struct QueryLearnerSubsidyCount<'info> {
    #[account(
        seeds = [LEARNER_SUBSIDY_COUNT_SEED, learner.as_ref()],
        bump
    )]
    pub learner_subsidy_count: Option<Account<'info, LearnerSubsidyCount>>,
}

impl<'info> QueryLearnerSubsidyCount<'info> {
    pub fn handle(ctx: Context<QueryLearnerSubsidyCount>, learner: Pubkey) -> Result<u32> {
        let count = learner_subsidy_count(ctx.accounts.learner_subsidy_count.as_deref());
        msg!("Learner {} subsidy count: {}", learner, count);
        Ok(count)
    }
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct QueryPendingDistribution<'info> {
    #[account(
        seeds = [PENDING_DISTRIBUTION_SEED, &id.to_le_bytes()],
        bump
    )]
    pub pending_distribution: Option<Account<'info, PendingDistribution>>,
}

impl<'info> QueryPendingDistribution<'info> {
    pub fn handle(
        ctx: Context<QueryPendingDistribution>,
        id: u64,
    ) -> Result<Option<PendingDistributionInfo>> {
        let info = ctx
            .accounts
            .pending_distribution
            .as_deref()
            .map(pending_distribution_info);
        msg!("Pending distribution {}: {:?}", id, info);
        Ok(info)
    }
}

/// Read-only eligibility check for a learner and course
#[derive(Accounts)]
pub struct CheckEligibility<'info> {
    #[account(
        seeds = [SUBSIDY_CONFIG_SEED],
        bump = subsidy_config.bump
    )]
    pub subsidy_config: Account<'info, SubsidyConfig>,

    #[account(
        seeds = [LOCATION_ALLOW_LIST_SEED],
        bump = location_allow_list.bump
    )]
    pub location_allow_list: Account<'info, LocationAllowList>,

    /// CHECK: Registry-owned profile, decoded and owner-checked against the configured registry
    pub learner_profile: UncheckedAccount<'info>,

    /// CHECK: Registry-owned course, decoded and owner-checked against the configured registry
    pub course_record: UncheckedAccount<'info>,
}

impl<'info> CheckEligibility<'info> {
    pub fn handle(
        ctx: Context<CheckEligibility>,
        learner: Pubkey,
        course_id: u64,
    ) -> Result<EligibilityVerdict> {
        let learner_profile = ctx.accounts.learner_profile.to_account_info();
        let course_record = ctx.accounts.course_record.to_account_info();
        let registry = RegistryAccounts {
            registry: ctx.accounts.subsidy_config.registry,
            learner_profile: &learner_profile,
            course_record: &course_record,
        };

        let verdict = check_eligibility(
            &ctx.accounts.subsidy_config,
            &ctx.accounts.location_allow_list,
            &registry,
            &learner,
            course_id,
        )?;

        msg!("Learner {} eligible for course {}: {} units", learner, course_id, verdict.subsidy_amount);
        Ok(verdict)
    }
}

/// Snapshot of a record, None when nothing was applied
pub fn applied_subsidy_info(applied: Option<&AppliedSubsidy>) -> Option<AppliedSubsidyInfo> {
    applied
        .filter(|record| record.is_recorded())
        .map(|record| AppliedSubsidyInfo {
            learner: record.learner,
            course_id: record.course_id,
            amount: record.amount,
            timestamp: record.timestamp,
            status: record.status,
        })
}

/// A learner without a counter has received nothing
pub fn learner_subsidy_count(counter: Option<&LearnerSubsidyCount>) -> u32 {
    counter.map_or(0, |counter| counter.count)
}

pub fn pending_distribution_info(pending: &PendingDistribution) -> PendingDistributionInfo {
    PendingDistributionInfo {
        id: pending.id,
        learner: pending.learner,
        course_id: pending.course_id,
        amount: pending.amount,
        created_at: pending.created_at,
    }
}
