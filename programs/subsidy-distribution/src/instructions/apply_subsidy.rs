use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::errors::ErrorCode;
use crate::constants::{
    SUBSIDY_CONFIG_SEED, LOCATION_ALLOW_LIST_SEED, SUBSIDY_POOL_SEED, POOL_AUTHORITY_SEED,
    POOL_VAULT_SEED, APPLIED_SUBSIDY_SEED, LEARNER_SUBSIDY_COUNT_SEED,
};
use crate::eligibility::check_eligibility;
use crate::registry::{RegistryAccounts, SubsidyRegistry};
use crate::states::{
    SubsidyConfig, LocationAllowList, SubsidyPool, AppliedSubsidy, LearnerSubsidyCount,
};

/// Learner draws a subsidy for one course from the pool
#[derive(Accounts)]
#[instruction(course_id: u64)]
pub struct ApplySubsidy<'info> {
    /// The learner applying, pays for its own records
    #[account(mut)]
    pub learner: Signer<'info>,

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

    #[account(
        mut,
        seeds = [SUBSIDY_POOL_SEED],
        bump = subsidy_pool.bump
    )]
    pub subsidy_pool: Account<'info, SubsidyPool>,

    /// Record for this (learner, course) pair, empty until the first application
    #[account(
        init_if_needed,
        payer = learner,
        space = AppliedSubsidy::DISCRIMINATOR.len() + AppliedSubsidy::INIT_SPACE,
        seeds = [APPLIED_SUBSIDY_SEED, learner.key().as_ref(), &course_id.to_le_bytes()],
        bump
    )]
    pub applied_subsidy: Account<'info, AppliedSubsidy>,

    #[account(
        init_if_needed,
        payer = learner,
        space = LearnerSubsidyCount::DISCRIMINATOR.len() + LearnerSubsidyCount::INIT_SPACE,
        seeds = [LEARNER_SUBSIDY_COUNT_SEED, learner.key().as_ref()],
        bump
    )]
    pub learner_subsidy_count: Account<'info, LearnerSubsidyCount>,

    /// CHECK: Registry-owned profile, decoded and owner-checked against the configured registry
    pub learner_profile: UncheckedAccount<'info>,

    /// CHECK: Registry-owned course, decoded and owner-checked against the configured registry
    pub course_record: UncheckedAccount<'info>,

    /// CHECK: This is a PDA derived from the program ID and "pool_authority" seed
    #[account(
        seeds = [POOL_AUTHORITY_SEED],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// CHECK: Must be the pool vault of the configured token, verified before any write
    #[account(mut)]
    pub pool_vault: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = learner_token_account.owner == learner.key() @ ErrorCode::InvalidRecipient
    )]
    pub learner_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Per-call inputs to a subsidy application
#[derive(Clone, Copy, Debug)]
pub struct SubsidyApplication {
    pub learner: Pubkey,
    pub course_id: u64,
    /// Vault the payout will be drawn from
    pub pool_vault: Pubkey,
    pub now: i64,
    pub record_bump: u8,
    pub count_bump: u8,
}

impl<'info> ApplySubsidy<'info> {
    pub fn handle(ctx: Context<ApplySubsidy>, course_id: u64) -> Result<u64> {
        let learner = ctx.accounts.learner.key();
        msg!("Applying subsidy for learner {} course {}", learner, course_id);

        let application = SubsidyApplication {
            learner,
            course_id,
            pool_vault: ctx.accounts.pool_vault.key(),
            now: Clock::get()?.unix_timestamp,
            record_bump: ctx.bumps.applied_subsidy,
            count_bump: ctx.bumps.learner_subsidy_count,
        };

        let learner_profile = ctx.accounts.learner_profile.to_account_info();
        let course_record = ctx.accounts.course_record.to_account_info();
        let registry = RegistryAccounts {
            registry: ctx.accounts.subsidy_config.registry,
            learner_profile: &learner_profile,
            course_record: &course_record,
        };

        let amount = apply_subsidy_to_ledger(
            &ctx.accounts.subsidy_config,
            &ctx.accounts.location_allow_list,
            &registry,
            &mut ctx.accounts.subsidy_pool,
            &mut ctx.accounts.learner_subsidy_count,
            &mut ctx.accounts.applied_subsidy,
            &application,
        )?;

        anchor_spl::token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: ctx.accounts.pool_vault.to_account_info(),
                    to: ctx.accounts.learner_token_account.to_account_info(),
                    authority: ctx.accounts.pool_authority.to_account_info(),
                },
                &[&[
                    POOL_AUTHORITY_SEED,
                    &[ctx.bumps.pool_authority]
                ]]
            ),
            amount,
        )
        .map_err(super::transfer_failed)?;

        let pool = &ctx.accounts.subsidy_pool;
        msg!("Paid {} units to learner {}", amount, learner);
        msg!("Pool balance: {} units", pool.balance);

        emit!(crate::events::SubsidyApplied {
            learner,
            course_id,
            amount,
            learner_subsidy_count: ctx.accounts.learner_subsidy_count.count,
            pool_balance: pool.balance,
            total_distributed: pool.total_distributed,
            learner_token_account: ctx.accounts.learner_token_account.key(),
            timestamp: application.now,
        });

        Ok(amount)
    }
}

/// Address of the pool vault holding `token_mint`
pub fn pool_vault_address(token_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[POOL_VAULT_SEED, token_mint.as_ref()], &crate::ID).0
}

/// Validates and records a subsidy application, returning the amount to pay.
///
/// Checks run in order: active status, eligibility, subsidy bounds, learner
/// count, duplicate record, pool balance, token and vault. Every check and
/// every checked sum happens before the first write, so an error leaves all
/// three accounts untouched.
pub fn apply_subsidy_to_ledger<R: SubsidyRegistry>(
    config: &SubsidyConfig,
    allow_list: &LocationAllowList,
    registry: &R,
    pool: &mut SubsidyPool,
    learner_count: &mut LearnerSubsidyCount,
    applied: &mut AppliedSubsidy,
    application: &SubsidyApplication,
) -> Result<u64> {
    config.require_active()?;

    let verdict = check_eligibility(
        config,
        allow_list,
        registry,
        &application.learner,
        application.course_id,
    )?;
    let amount = verdict.subsidy_amount;
    require!(
        amount > 0 && config.within_subsidy_bounds(amount),
        ErrorCode::InvalidAmount
    );

    learner_count.ensure_below(config.max_subsidies_per_learner)?;
    applied.ensure_not_recorded()?;
    pool.ensure_covers(amount)?;

    let token = config.require_token()?;
    require_keys_eq!(
        application.pool_vault,
        pool_vault_address(&token),
        ErrorCode::InvalidPool
    );

    let next_count = learner_count.next_count()?;
    let debit = pool.preview_debit(amount)?;

    applied.record(
        application.learner,
        application.course_id,
        amount,
        application.now,
        application.record_bump,
    )?;
    learner_count.learner = application.learner;
    learner_count.count = next_count;
    learner_count.bump = application.count_bump;
    pool.commit_debit(debit, application.now);

    Ok(amount)
}
