use anchor_lang::prelude::*;
use crate::constants::{
    SUBSIDY_CONFIG_SEED, LOCATION_ALLOW_LIST_SEED, SUBSIDY_POOL_SEED, DISTRIBUTION_CHECKPOINT_SEED,
};
use crate::states::{SubsidyConfig, LocationAllowList, SubsidyPool, DistributionCheckpoint};

#[derive(Accounts)]
pub struct InitializeSubsidyConfig<'info> {
    /// Admin who initializes and will own the config
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Subsidy configuration PDA
    #[account(
        init,
        payer = admin,
        space = SubsidyConfig::DISCRIMINATOR.len() + SubsidyConfig::INIT_SPACE,
        seeds = [SUBSIDY_CONFIG_SEED],
        bump
    )]
    pub subsidy_config: Account<'info, SubsidyConfig>,

    /// Approved locations PDA
    #[account(
        init,
        payer = admin,
        space = LocationAllowList::DISCRIMINATOR.len() + LocationAllowList::INIT_SPACE,
        seeds = [LOCATION_ALLOW_LIST_SEED],
        bump
    )]
    pub location_allow_list: Account<'info, LocationAllowList>,

    /// Pooled balance PDA
    #[account(
        init,
        payer = admin,
        space = SubsidyPool::DISCRIMINATOR.len() + SubsidyPool::INIT_SPACE,
        seeds = [SUBSIDY_POOL_SEED],
        bump
    )]
    pub subsidy_pool: Account<'info, SubsidyPool>,

    /// Distribution watermark PDA
    #[account(
        init,
        payer = admin,
        space = DistributionCheckpoint::DISCRIMINATOR.len() + DistributionCheckpoint::INIT_SPACE,
        seeds = [DISTRIBUTION_CHECKPOINT_SEED],
        bump
    )]
    pub distribution_checkpoint: Account<'info, DistributionCheckpoint>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeSubsidyConfig<'info> {
    pub fn handle(ctx: Context<InitializeSubsidyConfig>) -> Result<()> {
        msg!("Initializing subsidy configuration");

        let admin = ctx.accounts.admin.key();
        let config_key = ctx.accounts.subsidy_config.key();
        let pool_key = ctx.accounts.subsidy_pool.key();

        ctx.accounts.subsidy_config.set_inner(SubsidyConfig::new(admin, ctx.bumps.subsidy_config));
        ctx.accounts.location_allow_list.set_inner(LocationAllowList::new(ctx.bumps.location_allow_list));
        ctx.accounts.subsidy_pool.set_inner(SubsidyPool::new(ctx.bumps.subsidy_pool));
        ctx.accounts
            .distribution_checkpoint
            .set_inner(DistributionCheckpoint::new(ctx.bumps.distribution_checkpoint));

        let config = &ctx.accounts.subsidy_config;
        msg!("Admin: {}", admin);
        msg!("Subsidy cap per course: {} units", config.subsidy_cap_per_course);
        msg!("Max subsidies per learner: {}", config.max_subsidies_per_learner);
        msg!("Subsidy bounds: {}..={} units", config.min_subsidy_amount, config.max_subsidy_amount);
        msg!("Eligibility threshold: {}", config.eligibility_threshold);
        msg!("Distribution interval: {} seconds", config.distribution_interval);

        emit!(crate::events::SubsidyConfigInitialized {
            config: config_key,
            admin,
            pool: pool_key,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
