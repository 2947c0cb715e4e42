use anchor_lang::prelude::*;
use crate::constants::{SUBSIDY_CONFIG_SEED, DISTRIBUTION_CHECKPOINT_SEED};
use crate::states::{SubsidyConfig, DistributionCheckpoint};

/// Admin checkpoint pacing batch settlement. Payout of pending distributions
/// happens outside this program.
#[derive(Accounts)]
pub struct DistributeFunds<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [SUBSIDY_CONFIG_SEED],
        bump = subsidy_config.bump
    )]
    pub subsidy_config: Account<'info, SubsidyConfig>,

    /// Distribution watermark
    #[account(
        mut,
        seeds = [DISTRIBUTION_CHECKPOINT_SEED],
        bump = distribution_checkpoint.bump
    )]
    pub distribution_checkpoint: Account<'info, DistributionCheckpoint>,
}

impl<'info> DistributeFunds<'info> {
    pub fn handle(ctx: Context<DistributeFunds>, batch_size: u32) -> Result<bool> {
        msg!("Distribution checkpoint requested, batch size {}", batch_size);

        let now = Clock::get()?.unix_timestamp;
        let config = &ctx.accounts.subsidy_config;
        let checkpoint = &mut ctx.accounts.distribution_checkpoint;

        advance_distribution_checkpoint(
            config,
            checkpoint,
            &ctx.accounts.admin.key(),
            now,
            batch_size,
        )?;

        msg!("Distributions so far: {}", checkpoint.distribution_count);

        emit!(crate::events::DistributionCheckpointAdvanced {
            last_distribution_time: checkpoint.last_distribution_time,
            distribution_count: checkpoint.distribution_count,
            batch_size,
            distribution_fee: config.distribution_fee,
        });

        Ok(true)
    }
}

/// Admin gate, then the interval gate, then the watermark moves to `now`
pub fn advance_distribution_checkpoint(
    config: &SubsidyConfig,
    checkpoint: &mut DistributionCheckpoint,
    caller: &Pubkey,
    now: i64,
    batch_size: u32,
) -> Result<i64> {
    config.require_admin(caller)?;
    checkpoint.advance(now, config.distribution_interval, batch_size)
}
