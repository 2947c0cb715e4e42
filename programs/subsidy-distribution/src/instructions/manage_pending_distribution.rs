use anchor_lang::prelude::*;
use crate::constants::{SUBSIDY_CONFIG_SEED, PENDING_DISTRIBUTION_SEED};
use crate::states::{SubsidyConfig, PendingDistribution};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct QueuePendingDistributionParams {
    pub learner: Pubkey,
    pub course_id: u64,
    pub amount: u64,
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct QueuePendingDistribution<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SUBSIDY_CONFIG_SEED],
        bump = subsidy_config.bump
    )]
    pub subsidy_config: Account<'info, SubsidyConfig>,

    #[account(
        init,
        payer = admin,
        space = PendingDistribution::DISCRIMINATOR.len() + PendingDistribution::INIT_SPACE,
        seeds = [PENDING_DISTRIBUTION_SEED, &id.to_le_bytes()],
        bump
    )]
    pub pending_distribution: Account<'info, PendingDistribution>,

    pub system_program: Program<'info, System>,
}

impl<'info> QueuePendingDistribution<'info> {
    pub fn handle(
        ctx: Context<QueuePendingDistribution>,
        id: u64,
        params: QueuePendingDistributionParams,
    ) -> Result<()> {
        ctx.accounts.subsidy_config.require_admin(&ctx.accounts.admin.key())?;

        let now = Clock::get()?.unix_timestamp;
        ctx.accounts.pending_distribution.queue(
            id,
            params.learner,
            params.course_id,
            params.amount,
            now,
            ctx.bumps.pending_distribution,
        )?;

        msg!("Queued distribution {} of {} units for {}", id, params.amount, params.learner);
        emit!(crate::events::PendingDistributionQueued {
            id,
            learner: params.learner,
            course_id: params.course_id,
            amount: params.amount,
            timestamp: now,
        });

        Ok(())
    }
}

/// Closes a settled distribution; rent goes back to the admin
#[derive(Accounts)]
#[instruction(id: u64)]
pub struct SettlePendingDistribution<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SUBSIDY_CONFIG_SEED],
        bump = subsidy_config.bump
    )]
    pub subsidy_config: Account<'info, SubsidyConfig>,

    #[account(
        mut,
        close = admin,
        seeds = [PENDING_DISTRIBUTION_SEED, &id.to_le_bytes()],
        bump = pending_distribution.bump
    )]
    pub pending_distribution: Account<'info, PendingDistribution>,
}

impl<'info> SettlePendingDistribution<'info> {
    pub fn handle(ctx: Context<SettlePendingDistribution>, id: u64) -> Result<()> {
        ctx.accounts.subsidy_config.require_admin(&ctx.accounts.admin.key())?;

        let pending = &ctx.accounts.pending_distribution;
        msg!("Settled distribution {}", id);
        emit!(crate::events::PendingDistributionSettled {
            id,
            learner: pending.learner,
            amount: pending.amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
