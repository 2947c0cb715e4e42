use anchor_lang::prelude::*;
use crate::constants::{SUBSIDY_CONFIG_SEED, SUBSIDY_POOL_SEED};
use crate::states::{SubsidyConfig, SubsidyPool, SubsidyParameter, ExternalReference};

/// Admin-only configuration change. The admin check lives in the
/// `SubsidyConfig` setters so it runs before argument validation.
#[derive(Accounts)]
pub struct UpdateSubsidyConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SUBSIDY_CONFIG_SEED],
        bump = subsidy_config.bump
    )]
    pub subsidy_config: Account<'info, SubsidyConfig>,
}

impl<'info> UpdateSubsidyConfig<'info> {
    pub fn set_subsidy_cap_per_course(ctx: Context<UpdateSubsidyConfig>, cap: u64) -> Result<u64> {
        let admin = ctx.accounts.admin.key();
        let cap = ctx.accounts.subsidy_config.set_subsidy_cap_per_course(&admin, cap)?;
        emit_parameter_updated(admin, SubsidyParameter::SubsidyCapPerCourse, cap)?;
        Ok(cap)
    }

    pub fn set_max_subsidies_per_learner(ctx: Context<UpdateSubsidyConfig>, max: u32) -> Result<u32> {
        let admin = ctx.accounts.admin.key();
        let max = ctx.accounts.subsidy_config.set_max_subsidies_per_learner(&admin, max)?;
        emit_parameter_updated(admin, SubsidyParameter::MaxSubsidiesPerLearner, u64::from(max))?;
        Ok(max)
    }

    pub fn set_min_subsidy_amount(ctx: Context<UpdateSubsidyConfig>, min: u64) -> Result<u64> {
        let admin = ctx.accounts.admin.key();
        let min = ctx.accounts.subsidy_config.set_min_subsidy_amount(&admin, min)?;
        emit_parameter_updated(admin, SubsidyParameter::MinSubsidyAmount, min)?;
        Ok(min)
    }

    pub fn set_max_subsidy_amount(ctx: Context<UpdateSubsidyConfig>, max: u64) -> Result<u64> {
        let admin = ctx.accounts.admin.key();
        let max = ctx.accounts.subsidy_config.set_max_subsidy_amount(&admin, max)?;
        emit_parameter_updated(admin, SubsidyParameter::MaxSubsidyAmount, max)?;
        Ok(max)
    }

    pub fn set_eligibility_threshold(ctx: Context<UpdateSubsidyConfig>, threshold: u8) -> Result<u8> {
        let admin = ctx.accounts.admin.key();
        let threshold = ctx.accounts.subsidy_config.set_eligibility_threshold(&admin, threshold)?;
        emit_parameter_updated(admin, SubsidyParameter::EligibilityThreshold, u64::from(threshold))?;
        Ok(threshold)
    }

    pub fn set_distribution_fee(ctx: Context<UpdateSubsidyConfig>, fee: u64) -> Result<u64> {
        let admin = ctx.accounts.admin.key();
        let fee = ctx.accounts.subsidy_config.set_distribution_fee(&admin, fee)?;
        emit_parameter_updated(admin, SubsidyParameter::DistributionFee, fee)?;
        Ok(fee)
    }

    pub fn set_distribution_interval(ctx: Context<UpdateSubsidyConfig>, interval: i64) -> Result<i64> {
        let admin = ctx.accounts.admin.key();
        let interval = ctx.accounts.subsidy_config.set_distribution_interval(&admin, interval)?;
        // Validated positive above
        emit_parameter_updated(admin, SubsidyParameter::DistributionInterval, interval as u64)?;
        Ok(interval)
    }

    pub fn set_external_reference(
        ctx: Context<UpdateSubsidyConfig>,
        kind: ExternalReference,
        reference: Pubkey,
    ) -> Result<bool> {
        let admin = ctx.accounts.admin.key();
        ctx.accounts
            .subsidy_config
            .set_external_reference(&admin, kind, reference)?;

        msg!("{:?} reference set to {}", kind, reference);
        emit!(crate::events::ExternalReferenceUpdated {
            admin,
            kind,
            reference,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(true)
    }

    pub fn toggle_active_status(ctx: Context<UpdateSubsidyConfig>) -> Result<bool> {
        let admin = ctx.accounts.admin.key();
        let active_status = ctx.accounts.subsidy_config.toggle_active_status(&admin)?;

        msg!("Subsidy program active: {}", active_status);
        emit!(crate::events::ActiveStatusToggled {
            admin,
            active_status,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(active_status)
    }
}

/// Switches the pool mint. Needs the pool to see whether it still holds
/// units of the current mint.
#[derive(Accounts)]
pub struct SetTokenContract<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SUBSIDY_CONFIG_SEED],
        bump = subsidy_config.bump
    )]
    pub subsidy_config: Account<'info, SubsidyConfig>,

    #[account(
        seeds = [SUBSIDY_POOL_SEED],
        bump = subsidy_pool.bump
    )]
    pub subsidy_pool: Account<'info, SubsidyPool>,
}

impl<'info> SetTokenContract<'info> {
    pub fn handle(ctx: Context<SetTokenContract>, token: Pubkey) -> Result<bool> {
        let admin = ctx.accounts.admin.key();
        ctx.accounts
            .subsidy_config
            .set_token(&admin, token, &ctx.accounts.subsidy_pool)?;

        msg!("Token reference set to {}", token);
        emit!(crate::events::ExternalReferenceUpdated {
            admin,
            kind: ExternalReference::Token,
            reference: token,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(true)
    }
}

fn emit_parameter_updated(admin: Pubkey, parameter: SubsidyParameter, value: u64) -> Result<()> {
    msg!("{:?} set to {}", parameter, value);
    emit!(crate::events::SubsidyParameterUpdated {
        admin,
        parameter,
        value,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
