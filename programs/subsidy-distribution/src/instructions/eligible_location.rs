use anchor_lang::prelude::*;
use crate::constants::{SUBSIDY_CONFIG_SEED, LOCATION_ALLOW_LIST_SEED};
use crate::states::{SubsidyConfig, LocationAllowList};

#[derive(Accounts)]
pub struct ManageEligibleLocation<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [SUBSIDY_CONFIG_SEED],
        bump = subsidy_config.bump
    )]
    pub subsidy_config: Account<'info, SubsidyConfig>,

    #[account(
        mut,
        seeds = [LOCATION_ALLOW_LIST_SEED],
        bump = location_allow_list.bump
    )]
    pub location_allow_list: Account<'info, LocationAllowList>,
}

impl<'info> ManageEligibleLocation<'info> {
    /// Adds a location to the allow-list. Adding a listed location succeeds
    /// without changing the list.
    pub fn add(ctx: Context<ManageEligibleLocation>, location: String) -> Result<bool> {
        let inserted = add_eligible_location(
            &ctx.accounts.subsidy_config,
            &mut ctx.accounts.location_allow_list,
            &ctx.accounts.admin.key(),
            &location,
        )?;

        msg!("Eligible location {} (new: {})", location, inserted);
        emit!(crate::events::EligibleLocationAdded {
            location,
            inserted,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(true)
    }

    /// Removes a location. Removing an absent location is not an error.
    pub fn remove(ctx: Context<ManageEligibleLocation>, location: String) -> Result<bool> {
        let removed = remove_eligible_location(
            &ctx.accounts.subsidy_config,
            &mut ctx.accounts.location_allow_list,
            &ctx.accounts.admin.key(),
            &location,
        )?;

        msg!("Removed location {} (was listed: {})", location, removed);
        emit!(crate::events::EligibleLocationRemoved {
            location,
            removed,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(true)
    }
}

pub fn add_eligible_location(
    config: &SubsidyConfig,
    allow_list: &mut LocationAllowList,
    caller: &Pubkey,
    location: &str,
) -> Result<bool> {
    config.require_admin(caller)?;
    allow_list.add(location)
}

pub fn remove_eligible_location(
    config: &SubsidyConfig,
    allow_list: &mut LocationAllowList,
    caller: &Pubkey,
    location: &str,
) -> Result<bool> {
    config.require_admin(caller)?;
    Ok(allow_list.remove(location))
}
