use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::errors::ErrorCode;
use crate::constants::{SUBSIDY_CONFIG_SEED, SUBSIDY_POOL_SEED, POOL_AUTHORITY_SEED, POOL_VAULT_SEED};
use crate::states::{SubsidyConfig, SubsidyPool};

#[derive(Accounts)]
pub struct DepositToPool<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        seeds = [SUBSIDY_CONFIG_SEED],
        bump = subsidy_config.bump
    )]
    pub subsidy_config: Account<'info, SubsidyConfig>,

    #[account(
        mut,
        seeds = [SUBSIDY_POOL_SEED],
        bump = subsidy_pool.bump
    )]
    pub subsidy_pool: Account<'info, SubsidyPool>,

    /// CHECK: This is a PDA derived from the program ID and "pool_authority" seed
    #[account(
        seeds = [POOL_AUTHORITY_SEED],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = depositor,
        seeds = [POOL_VAULT_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = pool_authority
    )]
    pub pool_vault: Box<Account<'info, TokenAccount>>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor
    )]
    pub depositor_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> DepositToPool<'info> {
    pub fn handle(ctx: Context<DepositToPool>, amount: u64) -> Result<bool> {
        msg!("Processing pool deposit from: {}", ctx.accounts.depositor.key());
        msg!("Amount: {} units", amount);

        validate_deposit(&ctx.accounts.subsidy_config, &ctx.accounts.token_mint.key(), amount)?;

        process_token_deposit(&ctx, amount)?;

        let now = Clock::get()?.unix_timestamp;
        let pool = &mut ctx.accounts.subsidy_pool;
        let pool_balance = pool.credit_deposit(amount, now)?;

        msg!("Pool balance: {} units", pool_balance);

        emit!(crate::events::PoolDeposited {
            depositor: ctx.accounts.depositor.key(),
            amount,
            pool_balance,
            total_deposited: pool.total_deposited,
            timestamp: now,
        });

        Ok(true)
    }
}

/// Checks a deposit of `amount` in `mint` against the config
pub fn validate_deposit(config: &SubsidyConfig, mint: &Pubkey, amount: u64) -> Result<()> {
    let token = config.require_token()?;
    require_keys_eq!(*mint, token, ErrorCode::InvalidToken);
    require!(amount >= config.min_subsidy_amount, ErrorCode::InvalidAmount);
    Ok(())
}

fn process_token_deposit(ctx: &Context<DepositToPool>, amount: u64) -> Result<()> {
    anchor_spl::token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.pool_vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )
    .map_err(transfer_failed)
}

/// Logs a failed token CPI and reports it as `TransferFailed`
pub fn transfer_failed(err: anchor_lang::error::Error) -> anchor_lang::error::Error {
    msg!("Token transfer failed: {:?}", err);
    error!(ErrorCode::TransferFailed)
}
