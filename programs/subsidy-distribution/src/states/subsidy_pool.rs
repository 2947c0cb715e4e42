use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Pooled subsidy balance shared by all learners
#[account]
#[derive(InitSpace, Debug)]
pub struct SubsidyPool {
    /// Tokens currently available for subsidies (in smallest unit)
    pub balance: u64,
    /// Total subsidies paid out (never decreases)
    pub total_distributed: u64,
    /// Total tokens deposited into the pool
    pub total_deposited: u64,
    /// Number of deposits made
    pub deposit_count: u64,
    /// Number of subsidies applied
    pub subsidy_count: u64,
    /// Timestamp of last update
    pub last_update_timestamp: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl SubsidyPool {
    /// Creates an empty pool
    pub fn new(bump: u8) -> Self {
        Self {
            balance: 0,
            total_distributed: 0,
            total_deposited: 0,
            deposit_count: 0,
            subsidy_count: 0,
            last_update_timestamp: 0,
            bump,
        }
    }

    /// Credits a deposit and returns the new balance
    pub fn credit_deposit(&mut self, amount: u64, now: i64) -> Result<u64> {
        let balance = self.balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_deposited = self.total_deposited
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let deposit_count = self.deposit_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        self.balance = balance;
        self.total_deposited = total_deposited;
        self.deposit_count = deposit_count;
        self.last_update_timestamp = now;

        Ok(balance)
    }

    pub fn ensure_covers(&self, amount: u64) -> Result<()> {
        require!(self.balance >= amount, ErrorCode::InsufficientFunds);
        Ok(())
    }

    /// Pool totals after paying out `amount`, computed without writing
    pub fn preview_debit(&self, amount: u64) -> Result<PoolDebit> {
        Ok(PoolDebit {
            balance: self.balance
                .checked_sub(amount)
                .ok_or(ErrorCode::InsufficientFunds)?,
            total_distributed: self.total_distributed
                .checked_add(amount)
                .ok_or(ErrorCode::MathOverflow)?,
            subsidy_count: self.subsidy_count
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?,
        })
    }

    /// Writes a debit produced by `preview_debit`
    pub fn commit_debit(&mut self, debit: PoolDebit, now: i64) {
        self.balance = debit.balance;
        self.total_distributed = debit.total_distributed;
        self.subsidy_count = debit.subsidy_count;
        self.last_update_timestamp = now;
    }
}

/// Pool totals after a subsidy payout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolDebit {
    pub balance: u64,
    pub total_distributed: u64,
    pub subsidy_count: u64,
}
