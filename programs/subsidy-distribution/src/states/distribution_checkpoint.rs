use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Watermark pacing external batch settlement
#[account]
#[derive(InitSpace, Debug)]
pub struct DistributionCheckpoint {
    /// Timestamp of the last successful distribution
    pub last_distribution_time: i64,
    /// Total distributions made
    pub distribution_count: u32,
    /// Batch size requested by the last distribution
    pub last_batch_size: u32,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl DistributionCheckpoint {
    /// Creates new checkpoint state
    pub fn new(bump: u8) -> Self {
        Self {
            last_distribution_time: 0,
            distribution_count: 0,
            last_batch_size: 0,
            bump,
        }
    }

    /// Checks if `interval` seconds have passed since the last distribution.
    /// A clock behind the watermark never qualifies.
    pub fn can_distribute(&self, now: i64, interval: i64) -> bool {
        match now.checked_sub(self.last_distribution_time) {
            Some(elapsed) => elapsed >= interval,
            None => false,
        }
    }

    /// Advances the watermark to `now`
    pub fn advance(&mut self, now: i64, interval: i64, batch_size: u32) -> Result<i64> {
        require!(self.can_distribute(now, interval), ErrorCode::InvalidTimestamp);

        self.distribution_count = self.distribution_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.last_distribution_time = now;
        self.last_batch_size = batch_size;

        msg!("Distribution checkpoint advanced to {}", now);
        Ok(now)
    }
}
