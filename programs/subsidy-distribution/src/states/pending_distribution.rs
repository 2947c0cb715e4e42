use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Subsidy queued for batch payout by the external settlement collaborator
#[account]
#[derive(InitSpace, Debug)]
pub struct PendingDistribution {
    /// Distribution id (PDA seed)
    pub id: u64,
    /// Recipient learner
    pub learner: Pubkey,
    /// Registry course id
    pub course_id: u64,
    /// Amount to settle (in smallest unit)
    pub amount: u64,
    /// Timestamp the distribution was queued
    pub created_at: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl PendingDistribution {
    pub fn queue(
        &mut self,
        id: u64,
        learner: Pubkey,
        course_id: u64,
        amount: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(learner != Pubkey::default(), ErrorCode::InvalidRecipient);
        require!(amount > 0, ErrorCode::InvalidAmount);

        self.id = id;
        self.learner = learner;
        self.course_id = course_id;
        self.amount = amount;
        self.created_at = now;
        self.bump = bump;
        Ok(())
    }
}
