use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Subsidy granted to one learner for one course.
///
/// The PDA is seeded by the learner key and the course id, so at most one
/// record can exist per pair.
#[account]
#[derive(InitSpace, Debug)]
pub struct AppliedSubsidy {
    /// The learner's public key
    pub learner: Pubkey,
    /// Registry course id
    pub course_id: u64,
    /// Amount paid out (in smallest unit)
    pub amount: u64,
    /// Timestamp the subsidy was applied
    pub timestamp: i64,
    /// true while active, false once settled
    pub status: bool,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl AppliedSubsidy {
    /// Whether this account already holds a subsidy. A freshly allocated
    /// account is zeroed and has no learner.
    pub fn is_recorded(&self) -> bool {
        self.learner != Pubkey::default()
    }

    pub fn ensure_not_recorded(&self) -> Result<()> {
        require!(!self.is_recorded(), ErrorCode::SubsidyAlreadyApplied);
        Ok(())
    }

    /// Fills a fresh record
    pub fn record(
        &mut self,
        learner: Pubkey,
        course_id: u64,
        amount: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        self.ensure_not_recorded()?;
        self.learner = learner;
        self.course_id = course_id;
        self.amount = amount;
        self.timestamp = now;
        self.status = true;
        self.bump = bump;
        Ok(())
    }
}

/// Number of subsidies a learner has received
#[account]
#[derive(InitSpace, Debug)]
pub struct LearnerSubsidyCount {
    /// The learner's public key
    pub learner: Pubkey,
    /// Successful applications so far
    pub count: u32,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl LearnerSubsidyCount {
    pub fn ensure_below(&self, max_subsidies: u32) -> Result<()> {
        require!(self.count < max_subsidies, ErrorCode::MaxSubsidiesExceeded);
        Ok(())
    }

    pub fn next_count(&self) -> Result<u32> {
        Ok(self.count.checked_add(1).ok_or(ErrorCode::MathOverflow)?)
    }
}
