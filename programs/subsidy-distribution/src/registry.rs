use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use crate::constants::{LEARNER_PROFILE_ACCOUNT, COURSE_RECORD_ACCOUNT};

/// Learner profile account owned by the registry program
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LearnerProfile {
    pub learner: Pubkey,
    pub remote_area: bool,
    pub location: String,
    pub eligibility_score: u32,
}

/// Course account owned by the registry program
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseRecord {
    pub course_id: u64,
    /// Course cost (in smallest unit of the pool token)
    pub cost: u64,
}

/// Source of learner profiles and course costs
pub trait SubsidyRegistry {
    fn learner_profile(&self, learner: &Pubkey) -> Option<LearnerProfile>;
    fn course(&self, course_id: u64) -> Option<CourseRecord>;
}

/// Anchor discriminator of a registry account: sha256("account:<Name>")[..8]
pub fn registry_discriminator(account_name: &str) -> [u8; 8] {
    let preimage = format!("account:{}", account_name);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

fn decode_registry_account<T: AnchorDeserialize>(data: &[u8], account_name: &str) -> Option<T> {
    if data.len() < 8 || data[..8] != registry_discriminator(account_name) {
        return None;
    }
    // Trailing bytes are account padding
    T::deserialize(&mut &data[8..]).ok()
}

/// Decodes a profile account. None unless the registry owns it and it
/// belongs to `learner`.
pub fn decode_learner_profile(
    owner: &Pubkey,
    registry: &Pubkey,
    data: &[u8],
    learner: &Pubkey,
) -> Option<LearnerProfile> {
    if owner != registry {
        return None;
    }
    decode_registry_account::<LearnerProfile>(data, LEARNER_PROFILE_ACCOUNT)
        .filter(|profile| profile.learner == *learner)
}

/// Decodes a course account. None unless the registry owns it and it
/// describes `course_id`.
pub fn decode_course_record(
    owner: &Pubkey,
    registry: &Pubkey,
    data: &[u8],
    course_id: u64,
) -> Option<CourseRecord> {
    if owner != registry {
        return None;
    }
    decode_registry_account::<CourseRecord>(data, COURSE_RECORD_ACCOUNT)
        .filter(|course| course.course_id == course_id)
}

/// Registry lookups over the accounts passed to an instruction
pub struct RegistryAccounts<'a, 'info> {
    pub registry: Option<Pubkey>,
    pub learner_profile: &'a AccountInfo<'info>,
    pub course_record: &'a AccountInfo<'info>,
}

impl<'a, 'info> SubsidyRegistry for RegistryAccounts<'a, 'info> {
    fn learner_profile(&self, learner: &Pubkey) -> Option<LearnerProfile> {
        let registry = self.registry?;
        let data = self.learner_profile.try_borrow_data().ok()?;
        decode_learner_profile(self.learner_profile.owner, &registry, &data, learner)
    }

    fn course(&self, course_id: u64) -> Option<CourseRecord> {
        let registry = self.registry?;
        let data = self.course_record.try_borrow_data().ok()?;
        decode_course_record(self.course_record.owner, &registry, &data, course_id)
    }
}
