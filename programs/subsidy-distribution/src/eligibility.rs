use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::registry::SubsidyRegistry;
use crate::states::{LocationAllowList, SubsidyConfig};

/// Admission decision and the amount a learner may draw for a course
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub subsidy_amount: u64,
}

/// Decides whether `learner` may draw a subsidy for `course_id`.
///
/// Admission requires a remote-area profile, an allow-listed location and a
/// score at or above the configured threshold. The amount is the course
/// cost capped at `subsidy_cap_per_course`; min/max subsidy bounds are left
/// to the ledger. Reads only.
pub fn check_eligibility<R: SubsidyRegistry>(
    config: &SubsidyConfig,
    allow_list: &LocationAllowList,
    registry: &R,
    learner: &Pubkey,
    course_id: u64,
) -> Result<EligibilityVerdict> {
    config.require_registry()?;
    config.require_management()?;

    let profile = registry
        .learner_profile(learner)
        .ok_or(ErrorCode::InvalidLearner)?;
    let course = registry
        .course(course_id)
        .ok_or(ErrorCode::InvalidCourse)?;

    let eligible_location = allow_list.contains(&profile.location);
    let meets_threshold = profile.eligibility_score >= u32::from(config.eligibility_threshold);

    #[cfg(feature = "verbose")]
    msg!(
        "Eligibility: remote_area={}, eligible_location={}, score={}, threshold={}",
        profile.remote_area,
        eligible_location,
        profile.eligibility_score,
        config.eligibility_threshold
    );

    require!(
        profile.remote_area && eligible_location && meets_threshold,
        ErrorCode::NotEligible
    );

    Ok(EligibilityVerdict {
        eligible: true,
        subsidy_amount: course.cost.min(config.subsidy_cap_per_course),
    })
}
