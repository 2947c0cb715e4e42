// PDA Seeds
pub const SUBSIDY_CONFIG_SEED: &[u8] = b"subsidy_config";
pub const LOCATION_ALLOW_LIST_SEED: &[u8] = b"location_allow_list";
pub const SUBSIDY_POOL_SEED: &[u8] = b"subsidy_pool";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";
pub const APPLIED_SUBSIDY_SEED: &[u8] = b"applied_subsidy";
pub const LEARNER_SUBSIDY_COUNT_SEED: &[u8] = b"learner_subsidy_count";
pub const DISTRIBUTION_CHECKPOINT_SEED: &[u8] = b"distribution_checkpoint";
pub const PENDING_DISTRIBUTION_SEED: &[u8] = b"pending_distribution";

// Default policy parameters
pub const DEFAULT_MAX_SUBSIDIES_PER_LEARNER: u32 = 5;
pub const DEFAULT_SUBSIDY_CAP_PER_COURSE: u64 = 1_000;
pub const DEFAULT_MIN_SUBSIDY_AMOUNT: u64 = 10;
pub const DEFAULT_MAX_SUBSIDY_AMOUNT: u64 = 5_000;
pub const DEFAULT_ELIGIBILITY_THRESHOLD: u8 = 80;
pub const DEFAULT_DISTRIBUTION_FEE: u64 = 50;
pub const DEFAULT_DISTRIBUTION_INTERVAL: i64 = SECONDS_PER_DAY;

// Validation constants
pub const MAX_ELIGIBILITY_THRESHOLD: u8 = 100;
pub const MAX_LOCATION_LEN: usize = 100;
pub const MAX_ELIGIBLE_LOCATIONS: usize = 32;

pub const SECONDS_PER_DAY: i64 = 86400; // 24 hours in seconds

// Registry account names, hashed into Anchor discriminators
pub const LEARNER_PROFILE_ACCOUNT: &str = "LearnerProfile";
pub const COURSE_RECORD_ACCOUNT: &str = "CourseRecord";
