pub mod initialize_subsidy_config;
pub use initialize_subsidy_config::*;

pub mod update_subsidy_config;
pub use update_subsidy_config::*;

pub mod eligible_location;
pub use eligible_location::*;

pub mod deposit_to_pool;
pub use deposit_to_pool::*;

pub mod apply_subsidy;
pub use apply_subsidy::*;

pub mod distribute_funds;
pub use distribute_funds::*;

pub mod manage_pending_distribution;
pub use manage_pending_distribution::*;

pub mod queries;
pub use queries::*;
