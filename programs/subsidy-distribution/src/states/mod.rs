pub mod subsidy_config;
pub mod location_allow_list;
pub mod subsidy_pool;
pub mod applied_subsidy;
pub mod distribution_checkpoint;
pub mod pending_distribution;

pub use subsidy_config::*;
pub use location_allow_list::*;
pub use subsidy_pool::*;
pub use applied_subsidy::*;
pub use distribution_checkpoint::*;
pub use pending_distribution::*;
