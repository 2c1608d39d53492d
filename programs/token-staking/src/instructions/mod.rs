// =============================================================================
// Instructions Module - Token Staking
// =============================================================================

pub mod init_pool;
pub mod init_stake_entry;
pub mod stake;
pub mod unstake;

pub use init_pool::*;
pub use init_stake_entry::*;
pub use stake::*;
pub use unstake::*;
