// =============================================================================
// State Module - Token Staking
// =============================================================================

pub mod pool_state;
pub mod stake_entry;

pub use pool_state::*;
pub use stake_entry::*;
