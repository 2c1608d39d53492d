// =============================================================================
// Token Staking Constants
// =============================================================================

// PDA Seeds
pub const STAKE_POOL_STATE_SEED: &[u8] = b"state";
pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_AUTH_SEED: &[u8] = b"vault_authority";
pub const STAKE_ENTRY_SEED: &[u8] = b"stake_entry";
