use anchor_lang::prelude::*;
use anchor_spl::token_2022;

use crate::error::StakingError;

/// The vaults custody Token-2022 assets only. `Interface<TokenInterface>`
/// accepts either SPL token program, so the handlers gate explicitly.
pub fn check_token_program(key: Pubkey) -> Result<()> {
    require_keys_eq!(key, token_2022::ID, StakingError::InvalidTokenProgram);
    Ok(())
}
