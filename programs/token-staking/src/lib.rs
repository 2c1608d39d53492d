use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("27HfXcic6aPASuRHQ6Ac5RH4FUSycCCz7pSncneEiJwH");

#[program]
pub mod token_staking {
    use super::*;

    /// Create the staking pool for a token mint
    ///
    /// # Accounts
    /// * `pool_authority` - Global vault authority PDA
    /// * `pool_state` - Pool state PDA to create
    /// * `token_mint` - Mint of the token to stake
    /// * `token_vault` - Vault to hold staked tokens, owned by the authority
    /// * `staking_token_mint` - Companion mint under the authority (reserved)
    /// * `payer` - Funds the allocations (signer)
    ///
    pub fn init_pool(ctx: Context<InitPool>) -> Result<()> {
        instructions::init_pool::handler_init_pool(ctx)
    }

    /// Create a user's stake entry for a pool
    ///
    /// # Accounts
    /// * `user` - Owner of the new entry (signer, payer)
    /// * `user_stake_entry` - Stake entry PDA to create
    /// * `pool_state` - Pool the entry belongs to
    ///
    pub fn init_stake_entry(ctx: Context<InitStakeEntry>) -> Result<()> {
        instructions::init_stake_entry::handler_init_stake_entry(ctx)
    }

    /// Stake tokens into a pool
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of tokens to stake
    ///
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler_stake(ctx, amount)
    }

    /// Unstake tokens from a pool
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of tokens to unstake
    ///
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler_unstake(ctx, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::constants::*;
    use anchor_lang::prelude::Pubkey;

    #[test]
    fn vault_authority_derivation_is_deterministic() {
        let (addr_a, bump_a) = Pubkey::find_program_address(&[VAULT_AUTH_SEED], &crate::ID);
        let (addr_b, bump_b) = Pubkey::find_program_address(&[VAULT_AUTH_SEED], &crate::ID);

        assert_eq!(addr_a, addr_b);
        assert_eq!(bump_a, bump_b);
    }

    #[test]
    fn stake_entry_addresses_are_distinct_per_user() {
        let mint = Pubkey::new_unique();
        let user_a = Pubkey::new_unique();
        let user_b = Pubkey::new_unique();

        let (entry_a, _) = Pubkey::find_program_address(
            &[user_a.as_ref(), mint.as_ref(), STAKE_ENTRY_SEED],
            &crate::ID,
        );
        let (entry_b, _) = Pubkey::find_program_address(
            &[user_b.as_ref(), mint.as_ref(), STAKE_ENTRY_SEED],
            &crate::ID,
        );

        assert_ne!(entry_a, entry_b);
    }

    #[test]
    fn pool_addresses_are_distinct_per_mint() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();

        let (pool_a, _) = Pubkey::find_program_address(
            &[mint_a.as_ref(), STAKE_POOL_STATE_SEED],
            &crate::ID,
        );
        let (pool_b, _) = Pubkey::find_program_address(
            &[mint_b.as_ref(), STAKE_POOL_STATE_SEED],
            &crate::ID,
        );

        assert_ne!(pool_a, pool_b);
    }
}
