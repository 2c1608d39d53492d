use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Per-asset staking pool state
/// PDA: [token_mint, "state"]
#[account]
#[derive(Default)]
pub struct PoolState {
    /// Mint of the token being staked
    pub token_mint: Pubkey,

    /// Companion mint whose mint authority is the vault authority PDA.
    /// Reserved for receipt/reward issuance; stake and unstake never touch it.
    pub staking_token_mint: Pubkey,

    /// Global vault authority PDA, custody signer for the vault
    pub vault_authority: Pubkey,

    /// Token account holding every staked token of this pool
    /// PDA: [token_mint, vault_authority, "vault"]
    pub token_vault: Pubkey,

    /// Total tokens staked across all entries of this pool
    pub amount: u64,

    /// Pool state PDA bump seed
    pub bump: u8,

    /// Stored vault authority bump, reused when signing vault debits
    pub vault_auth_bump: u8,

    /// Vault PDA bump seed
    pub vault_bump: u8,
}

impl PoolState {
    /// Account size for allocation
    pub const SIZE: usize = 8 + // discriminator
        32 + // token_mint
        32 + // staking_token_mint
        32 + // vault_authority
        32 + // token_vault
        8 +  // amount
        1 +  // bump
        1 +  // vault_auth_bump
        1 +  // vault_bump
        32;  // padding for future fields

    /// Add a stake to the pool total
    pub fn add_stake(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        Ok(())
    }

    /// Remove a stake from the pool total
    pub fn remove_stake(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(StakingError::MathUnderflow)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StakeEntry;

    #[test]
    fn account_size_matches_field_layout() {
        // discriminator + four pubkeys + amount + three bumps + padding
        assert_eq!(PoolState::SIZE, 8 + 32 * 4 + 8 + 3 + 32);
    }

    #[test]
    fn add_then_remove_restores_total() {
        let mut pool = PoolState::default();

        pool.add_stake(500).unwrap();
        assert_eq!(pool.amount, 500);

        pool.remove_stake(500).unwrap();
        assert_eq!(pool.amount, 0);
    }

    #[test]
    fn add_stake_rejects_overflow_without_mutation() {
        let mut pool = PoolState {
            amount: u64::MAX - 1,
            ..Default::default()
        };

        assert!(pool.add_stake(2).is_err());
        assert_eq!(pool.amount, u64::MAX - 1);
    }

    #[test]
    fn remove_stake_rejects_underflow_without_mutation() {
        let mut pool = PoolState {
            amount: 3,
            ..Default::default()
        };

        assert!(pool.remove_stake(4).is_err());
        assert_eq!(pool.amount, 3);
    }

    /// Interleaved stakes and unstakes across several entries keep the pool
    /// total equal to the sum of entry balances and to the vault balance.
    #[test]
    fn pool_total_tracks_entry_sum_and_vault() {
        let mut pool = PoolState::default();
        let mut entries = [
            StakeEntry::default(),
            StakeEntry::default(),
            StakeEntry::default(),
        ];
        let mut vault_balance: u64 = 0;

        // (entry index, staked amount, unstaked amount)
        let steps = [(0, 100, 0), (1, 250, 0), (0, 0, 40), (2, 7, 0), (1, 0, 250), (0, 13, 0)];

        for (i, staked, unstaked) in steps {
            if staked > 0 {
                vault_balance += staked;
                entries[i].record_stake(staked, 0).unwrap();
                pool.add_stake(staked).unwrap();
            }
            if unstaked > 0 {
                entries[i].record_unstake(unstaked, 0).unwrap();
                pool.remove_stake(unstaked).unwrap();
                vault_balance -= unstaked;
            }

            let entry_sum: u64 = entries.iter().map(|e| e.balance).sum();
            assert_eq!(pool.amount, entry_sum);
            assert_eq!(pool.amount, vault_balance);
        }
    }
}
