use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Per-user staking position within one pool
/// PDA: [user, token_mint, "stake_entry"]
#[account]
#[derive(Default)]
pub struct StakeEntry {
    /// Owner of this stake entry
    pub user: Pubkey,

    /// The pool state account this entry belongs to
    pub pool: Pubkey,

    /// Amount of tokens this user currently has staked
    pub balance: u64,

    /// Timestamp of the last stake or unstake
    pub last_staked: i64,

    /// Entry PDA bump seed
    pub bump: u8,
}

impl StakeEntry {
    /// Account size for allocation
    pub const SIZE: usize = 8 + // discriminator
        32 + // user
        32 + // pool
        8 +  // balance
        8 +  // last_staked
        1 +  // bump
        32;  // padding for future fields

    /// Record a stake action. The handler passes the clock so the
    /// accounting stays testable off-chain.
    pub fn record_stake(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, StakingError::InvalidAmount);

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        self.last_staked = now;

        Ok(())
    }

    /// Record an unstake action. Rejects any amount above the current
    /// balance, so the balance can never wrap below zero.
    pub fn record_unstake(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, StakingError::InvalidAmount);
        require!(
            self.balance >= amount,
            StakingError::InsufficientStakeBalance
        );

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(StakingError::MathUnderflow)?;

        self.last_staked = now;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_size_matches_field_layout() {
        // discriminator + user + pool + balance + last_staked + bump + padding
        assert_eq!(StakeEntry::SIZE, 8 + 32 + 32 + 8 + 8 + 1 + 32);
    }

    #[test]
    fn zero_amount_stake_is_rejected_without_mutation() {
        let mut entry = StakeEntry::default();

        let err = entry.record_stake(0, 7).unwrap_err();
        assert_eq!(err, StakingError::InvalidAmount.into());
        assert_eq!(entry.balance, 0);
        assert_eq!(entry.last_staked, 0);
    }

    #[test]
    fn zero_amount_unstake_is_rejected_without_mutation() {
        let mut entry = StakeEntry::default();
        entry.record_stake(10, 0).unwrap();

        let err = entry.record_unstake(0, 7).unwrap_err();
        assert_eq!(err, StakingError::InvalidAmount.into());
        assert_eq!(entry.balance, 10);
        assert_eq!(entry.last_staked, 0);
    }

    #[test]
    fn stake_then_unstake_restores_balance() {
        let mut entry = StakeEntry::default();

        entry.record_stake(42, 1_000).unwrap();
        assert_eq!(entry.balance, 42);
        assert_eq!(entry.last_staked, 1_000);

        entry.record_unstake(42, 2_000).unwrap();
        assert_eq!(entry.balance, 0);
        assert_eq!(entry.last_staked, 2_000);
    }

    #[test]
    fn unstake_beyond_balance_is_rejected_without_mutation() {
        let mut entry = StakeEntry::default();
        entry.record_stake(10, 0).unwrap();

        let err = entry.record_unstake(11, 5).unwrap_err();
        assert_eq!(err, StakingError::InsufficientStakeBalance.into());
        assert_eq!(entry.balance, 10);
        assert_eq!(entry.last_staked, 0);
    }

    #[test]
    fn unstake_from_empty_entry_is_rejected() {
        let mut entry = StakeEntry::default();

        assert!(entry.record_unstake(1, 0).is_err());
        assert_eq!(entry.balance, 0);
    }

    #[test]
    fn stake_overflow_is_rejected_without_mutation() {
        let mut entry = StakeEntry::default();
        entry.record_stake(u64::MAX, 0).unwrap();

        let err = entry.record_stake(1, 9).unwrap_err();
        assert_eq!(err, StakingError::MathOverflow.into());
        assert_eq!(entry.balance, u64::MAX);
        assert_eq!(entry.last_staked, 0);
    }
}
