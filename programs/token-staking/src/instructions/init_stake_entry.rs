use anchor_lang::prelude::*;

use crate::constants::{STAKE_ENTRY_SEED, STAKE_POOL_STATE_SEED};
use crate::state::{PoolState, StakeEntry};

/// Create a user's stake entry for a pool
///
/// One entry per (user, pool). Creating it a second time fails in the
/// system program and leaves the existing entry untouched.
///
#[derive(Accounts)]
pub struct InitStakeEntry<'info> {
    /// User opening their staking position (signer, payer)
    #[account(mut)]
    pub user: Signer<'info>,

    /// The user's stake entry PDA
    #[account(
        init,
        payer = user,
        space = StakeEntry::SIZE,
        seeds = [user.key().as_ref(), pool_state.token_mint.as_ref(), STAKE_ENTRY_SEED],
        bump
    )]
    pub user_stake_entry: Account<'info, StakeEntry>,

    /// Pool the entry belongs to
    #[account(
        seeds = [pool_state.token_mint.as_ref(), STAKE_POOL_STATE_SEED],
        bump = pool_state.bump
    )]
    pub pool_state: Account<'info, PoolState>,

    pub system_program: Program<'info, System>,
}

pub fn handler_init_stake_entry(ctx: Context<InitStakeEntry>) -> Result<()> {
    let entry = &mut ctx.accounts.user_stake_entry;

    entry.user = ctx.accounts.user.key();
    entry.pool = ctx.accounts.pool_state.key();
    entry.balance = 0;
    entry.last_staked = 0;
    entry.bump = ctx.bumps.user_stake_entry;

    msg!(
        "Stake entry created: user={}, pool={}",
        entry.user,
        entry.pool
    );

    Ok(())
}
