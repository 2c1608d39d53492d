use anchor_lang::prelude::*;
use anchor_spl::token_2022::{transfer_checked, TransferChecked};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{STAKE_ENTRY_SEED, STAKE_POOL_STATE_SEED, VAULT_AUTH_SEED, VAULT_SEED};
use crate::error::StakingError;
use crate::state::{PoolState, StakeEntry};
use crate::utils::check_token_program;

/// Stake tokens into a pool
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `amount` - Amount of tokens to stake
///
/// # Flow
/// 1. Validate amount and reject overflow before anything moves
/// 2. Transfer tokens from the user's account into the vault
/// 3. Commit entry balance and pool total together
///
#[derive(Accounts)]
pub struct Stake<'info> {
    /// User staking their tokens
    #[account(
        mut,
        constraint = user.key() == user_stake_entry.user @ StakingError::InvalidUser
    )]
    pub user: Signer<'info>,

    /// Pool being staked into
    #[account(
        mut,
        seeds = [pool_state.token_mint.as_ref(), STAKE_POOL_STATE_SEED],
        bump = pool_state.bump
    )]
    pub pool_state: Account<'info, PoolState>,

    /// Mint of the staked token
    #[account(
        constraint = token_mint.key() == pool_state.token_mint @ StakingError::InvalidMint,
        token::token_program = token_program
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Global vault authority PDA
    /// CHECK: key-less PDA validated against the stored bump
    #[account(
        seeds = [VAULT_AUTH_SEED],
        bump = pool_state.vault_auth_bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// Pool vault, destination of the staked tokens
    #[account(
        mut,
        seeds = [token_mint.key().as_ref(), pool_authority.key().as_ref(), VAULT_SEED],
        bump = pool_state.vault_bump,
        token::token_program = token_program
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// User's token account, source of the staked tokens
    #[account(
        mut,
        constraint = user_token_account.mint == pool_state.token_mint @ StakingError::InvalidMint,
        token::authority = user,
        token::token_program = token_program
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The user's stake entry for this pool
    #[account(
        mut,
        seeds = [user.key().as_ref(), pool_state.token_mint.as_ref(), STAKE_ENTRY_SEED],
        bump = user_stake_entry.bump
    )]
    pub user_stake_entry: Account<'info, StakeEntry>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler_stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    check_token_program(ctx.accounts.token_program.key())?;

    require!(amount > 0, StakingError::InvalidAmount);

    // Reject overflow on either total before any tokens move
    ctx.accounts
        .user_stake_entry
        .balance
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    ctx.accounts
        .pool_state
        .amount
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    // Transfer tokens from the user into the vault, signed by the user
    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.user_token_account.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    // Commit both sides of the ledger in the same instruction
    let now = Clock::get()?.unix_timestamp;
    let entry = &mut ctx.accounts.user_stake_entry;
    let pool_state = &mut ctx.accounts.pool_state;

    entry.record_stake(amount, now)?;
    pool_state.add_stake(amount)?;

    msg!(
        "Staked {} tokens. User balance: {}, Pool total: {}",
        amount,
        entry.balance,
        pool_state.amount
    );

    Ok(())
}
