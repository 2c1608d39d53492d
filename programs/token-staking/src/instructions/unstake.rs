use anchor_lang::prelude::*;
use anchor_spl::token_2022::{transfer_checked, TransferChecked};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{STAKE_ENTRY_SEED, STAKE_POOL_STATE_SEED, VAULT_AUTH_SEED, VAULT_SEED};
use crate::error::StakingError;
use crate::state::{PoolState, StakeEntry};
use crate::utils::check_token_program;

/// Unstake tokens from a pool
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `amount` - Amount of tokens to unstake
///
/// # Flow
/// 1. Validate amount against the user's staked balance
/// 2. Debit entry balance and pool total together
/// 3. Transfer tokens from the vault back to the user, signed by the
///    vault authority PDA with its stored bump
///
/// A failed transfer aborts the transaction, so the ledger debit from
/// step 2 is rolled back with it and no partial state persists.
///
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// User unstaking their tokens
    #[account(
        mut,
        constraint = user.key() == user_stake_entry.user @ StakingError::InvalidUser
    )]
    pub user: Signer<'info>,

    /// Pool being unstaked from
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

    /// Global vault authority PDA, signs the vault debit
    /// CHECK: key-less PDA validated against the stored bump
    #[account(
        seeds = [VAULT_AUTH_SEED],
        bump = pool_state.vault_auth_bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// Pool vault, source of the returned tokens
    #[account(
        mut,
        seeds = [token_mint.key().as_ref(), pool_authority.key().as_ref(), VAULT_SEED],
        bump = pool_state.vault_bump,
        token::token_program = token_program
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// User's token account, destination of the returned tokens
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

pub fn handler_unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    check_token_program(ctx.accounts.token_program.key())?;

    require!(amount > 0, StakingError::InvalidAmount);
    require!(
        ctx.accounts.user_stake_entry.balance >= amount,
        StakingError::InsufficientStakeBalance
    );

    // Debit the ledger before moving tokens; both writes land in the same
    // instruction, so a transfer failure rolls them back
    let now = Clock::get()?.unix_timestamp;
    let entry = &mut ctx.accounts.user_stake_entry;
    let pool_state = &mut ctx.accounts.pool_state;

    entry.record_unstake(amount, now)?;
    pool_state.remove_stake(amount)?;

    let user_balance = entry.balance;
    let pool_total = pool_state.amount;
    let vault_auth_bump = pool_state.vault_auth_bump;

    // Vault debits are signed by the vault authority PDA using the bump
    // stored at pool creation
    let auth_seeds = &[VAULT_AUTH_SEED, &[vault_auth_bump]];
    let signer_seeds = &[&auth_seeds[..]];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.token_vault.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.pool_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    msg!(
        "Unstaked {} tokens. User balance: {}, Pool total: {}",
        amount,
        user_balance,
        pool_total
    );

    Ok(())
}
