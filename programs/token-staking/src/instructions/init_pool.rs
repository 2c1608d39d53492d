use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{STAKE_POOL_STATE_SEED, VAULT_AUTH_SEED, VAULT_SEED};
use crate::error::StakingError;
use crate::state::PoolState;
use crate::utils::check_token_program;

/// Create the staking pool for a token mint
///
/// # Flow
/// 1. Derive the pool state PDA for the mint (fails if it already exists)
/// 2. Open the vault token account, owned by the global vault authority
/// 3. Record mints, vault, and every bump seed in the pool state
///
#[derive(Accounts)]
pub struct InitPool<'info> {
    /// Global vault authority PDA, custody signer over every pool vault.
    /// Never initialized; it exists only as a derived address.
    /// CHECK: key-less PDA validated by its seeds, holds no data
    #[account(
        seeds = [VAULT_AUTH_SEED],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// Pool state PDA, one per staked mint.
    /// A second init for the same mint fails in the system program.
    #[account(
        init,
        payer = payer,
        space = PoolState::SIZE,
        seeds = [token_mint.key().as_ref(), STAKE_POOL_STATE_SEED],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    /// Mint of the token to be staked
    #[account(
        token::token_program = token_program
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Vault holding every staked token of this pool
    #[account(
        init,
        payer = payer,
        seeds = [token_mint.key().as_ref(), pool_authority.key().as_ref(), VAULT_SEED],
        bump,
        token::mint = token_mint,
        token::authority = pool_authority,
        token::token_program = token_program
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Companion mint reserved for future receipt/reward issuance.
    /// Its mint authority must already be the vault authority PDA.
    #[account(
        constraint = staking_token_mint.mint_authority == COption::Some(pool_authority.key())
            @ StakingError::InvalidStakingTokenMint,
        token::token_program = token_program
    )]
    pub staking_token_mint: InterfaceAccount<'info, Mint>,

    /// Pays for the pool state and vault allocations
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler_init_pool(ctx: Context<InitPool>) -> Result<()> {
    check_token_program(ctx.accounts.token_program.key())?;

    let pool_state = &mut ctx.accounts.pool_state;

    pool_state.token_mint = ctx.accounts.token_mint.key();
    pool_state.staking_token_mint = ctx.accounts.staking_token_mint.key();
    pool_state.vault_authority = ctx.accounts.pool_authority.key();
    pool_state.token_vault = ctx.accounts.token_vault.key();

    pool_state.amount = 0;

    // Store every bump so signing never re-derives them
    pool_state.bump = ctx.bumps.pool_state;
    pool_state.vault_auth_bump = ctx.bumps.pool_authority;
    pool_state.vault_bump = ctx.bumps.token_vault;

    msg!(
        "Staking pool created: token_mint={}, vault={}",
        pool_state.token_mint,
        pool_state.token_vault
    );

    Ok(())
}
