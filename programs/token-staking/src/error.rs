use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    // Amount Errors
    #[msg("Invalid amount: must be greater than zero")]
    InvalidAmount,

    #[msg("Insufficient staked balance")]
    InsufficientStakeBalance,

    // Math Errors
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    // Account Validation Errors
    #[msg("Signer does not own this stake entry")]
    InvalidUser,

    #[msg("Token account mint does not match the pool's staked mint")]
    InvalidMint,

    #[msg("Staking token mint authority must be the vault authority")]
    InvalidStakingTokenMint,

    #[msg("Token program must be Token-2022")]
    InvalidTokenProgram,
}
