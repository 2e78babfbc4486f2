use anchor_lang::prelude::*;

#[error_code]
pub enum ProceedsPoolError {
    // Access control errors
    #[msg("Only the pool admin can deposit proceeds")]
    OnlyAdmin,

    // Input validation errors
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Required account reference is the default address")]
    ZeroAddress,
    #[msg("Cannot transfer shares to self")]
    SelfTransfer,

    // Balance errors
    #[msg("Amount exceeds holder's share balance")]
    InsufficientBalance,
    #[msg("Insufficient vault balance for this payout")]
    InsufficientVaultBalance,
    #[msg("Position still holds shares or locked proceeds")]
    PositionNotEmpty,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the pool's asset mint")]
    TokenMintMismatch,
}
