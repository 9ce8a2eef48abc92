use anchor_lang::prelude::*;

/// Custom error codes for the merkle vesting distributor.
#[error_code]
pub enum DistributorError {
    #[msg("Merkle root is locked")]
    RootIsLocked,

    #[msg("Invalid amount or vesting window")]
    InvalidAmount,

    #[msg("Invalid merkle proof")]
    InvalidMerkleProof,

    // Cooldown not elapsed, nothing newly vested, or allocation expired.
    #[msg("Already claimed")]
    AlreadyClaimed,

    #[msg("Invalid address")]
    InvalidAddress,

    #[msg("Array lengths must match")]
    ArrayLengthMustMatch,

    #[msg("Ecosystem claim before expiry window has elapsed")]
    EcosystemClaimTooEarly,

    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Invalid vesting record account")]
    InvalidVestingRecord,

    #[msg("Batch size too large")]
    BatchTooLarge,
}

/// Result of the pure distributor logic; converts into `anchor_lang::Result` via `?`.
pub type DistributorResult<T> = core::result::Result<T, DistributorError>;
