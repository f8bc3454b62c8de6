use anchor_lang::prelude::*;

#[error_code]
pub enum VestingError {
    // Grant creation errors
    #[msg("Vesting amount must be greater than zero")]
    InvalidAmount,
    #[msg("Vesting end must be later than the current time")]
    InvalidDeadline,
    #[msg("Invalid recipient account")]
    InvalidRecipient,
    #[msg("Funder token balance is lower than the vesting amount")]
    InsufficientFunds,
    #[msg("Vault balance does not match the vested amount after funding")]
    FundingMismatch,

    // Access control errors
    #[msg("Signer is not authorized for this account")]
    Unauthorized,

    // Claim errors
    #[msg("Vesting period has not ended yet")]
    NotMatured,
    #[msg("Vesting grant has already been claimed")]
    AlreadySettled,
    #[msg("Token account is not owned by the grant recipient")]
    RecipientMismatch,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the grant's token mint")]
    TokenMintMismatch,
    #[msg("Token vault does not match the grant's vault")]
    VaultMismatch,
}
