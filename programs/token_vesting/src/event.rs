use anchor_lang::prelude::*;

/// Event emitted when a grant is created and funded
#[event]
pub struct VestingInitialized {
    /// The vesting state account public key
    pub vesting_state: Pubkey,
    /// Per-funder sequence number of the grant
    pub nonce: u32,
    /// Account that supplied the tokens
    pub funder: Pubkey,
    /// Account entitled to the tokens at maturity
    pub recipient: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Amount of tokens locked in the vault
    pub amount: u64,
    /// Time the grant was created
    pub vesting_start: i64,
    /// Time from which the grant can be claimed
    pub vesting_end: i64,
}

/// Event emitted when a matured grant is released to its recipient
#[event]
pub struct VestingClaimed {
    /// The vesting state account public key
    pub vesting_state: Pubkey,
    /// Recipient recorded in the grant
    pub recipient: Pubkey,
    /// Token account that received the tokens
    pub recipient_token_account: Pubkey,
    /// Amount of tokens released
    pub amount: u64,
    /// Clock value the claim was evaluated against
    pub claimed_at: i64,
}
