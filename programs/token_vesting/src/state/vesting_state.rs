use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::VestingError;

/// Lifecycle of a grant. A grant only ever moves from `Pending` to `Settled`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VestingStatus {
    /// Funded and waiting for its claim
    #[default]
    Pending,
    /// Released to the recipient; terminal
    Settled,
}

/// Terms a funder submits when opening a grant.
#[derive(Clone, Copy, Debug)]
pub struct GrantTerms {
    pub funder: Pubkey,
    pub recipient: Pubkey,
    /// Address the grant will live at; it cannot also be the recipient
    pub vesting_state: Pubkey,
    pub token_mint: Pubkey,
    pub token_vault: Pubkey,
    pub amount: u64,
    pub vesting_end: i64,
}

/// Ledger facts a claim is evaluated against, read once per instruction.
#[derive(Clone, Copy, Debug)]
pub struct ClaimRequest {
    /// Token account the release goes to
    pub destination: Pubkey,
    /// Owner of `destination`
    pub destination_owner: Pubkey,
    /// Current balance of the grant's vault
    pub vault_amount: u64,
    pub now: i64,
}

impl GrantTerms {
    /// Checks the terms against the clock value read for this instruction.
    pub fn validate(&self, now: i64) -> core::result::Result<(), VestingError> {
        if self.amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        if self.vesting_end <= now {
            return Err(VestingError::InvalidDeadline);
        }
        // A program-owned recipient could never move the released tokens
        if self.recipient == Pubkey::default()
            || self.recipient == self.vesting_state
            || self.recipient == self.token_vault
        {
            return Err(VestingError::InvalidRecipient);
        }
        Ok(())
    }
}

/**
 * Vesting grant state account
 *
 * One funder, one recipient, one amount, one deadline. The account is also
 * the token authority of its vault, so tokens can only leave the vault
 * through claim_vesting.
 *
 * Derivation: ["vesting", funder, nonce]
 *
 * Lifecycle:
 * 1. Created and funded by init_vesting (Pending)
 * 2. Flipped to Settled by the single successful claim_vesting
 * 3. Never closed by the program
 */
#[account]
#[derive(Default, Debug)]
pub struct VestingState {
    /// Bump seed for PDA derivation, needed to sign vault transfers
    pub bump: u8,

    /// Per-funder nonce used in the PDA seeds
    pub nonce: u32,

    /// Account that supplied the tokens
    pub funder: Pubkey,

    /// Only token accounts owned by this key can receive the release
    pub recipient: Pubkey,

    /// Mint of the escrowed token
    pub token_mint: Pubkey,

    /// Vault holding the escrowed tokens
    /// - Derived from: ["vault", vesting_state_key]
    pub token_vault: Pubkey,

    /// Escrowed amount in the token's smallest unit
    pub amount: u64,

    /// Unix timestamp of grant creation
    pub vesting_start: i64,

    /// Unix timestamp from which the grant can be claimed (inclusive)
    pub vesting_end: i64,

    pub status: VestingStatus,
}

impl VestingState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<VestingState>();

    /// Builds a new pending grant. Nothing is allocated or moved here; the
    /// caller commits the record and funds the vault only when this succeeds.
    pub fn new(
        terms: &GrantTerms,
        now: i64,
        nonce: u32,
        bump: u8,
    ) -> core::result::Result<Self, VestingError> {
        terms.validate(now)?;

        Ok(Self {
            bump,
            nonce,
            funder: terms.funder,
            recipient: terms.recipient,
            token_mint: terms.token_mint,
            token_vault: terms.token_vault,
            amount: terms.amount,
            vesting_start: now,
            vesting_end: terms.vesting_end,
            status: VestingStatus::Pending,
        })
    }

    /// True while the grant has not been claimed.
    pub fn is_initialized(&self) -> bool {
        self.status == VestingStatus::Pending
    }

    pub fn is_matured(&self, now: i64) -> bool {
        now >= self.vesting_end
    }

    /// Checks the vault right after funding. Fee-bearing mints deliver less
    /// than `amount`, and a grant must be fully backed.
    pub fn check_funded(&self, vault_amount: u64) -> core::result::Result<(), VestingError> {
        if vault_amount != self.amount {
            return Err(VestingError::FundingMismatch);
        }
        Ok(())
    }

    /**
     * Settles the grant and returns the amount to release.
     *
     * Validation order:
     * 1. Grant is still pending (AlreadySettled)
     * 2. Destination is a recipient-owned account other than the vault (RecipientMismatch)
     * 3. Clock has reached vesting_end (NotMatured)
     * 4. Vault holds at least the vested amount (InsufficientVaultBalance)
     *
     * A settled grant always reports AlreadySettled, whatever account or time
     * the retry uses. The status only changes once every check has passed.
     */
    pub fn claim(&mut self, request: &ClaimRequest) -> core::result::Result<u64, VestingError> {
        if self.status == VestingStatus::Settled {
            return Err(VestingError::AlreadySettled);
        }
        if request.destination_owner != self.recipient || request.destination == self.token_vault {
            return Err(VestingError::RecipientMismatch);
        }
        if !self.is_matured(request.now) {
            return Err(VestingError::NotMatured);
        }
        if request.vault_amount < self.amount {
            return Err(VestingError::InsufficientVaultBalance);
        }

        self.status = VestingStatus::Settled;
        Ok(self.amount)
    }

    /// Address of the vesting state for `funder`'s grant number `nonce`.
    pub fn find_address(funder: &Pubkey, nonce: u32) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                VESTING_SEED.as_bytes(),
                funder.as_ref(),
                nonce.to_le_bytes().as_ref(),
            ],
            &crate::ID,
        )
    }

    /// Address of the vault belonging to `vesting_state`.
    pub fn find_vault_address(vesting_state: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[VAULT_SEED.as_bytes(), vesting_state.as_ref()],
            &crate::ID,
        )
    }
}
