use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::TokenTransfer;
use crate::event::*;

/**
 * Account context for claiming a matured grant
 *
 * Access Control: anyone may submit the claim. Funds can only go to a token
 * account owned by the recipient recorded in the grant, so the caller's
 * identity does not matter.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimVesting<'info> {
    /// The grant being claimed
    /// - Re-derived from the stored funder and nonce
    #[account(
        mut,
        seeds = [
            VESTING_SEED.as_bytes(),
            vesting_state.funder.as_ref(),
            vesting_state.nonce.to_le_bytes().as_ref()
        ],
        bump = vesting_state.bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    /// Vault holding the escrowed tokens
    /// - Derived from: ["vault", vesting_state]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), vesting_state.key().as_ref()],
        bump,
        constraint = token_vault.key() == vesting_state.token_vault @ VestingError::VaultMismatch
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Destination of the release; its owner must be the recorded recipient
    #[account(
        mut,
        token::token_program = token_program,
        constraint = recipient_token_account.mint == vesting_state.token_mint @ VestingError::TokenMintMismatch
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == vesting_state.token_mint @ VestingError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Releases a matured grant to its recipient
 *
 * Validation Process (see VestingState::claim):
 * 1. Grant is still pending
 * 2. Receiving token account belongs to the recipient and is not the vault
 * 3. Clock has reached vesting_end
 * 4. Vault still holds the vested amount
 *
 * The status flip and the vault transfer happen in the same instruction, so
 * a failed transfer reverts the flip as well.
 */
pub fn handle_claim_vesting(ctx: Context<ClaimVesting>) -> Result<()> {
    let request = ClaimRequest {
        destination: ctx.accounts.recipient_token_account.key(),
        destination_owner: ctx.accounts.recipient_token_account.owner,
        vault_amount: ctx.accounts.token_vault.amount,
        now: Clock::get()?.unix_timestamp,
    };

    // ===== VALIDATION + EFFECTS PHASE =====

    let vesting_state = &mut ctx.accounts.vesting_state;
    let released = vesting_state.claim(&request)?;

    let funder_key = vesting_state.funder;
    let nonce_bytes = vesting_state.nonce.to_le_bytes();
    let vesting_bump = vesting_state.bump;
    let recipient_key = vesting_state.recipient;
    let vesting_state_key = vesting_state.key();

    // ===== INTERACTIONS PHASE =====

    let seeds = &[
        VESTING_SEED.as_bytes(),
        funder_key.as_ref(),
        nonce_bytes.as_ref(),
        &[vesting_bump],
    ];
    let signer = &[&seeds[..]];

    TokenTransfer {
        token_program: ctx.accounts.token_program.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        from: ctx.accounts.token_vault.to_account_info(),
        to: ctx.accounts.recipient_token_account.to_account_info(),
        authority: ctx.accounts.vesting_state.to_account_info(),
    }
    .signed_by_pda(released, ctx.accounts.token_mint.decimals, signer)?;

    msg!("Vesting {} settled: {} tokens released", vesting_state_key, released);

    emit_cpi!(VestingClaimed {
        vesting_state: vesting_state_key,
        recipient: recipient_key,
        recipient_token_account: ctx.accounts.recipient_token_account.key(),
        amount: released,
        claimed_at: request.now,
    });

    Ok(())
}
