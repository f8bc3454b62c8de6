use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::TokenTransfer;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for opening a vesting grant
 *
 * - Creates or bumps the funder's nonce PDA
 * - Creates the vesting state PDA for the new nonce
 * - Creates the vault PDA, owned (as token authority) by the vesting state
 * - Moves the vested amount from the funder into the vault
 *
 * Access Control: the funder must sign
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitVesting<'info> {
    /// Grant counter of this funder
    /// - Derived from: ["funder_nonce", funder]
    #[account(
        init_if_needed,
        payer = funder,
        space = FunderNonce::LEN,
        seeds = [FUNDER_NONCE_SEED.as_bytes(), funder.key().as_ref()],
        bump
    )]
    pub funder_nonce: Account<'info, FunderNonce>,

    /// The grant being opened
    /// - Derived from: ["vesting", funder, funder_nonce.nonce + 1]
    /// - `init` fails if the account already exists
    #[account(
        init,
        payer = funder,
        space = VestingState::LEN,
        seeds = [
            VESTING_SEED.as_bytes(),
            funder.key().as_ref(),
            funder_nonce.nonce.wrapping_add(1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    /// Vault holding the escrowed tokens
    /// - Derived from: ["vault", vesting_state]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = vesting_state,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), vesting_state.key().as_ref()],
        bump,
        payer = funder,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Source of the vested tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::token_program = token_program,
        constraint = funder_token_account.owner == funder.key() @ VestingError::Unauthorized,
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub funder: Signer<'info>,

    /// CHECK: Only the key is recorded; ownership of the receiving token
    /// account is checked against it at claim time
    pub recipient: AccountInfo<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,

    pub rent: Sysvar<'info, Rent>,
}

/**
 * Opens and funds a grant
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Tokens to lock, in the mint's smallest unit
 * @param vesting_end - Unix timestamp from which the grant can be claimed
 *
 * @returns the vesting state address
 */
pub fn handle_init_vesting(
    ctx: Context<InitVesting>,
    amount: u64,
    vesting_end: i64,
) -> Result<Pubkey> {
    let now = Clock::get()?.unix_timestamp;

    let terms = GrantTerms {
        funder: ctx.accounts.funder.key(),
        recipient: ctx.accounts.recipient.key(),
        vesting_state: ctx.accounts.vesting_state.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        amount,
        vesting_end,
    };
    let nonce = ctx.accounts.funder_nonce.next()?;
    let grant = VestingState::new(&terms, now, nonce, ctx.bumps.vesting_state)?;

    require!(
        ctx.accounts.funder_token_account.amount >= amount,
        VestingError::InsufficientFunds
    );

    ctx.accounts.funder_nonce.nonce = nonce;
    ctx.accounts.vesting_state.set_inner(grant);

    TokenTransfer {
        token_program: ctx.accounts.token_program.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.token_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    }
    .signed_by_wallet(amount, ctx.accounts.token_mint.decimals)?;

    ctx.accounts.token_vault.reload()?;
    let vault_amount = ctx.accounts.token_vault.amount;
    ctx.accounts.vesting_state.check_funded(vault_amount)?;

    let vesting_state_key = ctx.accounts.vesting_state.key();
    msg!(
        "Vesting {} opened: {} tokens locked until {}",
        vesting_state_key,
        amount,
        vesting_end
    );

    emit_cpi!(VestingInitialized {
        vesting_state: vesting_state_key,
        nonce,
        funder: terms.funder,
        recipient: terms.recipient,
        token_mint: terms.token_mint,
        token_vault: terms.token_vault,
        amount,
        vesting_start: now,
        vesting_end,
    });

    Ok(vesting_state_key)
}
