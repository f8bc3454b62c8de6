use anchor_lang::prelude::*;

declare_id!("FCAnkoGsx9m9e4DQcRFJg3VBC9UHtcVfMUtg49oU87vy");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Token Vesting Program
 *
 * Holds a funder's tokens in a program-controlled vault and releases them to a
 * designated recipient once a fixed point in time has passed, exactly once.
 *
 * Architecture:
 * - Funder Nonce PDA: per-funder counter, lets one funder open many grants
 * - Vesting State PDA: terms and lifecycle (Pending -> Settled) of one grant
 * - Token Vault PDA: holds the escrowed tokens, authority is the vesting state
 *
 * Workflow:
 * 1. Funder opens a grant; the amount moves into the vault
 * 2. After vesting_end anyone submits the claim; the vault pays the recipient
 * 3. Any later claim fails with AlreadySettled
 */
#[program]
pub mod token_vesting {
    use super::*;

    /**
     * Opens a vesting grant
     *
     * Records the terms and moves `amount` tokens from the funder's token
     * account into a fresh vault. All-or-nothing: any failed check aborts
     * before tokens move.
     *
     * @param ctx - Account context containing nonce, vesting state, vault, mint, funder and recipient
     * @param amount - Tokens to lock, must be > 0
     * @param vesting_end - Unix timestamp from which the grant can be claimed, must be in the future
     *
     * Access Control: Funder only
     */
    pub fn init_vesting(ctx: Context<InitVesting>, amount: u64, vesting_end: i64) -> Result<Pubkey> {
        handle_init_vesting(ctx, amount, vesting_end)
    }

    /**
     * Claims a matured grant
     *
     * Transfers the escrowed amount to the recipient's token account and
     * marks the grant settled.
     *
     * @param ctx - Account context containing vesting state, vault, recipient token account and mint
     *
     * Access Control: Anyone; the destination must belong to the recorded recipient
     */
    pub fn claim_vesting(ctx: Context<ClaimVesting>) -> Result<()> {
        handle_claim_vesting(ctx)
    }
}
