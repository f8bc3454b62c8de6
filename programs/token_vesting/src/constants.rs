use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds shared by the vesting instructions and by off-chain clients that
 * need to derive the same addresses.
 */

#[constant]
/// Seed for the per-funder grant counter
/// - Used in: ["funder_nonce", funder]
/// - Lets one funder open any number of independent grants
pub const FUNDER_NONCE_SEED: &str = "funder_nonce";

/// Seed for vesting state PDA derivation
/// - Used in: ["vesting", funder, nonce]
/// - The vesting state PDA is also the token authority of its vault
pub const VESTING_SEED: &str = "vesting";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", vesting_state_key]
/// - Exactly one vault per grant
pub const VAULT_SEED: &str = "vault";
