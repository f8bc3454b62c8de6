use anchor_lang::prelude::*;

use crate::error::VestingError;

/**
 * Per-funder grant counter
 *
 * Derivation: ["funder_nonce", funder]
 *
 * Created by the funder's first init_vesting (init_if_needed) and bumped by
 * every later one. The current value is part of the seeds of the vesting
 * state created alongside it, so grants from the same funder never collide.
 */
#[account]
#[derive(Default, Debug)]
pub struct FunderNonce {
    /// Nonce of the most recently created grant (0 = none yet)
    pub nonce: u32,
}

impl FunderNonce {
    pub const LEN: usize = 8 + std::mem::size_of::<FunderNonce>();

    /// Nonce the next grant of this funder will be derived with.
    pub fn next(&self) -> core::result::Result<u32, VestingError> {
        self.nonce
            .checked_add(1)
            .ok_or(VestingError::ArithmeticOverflow)
    }
}
