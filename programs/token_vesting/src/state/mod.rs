pub mod vesting_state;
pub mod funder_nonce;

pub use vesting_state::*;
pub use funder_nonce::*;
