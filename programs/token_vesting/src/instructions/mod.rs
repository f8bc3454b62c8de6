pub mod init_vesting;
pub mod claim_vesting;

pub use init_vesting::*;
pub use claim_vesting::*;
