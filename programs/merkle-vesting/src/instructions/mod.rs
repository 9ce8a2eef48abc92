pub mod initialize;
pub mod deposit_tokens;
pub mod lock_root;
pub mod update_merkle_root;
pub mod set_ecosystem_address;
pub mod claim;
pub mod claim_ecosystem_funds;
pub mod get_vesting;
pub mod get_vesting_batch;

pub use initialize::*;
pub use deposit_tokens::*;
pub use lock_root::*;
pub use update_merkle_root::*;
pub use set_ecosystem_address::*;
pub use claim::*;
pub use claim_ecosystem_funds::*;
pub use get_vesting::*;
pub use get_vesting_batch::*;
