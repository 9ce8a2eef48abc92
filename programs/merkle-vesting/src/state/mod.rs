pub mod allocation;
pub mod distributor;
pub mod vesting_record;

pub use allocation::*;
pub use distributor::*;
pub use vesting_record::*;
