pub mod merkle;
pub mod vesting;
