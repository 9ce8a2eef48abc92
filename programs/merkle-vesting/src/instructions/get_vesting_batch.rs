use anchor_lang::prelude::*;

use crate::constants::{DISTRIBUTOR_SEED, MAX_BATCH_QUERY};
use crate::error::{DistributorError, DistributorResult};
use crate::state::{Distributor, VestingSnapshot};

// NOTE: `get_vesting_batch` handler logic lives in `src/lib.rs` to avoid Anchor
// `Context` lifetime invariance issues when iterating `remaining_accounts`.

/// Parallel results, one entry per queried allocation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct VestingBatchQuote {
    pub records: Vec<VestingSnapshot>,
    pub claimables: Vec<u64>,
}

/// Checks every input sequence has the same length before any element is read.
pub fn batch_len(lengths: &[usize]) -> DistributorResult<usize> {
    let n = lengths.first().copied().unwrap_or(0);
    if lengths.iter().any(|&l| l != n) {
        return Err(DistributorError::ArrayLengthMustMatch);
    }
    if n > MAX_BATCH_QUERY {
        return Err(DistributorError::BatchTooLarge);
    }
    Ok(n)
}

/// Vesting record PDAs are passed as remaining accounts, in input order.
#[derive(Accounts)]
pub struct GetVestingBatch<'info> {
    #[account(seeds = [DISTRIBUTOR_SEED], bump = distributor.bump)]
    pub distributor: Account<'info, Distributor>,
}
