use anchor_lang::prelude::*;

use crate::constants::{DISTRIBUTOR_SEED, VESTING_SEED};
use crate::error::DistributorResult;
use crate::state::{Allocation, Distributor, Group, VestingRecord, VestingSnapshot};

/// Snapshot plus vested-minus-claimed. No proof is checked; cooldown is ignored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingQuote {
    pub record: VestingSnapshot,
    pub claimable: u64,
}

pub fn quote(record: &VestingRecord, allocation: &Allocation, now_ts: i64) -> DistributorResult<VestingQuote> {
    Ok(VestingQuote {
        record: record.snapshot(),
        claimable: record.claimable(allocation, now_ts)?,
    })
}

pub fn get_vesting(
    ctx: Context<GetVesting>,
    group: Group,
    recipient: Pubkey,
    amount: u64,
    start_ts: i64,
    end_ts: i64,
) -> Result<VestingQuote> {
    let allocation = Allocation::new(group, recipient, amount, start_ts, end_ts);
    let now = Clock::get()?.unix_timestamp;

    let record = VestingRecord::load_or_default(&ctx.accounts.vesting_record.to_account_info())?;
    let q = quote(&record, &allocation, now)?;

    emit!(VestingQuoted {
        leaf_hash: allocation.leaf_hash(),
        recipient,
        claimed: q.record.claimed,
        claimable: q.claimable,
        quoted_at: now,
    });

    Ok(q)
}

#[derive(Accounts)]
#[instruction(group: Group, recipient: Pubkey, amount: u64, start_ts: i64, end_ts: i64)]
pub struct GetVesting<'info> {
    #[account(seeds = [DISTRIBUTOR_SEED], bump = distributor.bump)]
    pub distributor: Account<'info, Distributor>,

    #[account(
        seeds = [
            VESTING_SEED,
            distributor.key().as_ref(),
            Allocation::new(group, recipient, amount, start_ts, end_ts).leaf_hash().as_ref()
        ],
        bump
    )]
    /// CHECK: Address pinned by seeds; may be uninitialized (read as the zero record).
    pub vesting_record: UncheckedAccount<'info>,
}

#[event]
pub struct VestingQuoted {
    pub leaf_hash: [u8; 32],
    pub recipient: Pubkey,
    pub claimed: u64,
    pub claimable: u64,
    pub quoted_at: i64,
}
