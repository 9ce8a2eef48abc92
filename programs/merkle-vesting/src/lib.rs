use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use constants::VESTING_SEED;
use error::DistributorError;
use instructions::*;
use state::{Allocation, Group, VestingRecord};

declare_id!("7vtRX7NFUUXxppxzTcFWkGdukc8TqPWQLLxws5YhhPCH");

#[program]
pub mod merkle_vesting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, merkle_root: [u8; 32]) -> Result<()> {
        instructions::initialize::initialize(ctx, merkle_root)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn lock_root(ctx: Context<LockRoot>) -> Result<()> {
        instructions::lock_root::lock_root(ctx)
    }

    pub fn update_merkle_root(ctx: Context<UpdateMerkleRoot>, new_root: [u8; 32]) -> Result<()> {
        instructions::update_merkle_root::update_merkle_root(ctx, new_root)
    }

    pub fn set_ecosystem_address(ctx: Context<SetEcosystemAddress>, ecosystem_address: Pubkey) -> Result<()> {
        instructions::set_ecosystem_address::set_ecosystem_address(ctx, ecosystem_address)
    }

    pub fn claim(
        ctx: Context<Claim>,
        proof: Vec<[u8; 32]>,
        group: Group,
        recipient: Pubkey,
        amount: u64,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<()> {
        instructions::claim::claim(ctx, proof, group, recipient, amount, start_ts, end_ts)
    }

    pub fn claim_ecosystem_funds(ctx: Context<ClaimEcosystemFunds>, leaf_hash: [u8; 32]) -> Result<()> {
        instructions::claim_ecosystem_funds::claim_ecosystem_funds(ctx, leaf_hash)
    }

    pub fn get_vesting(
        ctx: Context<GetVesting>,
        group: Group,
        recipient: Pubkey,
        amount: u64,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<VestingQuote> {
        instructions::get_vesting::get_vesting(ctx, group, recipient, amount, start_ts, end_ts)
    }

    pub fn get_vesting_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, GetVestingBatch<'info>>,
        groups: Vec<Group>,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
        start_ts: Vec<i64>,
        end_ts: Vec<i64>,
    ) -> Result<VestingBatchQuote> {
        let n = batch_len(&[
            groups.len(),
            recipients.len(),
            amounts.len(),
            start_ts.len(),
            end_ts.len(),
            ctx.remaining_accounts.len(),
        ])?;

        let now = Clock::get()?.unix_timestamp;
        let distributor_key = ctx.accounts.distributor.key();

        let mut out = VestingBatchQuote {
            records: Vec::with_capacity(n),
            claimables: Vec::with_capacity(n),
        };
        for (i, info) in ctx.remaining_accounts.iter().enumerate() {
            let allocation = Allocation::new(groups[i], recipients[i], amounts[i], start_ts[i], end_ts[i]);
            let leaf_hash = allocation.leaf_hash();
            let (expected, _) = Pubkey::find_program_address(
                &[VESTING_SEED, distributor_key.as_ref(), leaf_hash.as_ref()],
                ctx.program_id,
            );
            require_keys_eq!(info.key(), expected, DistributorError::InvalidVestingRecord);

            let record = VestingRecord::load_or_default(info)?;
            let q = quote(&record, &allocation, now)?;
            out.records.push(q.record);
            out.claimables.push(q.claimable);
        }

        Ok(out)
    }
}
