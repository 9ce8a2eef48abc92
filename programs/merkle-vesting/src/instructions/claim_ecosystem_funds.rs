use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{DISTRIBUTOR_SEED, VESTING_SEED};
use crate::error::DistributorError;
use crate::state::{Distributor, VestingRecord};

pub fn claim_ecosystem_funds(ctx: Context<ClaimEcosystemFunds>, leaf_hash: [u8; 32]) -> Result<()> {
    let distributor_ai = ctx.accounts.distributor.to_account_info();
    let record_ai = ctx.accounts.vesting_record.to_account_info();

    let st = &mut ctx.accounts.distributor;
    st.require_admin(&ctx.accounts.admin.key())?;

    let now = Clock::get()?.unix_timestamp;

    let had_record = !record_ai.data_is_empty();
    let mut record = VestingRecord::load_or_default(&record_ai)?;
    let amount = record.apply_sweep(now)?;

    if amount == 0 {
        msg!("Nothing to reclaim for this allocation");
        emit!(EcosystemFundsClaimed {
            leaf_hash,
            ecosystem_address: st.ecosystem_address,
            amount: 0,
        });
        return Ok(());
    }
    // A non-zero remainder implies the record exists.
    require!(had_record, DistributorError::InvalidVestingRecord);

    let sink = st.ecosystem_sink()?;
    require_keys_eq!(
        ctx.accounts.ecosystem_token_account.mint,
        st.mint,
        DistributorError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.ecosystem_token_account.owner,
        sink,
        DistributorError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= amount,
        DistributorError::InsufficientVaultBalance
    );

    st.total_reclaimed = st
        .total_reclaimed
        .checked_add(amount)
        .ok_or(DistributorError::MathOverflow)?;

    // Persist `claimed = total_claim` before the transfer CPI so a repeat sweep is a no-op.
    record.store(&record_ai)?;

    let signer_seeds: &[&[&[u8]]] = &[&[DISTRIBUTOR_SEED, &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.ecosystem_token_account.to_account_info(),
                authority: distributor_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(EcosystemFundsClaimed {
        leaf_hash,
        ecosystem_address: Some(sink),
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(leaf_hash: [u8; 32])]
pub struct ClaimEcosystemFunds<'info> {
    #[account(mut, seeds = [DISTRIBUTOR_SEED], bump = distributor.bump)]
    pub distributor: Account<'info, Distributor>,

    #[account(
        mut,
        seeds = [VESTING_SEED, distributor.key().as_ref(), leaf_hash.as_ref()],
        bump
    )]
    /// CHECK: Address pinned by seeds; may be uninitialized (read as the zero record in-handler).
    pub vesting_record: UncheckedAccount<'info>,

    #[account(
        mut,
        address = distributor.vault @ DistributorError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub ecosystem_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct EcosystemFundsClaimed {
    pub leaf_hash: [u8; 32],
    pub ecosystem_address: Option<Pubkey>,
    pub amount: u64,
}
