use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{DISTRIBUTOR_SEED, VESTING_SEED};
use crate::error::DistributorError;
use crate::state::{Allocation, Distributor, Group, VestingRecord};

pub fn claim(
    ctx: Context<Claim>,
    proof: Vec<[u8; 32]>,
    group: Group,
    recipient: Pubkey,
    amount: u64,
    start_ts: i64,
    end_ts: i64,
) -> Result<()> {
    let allocation = Allocation::new(group, recipient, amount, start_ts, end_ts);
    allocation.validate()?;

    // Avoid borrow checker conflicts: capture AccountInfos before taking mutable borrows.
    let distributor_ai = ctx.accounts.distributor.to_account_info();

    let st = &mut ctx.accounts.distributor;
    // The caller restates the allocation on every claim; the stored copy is bookkeeping only.
    let leaf_hash = st.authorize(&proof, &allocation)?;

    require_keys_eq!(
        ctx.accounts.recipient_token_account.mint,
        st.mint,
        DistributorError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.recipient_token_account.owner,
        recipient,
        DistributorError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;

    let record = &mut ctx.accounts.vesting_record;
    record.open(&allocation, ctx.bumps.vesting_record);
    let claimable = record.apply_claim(&allocation, now)?;

    require!(
        ctx.accounts.vault.amount >= claimable,
        DistributorError::InsufficientVaultBalance
    );

    st.total_claimed = st
        .total_claimed
        .checked_add(claimable)
        .ok_or(DistributorError::MathOverflow)?;

    // Ordering: `claimed` and `last_claim_time` are already updated above.
    // The transfer CPI comes last; if it fails the whole transaction reverts.
    let signer_seeds: &[&[&[u8]]] = &[&[DISTRIBUTOR_SEED, &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: distributor_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    emit!(TokensClaimed {
        leaf_hash,
        group,
        recipient,
        amount: claimable,
        claimed_total: record.claimed,
        total_claim: record.total_claim,
        claimed_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(
    proof: Vec<[u8; 32]>,
    group: Group,
    recipient: Pubkey,
    amount: u64,
    start_ts: i64,
    end_ts: i64
)]
pub struct Claim<'info> {
    #[account(mut, seeds = [DISTRIBUTOR_SEED], bump = distributor.bump)]
    pub distributor: Account<'info, Distributor>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + VestingRecord::SIZE,
        seeds = [
            VESTING_SEED,
            distributor.key().as_ref(),
            Allocation::new(group, recipient, amount, start_ts, end_ts).leaf_hash().as_ref()
        ],
        bump
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    #[account(
        mut,
        address = distributor.vault @ DistributorError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    /// Anyone may submit a claim; funds only ever go to `recipient`'s token account.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub leaf_hash: [u8; 32],
    pub group: Group,
    pub recipient: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub total_claim: u64,
    pub claimed_at: i64,
}
