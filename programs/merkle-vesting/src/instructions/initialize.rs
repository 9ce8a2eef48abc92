use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{DISTRIBUTOR_SEED, VAULT_SEED};
use crate::state::{Distributor, RootLock};

pub fn initialize(ctx: Context<Initialize>, merkle_root: [u8; 32]) -> Result<()> {
    let st = &mut ctx.accounts.distributor;
    st.admin = ctx.accounts.admin.key();
    st.mint = ctx.accounts.mint.key();
    st.vault = ctx.accounts.vault.key();
    st.merkle_root = merkle_root;
    st.root_lock = RootLock::Unlocked;
    st.ecosystem_address = None;
    st.total_claimed = 0;
    st.total_reclaimed = 0;
    st.bump = ctx.bumps.distributor;
    st.vault_bump = ctx.bumps.vault;

    emit!(DistributorInitialized {
        admin: st.admin,
        mint: st.mint,
        vault: st.vault,
        merkle_root,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Distributor::SIZE,
        seeds = [DISTRIBUTOR_SEED],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = distributor,
        seeds = [VAULT_SEED, distributor.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct DistributorInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub merkle_root: [u8; 32],
}
