use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTOR_SEED;
use crate::state::Distributor;

pub fn lock_root(ctx: Context<LockRoot>) -> Result<()> {
    let st = &mut ctx.accounts.distributor;
    st.require_admin(&ctx.accounts.admin.key())?;
    st.lock_root()?;
    emit!(RootLocked {
        admin: st.admin,
        merkle_root: st.merkle_root,
        ecosystem_address: st.ecosystem_address,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct LockRoot<'info> {
    #[account(mut, seeds = [DISTRIBUTOR_SEED], bump = distributor.bump)]
    pub distributor: Account<'info, Distributor>,
    pub admin: Signer<'info>,
}

#[event]
pub struct RootLocked {
    pub admin: Pubkey,
    pub merkle_root: [u8; 32],
    pub ecosystem_address: Option<Pubkey>,
}
