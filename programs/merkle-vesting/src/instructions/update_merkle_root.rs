use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTOR_SEED;
use crate::state::Distributor;

pub fn update_merkle_root(ctx: Context<UpdateMerkleRoot>, new_root: [u8; 32]) -> Result<()> {
    let st = &mut ctx.accounts.distributor;
    st.require_admin(&ctx.accounts.admin.key())?;
    let old_root = st.update_merkle_root(new_root)?;
    emit!(MerkleRootUpdated {
        admin: st.admin,
        old_root,
        new_root,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateMerkleRoot<'info> {
    #[account(mut, seeds = [DISTRIBUTOR_SEED], bump = distributor.bump)]
    pub distributor: Account<'info, Distributor>,
    pub admin: Signer<'info>,
}

#[event]
pub struct MerkleRootUpdated {
    pub admin: Pubkey,
    pub old_root: [u8; 32],
    pub new_root: [u8; 32],
}
