use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTOR_SEED;
use crate::state::Distributor;

pub fn set_ecosystem_address(ctx: Context<SetEcosystemAddress>, ecosystem_address: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.distributor;
    st.require_admin(&ctx.accounts.admin.key())?;
    let old_address = st.set_ecosystem_address(ecosystem_address)?;
    emit!(EcosystemAddressSet {
        admin: st.admin,
        old_address,
        new_address: ecosystem_address,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetEcosystemAddress<'info> {
    #[account(mut, seeds = [DISTRIBUTOR_SEED], bump = distributor.bump)]
    pub distributor: Account<'info, Distributor>,
    pub admin: Signer<'info>,
}

#[event]
pub struct EcosystemAddressSet {
    pub admin: Pubkey,
    pub old_address: Option<Pubkey>,
    pub new_address: Pubkey,
}
