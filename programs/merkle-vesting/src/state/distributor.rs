use anchor_lang::prelude::*;

use crate::error::{DistributorError, DistributorResult};
use crate::state::Allocation;
use crate::utils::merkle::{self, MerkleHash};

/// One-way lock over the merkle root and the ecosystem sink.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RootLock {
    #[default]
    Unlocked,
    Locked,
}

impl RootLock {
    /// `Unlocked -> Locked`; `Locked` is terminal.
    pub fn lock(self) -> DistributorResult<RootLock> {
        match self {
            RootLock::Unlocked => Ok(RootLock::Locked),
            RootLock::Locked => Err(DistributorError::RootIsLocked),
        }
    }
}

/// Singleton distributor PDA holding the commitment state.
#[account]
#[derive(Default, Debug)]
pub struct Distributor {
    /// Owner authority for governance and ecosystem sweeps.
    pub admin: Pubkey,
    /// Token mint being distributed.
    pub mint: Pubkey,
    /// Program-owned token account holding the pre-funded balance.
    pub vault: Pubkey,
    /// Root committing to every authorized allocation.
    pub merkle_root: [u8; 32],
    pub root_lock: RootLock,
    /// Sink for expired, unclaimed remainders.
    pub ecosystem_address: Option<Pubkey>,
    /// Sum of all recipient claims.
    pub total_claimed: u64,
    /// Sum of all ecosystem sweeps.
    pub total_reclaimed: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Distributor {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        32 + // vault
        32 + // merkle_root
        1 +  // root_lock
        33 + // ecosystem_address
        8 +  // total_claimed
        8 +  // total_reclaimed
        1 +  // bump
        1;   // vault_bump

    pub fn require_admin(&self, signer: &Pubkey) -> DistributorResult<()> {
        if *signer != self.admin {
            return Err(DistributorError::Unauthorized);
        }
        Ok(())
    }

    pub fn is_root_locked(&self) -> bool {
        self.root_lock == RootLock::Locked
    }

    pub fn lock_root(&mut self) -> DistributorResult<()> {
        self.root_lock = self.root_lock.lock()?;
        Ok(())
    }

    /// Replaces the root and returns the previous one. The new tree is not inspected.
    pub fn update_merkle_root(&mut self, new_root: MerkleHash) -> DistributorResult<MerkleHash> {
        if self.is_root_locked() {
            return Err(DistributorError::RootIsLocked);
        }
        let old = self.merkle_root;
        self.merkle_root = new_root;
        Ok(old)
    }

    pub fn set_ecosystem_address(&mut self, addr: Pubkey) -> DistributorResult<Option<Pubkey>> {
        if addr == Pubkey::default() {
            return Err(DistributorError::InvalidAddress);
        }
        if self.is_root_locked() {
            return Err(DistributorError::RootIsLocked);
        }
        Ok(self.ecosystem_address.replace(addr))
    }

    pub fn ecosystem_sink(&self) -> DistributorResult<Pubkey> {
        self.ecosystem_address.ok_or(DistributorError::InvalidAddress)
    }

    /// Recomputes the leaf for `allocation` and checks it against the current root.
    /// Returns the leaf hash so callers can key the vesting record by it.
    pub fn authorize(&self, proof: &[MerkleHash], allocation: &Allocation) -> DistributorResult<MerkleHash> {
        let leaf = allocation.leaf_hash();
        if !merkle::verify(proof, &self.merkle_root, &leaf) {
            return Err(DistributorError::InvalidMerkleProof);
        }
        Ok(leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Group;
    use crate::utils::merkle::test_tree;

    fn admin() -> Pubkey {
        Pubkey::new_from_array([1u8; 32])
    }

    fn distributor(root: MerkleHash) -> Distributor {
        Distributor {
            admin: admin(),
            merkle_root: root,
            ..Default::default()
        }
    }

    fn allocations() -> Vec<Allocation> {
        (0u8..4)
            .map(|i| {
                Allocation::new(
                    Group::Community,
                    Pubkey::new_from_array([10 + i; 32]),
                    1_000 * (i as u64 + 1),
                    1_000,
                    2_000,
                )
            })
            .collect()
    }

    #[test]
    fn admin_check() {
        let d = distributor([0u8; 32]);
        assert!(d.require_admin(&admin()).is_ok());
        assert!(matches!(
            d.require_admin(&Pubkey::new_from_array([2u8; 32])),
            Err(DistributorError::Unauthorized)
        ));
    }

    #[test]
    fn lock_is_one_way() {
        let mut d = distributor([0u8; 32]);
        assert!(!d.is_root_locked());
        d.lock_root().unwrap();
        assert!(d.is_root_locked());
        assert!(matches!(d.lock_root(), Err(DistributorError::RootIsLocked)));
        assert!(d.is_root_locked());
    }

    #[test]
    fn root_update_until_locked() {
        let mut d = distributor([0u8; 32]);
        assert_eq!(d.update_merkle_root([1u8; 32]).unwrap(), [0u8; 32]);
        assert_eq!(d.update_merkle_root([2u8; 32]).unwrap(), [1u8; 32]);
        d.lock_root().unwrap();
        assert!(matches!(
            d.update_merkle_root([3u8; 32]),
            Err(DistributorError::RootIsLocked)
        ));
        assert_eq!(d.merkle_root, [2u8; 32]);
    }

    #[test]
    fn ecosystem_address_rules() {
        let mut d = distributor([0u8; 32]);
        assert!(matches!(d.ecosystem_sink(), Err(DistributorError::InvalidAddress)));
        assert!(matches!(
            d.set_ecosystem_address(Pubkey::default()),
            Err(DistributorError::InvalidAddress)
        ));

        let sink = Pubkey::new_from_array([5u8; 32]);
        assert_eq!(d.set_ecosystem_address(sink).unwrap(), None);
        assert_eq!(d.ecosystem_sink().unwrap(), sink);

        let sink2 = Pubkey::new_from_array([6u8; 32]);
        assert_eq!(d.set_ecosystem_address(sink2).unwrap(), Some(sink));

        d.lock_root().unwrap();
        assert!(matches!(
            d.set_ecosystem_address(sink),
            Err(DistributorError::RootIsLocked)
        ));
        // Null check runs before the lock check.
        assert!(matches!(
            d.set_ecosystem_address(Pubkey::default()),
            Err(DistributorError::InvalidAddress)
        ));
        assert_eq!(d.ecosystem_sink().unwrap(), sink2);
    }

    #[test]
    fn authorize_accepts_members_only() {
        let allocs = allocations();
        let leaves: Vec<_> = allocs.iter().map(|a| a.leaf_hash()).collect();
        let levels = test_tree::build(&leaves);
        let d = distributor(test_tree::root(&levels));

        for (i, a) in allocs.iter().enumerate() {
            let proof = test_tree::proof(&levels, i);
            assert_eq!(d.authorize(&proof, a).unwrap(), leaves[i]);
        }

        // Restating a different amount with a valid proof fails.
        let proof = test_tree::proof(&levels, 0);
        let inflated = Allocation { amount: 9_999_999, ..allocs[0] };
        assert!(matches!(
            d.authorize(&proof, &inflated),
            Err(DistributorError::InvalidMerkleProof)
        ));
        // Proof for another leaf fails.
        assert!(matches!(
            d.authorize(&test_tree::proof(&levels, 1), &allocs[0]),
            Err(DistributorError::InvalidMerkleProof)
        ));
    }

    #[test]
    fn root_swap_invalidates_old_proofs() {
        let allocs = allocations();
        let leaves: Vec<_> = allocs.iter().map(|a| a.leaf_hash()).collect();
        let levels = test_tree::build(&leaves);
        let mut d = distributor(test_tree::root(&levels));
        let proof = test_tree::proof(&levels, 2);
        assert!(d.authorize(&proof, &allocs[2]).is_ok());

        d.update_merkle_root([9u8; 32]).unwrap();
        assert!(matches!(
            d.authorize(&proof, &allocs[2]),
            Err(DistributorError::InvalidMerkleProof)
        ));
    }
}
