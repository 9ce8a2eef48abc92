use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::error::{DistributorError, DistributorResult};
use crate::utils::merkle::{MerkleHash, LEAF_DOMAIN};

/// Allocation category. Encoded in the leaf as its declaration index.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Group {
    #[default]
    Investor,
    Team,
    Advisor,
    Community,
    Ecosystem,
}

/// The tuple committed to by the merkle root. Never stored on its own; its leaf
/// hash is the key for the matching `VestingRecord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub group: Group,
    pub recipient: Pubkey,
    pub amount: u64,
    pub start_ts: i64,
    pub end_ts: i64,
}

/// Canonical leaf preimage. Byte-only fields keep the layout padding-free.
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct LeafPreimage {
    domain: u8,
    group: u8,
    recipient: [u8; 32],
    amount: [u8; 8],
    start_ts: [u8; 8],
    end_ts: [u8; 8],
}

impl Allocation {
    pub fn new(group: Group, recipient: Pubkey, amount: u64, start_ts: i64, end_ts: i64) -> Self {
        Self {
            group,
            recipient,
            amount,
            start_ts,
            end_ts,
        }
    }

    pub fn validate(&self) -> DistributorResult<()> {
        if self.amount == 0 || self.start_ts >= self.end_ts {
            return Err(DistributorError::InvalidAmount);
        }
        Ok(())
    }

    pub fn leaf_hash(&self) -> MerkleHash {
        let preimage = LeafPreimage {
            domain: LEAF_DOMAIN,
            group: self.group as u8,
            recipient: self.recipient.to_bytes(),
            amount: self.amount.to_le_bytes(),
            start_ts: self.start_ts.to_le_bytes(),
            end_ts: self.end_ts.to_le_bytes(),
        };
        *blake3::hash(bytemuck::bytes_of(&preimage)).as_bytes()
    }
}
