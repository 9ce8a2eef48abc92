//! BLAKE3 merkle inclusion proofs over sorted pairs.
//!
//! Leaves and interior nodes are hashed under distinct one-byte domains so an
//! interior node can never be replayed as a leaf.

pub const LEAF_DOMAIN: u8 = 0x00;
pub const NODE_DOMAIN: u8 = 0x01;

pub type MerkleHash = [u8; 32];

pub fn hash_node(a: &MerkleHash, b: &MerkleHash) -> MerkleHash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[NODE_DOMAIN]);
    hasher.update(lo);
    hasher.update(hi);
    *hasher.finalize().as_bytes()
}

/// Returns true if `proof` links `leaf` to `root`.
pub fn verify(proof: &[MerkleHash], root: &MerkleHash, leaf: &MerkleHash) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |acc, sibling| hash_node(&acc, sibling));
    computed == *root
}
