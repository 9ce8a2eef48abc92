//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Minimum spacing between two successful claims on the same allocation.
pub const CLAIM_COOLDOWN: i64 = SECONDS_PER_DAY;

/// Grace period after vesting end during which the recipient may still claim.
/// Past `end + EXPIRY_WINDOW` the remainder belongs to the ecosystem sink.
pub const EXPIRY_WINDOW: i64 = 69 * SECONDS_PER_DAY;

/// Max allocations answered per `get_vesting_batch` call (return data is capped at 1 KiB).
pub const MAX_BATCH_QUERY: usize = 10;

pub const DISTRIBUTOR_SEED: &[u8] = b"distributor";
pub const VAULT_SEED: &[u8] = b"vault";
pub const VESTING_SEED: &[u8] = b"vesting";
