use anchor_lang::prelude::*;

use crate::constants::CLAIM_COOLDOWN;
use crate::error::{DistributorError, DistributorResult};
use crate::state::{Allocation, Group};
use crate::utils::vesting;

/// Per-allocation claim bookkeeping, keyed by leaf hash.
///
/// Derivation: ["vesting", distributor, leaf_hash]
///
/// Created on the first successful claim and never closed; a drained record
/// (`claimed == total_claim`) stays behind as a receipt.
#[account]
#[derive(Default, Debug)]
pub struct VestingRecord {
    /// Cumulative amount released (to the recipient or swept).
    pub claimed: u64,
    /// Timestamp of the last successful claim, 0 if never claimed.
    pub last_claim_time: i64,
    pub group: Group,
    pub recipient: Pubkey,
    pub total_claim: u64,
    pub start_ts: i64,
    pub end_ts: i64,
    pub bump: u8,
}

impl VestingRecord {
    pub const SIZE: usize =
        8 +  // claimed
        8 +  // last_claim_time
        1 +  // group
        32 + // recipient
        8 +  // total_claim
        8 +  // start_ts
        8 +  // end_ts
        1;   // bump

    pub fn is_initialized(&self) -> bool {
        self.total_claim != 0
    }

    /// Copies the allocation into a fresh record. No-op on an existing record.
    pub fn open(&mut self, allocation: &Allocation, bump: u8) {
        if self.is_initialized() {
            return;
        }
        self.claimed = 0;
        self.last_claim_time = 0;
        self.group = allocation.group;
        self.recipient = allocation.recipient;
        self.total_claim = allocation.amount;
        self.start_ts = allocation.start_ts;
        self.end_ts = allocation.end_ts;
        self.bump = bump;
    }

    /// Vested minus claimed, ignoring cooldown. Zero once the allocation expired.
    pub fn claimable(&self, allocation: &Allocation, now_ts: i64) -> DistributorResult<u64> {
        if vesting::is_expired(now_ts, allocation.end_ts)? {
            return Ok(0);
        }
        let vested = vesting::vested_amount(
            allocation.amount,
            allocation.start_ts,
            allocation.end_ts,
            now_ts,
        )?;
        Ok(vested.saturating_sub(self.claimed))
    }

    /// Books a recipient claim and returns the amount to transfer.
    ///
    /// Every denial (expired, nothing newly vested, cooldown) is `AlreadyClaimed`.
    pub fn apply_claim(&mut self, allocation: &Allocation, now_ts: i64) -> DistributorResult<u64> {
        if vesting::is_expired(now_ts, allocation.end_ts)? {
            return Err(DistributorError::AlreadyClaimed);
        }

        let amount = self.claimable(allocation, now_ts)?;
        if amount == 0 {
            return Err(DistributorError::AlreadyClaimed);
        }

        if self.last_claim_time != 0 {
            let next_allowed = self
                .last_claim_time
                .checked_add(CLAIM_COOLDOWN)
                .ok_or(DistributorError::MathOverflow)?;
            if now_ts < next_allowed {
                return Err(DistributorError::AlreadyClaimed);
            }
        }

        let claimed = self
            .claimed
            .checked_add(amount)
            .ok_or(DistributorError::MathOverflow)?;
        if claimed > self.total_claim {
            return Err(DistributorError::MathOverflow);
        }
        self.claimed = claimed;
        self.last_claim_time = now_ts;
        Ok(amount)
    }

    /// Marks the record fully resolved and returns the unclaimed remainder
    /// owed to the ecosystem sink. Returns 0 (no change) if nothing is left.
    pub fn apply_sweep(&mut self, now_ts: i64) -> DistributorResult<u64> {
        if now_ts <= vesting::expiry_ts(self.end_ts)? {
            return Err(DistributorError::EcosystemClaimTooEarly);
        }
        let unclaimed = self
            .total_claim
            .checked_sub(self.claimed)
            .ok_or(DistributorError::MathOverflow)?;
        if unclaimed == 0 {
            return Ok(0);
        }
        self.claimed = self.total_claim;
        Ok(unclaimed)
    }

    /// Reads a record PDA that may not exist yet. An empty account is the zero record.
    pub fn load_or_default(info: &AccountInfo) -> Result<VestingRecord> {
        if info.data_is_empty() {
            return Ok(VestingRecord::default());
        }
        require_keys_eq!(*info.owner, crate::ID, DistributorError::InvalidVestingRecord);
        let data = info.try_borrow_data()?;
        VestingRecord::try_deserialize(&mut &data[..])
    }

    /// Writes the record back into an existing account (discriminator included).
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    pub fn snapshot(&self) -> VestingSnapshot {
        VestingSnapshot {
            claimed: self.claimed,
            last_claim_time: self.last_claim_time,
            group: self.group,
            recipient: self.recipient,
            total_claim: self.total_claim,
            start_ts: self.start_ts,
            end_ts: self.end_ts,
        }
    }
}

/// Read-only view of a vesting record returned by the query instructions.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingSnapshot {
    pub claimed: u64,
    pub last_claim_time: i64,
    pub group: Group,
    pub recipient: Pubkey,
    pub total_claim: u64,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EXPIRY_WINDOW, SECONDS_PER_DAY};

    const DAY: i64 = SECONDS_PER_DAY;
    const T: i64 = 1_767_225_600;
    const AMOUNT: u64 = 100_000_000_000; // 100 tokens at 9 decimals

    fn alloc() -> Allocation {
        Allocation::new(
            Group::Investor,
            Pubkey::new_from_array([3u8; 32]),
            AMOUNT,
            T,
            T + 365 * DAY,
        )
    }

    fn opened() -> VestingRecord {
        let mut r = VestingRecord::default();
        r.open(&alloc(), 254);
        r
    }

    #[test]
    fn open_copies_allocation_once() {
        let mut r = opened();
        assert!(r.is_initialized());
        assert_eq!(r.total_claim, AMOUNT);
        assert_eq!(r.recipient, alloc().recipient);
        assert_eq!(r.end_ts, T + 365 * DAY);
        assert_eq!(r.bump, 254);

        r.claimed = 10;
        r.open(&Allocation { amount: 1, ..alloc() }, 1);
        assert_eq!(r.claimed, 10);
        assert_eq!(r.total_claim, AMOUNT);
    }

    #[test]
    fn yearly_claim_scenario() {
        let a = alloc();
        let end = a.end_ts;
        let mut r = opened();

        let first = r.apply_claim(&a, T + DAY).unwrap();
        assert!(first > 0);
        assert_eq!(r.claimed, first);
        assert_eq!(r.last_claim_time, T + DAY);

        // Half a day later: cooldown.
        assert!(matches!(
            r.apply_claim(&a, T + DAY + DAY / 2),
            Err(DistributorError::AlreadyClaimed)
        ));
        assert_eq!(r.claimed, first);

        let second = r.apply_claim(&a, T + 2 * DAY).unwrap();
        assert!(second > 0);
        assert!(r.claimed > first && r.claimed < AMOUNT);

        let last = r.apply_claim(&a, end + DAY).unwrap();
        assert_eq!(first + second + last, AMOUNT);
        assert_eq!(r.claimed, AMOUNT);

        // Drained.
        assert!(matches!(
            r.apply_claim(&a, end + 3 * DAY),
            Err(DistributorError::AlreadyClaimed)
        ));
    }

    #[test]
    fn cooldown_boundary_is_inclusive() {
        let a = alloc();
        let mut r = opened();
        r.apply_claim(&a, T + 10 * DAY).unwrap();
        assert!(matches!(
            r.apply_claim(&a, T + 11 * DAY - 1),
            Err(DistributorError::AlreadyClaimed)
        ));
        assert!(r.apply_claim(&a, T + 11 * DAY).is_ok());
    }

    #[test]
    fn first_claim_skips_cooldown() {
        let a = alloc();
        let mut r = opened();
        assert_eq!(r.last_claim_time, 0);
        assert!(r.apply_claim(&a, a.end_ts).is_ok());
        assert_eq!(r.claimed, AMOUNT);
    }

    #[test]
    fn before_start_is_already_claimed() {
        let a = alloc();
        let mut r = opened();
        assert_eq!(r.claimable(&a, T - DAY).unwrap(), 0);
        assert!(matches!(
            r.apply_claim(&a, T - DAY),
            Err(DistributorError::AlreadyClaimed)
        ));
        assert_eq!(r.claimed, 0);
        assert_eq!(r.last_claim_time, 0);
    }

    #[test]
    fn expired_claim_fails_even_with_balance() {
        let a = alloc();
        let mut r = opened();
        let last_ok = a.end_ts + EXPIRY_WINDOW;

        assert_eq!(r.claimable(&a, last_ok).unwrap(), AMOUNT);
        assert_eq!(r.claimable(&a, last_ok + 1).unwrap(), 0);
        assert!(matches!(
            r.apply_claim(&a, last_ok + 1),
            Err(DistributorError::AlreadyClaimed)
        ));

        assert_eq!(r.apply_claim(&a, last_ok).unwrap(), AMOUNT);
    }

    #[test]
    fn claimed_is_monotone_and_bounded() {
        let a = alloc();
        let mut r = opened();
        let mut prev = 0;
        let mut now = T - 5 * DAY;
        while now <= a.end_ts + 80 * DAY {
            let _ = r.apply_claim(&a, now);
            assert!(r.claimed >= prev);
            assert!(r.claimed <= r.total_claim);
            prev = r.claimed;
            now += 17 * DAY / 10;
        }
        assert_eq!(r.claimed, AMOUNT);
    }

    #[test]
    fn sweep_too_early() {
        let a = alloc();
        let mut r = opened();
        r.apply_claim(&a, T + 30 * DAY).unwrap();
        let claimed = r.claimed;
        for now in [T, a.end_ts, a.end_ts + EXPIRY_WINDOW] {
            assert!(matches!(
                r.apply_sweep(now),
                Err(DistributorError::EcosystemClaimTooEarly)
            ));
        }
        assert_eq!(r.claimed, claimed);
    }

    #[test]
    fn sweep_takes_remainder_once() {
        let a = alloc();
        let mut r = opened();
        r.apply_claim(&a, T + 30 * DAY).unwrap();
        let claimed = r.claimed;

        let swept = r.apply_sweep(a.end_ts + 70 * DAY).unwrap();
        assert_eq!(swept, AMOUNT - claimed);
        assert_eq!(r.claimed, AMOUNT);

        assert_eq!(r.apply_sweep(a.end_ts + 71 * DAY).unwrap(), 0);
        assert_eq!(r.claimed, AMOUNT);
    }

    #[test]
    fn sweep_after_full_claim_is_noop() {
        let a = alloc();
        let mut r = opened();
        r.apply_claim(&a, a.end_ts + DAY).unwrap();
        assert_eq!(r.apply_sweep(a.end_ts + 70 * DAY).unwrap(), 0);
        assert_eq!(r.claimed, AMOUNT);
    }

    #[test]
    fn sweep_of_absent_record_is_noop() {
        let mut r = VestingRecord::default();
        assert_eq!(r.apply_sweep(EXPIRY_WINDOW + 1).unwrap(), 0);
        assert!(matches!(
            r.apply_sweep(EXPIRY_WINDOW),
            Err(DistributorError::EcosystemClaimTooEarly)
        ));
    }

    #[test]
    fn claim_after_sweep_is_denied() {
        let a = alloc();
        let mut r = opened();
        r.apply_sweep(a.end_ts + EXPIRY_WINDOW + 1).unwrap();
        assert!(matches!(
            r.apply_claim(&a, a.end_ts + EXPIRY_WINDOW + 2),
            Err(DistributorError::AlreadyClaimed)
        ));
    }

    #[test]
    fn snapshot_mirrors_record() {
        let r = opened();
        let s = r.snapshot();
        assert_eq!(s.total_claim, r.total_claim);
        assert_eq!(s.group, Group::Investor);
        assert_eq!(s.start_ts, T);
        assert_eq!(VestingRecord::default().snapshot(), VestingSnapshot::default());
    }
}
