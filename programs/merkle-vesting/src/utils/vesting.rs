//! Linear vesting between two Unix timestamps.
//! - now < start          => 0
//! - now >= end           => amount
//! - otherwise            => floor(amount * (now - start) / (end - start))
//!
//! Floor division is the only rounding in the program; the full amount is
//! reached exactly at `end`, so cumulative claims never leave dust behind.

use crate::constants::EXPIRY_WINDOW;
use crate::error::{DistributorError, DistributorResult};

pub fn vested_amount(amount: u64, start_ts: i64, end_ts: i64, now_ts: i64) -> DistributorResult<u64> {
    if start_ts >= end_ts {
        return Err(DistributorError::InvalidAmount);
    }
    if now_ts < start_ts {
        return Ok(0);
    }
    if now_ts >= end_ts {
        return Ok(amount);
    }

    let elapsed = (now_ts as i128)
        .checked_sub(start_ts as i128)
        .ok_or(DistributorError::MathOverflow)? as u128;
    let duration = (end_ts as i128)
        .checked_sub(start_ts as i128)
        .ok_or(DistributorError::MathOverflow)? as u128;

    let v = (amount as u128)
        .checked_mul(elapsed)
        .ok_or(DistributorError::MathOverflow)?
        .checked_div(duration)
        .ok_or(DistributorError::MathOverflow)?;
    u64::try_from(v).map_err(|_| DistributorError::MathOverflow)
}

/// Last instant at which the recipient may still claim (inclusive).
pub fn expiry_ts(end_ts: i64) -> DistributorResult<i64> {
    end_ts
        .checked_add(EXPIRY_WINDOW)
        .ok_or(DistributorError::MathOverflow)
}

/// True once the allocation is closed to its recipient and sweepable.
pub fn is_expired(now_ts: i64, end_ts: i64) -> DistributorResult<bool> {
    Ok(now_ts > expiry_ts(end_ts)?)
}
