//! Entry freshness policy.

use std::time::{Duration, SystemTime};

/// Decide whether an entry written at `last_write` is still fresh at `now`.
///
/// An entry is fresh while `now - last_write <= ttl`, boundary included: an
/// entry exactly at the end of its window is still served. A TTL of zero
/// keeps an entry fresh only at the exact write instant, so it reads as
/// stale by the next check. A last-write time in the future (the clock moved
/// backwards between write and check) counts as fresh.
#[must_use]
pub fn is_fresh(last_write: SystemTime, ttl: Duration, now: SystemTime) -> bool {
    match now.duration_since(last_write) {
        Ok(age) => age <= ttl,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn test_entry_within_window_is_fresh() {
        let written = SystemTime::UNIX_EPOCH;
        let now = written + Duration::from_secs(30);
        assert!(is_fresh(written, TTL, now));
    }

    #[test]
    fn test_entry_past_window_is_stale() {
        let written = SystemTime::UNIX_EPOCH;
        let now = written + Duration::from_secs(61);
        assert!(!is_fresh(written, TTL, now));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let written = SystemTime::UNIX_EPOCH;
        let now = written + TTL;
        assert!(is_fresh(written, TTL, now));
        assert!(!is_fresh(written, TTL, now + Duration::from_nanos(1)));
    }

    #[test]
    fn test_zero_ttl_is_fresh_only_at_write_instant() {
        let written = SystemTime::UNIX_EPOCH;
        assert!(is_fresh(written, Duration::ZERO, written));
        assert!(!is_fresh(
            written,
            Duration::ZERO,
            written + Duration::from_nanos(1)
        ));
    }

    #[test]
    fn test_backwards_clock_counts_as_fresh() {
        let written = SystemTime::UNIX_EPOCH + Duration::from_secs(100);
        let now = SystemTime::UNIX_EPOCH;
        assert!(is_fresh(written, TTL, now));
    }
}
