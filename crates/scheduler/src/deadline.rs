//! Next-refresh deadline computation.
//!
//! The display ticks ten times per second; the top-level time unit is still
//! one second. Each cycle rounds the current instant up to the next tenth
//! of a second, then biases the wake-up early by a latency-compensation
//! offset so that after dispatch delay the refresh work lands on the
//! boundary.

use chrono::DateTime;
use sidera_ports::Timestamp;

pub const NANOS_PER_SECOND: u32 = 1_000_000_000;
pub const NANOS_PER_TENTH: u32 = NANOS_PER_SECOND / 10;
pub const NANOS_PER_HUNDREDTH: u32 = NANOS_PER_SECOND / 100;

/// Default wake-up dispatch compensation in nanoseconds (250 us).
///
/// An empirical figure for one observed platform; recalibrate per target.
pub const DEFAULT_LATENCY_COMP_NANOS: u32 = 250_000;

/// The absolute instant at which the next refresh must fire.
///
/// Truncate the sub-second part to hundredths, round to the nearest tenth
/// and step to the *next* one (carrying into whole seconds on overflow),
/// then subtract the compensation. When the compensation crosses back over
/// the second boundary, the target becomes the tail end of the previous
/// second.
///
/// `latency_comp_nanos` must stay under one tick. Returns `None` when the
/// target cannot be represented, which the caller treats as an arming
/// failure.
pub fn next_refresh(now: Timestamp, latency_comp_nanos: u32) -> Option<Timestamp> {
    debug_assert!(latency_comp_nanos < NANOS_PER_TENTH);

    let mut secs = now.timestamp();
    let hundredths = now.timestamp_subsec_nanos() / NANOS_PER_HUNDREDTH;
    let mut tenth = (hundredths + 5) / 10 + 1;
    while tenth >= 10 {
        secs += 1;
        tenth -= 10;
    }
    let nanos = if tenth != 0 {
        tenth * NANOS_PER_TENTH - latency_comp_nanos
    } else {
        // Backing off from :00.0 crosses the second boundary.
        secs -= 1;
        NANOS_PER_SECOND - latency_comp_nanos
    };
    DateTime::from_timestamp(secs, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    const COMP: u32 = DEFAULT_LATENCY_COMP_NANOS;

    fn at(nanos: u32) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000, nanos).unwrap()
    }

    fn subsec(ts: Timestamp) -> u32 {
        ts.timestamp_subsec_nanos()
    }

    #[test]
    fn targets_the_next_tenth_minus_compensation() {
        let target = next_refresh(at(0), COMP).unwrap();
        assert_eq!(target.timestamp(), 1_700_000_000);
        assert_eq!(subsec(target), NANOS_PER_TENTH - COMP);

        let target = next_refresh(at(337_000_000), COMP).unwrap();
        assert_eq!(subsec(target), 4 * NANOS_PER_TENTH - COMP);
    }

    #[test]
    fn rounds_the_hundredths_to_the_nearest_tenth() {
        // .46 rounds up to .5, so the next tenth is .6.
        let target = next_refresh(at(460_000_000), COMP).unwrap();
        assert_eq!(subsec(target), 6 * NANOS_PER_TENTH - COMP);

        // .44 rounds down to .4, so the next tenth is .5.
        let target = next_refresh(at(440_000_000), COMP).unwrap();
        assert_eq!(subsec(target), 5 * NANOS_PER_TENTH - COMP);
    }

    #[test]
    fn carries_into_the_next_second() {
        let target = next_refresh(at(960_000_000), COMP).unwrap();
        assert_eq!(target.timestamp(), 1_700_000_001);
        assert_eq!(subsec(target), NANOS_PER_TENTH - COMP);
    }

    #[test]
    fn compensation_rolls_back_over_the_second_boundary() {
        // .87 rounds to .9, next tenth is the :00.0 boundary; the bias
        // lands the target at the tail of the current second.
        let target = next_refresh(at(870_000_000), COMP).unwrap();
        assert_eq!(target.timestamp(), 1_700_000_000);
        assert_eq!(subsec(target), NANOS_PER_SECOND - COMP);
    }

    #[test]
    fn zero_compensation_lands_exactly_on_the_boundary() {
        let target = next_refresh(at(120_000_000), 0).unwrap();
        assert_eq!(subsec(target), 2 * NANOS_PER_TENTH);
    }

    #[test]
    fn idempotent_at_the_computed_target() {
        // Re-applying the computation at the target (plus the bias it
        // subtracted) yields the same target plus exactly one tenth.
        let now = at(337_000_000);
        let target = next_refresh(now, COMP).unwrap();
        let again = next_refresh(target + Duration::nanoseconds(i64::from(COMP)), COMP).unwrap();
        assert_eq!(
            again - target,
            Duration::nanoseconds(i64::from(NANOS_PER_TENTH))
        );
    }
}
