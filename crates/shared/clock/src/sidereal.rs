//! Mean sidereal time.
//!
//! Derives Greenwich/Local Mean Sidereal Time from a UTC timestamp and an
//! observer longitude, and decomposes it for the display.
//!
//! Large magnitudes (whole days since the epoch, whole seconds within the
//! day) stay in integer arithmetic; only sub-day residuals enter `f64`.
//! A single absolute-seconds float would burn most of the mantissa on the
//! epoch offset; the split keeps the fraction good to well below a
//! nanosecond through the same formula.

use sidera_core::TimeOfDay;
use sidera_ports::Timestamp;

/// 2000-01-01T00:00:00Z in Unix seconds...
const EPOCH_UNIX: i64 = 946_684_800;
/// ...and the same instant as a Julian Date.
const EPOCH_JD: f64 = 2_451_544.5;
/// Julian Date of the J2000.0 reference point, 2000-01-01T12:00:00Z.
const J2000_JD: f64 = 2_451_545.0;

const SECONDS_PER_DAY: i64 = 86_400;

/// Greenwich Mean Sidereal Time in hours, unreduced.
fn gmst_raw(ts: Timestamp) -> f64 {
    let secs = ts.timestamp();
    let nanos = ts.timestamp_subsec_nanos();

    // Whole days between the 2000-01-01 midnight epoch and the most recent
    // UTC midnight, and the seconds elapsed since that midnight.
    let days = secs.div_euclid(SECONDS_PER_DAY) - EPOCH_UNIX / SECONDS_PER_DAY;
    let in_day = secs.rem_euclid(SECONDS_PER_DAY) as f64 + f64::from(nanos) * 1e-9;

    // D0: Julian days from J2000.0 to the most recent midnight (a
    // half-integer, exact in f64).
    let d0 = days as f64 + (EPOCH_JD - J2000_JD);
    // H: hours since that midnight.
    let h = in_day / 3600.0;
    // T: Julian centuries from J2000.0.
    let t = (d0 + in_day / SECONDS_PER_DAY as f64) / 36_525.0;

    6.697_374_558 + 0.065_709_824_419_08 * d0 + 1.002_737_909_35 * h + 0.000_026 * t * t
}

/// Local Mean Sidereal Time in hours, reduced into [0, 24).
///
/// `longitude_deg` is degrees east of Greenwich (negative for west).
pub fn local_mean_sidereal(ts: Timestamp, longitude_deg: f64) -> f64 {
    let mut lmst = gmst_raw(ts) + longitude_deg / 360.0 * 24.0;
    while lmst >= 24.0 {
        lmst -= 24.0;
    }
    // Only reachable for pre-epoch timestamps at western longitudes.
    while lmst < 0.0 {
        lmst += 24.0;
    }
    lmst
}

/// Decompose a sidereal time in hours into display units by successive
/// truncation. The residual fraction at each step feeds the next digit, so
/// the chain must truncate (never round) in exactly this order.
pub fn decompose(hours: f64) -> TimeOfDay {
    let h = hours as u8;
    let m = ((hours - f64::from(h)) * 60.0) as u8;
    let s = (((hours - f64::from(h)) * 60.0 - f64::from(m)) * 60.0) as u8;
    let tenth =
        ((((hours - f64::from(h)) * 60.0 - f64::from(m)) * 60.0 - f64::from(s)) * 10.0) as u8;
    TimeOfDay {
        hour: h,
        minute: m,
        second: s,
        tenth,
    }
}

/// The display time for the sidereal mode.
pub fn time_of_day(ts: Timestamp, longitude_deg: f64) -> TimeOfDay {
    decompose(local_mean_sidereal(ts, longitude_deg))
}
