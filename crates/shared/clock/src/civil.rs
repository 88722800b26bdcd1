//! Civil (wall-clock) time for the display.
//!
//! The displayed tenth is the *nearest* tenth of a second: nanoseconds are
//! truncated to hundredths, the hundredth count rounds to the nearest
//! tenth, and a round past .95 carries into the whole seconds before the
//! local decomposition.

use chrono::{Duration, TimeZone, Timelike};
use sidera_core::TimeOfDay;
use sidera_ports::Timestamp;

/// Decompose a timestamp in the given time zone, rounded to the nearest
/// tenth of a second.
pub fn time_of_day_in<Tz: TimeZone>(ts: Timestamp, tz: &Tz) -> TimeOfDay {
    let hundredths = ts.timestamp_subsec_nanos() / 10_000_000;
    let mut tenth = (hundredths + 5) / 10;
    let mut local = ts.with_timezone(tz);
    if tenth >= 10 {
        // Rounded up across the second boundary.
        local = local + Duration::seconds(1);
        tenth -= 10;
    }
    TimeOfDay {
        hour: local.hour() as u8,
        minute: local.minute() as u8,
        second: local.second() as u8,
        tenth: tenth as u8,
    }
}

/// Decompose in the host's local time zone.
pub fn time_of_day(ts: Timestamp) -> TimeOfDay {
    time_of_day_in(ts, &chrono::Local)
}
