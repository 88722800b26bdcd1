use chrono::{DateTime, Utc};

use crate::error::ClockError;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Port for the host's real-time clock
///
/// The scheduler has no valid basis to proceed without the time, so a read
/// failure is fatal to the caller. Implementations:
/// - Real system clock for production
/// - Fixed clock for deterministic tests
pub trait WallClock: Send + Sync {
    /// The current instant according to this clock
    fn now(&self) -> Result<Timestamp, ClockError>;

    /// The clock's name/identifier for debugging
    fn name(&self) -> &str {
        "WallClock"
    }
}
