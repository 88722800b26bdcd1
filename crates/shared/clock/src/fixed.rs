use sidera_ports::{ClockError, Timestamp, WallClock};

/// Clock that always returns one programmed instant
///
/// Deterministic stand-in for [`SystemClock`](crate::SystemClock) in tests.
pub struct FixedClock {
    at: Timestamp,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self { at }
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> Result<Timestamp, ClockError> {
        Ok(self.at)
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
