use chrono::Utc;
use sidera_ports::{ClockError, Timestamp, WallClock};

/// Real system clock for production use
///
/// Returns the host's current wall-clock time. The underlying read cannot
/// fail on this stack; the fallible signature belongs to the port so that
/// alternative clock sources can report errors.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemClock {
    fn now(&self) -> Result<Timestamp, ClockError> {
        Ok(Utc::now())
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::thread;

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock::new();
        let time1 = clock.now().unwrap();
        thread::sleep(std::time::Duration::from_millis(10));
        let time2 = clock.now().unwrap();

        assert!(time2 > time1);
        assert!(time2 - time1 >= Duration::milliseconds(9));
    }
}
