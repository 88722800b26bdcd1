//! Sidera Ports
//!
//! Port definitions (traits) for the sidera clock daemon.
//! These define the boundaries between the display engine and the host:
//! the clock it reads and the bus it writes.

mod bus;
mod clock;
mod error;

pub use bus::RegisterBus;
pub use clock::{Timestamp, WallClock};
pub use error::{BusError, ClockError};
