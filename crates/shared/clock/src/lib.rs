//! Sidera Clock Infrastructure
//!
//! Time sources and time derivations for the display engine:
//!
//! - [`SystemClock`] reads the host's real-time clock (production)
//! - [`FixedClock`] returns a programmed instant (deterministic tests)
//! - [`sidereal`] derives Local Mean Sidereal Time from UTC and a longitude
//! - [`civil`] rounds and decomposes local wall-clock time

pub mod civil;
mod fixed;
pub mod sidereal;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the WallClock trait for convenience
pub use sidera_ports::WallClock;
