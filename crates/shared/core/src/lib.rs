//! Sidera Core Domain
//!
//! Pure domain types for the sidera display engine: the MAX6951 register
//! map, display values and options, and the digit encoder.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod display;
pub mod encoder;
pub mod registers;

// Re-export commonly used types at crate root
pub use display::{ClockMode, DisplayOptions, TimeOfDay};
pub use encoder::{DisplayValue, lamp_test, power_up, shutdown};
pub use registers::{Digit, Frame};
