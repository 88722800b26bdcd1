//! Sidera Refresh Scheduling
//!
//! Computes when each display refresh must fire and drives the refresh
//! loop: wake, read the clock, encode, write, re-arm. Every wake-up is
//! scheduled absolutely from the instant it was computed, so variable
//! dispatch latency in one cycle never drifts into the next.

pub mod deadline;
mod refresh;

pub use refresh::{RefreshScheduler, SchedulerConfig, SchedulerError};
