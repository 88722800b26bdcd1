use sidera_core::Frame;

use crate::error::BusError;

/// Port for the half-duplex register bus to the display controller
///
/// One call is one atomic two-byte transaction (register address, then
/// data). The bus grants exclusive access to a single owner; writes must
/// never be issued concurrently from more than one thread.
pub trait RegisterBus: Send {
    fn write(&mut self, frame: Frame) -> Result<(), BusError>;
}
