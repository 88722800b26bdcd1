//! SPI transport to the display controller.

use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use sidera_core::Frame;
use sidera_ports::{BusError, RegisterBus};

/// The controller tops out at 26 MHz; leave headroom.
const SPI_CLOCK_HZ: u32 = 20_000_000;

/// rppal-backed register bus on SPI0/CE0.
///
/// Mode 0: clock idle low, data latched on the leading edge. 8-bit words.
pub struct SpiBus {
    spi: Spi,
}

impl SpiBus {
    /// Acquire the bus device. Exclusive device access and word framing
    /// come from the kernel spidev driver.
    pub fn open() -> Result<Self, BusError> {
        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, SPI_CLOCK_HZ, Mode::Mode0)
            .map_err(|e| BusError::Unavailable(e.to_string()))?;
        Ok(Self { spi })
    }
}

impl RegisterBus for SpiBus {
    fn write(&mut self, frame: Frame) -> Result<(), BusError> {
        // Two bytes per transaction: the register address, then the data.
        self.spi
            .write(&[frame.register, frame.data])
            .map_err(|e| BusError::WriteFailed(e.to_string()))?;
        Ok(())
    }
}
