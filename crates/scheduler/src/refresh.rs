//! The refresh loop.

use std::time::Duration;

use log::{debug, error, info};
use thiserror::Error;
use tokio::sync::watch;

use sidera_clock::{civil, sidereal};
use sidera_core::{ClockMode, DisplayOptions, DisplayValue};
use sidera_ports::{BusError, ClockError, RegisterBus, Timestamp, WallClock};

use crate::deadline::{self, DEFAULT_LATENCY_COMP_NANOS};

/// Fatal scheduler conditions. There is no degraded mode: any of these ends
/// the run after a best-effort safe-state write.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Bus(#[from] BusError),

    #[error("cannot arm wake-up: target instant out of range")]
    Arm,
}

/// Scheduler tuning beyond the display options.
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// How much earlier than the tick boundary to wake, in nanoseconds.
    /// Must stay under one tick (100 ms).
    pub latency_comp_nanos: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            latency_comp_nanos: DEFAULT_LATENCY_COMP_NANOS,
        }
    }
}

/// Drives the display at ten refreshes per second.
///
/// At most one refresh is ever in flight: the next wake-up is armed only
/// after the current cycle's writes are fully issued. Shutdown requests are
/// observed at wake-up boundaries, never by interrupting a refresh.
pub struct RefreshScheduler<C, B> {
    clock: C,
    bus: B,
    options: DisplayOptions,
    config: SchedulerConfig,
    shutdown: watch::Receiver<bool>,
}

impl<C: WallClock, B: RegisterBus> RefreshScheduler<C, B> {
    pub fn new(
        clock: C,
        bus: B,
        options: DisplayOptions,
        config: SchedulerConfig,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            clock,
            bus,
            options,
            config,
            shutdown,
        }
    }

    /// Bring the controller up and refresh until shutdown is requested or a
    /// fatal error occurs. The display is blanked on both exits.
    pub async fn run(mut self) -> Result<(), SchedulerError> {
        match self.drive().await {
            Ok(()) => {
                info!("shutdown requested, blanking display");
                self.blank()?;
                Ok(())
            }
            Err(e) => {
                error!("fatal: {e}");
                // Best effort: leave the hardware in its safe state.
                let _ = self.blank();
                Err(e)
            }
        }
    }

    async fn drive(&mut self) -> Result<(), SchedulerError> {
        self.power_up().await?;
        loop {
            if *self.shutdown.borrow() {
                return Ok(());
            }
            let now = self.refresh()?;
            let target = deadline::next_refresh(now, self.config.latency_comp_nanos)
                .ok_or(SchedulerError::Arm)?;

            // Arm a one-shot wake-up for the absolute target, computed from
            // a fresh clock read so the encode/write time above is already
            // accounted for.
            let wait = (target - self.clock.now()?)
                .to_std()
                .unwrap_or(Duration::ZERO);
            tokio::select! {
                _ = tokio::time::sleep(wait) => {}
                changed = self.shutdown.changed() => {
                    if changed.is_err() {
                        // Shutdown handle dropped; treat as a request.
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Power-up writes and the one-second lamp test.
    async fn power_up(&mut self) -> Result<(), SchedulerError> {
        info!(
            "powering up display, brightness {} ({})",
            self.options.brightness,
            self.clock.name()
        );
        for frame in sidera_core::power_up(self.options.brightness) {
            self.bus.write(frame)?;
        }
        self.bus.write(sidera_core::lamp_test(true))?;
        tokio::time::sleep(Duration::from_secs(1)).await;
        self.bus.write(sidera_core::lamp_test(false))?;
        Ok(())
    }

    /// One refresh: read the clock, derive the display time for the
    /// configured mode, write the image out. Returns the instant the cycle
    /// was based on.
    fn refresh(&mut self) -> Result<Timestamp, SchedulerError> {
        let now = self.clock.now()?;
        let time = match self.options.mode {
            ClockMode::Civil { .. } => civil::time_of_day(now),
            ClockMode::Sidereal { longitude_deg } => sidereal::time_of_day(now, longitude_deg),
        };
        debug!(
            "refresh {:02}:{:02}:{:02}.{}",
            time.hour, time.minute, time.second, time.tenth
        );
        for frame in DisplayValue::compose(time, &self.options).encode() {
            self.bus.write(frame)?;
        }
        Ok(now)
    }

    /// The defined safe state: controller shut down, display blank.
    fn blank(&mut self) -> Result<(), SchedulerError> {
        self.bus.write(sidera_core::shutdown())?;
        Ok(())
    }
}
