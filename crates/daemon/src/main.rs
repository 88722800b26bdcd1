//! siderad - drives a MAX6951 seven-segment clock display over SPI.
//!
//! Long-lived foreground process for a Raspberry Pi class machine; run it
//! under a service manager for backgrounding and scheduling class. Shows
//! host local time or local mean sidereal time at ten refreshes per second.

mod cli;
mod spi;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::watch;

use sidera_clock::SystemClock;
use sidera_core::DisplayOptions;
use sidera_scheduler::{RefreshScheduler, SchedulerConfig};

use crate::cli::Cli;
use crate::spi::SpiBus;

fn main() -> ExitCode {
    env_logger::init();

    let args = Cli::parse();
    let options = args.display_options();
    let config = SchedulerConfig {
        latency_comp_nanos: args.latency_comp_us * 1_000,
    };

    // Fail before any hardware interaction is attempted elsewhere.
    let bus = match SpiBus::open() {
        Ok(bus) => bus,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("cannot start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(bus, options, config))
}

async fn run(bus: SpiBus, options: DisplayOptions, config: SchedulerConfig) -> ExitCode {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    if let Err(e) = spawn_signal_listener(shutdown_tx) {
        error!("cannot install signal handlers: {e}");
        return ExitCode::FAILURE;
    }

    info!("starting siderad");
    let scheduler = RefreshScheduler::new(SystemClock::new(), bus, options, config, shutdown_rx);
    match scheduler.run().await {
        // A clean return only happens on a termination signal; the display
        // is already blanked, and the exit is still non-zero by contract.
        Ok(()) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// SIGINT/SIGTERM set the shutdown flag; the scheduler observes it at the
/// next wake-up boundary.
fn spawn_signal_listener(shutdown_tx: watch::Sender<bool>) -> std::io::Result<()> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => info!("caught SIGINT"),
            _ = terminate.recv() => info!("caught SIGTERM"),
        }
        let _ = shutdown_tx.send(true);
    });
    Ok(())
}
