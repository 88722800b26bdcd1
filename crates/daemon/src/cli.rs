//! Command-line surface.

use clap::{Parser, Subcommand};
use sidera_core::{ClockMode, DisplayOptions};

#[derive(Parser)]
#[command(name = "siderad")]
#[command(about = "Seven-segment SPI clock display daemon", long_about = None)]
pub struct Cli {
    /// Display brightness
    #[arg(short, long, default_value_t = 15,
          value_parser = clap::value_parser!(u8).range(0..=15))]
    pub brightness: u8,

    /// Turn the colons off
    #[arg(long)]
    pub no_colon: bool,

    /// Blink the colons at 1 Hz, synchronized to the second
    #[arg(long)]
    pub blink: bool,

    /// Turn the tenth-of-a-second digit off
    #[arg(long)]
    pub no_tenths: bool,

    /// Wake-up latency compensation in microseconds. Platform-dependent;
    /// must stay under one display tick (100 ms)
    #[arg(long, default_value_t = 250,
          value_parser = clap::value_parser!(u32).range(0..=99_999))]
    pub latency_comp_us: u32,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand)]
pub enum Mode {
    /// Show host local time
    Civil {
        /// 24-hour display (default is 12-hour with AM/PM)
        #[arg(long)]
        twenty_four_hour: bool,
    },
    /// Show local mean sidereal time
    Sidereal {
        /// Observer longitude in degrees east (negative for west)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        longitude: f64,
    },
}

impl Cli {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            brightness: self.brightness,
            colon: !self.no_colon,
            colon_blink: self.blink,
            tenths: !self.no_tenths,
            mode: match self.mode {
                Mode::Civil { twenty_four_hour } => ClockMode::Civil {
                    twelve_hour: !twenty_four_hour,
                },
                Mode::Sidereal { longitude } => ClockMode::Sidereal {
                    longitude_deg: longitude,
                },
            },
        }
    }
}
