//! What the display shows and the options fixed at start-up.

/// A decomposed time of day, at display resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
    /// 0-9
    pub tenth: u8,
}

/// Which time the display shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Host local time.
    Civil {
        /// 12-hour display with AM/PM lamps; otherwise 0-23.
        twelve_hour: bool,
    },
    /// Local mean sidereal time, always displayed 0-23.
    Sidereal {
        /// Observer longitude in degrees east of Greenwich (negative west).
        longitude_deg: f64,
    },
}

/// Immutable start-up configuration.
///
/// Built once from the command line and passed by reference into the
/// scheduler and encoder; nothing writes it after start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    /// 0-15; values above 15 are clamped to the controller's 4-bit field.
    pub brightness: u8,
    /// Light the colons at all.
    pub colon: bool,
    /// Blink the colons at 1 Hz, synchronized to the second boundary.
    pub colon_blink: bool,
    /// Drive the tenth-of-a-second digit (and the seconds decimal point).
    pub tenths: bool,
    pub mode: ClockMode,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            brightness: 15,
            colon: true,
            colon_blink: false,
            tenths: true,
            mode: ClockMode::Civil { twelve_hour: true },
        }
    }
}
