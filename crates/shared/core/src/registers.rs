//! MAX6951 register map.
//!
//! The controller multiplexes eight seven-segment digits. Digits 0 through 6
//! carry the time, left to right, from tens-of-hours down to tenths of a
//! second. Digit 7 is broken out to discrete LEDs: the two colons and the
//! AM/PM lamps.

/// One atomic write to the display controller: a register address byte
/// followed by a data byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub register: u8,
    pub data: u8,
}

impl Frame {
    pub const fn new(register: u8, data: u8) -> Self {
        Self { register, data }
    }
}

/// Decode-mode mask, one bit per digit. 1 = decode the numeric value to
/// segments, 0 = drive raw segments.
pub const REG_DECODE_MODE: u8 = 0x01;
/// Display intensity, a 4-bit brightness value.
pub const REG_INTENSITY: u8 = 0x02;
/// Highest digit position scanned (7 = all eight digits).
pub const REG_SCAN_LIMIT: u8 = 0x03;
/// Run/shutdown, blink control and data clear.
pub const REG_CONFIG: u8 = 0x04;
/// Display test: every segment lit while set.
pub const REG_TEST: u8 = 0x07;

/// Configuration register: 1 = normal operation, 0 = shutdown (blank).
pub const CONFIG_RUN: u8 = 1 << 0;
/// Configuration register: blink rate select.
pub const CONFIG_BLINK_RATE: u8 = 1 << 2;
/// Configuration register: global blink enable.
pub const CONFIG_BLINK_ENABLE: u8 = 1 << 3;
/// Configuration register: reset blink timing on write.
pub const CONFIG_BLINK_SYNC: u8 = 1 << 4;
/// Configuration register: clear digit data in both planes.
pub const CONFIG_CLEAR_DATA: u8 = 1 << 5;

/// Digit-data base addresses. P0 and P1 are the two blink planes; the
/// controller alternates between them when blinking is enabled. Writing
/// through the combined address puts identical content in both planes, so
/// the digit never blinks.
pub const PLANE_P0: u8 = 0x20;
pub const PLANE_P1: u8 = 0x40;
pub const PLANE_BOTH: u8 = PLANE_P0 | PLANE_P1;

/// Segment bits with decode off. A is the top segment, B through F proceed
/// clockwise around the digit, G is the middle bar. With decode on, bits
/// 0-3 select the numeral and the decimal point bit still applies.
pub const SEG_DP: u8 = 1 << 7;
pub const SEG_A: u8 = 1 << 6;
pub const SEG_B: u8 = 1 << 5;
pub const SEG_C: u8 = 1 << 4;
pub const SEG_D: u8 = 1 << 3;
pub const SEG_E: u8 = 1 << 2;
pub const SEG_F: u8 = 1 << 1;
pub const SEG_G: u8 = 1 << 0;

/// Indicator-digit wiring: the colon between hours and minutes.
pub const COLON_HOUR_MINUTE: u8 = SEG_E | SEG_F;
/// Indicator-digit wiring: the colon between minutes and seconds.
pub const COLON_MINUTE_SECOND: u8 = SEG_B | SEG_C;
/// Indicator-digit wiring: the AM lamp.
pub const LAMP_AM: u8 = SEG_A;
/// Indicator-digit wiring: the PM lamp.
pub const LAMP_PM: u8 = SEG_D;

/// The physical digit positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Digit {
    HoursTens = 0,
    HoursOnes = 1,
    MinutesTens = 2,
    MinutesOnes = 3,
    SecondsTens = 4,
    SecondsOnes = 5,
    Tenths = 6,
    /// Colons and AM/PM lamps; always driven raw.
    Indicator = 7,
}

impl Digit {
    /// This digit's bit in the decode-mode register.
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Register address that writes this digit in both blink planes.
    pub const fn both_planes(self) -> u8 {
        PLANE_BOTH | self as u8
    }
}
