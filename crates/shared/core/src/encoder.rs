//! Time value to register frames.

use crate::display::{ClockMode, DisplayOptions, TimeOfDay};
use crate::registers::{self, Digit, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// The fully composed image of one refresh: a byte for each of the seven
/// time digits, the indicator segment image, and the per-digit decode mask.
///
/// Recomputed wholesale every refresh, never mutated incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayValue {
    pub digits: [u8; 7],
    pub indicator: u8,
    pub decode_mask: u8,
}

impl DisplayValue {
    /// Compose the display image for one time value: 12-hour conversion and
    /// AM/PM, leading-zero blanking, colon blink parity, and the dark
    /// tenths digit when that option is off.
    pub fn compose(time: TimeOfDay, options: &DisplayOptions) -> Self {
        let mut hour = time.hour;
        let mut meridiem = None;
        if let ClockMode::Civil { twelve_hour: true } = options.mode {
            meridiem = Some(if hour >= 12 { Meridiem::Pm } else { Meridiem::Am });
            hour = match hour {
                0 => 12,
                1..=12 => hour,
                h => h - 12,
            };
        }

        // Every time digit decodes; the indicator digit is always raw.
        let mut decode_mask = !Digit::Indicator.bit();
        if meridiem.is_some() && hour < 10 {
            // Blank the leading zero on the 12-hour display: decode off and
            // a raw zero means no segments lit.
            decode_mask &= !Digit::HoursTens.bit();
        }
        if !options.tenths {
            // Decode off plus a literal zero: the digit goes dark instead of
            // showing a stale numeral.
            decode_mask &= !Digit::Tenths.bit();
        }

        let mut digits = [0u8; 7];
        digits[Digit::HoursTens as usize] = hour / 10;
        digits[Digit::HoursOnes as usize] = hour % 10;
        digits[Digit::MinutesTens as usize] = time.minute / 10;
        digits[Digit::MinutesOnes as usize] = time.minute % 10;
        digits[Digit::SecondsTens as usize] = time.second / 10;
        digits[Digit::SecondsOnes as usize] =
            (time.second % 10) | if options.tenths { registers::SEG_DP } else { 0 };
        digits[Digit::Tenths as usize] = if options.tenths { time.tenth } else { 0 };

        let mut indicator = 0u8;
        if options.colon && (!options.colon_blink || time.second % 2 == 0) {
            indicator |= registers::COLON_HOUR_MINUTE | registers::COLON_MINUTE_SECOND;
        }
        match meridiem {
            Some(Meridiem::Am) => indicator |= registers::LAMP_AM,
            Some(Meridiem::Pm) => indicator |= registers::LAMP_PM,
            None => {}
        }

        Self {
            digits,
            indicator,
            decode_mask,
        }
    }

    /// Encode the image as controller writes.
    ///
    /// The decode-mode register goes first: it governs how the digit bytes
    /// that follow are interpreted. All digit writes land in both blink
    /// planes so the controller never blinks them on its own.
    pub fn encode(&self) -> Vec<Frame> {
        let mut frames = Vec::with_capacity(9);
        frames.push(Frame::new(registers::REG_DECODE_MODE, self.decode_mask));
        for (i, &data) in self.digits.iter().enumerate() {
            frames.push(Frame::new(registers::PLANE_BOTH | i as u8, data));
        }
        frames.push(Frame::new(Digit::Indicator.both_planes(), self.indicator));
        frames
    }
}

/// Register writes that bring the controller out of shutdown with cleared
/// digit data, all eight digits scanned, at the requested brightness.
pub fn power_up(brightness: u8) -> Vec<Frame> {
    vec![
        Frame::new(
            registers::REG_CONFIG,
            registers::CONFIG_CLEAR_DATA | registers::CONFIG_RUN,
        ),
        Frame::new(registers::REG_SCAN_LIMIT, 7),
        Frame::new(registers::REG_INTENSITY, brightness & 0x0f),
    ]
}

/// Display-test control: every segment lit while on.
pub fn lamp_test(on: bool) -> Frame {
    Frame::new(registers::REG_TEST, on as u8)
}

/// The safe state: controller shut down, display blank.
pub fn shutdown() -> Frame {
    Frame::new(registers::REG_CONFIG, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{
        COLON_HOUR_MINUTE, COLON_MINUTE_SECOND, CONFIG_CLEAR_DATA, CONFIG_RUN, LAMP_AM, LAMP_PM,
        PLANE_BOTH, REG_CONFIG, REG_DECODE_MODE, REG_INTENSITY, REG_SCAN_LIMIT, SEG_DP,
    };

    fn t(hour: u8, minute: u8, second: u8, tenth: u8) -> TimeOfDay {
        TimeOfDay {
            hour,
            minute,
            second,
            tenth,
        }
    }

    fn civil_12h() -> DisplayOptions {
        DisplayOptions::default()
    }

    fn sidereal() -> DisplayOptions {
        DisplayOptions {
            mode: ClockMode::Sidereal { longitude_deg: 0.0 },
            ..DisplayOptions::default()
        }
    }

    fn hour_digits(v: &DisplayValue) -> (u8, u8) {
        (
            v.digits[Digit::HoursTens as usize],
            v.digits[Digit::HoursOnes as usize],
        )
    }

    #[test]
    fn twelve_hour_conversion() {
        let v = DisplayValue::compose(t(0, 0, 0, 0), &civil_12h());
        assert_eq!(hour_digits(&v), (1, 2));
        assert_ne!(v.indicator & LAMP_AM, 0);
        assert_eq!(v.indicator & LAMP_PM, 0);

        let v = DisplayValue::compose(t(12, 0, 0, 0), &civil_12h());
        assert_eq!(hour_digits(&v), (1, 2));
        assert_ne!(v.indicator & LAMP_PM, 0);
        assert_eq!(v.indicator & LAMP_AM, 0);

        let v = DisplayValue::compose(t(13, 0, 0, 0), &civil_12h());
        assert_eq!(hour_digits(&v), (0, 1));
        assert_ne!(v.indicator & LAMP_PM, 0);

        let v = DisplayValue::compose(t(23, 0, 0, 0), &civil_12h());
        assert_eq!(hour_digits(&v), (1, 1));
        assert_ne!(v.indicator & LAMP_PM, 0);
    }

    #[test]
    fn leading_zero_blanked_only_in_twelve_hour_mode() {
        // 1 PM: tens-of-hours decode off and a raw zero, so the digit is dark.
        let v = DisplayValue::compose(t(13, 0, 0, 0), &civil_12h());
        assert_eq!(v.decode_mask & Digit::HoursTens.bit(), 0);
        assert_eq!(v.digits[Digit::HoursTens as usize], 0);

        // 24-hour display keeps the leading zero.
        let twenty_four = DisplayOptions {
            mode: ClockMode::Civil { twelve_hour: false },
            ..DisplayOptions::default()
        };
        let v = DisplayValue::compose(t(3, 0, 0, 0), &twenty_four);
        assert_ne!(v.decode_mask & Digit::HoursTens.bit(), 0);
        assert_eq!(hour_digits(&v), (0, 3));
        assert_eq!(v.indicator & (LAMP_AM | LAMP_PM), 0);
    }

    #[test]
    fn sidereal_keeps_twenty_four_hours_and_no_meridiem() {
        let v = DisplayValue::compose(t(23, 59, 58, 9), &sidereal());
        assert_eq!(hour_digits(&v), (2, 3));
        assert_eq!(v.indicator & (LAMP_AM | LAMP_PM), 0);
        assert_ne!(v.decode_mask & Digit::HoursTens.bit(), 0);
    }

    #[test]
    fn colon_blink_follows_second_parity() {
        let blink = DisplayOptions {
            colon_blink: true,
            ..sidereal()
        };
        let colons = COLON_HOUR_MINUTE | COLON_MINUTE_SECOND;

        let even = DisplayValue::compose(t(1, 2, 4, 0), &blink);
        assert_eq!(even.indicator & colons, colons);

        let odd = DisplayValue::compose(t(1, 2, 5, 0), &blink);
        assert_eq!(odd.indicator & colons, 0);
    }

    #[test]
    fn colon_steady_when_blink_disabled() {
        let colons = COLON_HOUR_MINUTE | COLON_MINUTE_SECOND;
        let v = DisplayValue::compose(t(1, 2, 5, 0), &sidereal());
        assert_eq!(v.indicator & colons, colons);
    }

    #[test]
    fn colon_disabled_never_lit() {
        let no_colon = DisplayOptions {
            colon: false,
            ..sidereal()
        };
        let v = DisplayValue::compose(t(1, 2, 4, 0), &no_colon);
        assert_eq!(v.indicator & (COLON_HOUR_MINUTE | COLON_MINUTE_SECOND), 0);
    }

    #[test]
    fn disabled_tenths_digit_goes_dark() {
        let no_tenths = DisplayOptions {
            tenths: false,
            ..sidereal()
        };
        let v = DisplayValue::compose(t(1, 2, 3, 7), &no_tenths);
        assert_eq!(v.decode_mask & Digit::Tenths.bit(), 0);
        assert_eq!(v.digits[Digit::Tenths as usize], 0);
        // No decimal point on the seconds digit either.
        assert_eq!(v.digits[Digit::SecondsOnes as usize] & SEG_DP, 0);
    }

    #[test]
    fn enabled_tenths_carry_the_decimal_point() {
        let v = DisplayValue::compose(t(1, 2, 3, 7), &sidereal());
        assert_eq!(v.digits[Digit::Tenths as usize], 7);
        assert_ne!(v.digits[Digit::SecondsOnes as usize] & SEG_DP, 0);
        assert_eq!(v.digits[Digit::SecondsOnes as usize] & 0x0f, 3);
    }

    #[test]
    fn decode_mode_written_before_digit_data() {
        let frames = DisplayValue::compose(t(12, 34, 56, 7), &sidereal()).encode();
        assert_eq!(frames.len(), 9);
        assert_eq!(frames[0].register, REG_DECODE_MODE);
        for (i, frame) in frames[1..].iter().enumerate() {
            assert_eq!(frame.register, PLANE_BOTH | i as u8);
        }
    }

    #[test]
    fn indicator_digit_never_decoded() {
        for options in [civil_12h(), sidereal()] {
            let v = DisplayValue::compose(t(6, 30, 0, 0), &options);
            assert_eq!(v.decode_mask & Digit::Indicator.bit(), 0);
        }
    }

    #[test]
    fn power_sequences() {
        let up = power_up(15);
        assert_eq!(up[0], Frame::new(REG_CONFIG, CONFIG_CLEAR_DATA | CONFIG_RUN));
        assert_eq!(up[1], Frame::new(REG_SCAN_LIMIT, 7));
        assert_eq!(up[2], Frame::new(REG_INTENSITY, 15));
        // Brightness clamps to the 4-bit field.
        assert_eq!(power_up(99)[2].data, 99 & 0x0f);

        assert_eq!(shutdown(), Frame::new(REG_CONFIG, 0));
    }
}
