//! Canonical mode colors and output conversion helpers.
//!
//! Colors are 8-bit `palette::Srgb<u8>` values. Output implementations
//! convert them to whatever the hardware takes: PWM duty cycles via
//! [`duty_cycle`], plain GPIO on/off via [`is_lit`], or normalized floats
//! via [`to_float`].

use palette::Srgb;

/// STOP color.
pub const STOP: Srgb<u8> = Srgb::new(0x61, 0x1E, 0x3C);

/// GO color.
pub const GO: Srgb<u8> = Srgb::new(0x22, 0x96, 0x22);

/// WARNING color.
pub const WARNING: Srgb<u8> = Srgb::new(0xFF, 0xB2, 0x00);

/// CROSSWALK color, alternated with [`OFF`] while blinking.
pub const CROSSWALK: Srgb<u8> = Srgb::new(0x00, 0x10, 0x30);

/// All channels dark.
pub const OFF: Srgb<u8> = Srgb::new(0x00, 0x00, 0x00);

/// Maps an 8-bit channel level onto a PWM duty range `0..=max_duty`.
///
/// Common anode LEDs sink current through the pin, so their duty is inverted.
#[inline]
pub fn duty_cycle(level: u8, max_duty: u16, common_anode: bool) -> u16 {
    let duty = ((level as u32 * max_duty as u32 + 127) / 255) as u16;

    if common_anode {
        max_duty - duty
    } else {
        duty
    }
}

/// On/off rendering for boards that drive the LED through plain GPIO.
#[inline]
pub const fn is_lit(level: u8) -> bool {
    level != 0
}

/// Converts to normalized floating point channels (0.0-1.0).
#[inline]
pub fn to_float(color: Srgb<u8>) -> Srgb<f32> {
    color.into_format()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duty_cycle_spans_full_range() {
        assert_eq!(duty_cycle(0, 1000, false), 0);
        assert_eq!(duty_cycle(255, 1000, false), 1000);
        assert_eq!(duty_cycle(0, 1000, true), 1000);
        assert_eq!(duty_cycle(255, 1000, true), 0);
    }

    #[test]
    fn duty_cycle_rounds_to_nearest() {
        // 128/255 of 255 is exact
        assert_eq!(duty_cycle(128, 255, false), 128);
        // 0x10 * 1000 / 255 = 62.7
        assert_eq!(duty_cycle(0x10, 1000, false), 63);
    }

    #[test]
    fn crosswalk_is_dim_but_lit() {
        assert!(!is_lit(CROSSWALK.red));
        assert!(is_lit(CROSSWALK.green));
        assert!(is_lit(CROSSWALK.blue));
    }

    #[test]
    fn float_conversion_normalizes() {
        let c = to_float(WARNING);
        assert!((c.red - 1.0).abs() < 0.001);
        assert!(c.blue.abs() < 0.001);
    }
}
