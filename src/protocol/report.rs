//! HID report definitions and builders for the 3-keys-1-knob macropad.
//!
//! The pad exposes its NeoPixel backlight on a vendor HID interface. One
//! output report carries the full lighting state: a report ID followed by
//! three RGB triples, one per key.

use crate::error::{PadError, Result};

// =============================================================================
// Constants
// =============================================================================

/// Macropad Vendor ID.
pub const MACROPAD_VID: u16 = 0x4249;

/// Macropad Product ID.
pub const MACROPAD_PID: u16 = 0x4287;

/// HID interface number carrying the vendor RGB endpoint.
///
/// Interface 0 is the keyboard; lighting reports go to interface 1.
pub const RGB_INTERFACE: i32 = 1;

/// Report ID for lighting output reports.
pub const REPORT_ID: u8 = 0x01;

/// Number of backlit keys on the pad.
pub const KEY_COUNT: usize = 3;

/// Total report length: report ID + 3 RGB triples.
pub const REPORT_LENGTH: usize = 1 + KEY_COUNT * 3;

// =============================================================================
// Colors
// =============================================================================

/// A single RGB color as sent to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// All channels off.
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by `x`, truncating to an integer.
    ///
    /// Truncation (not rounding) is what the device tooling has always done,
    /// so `x = 0.99` never reaches the full base value. No clamping is
    /// performed; callers keep `x` within [0, 1].
    pub fn scaled(&self, x: f32) -> Self {
        Self {
            r: (self.r as f32 * x) as u8,
            g: (self.g as f32 * x) as u8,
            b: (self.b as f32 * x) as u8,
        }
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Factory backlight palette, one color per key.
///
/// These are the base magnitudes the stock tooling breathes through:
/// a warm orange, a muted plum and a deep indigo.
pub const STOCK_PALETTE: [RgbColor; KEY_COUNT] = [
    RgbColor::new(0xFD, 0x80, 0x46),
    RgbColor::new(0x80, 0x45, 0x65),
    RgbColor::new(0x2D, 0x1D, 0x7A),
];

// =============================================================================
// Keys
// =============================================================================

/// Backlit key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    One,
    Two,
    Three,
}

impl Key {
    /// Zero-based position of this key's triple in the report payload.
    pub const fn index(&self) -> usize {
        match self {
            Key::One => 0,
            Key::Two => 1,
            Key::Three => 2,
        }
    }

    /// Parse a 1-based key number as printed on the pad.
    pub fn from_number(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Key::One),
            2 => Ok(Key::Two),
            3 => Ok(Key::Three),
            _ => Err(PadError::InvalidKey(n)),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "key {}", self.index() + 1)
    }
}

// =============================================================================
// Report Builders
// =============================================================================

/// Build a lighting output report.
///
/// Byte 0 is the report ID, bytes 1-9 are the three key colors scaled by
/// `x` with per-channel truncation.
///
/// # Arguments
/// * `colors` - One color per key
/// * `x` - Brightness scalar, normally in [0, 1]
///
/// # Returns
/// A 10-byte HID report ready to send to the device.
pub fn build_led_report(colors: &[RgbColor; KEY_COUNT], x: f32) -> [u8; REPORT_LENGTH] {
    let mut buf = [0u8; REPORT_LENGTH];
    buf[0] = REPORT_ID;

    for (i, color) in colors.iter().enumerate() {
        let c = color.scaled(x);
        let off = 1 + i * 3;
        buf[off] = c.r;
        buf[off + 1] = c.g;
        buf[off + 2] = c.b;
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let report = build_led_report(&STOCK_PALETTE, 1.0);
        assert_eq!(report.len(), REPORT_LENGTH);
        assert_eq!(report[0], REPORT_ID);
        // Full brightness reproduces the base palette exactly
        assert_eq!(
            &report[1..],
            &[0xFD, 0x80, 0x46, 0x80, 0x45, 0x65, 0x2D, 0x1D, 0x7A]
        );
    }

    #[test]
    fn test_report_at_half_brightness() {
        // Known-good reference frame from the stock tooling
        let report = build_led_report(&STOCK_PALETTE, 0.5);
        assert_eq!(report, [1, 126, 64, 35, 64, 34, 50, 22, 14, 61]);
    }

    #[test]
    fn test_report_dark() {
        let report = build_led_report(&STOCK_PALETTE, 0.0);
        assert_eq!(report[0], REPORT_ID);
        assert!(report[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_scaling_truncates() {
        // 0xFD * 0.99 = 250.47 -> 250, never rounds up
        let c = RgbColor::new(0xFD, 0x80, 0x46).scaled(0.99);
        assert_eq!(c.r, 250);
        assert_eq!(c.g, 126);
        assert_eq!(c.b, 69);
    }

    #[test]
    fn test_scaling_matches_floor() {
        for i in 0..=100 {
            let x = i as f32 / 100.0;
            for color in STOCK_PALETTE {
                let scaled = color.scaled(x);
                assert_eq!(scaled.r, (color.r as f32 * x).floor() as u8);
                assert_eq!(scaled.g, (color.g as f32 * x).floor() as u8);
                assert_eq!(scaled.b, (color.b as f32 * x).floor() as u8);
            }
        }
    }

    #[test]
    fn test_key_numbers() {
        assert_eq!(Key::from_number(1).unwrap(), Key::One);
        assert_eq!(Key::from_number(3).unwrap(), Key::Three);
        assert!(Key::from_number(0).is_err());
        assert!(Key::from_number(4).is_err());
    }
}
