//! Parsing utilities for CLI arguments and configuration values.
//!
//! This module provides reusable parsing functions for common input formats
//! used throughout the application.

use crate::config::Theme;
use crate::error::{PadError, Result};
use crate::protocol::{KEY_COUNT, RgbColor};

// =============================================================================
// Color Parsing
// =============================================================================

/// Parse a hex color string into an RGB color.
///
/// Accepts formats: `#RRGGBB` or `RRGGBB`
///
/// # Example
/// ```
/// use macropad_rgb::utils::parsing::parse_hex_color;
///
/// let c = parse_hex_color("#FF5500").unwrap();
/// assert_eq!(c.r, 255);
/// assert_eq!(c.g, 85);
/// assert_eq!(c.b, 0);
/// ```
pub fn parse_hex_color(hex: &str) -> Result<RgbColor> {
    let hex = hex.trim_start_matches('#');
    // The slices below are byte offsets; anything but 6 ASCII hex digits
    // must be rejected here
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PadError::InvalidInput(format!(
            "Invalid color hex: {}",
            hex
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| PadError::InvalidInput(format!("Invalid color hex: {}", hex)))
    };

    Ok(RgbColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// =============================================================================
// Theme Parsing
// =============================================================================

/// Parse a theme specification into a Theme.
///
/// # Supported Formats
/// - `stock` - factory palette
/// - `off` - all keys dark
/// - `RRGGBB` - same color on every key
/// - `RRGGBB,RRGGBB,RRGGBB` - one color per key
///
/// # Example
/// ```
/// use macropad_rgb::utils::parsing::parse_theme;
/// use macropad_rgb::config::Theme;
///
/// let theme = parse_theme("stock").unwrap();
/// assert!(matches!(theme, Theme::Stock));
///
/// let mono = parse_theme("FF0000").unwrap();
/// assert!(matches!(mono, Theme::Mono(_)));
/// ```
pub fn parse_theme(spec: &str) -> Result<Theme> {
    let lower = spec.to_lowercase();

    if lower == "stock" {
        return Ok(Theme::Stock);
    }

    if lower == "off" {
        return Ok(Theme::Off);
    }

    let parts: Vec<&str> = spec.split(',').collect();
    match parts.len() {
        1 => Ok(Theme::Mono(parse_hex_color(parts[0])?)),
        KEY_COUNT => {
            let mut palette = [RgbColor::OFF; KEY_COUNT];
            for (i, part) in parts.iter().enumerate() {
                palette[i] = parse_hex_color(part)?;
            }
            Ok(Theme::Custom(palette))
        }
        _ => Err(PadError::InvalidTheme(format!(
            "Expected 'stock', 'off', one color, or {} comma-separated colors, got '{}'",
            KEY_COUNT, spec
        ))),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_with_hash() {
        let c = parse_hex_color("#FF0000").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
    }

    #[test]
    fn test_parse_hex_color_without_hash() {
        let c = parse_hex_color("00FF00").unwrap();
        assert_eq!((c.r, c.g, c.b), (0, 255, 0));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("FFF").is_err());
        assert!(parse_hex_color("").is_err());
        assert!(parse_hex_color("GGGGGG").is_err());
    }

    #[test]
    fn test_parse_hex_color_multibyte() {
        // 6 bytes but only 5 chars; must error instead of slicing mid-char
        assert!(parse_hex_color("aé000").is_err());
        assert!(parse_hex_color("#aé000").is_err());
    }

    #[test]
    fn test_parse_theme_presets() {
        assert!(matches!(parse_theme("stock").unwrap(), Theme::Stock));
        assert!(matches!(parse_theme("STOCK").unwrap(), Theme::Stock));
        assert!(matches!(parse_theme("off").unwrap(), Theme::Off));
    }

    #[test]
    fn test_parse_theme_mono() {
        let theme = parse_theme("FF8000").unwrap();
        assert_eq!(theme, Theme::Mono(RgbColor::new(0xFF, 0x80, 0x00)));
    }

    #[test]
    fn test_parse_theme_custom() {
        let theme = parse_theme("FF0000,00FF00,0000FF").unwrap();
        let Theme::Custom(palette) = theme else {
            panic!("expected custom theme");
        };
        assert_eq!(palette[0], RgbColor::new(0xFF, 0, 0));
        assert_eq!(palette[1], RgbColor::new(0, 0xFF, 0));
        assert_eq!(palette[2], RgbColor::new(0, 0, 0xFF));
    }

    #[test]
    fn test_parse_theme_wrong_count() {
        assert!(parse_theme("FF0000,00FF00").is_err());
    }
}
