//! Lighting theme configurations for the macropad.
//!
//! Provides pre-defined themes and custom per-key palettes.

use crate::protocol::{KEY_COUNT, RgbColor, STOCK_PALETTE};

// =============================================================================
// Themes
// =============================================================================

/// Pre-defined lighting theme.
#[derive(Debug, Clone, PartialEq)]
pub enum Theme {
    /// Factory palette (orange / plum / indigo).
    Stock,
    /// All backlights off.
    Off,
    /// Same color on every key.
    Mono(RgbColor),
    /// One color per key.
    Custom([RgbColor; KEY_COUNT]),
}

impl Theme {
    /// Resolve this theme to one color per key.
    pub fn to_palette(&self) -> [RgbColor; KEY_COUNT] {
        match self {
            Theme::Stock => STOCK_PALETTE,
            Theme::Off => [RgbColor::OFF; KEY_COUNT],
            Theme::Mono(color) => [*color; KEY_COUNT],
            Theme::Custom(palette) => *palette,
        }
    }

    /// Get theme name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Stock => "Stock",
            Theme::Off => "Off",
            Theme::Mono(_) => "Mono",
            Theme::Custom(_) => "Custom",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Mono(color) => write!(f, "Mono ({})", color),
            _ => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_theme() {
        let palette = Theme::Stock.to_palette();
        assert_eq!(palette, STOCK_PALETTE);
        assert_eq!(palette[0], RgbColor::new(0xFD, 0x80, 0x46));
    }

    #[test]
    fn test_off_theme() {
        let palette = Theme::Off.to_palette();
        assert!(palette.iter().all(|c| *c == RgbColor::OFF));
    }

    #[test]
    fn test_mono_theme() {
        let red = RgbColor::new(0xFF, 0, 0);
        let palette = Theme::Mono(red).to_palette();
        assert!(palette.iter().all(|c| *c == red));
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::Stock.to_string(), "Stock");
        assert_eq!(Theme::Off.to_string(), "Off");
        assert_eq!(
            Theme::Mono(RgbColor::new(0xFF, 0x80, 0x00)).to_string(),
            "Mono (#FF8000)"
        );
    }
}
