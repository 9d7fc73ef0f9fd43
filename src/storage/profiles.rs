//! Theme storage and persistence.
//!
//! Handles saving and loading named themes to/from disk.
//! Cross-platform: uses appropriate config directories for each OS.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{PadError, Result};
use crate::protocol::{KEY_COUNT, RgbColor, STOCK_PALETTE};
use crate::utils::parsing::parse_hex_color;

// =============================================================================
// Config Path
// =============================================================================

const APP_NAME: &str = "macropad-rgb";
const CONFIG_FILE: &str = "config.json";

/// Get the configuration directory path.
/// - Linux: ~/.config/macropad-rgb/
/// - Windows: %APPDATA%\macropad-rgb\
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PadError::Storage("Could not find config directory".into()))
}

/// Get the full path to the config file.
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

// =============================================================================
// Storage Structures
// =============================================================================

/// Main configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Named themes
    pub themes: HashMap<String, StoredTheme>,
    /// Currently active theme name
    pub active_theme: Option<String>,
}

/// Stored theme: one hex color per key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTheme {
    /// Hex color codes (e.g., "FD8046"), one per key
    pub keys: [String; KEY_COUNT],
}

impl StoredTheme {
    /// Build a stored theme from a resolved palette.
    pub fn from_palette(palette: &[RgbColor; KEY_COUNT]) -> Self {
        Self {
            keys: [
                format!("{:02X}{:02X}{:02X}", palette[0].r, palette[0].g, palette[0].b),
                format!("{:02X}{:02X}{:02X}", palette[1].r, palette[1].g, palette[1].b),
                format!("{:02X}{:02X}{:02X}", palette[2].r, palette[2].g, palette[2].b),
            ],
        }
    }

    /// Resolve the stored hex codes to device colors.
    pub fn to_palette(&self) -> Result<[RgbColor; KEY_COUNT]> {
        let mut palette = [RgbColor::OFF; KEY_COUNT];
        for (i, hex) in self.keys.iter().enumerate() {
            palette[i] = parse_hex_color(hex)?;
        }
        Ok(palette)
    }
}

// =============================================================================
// Storage Functions
// =============================================================================

/// Load configuration from disk.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path()?)
}

/// Load configuration from an explicit path.
pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| PadError::Storage(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| PadError::Storage(format!("Failed to parse config: {}", e)))
}

/// Save configuration to disk.
pub fn save_config(config: &AppConfig) -> Result<()> {
    let dir = get_config_dir()?;
    save_config_to(&dir.join(CONFIG_FILE), config)
}

/// Save configuration to an explicit path.
pub fn save_config_to(path: &std::path::Path, config: &AppConfig) -> Result<()> {
    // Create the parent directory if needed
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| PadError::Storage(format!("Failed to create config dir: {}", e)))?;
    }

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| PadError::Storage(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(path, content)
        .map_err(|e| PadError::Storage(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Ensure that the configuration file exists.
/// If it doesn't exist, create it with the stock palette as the only theme.
pub fn ensure_config_exists() -> Result<()> {
    let path = get_config_path()?;
    if path.exists() {
        return Ok(());
    }

    println!("Config file not found. Creating default at {:?}", path);

    let mut config = AppConfig::default();
    config
        .themes
        .insert("stock".to_string(), StoredTheme::from_palette(&STOCK_PALETTE));
    config.active_theme = Some("stock".to_string());

    save_config(&config)?;
    Ok(())
}

/// Get a stored theme by name.
pub fn get_theme(name: &str) -> Result<StoredTheme> {
    let config = load_config()?;
    config
        .themes
        .get(&name.to_lowercase())
        .cloned()
        .ok_or_else(|| PadError::InvalidTheme(format!("Theme '{}' not found", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_theme_resolves_to_palette() {
        let stored = StoredTheme::from_palette(&STOCK_PALETTE);
        assert_eq!(stored.keys[0], "FD8046");
        assert_eq!(stored.to_palette().unwrap(), STOCK_PALETTE);
    }

    #[test]
    fn test_stored_theme_rejects_bad_hex() {
        let stored = StoredTheme {
            keys: ["FD8046".into(), "nope".into(), "2D1D7A".into()],
        };
        assert!(stored.to_palette().is_err());
    }

    #[test]
    fn test_corrupt_config_is_storage_error() {
        let path = std::env::temp_dir().join("macropad-rgb-test-corrupt.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, PadError::Storage(_)));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_config_is_storage_error() {
        // Parent of the target is a file, so create_dir_all fails
        let parent = std::env::temp_dir().join("macropad-rgb-test-notadir");
        std::fs::write(&parent, "").unwrap();

        let err = save_config_to(&parent.join("config.json"), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, PadError::Storage(_)));

        let _ = std::fs::remove_file(&parent);
    }
}
