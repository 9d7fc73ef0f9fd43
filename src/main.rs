//! Macropad RGB Control CLI
//!
//! Command-line interface for driving the RGB backlight of CH552
//! 3-keys-1-knob macro keypads.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use macropad_rgb::device::Macropad;
use macropad_rgb::protocol::Key;
use macropad_rgb::storage;
use macropad_rgb::storage::StoredTheme;
use macropad_rgb::utils::parsing::{parse_hex_color, parse_theme};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Macropad RGB Control Tool
#[derive(Parser, Debug)]
#[command(name = "macropad-rgb-cli")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the breathing effect
    Breathe {
        /// Theme: stock, off, RRGGBB, or RRGGBB,RRGGBB,RRGGBB
        #[arg(short, long, default_value = "stock")]
        theme: String,

        /// Delay between ramp steps in milliseconds
        #[arg(short, long, default_value = "5")]
        delay: u64,

        /// Number of cycles to run (default: until Ctrl+C)
        #[arg(short, long)]
        cycles: Option<u64>,
    },

    /// Light the keys with a static theme
    On {
        /// Theme: stock, off, RRGGBB, or RRGGBB,RRGGBB,RRGGBB
        #[arg(short, long, default_value = "stock")]
        theme: String,

        /// Brightness percentage (0-100)
        #[arg(short, long, default_value = "100", value_parser = clap::value_parser!(u8).range(0..=100))]
        brightness: u8,
    },

    /// Turn all key backlights off
    Off,

    /// Set the color of a single key
    SetKey {
        /// Key number (1-3)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        key: u8,

        /// Hex color (RRGGBB)
        color: String,
    },

    /// Apply a saved theme by name
    Theme {
        /// Theme name from the config file
        name: String,
    },

    /// Save a theme to the config file
    SaveTheme {
        /// Theme name
        name: String,

        /// Theme: stock, off, RRGGBB, or RRGGBB,RRGGBB,RRGGBB
        colors: String,
    },

    /// List saved themes
    Themes,

    /// List connected macropads
    List,

    /// Show device info
    Info,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Breathe {
            theme,
            delay,
            cycles,
        } => cmd_breathe(&theme, delay, cycles),
        Command::On { theme, brightness } => cmd_on(&theme, brightness),
        Command::Off => cmd_off(),
        Command::SetKey { key, color } => cmd_set_key(key, &color),
        Command::Theme { name } => cmd_theme(&name),
        Command::SaveTheme { name, colors } => cmd_save_theme(&name, &colors),
        Command::Themes => cmd_themes(),
        Command::List => cmd_list(),
        Command::Info => cmd_info(),
    }
}

// =============================================================================
// Command Implementations
// =============================================================================

fn cmd_breathe(theme: &str, delay_ms: u64, cycles: Option<u64>) -> Result<()> {
    let theme = parse_theme(theme).context("Failed to parse theme")?;
    let palette = theme.to_palette();

    let pad = Macropad::open().context("Failed to open macropad")?;
    if let Some(product) = pad.product() {
        println!("Opening device: {}", product);
    }

    // Setup Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("Failed to set Ctrl+C handler")?;

    match cycles {
        Some(n) => println!("🌈 Breathing {} theme for {} cycle(s)...", theme, n),
        None => println!("🌈 Breathing {} theme until Ctrl+C...", theme),
    }

    pad.breathe(&palette, Duration::from_millis(delay_ms), cycles, &running)
        .context("Failed to run breathing effect")?;

    println!("✅ Done. Pad left at full brightness.");
    Ok(())
}

fn cmd_on(theme: &str, brightness: u8) -> Result<()> {
    let theme = parse_theme(theme).context("Failed to parse theme")?;
    let palette = theme.to_palette();

    let pad = Macropad::open().context("Failed to open macropad")?;
    pad.set_colors(&palette, brightness as f32 / 100.0)
        .context("Failed to write lighting report")?;

    println!("✅ {} theme applied at {}% brightness", theme, brightness);
    Ok(())
}

fn cmd_off() -> Result<()> {
    let pad = Macropad::open().context("Failed to open macropad")?;
    pad.off().context("Failed to write lighting report")?;

    println!("✅ Backlight off");
    Ok(())
}

fn cmd_set_key(key: u8, color: &str) -> Result<()> {
    let key = Key::from_number(key).context("Invalid key number")?;
    let color = parse_hex_color(color).context("Failed to parse color")?;

    // Start from the active saved theme so the other keys keep their colors
    let mut config = storage::load_config().context("Failed to load config")?;
    let mut palette = match config
        .active_theme
        .as_deref()
        .and_then(|name| config.themes.get(name))
    {
        Some(stored) => stored.to_palette().context("Saved theme is invalid")?,
        None => macropad_rgb::STOCK_PALETTE,
    };

    palette[key.index()] = color;

    let pad = Macropad::open().context("Failed to open macropad")?;
    pad.set_colors(&palette, 1.0)
        .context("Failed to write lighting report")?;

    // Persist the result as the active theme
    config
        .themes
        .insert("active".to_string(), StoredTheme::from_palette(&palette));
    config.active_theme = Some("active".to_string());
    storage::save_config(&config).context("Failed to save config")?;

    println!("✅ {} set to {}", key, color);
    Ok(())
}

fn cmd_theme(name: &str) -> Result<()> {
    let stored = storage::get_theme(name).context("Failed to load theme")?;
    let palette = stored.to_palette().context("Saved theme is invalid")?;

    let pad = Macropad::open().context("Failed to open macropad")?;
    pad.set_colors(&palette, 1.0)
        .context("Failed to write lighting report")?;

    let mut config = storage::load_config().context("Failed to load config")?;
    config.active_theme = Some(name.to_lowercase());
    storage::save_config(&config).context("Failed to save config")?;

    println!("🎨 Applied theme '{}'", name);
    Ok(())
}

fn cmd_save_theme(name: &str, colors: &str) -> Result<()> {
    let palette = parse_theme(colors)
        .context("Failed to parse theme")?
        .to_palette();

    let mut config = storage::load_config().context("Failed to load config")?;
    config
        .themes
        .insert(name.to_lowercase(), StoredTheme::from_palette(&palette));
    storage::save_config(&config).context("Failed to save config")?;

    println!("💾 Saved theme '{}'", name);
    Ok(())
}

fn cmd_themes() -> Result<()> {
    storage::ensure_config_exists().context("Failed to create config")?;
    let config = storage::load_config().context("Failed to load config")?;

    if config.themes.is_empty() {
        println!("No saved themes. Use 'save-theme' to add one.");
        return Ok(());
    }

    println!("Saved themes:");
    let mut names: Vec<_> = config.themes.iter().collect();
    names.sort_by_key(|(name, _)| name.as_str());

    for (name, stored) in names {
        let active = if config.active_theme.as_deref() == Some(name) {
            " (active)"
        } else {
            ""
        };
        println!(
            "  {} - {} {} {}{}",
            name, stored.keys[0], stored.keys[1], stored.keys[2], active
        );
    }

    Ok(())
}

fn cmd_list() -> Result<()> {
    let devices = Macropad::list_devices().context("Failed to enumerate devices")?;

    if devices.is_empty() {
        println!("❌ No macropad found.");
        return Ok(());
    }

    println!("Found {} device(s):", devices.len());
    for (path, product) in devices {
        match product {
            Some(p) => println!("  {} - {}", path, p),
            None => println!("  {}", path),
        }
    }

    Ok(())
}

fn cmd_info() -> Result<()> {
    let pad = Macropad::open().context("Failed to open macropad")?;

    match pad.product() {
        Some(product) => println!("✅ Connected: {}", product),
        None => println!("✅ Connected (no product string)"),
    }
    println!("   Vendor ID:  0x{:04X}", macropad_rgb::protocol::MACROPAD_VID);
    println!("   Product ID: 0x{:04X}", macropad_rgb::protocol::MACROPAD_PID);
    println!("   Interface:  {}", macropad_rgb::protocol::RGB_INTERFACE);

    Ok(())
}
