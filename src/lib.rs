//! Macropad RGB Library
//!
//! A Rust driver for the RGB backlight of CH552 3-keys-1-knob macro keypads.
//!
//! # Features
//!
//! - Discover and open the pad's vendor lighting interface
//! - Set per-key colors (3 NeoPixels, one per key)
//! - Host-driven breathing effect with clean shutdown
//! - Named themes persisted to the platform config directory
//!
//! # Example
//!
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//! use std::time::Duration;
//!
//! use macropad_rgb::device::Macropad;
//! use macropad_rgb::protocol::STOCK_PALETTE;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pad = Macropad::open()?;
//!     if let Some(product) = pad.product() {
//!         println!("Opened device: {}", product);
//!     }
//!
//!     // Static colors at half brightness
//!     pad.set_colors(&STOCK_PALETTE, 0.5)?;
//!
//!     // Or breathe the stock palette for two cycles
//!     let running = AtomicBool::new(true);
//!     pad.breathe(&STOCK_PALETTE, Duration::from_millis(5), Some(2), &running)?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod device;
pub mod effects;
pub mod error;
pub mod protocol;
pub mod storage;
pub mod utils;

// Re-exports for convenience
pub use config::Theme;
pub use device::Macropad;
pub use error::{PadError, Result};
pub use protocol::{Key, RgbColor, STOCK_PALETTE};
