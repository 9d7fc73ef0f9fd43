//! Custom error types for the macropad RGB driver.
//!
//! This module provides fine-grained error handling for device communication,
//! report building, and theme validation.

use thiserror::Error;

/// Main error type for macropad operations.
#[derive(Error, Debug)]
pub enum PadError {
    /// Device not found during enumeration.
    #[error("Macropad not found. Check USB connection and permissions.")]
    DeviceNotFound,

    /// HID communication error.
    #[error("HID communication error: {0}")]
    HidError(#[from] hidapi::HidError),

    /// Theme has invalid format or is unknown.
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Config file could not be read, written or (de)serialized.
    #[error("Config storage error: {0}")]
    Storage(String),

    /// Key index out of range.
    #[error("Invalid key index {0}. The pad has keys 1-3.")]
    InvalidKey(u8),

    /// Generic invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for macropad operations.
pub type Result<T> = std::result::Result<T, PadError>;
