//! Device abstraction layer for the macropad.
//!
//! Provides high-level device discovery and lighting control interfaces.

pub mod macropad;

pub use macropad::Macropad;
