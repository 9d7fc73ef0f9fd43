//! HID protocol implementation for the 3-keys-1-knob macropad.
//!
//! This module contains the device identifiers, report layout and the
//! report builder used for all lighting writes.

pub mod report;

pub use report::*;
