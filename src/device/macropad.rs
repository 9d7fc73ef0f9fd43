//! Macropad device implementation.
//!
//! High-level interface for the CH552 3-keys-1-knob pad's RGB backlight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use hidapi::{HidApi, HidDevice};

use crate::effects::{BreathingCycle, SHUTDOWN_SCALE};
use crate::error::{PadError, Result};
use crate::protocol::{
    KEY_COUNT, MACROPAD_PID, MACROPAD_VID, RGB_INTERFACE, RgbColor, build_led_report,
};

// =============================================================================
// Macropad
// =============================================================================

/// Macropad device handle.
///
/// Provides methods for writing lighting state and running host-driven
/// effects. The device keeps no readable lighting state; whatever the last
/// report set is what the LEDs show.
///
/// # Example
///
/// ```no_run
/// use macropad_rgb::device::Macropad;
/// use macropad_rgb::protocol::STOCK_PALETTE;
///
/// let pad = Macropad::open()?;
/// pad.set_colors(&STOCK_PALETTE, 1.0)?;
/// # Ok::<(), macropad_rgb::error::PadError>(())
/// ```
pub struct Macropad {
    device: HidDevice,
    product: Option<String>,
}

impl Macropad {
    /// Open the first available macropad.
    ///
    /// The pad enumerates as two HID interfaces; interface 0 is the
    /// keyboard and interface 1 carries the vendor lighting endpoint, so
    /// selection matches on all three of vendor ID, product ID and
    /// interface number.
    ///
    /// # Errors
    /// Returns `DeviceNotFound` if no matching interface is connected.
    pub fn open() -> Result<Self> {
        let api = HidApi::new().map_err(PadError::HidError)?;

        for info in api.device_list() {
            if info.vendor_id() == MACROPAD_VID
                && info.product_id() == MACROPAD_PID
                && info.interface_number() == RGB_INTERFACE
            {
                let device = info.open_device(&api).map_err(PadError::HidError)?;
                return Ok(Self {
                    device,
                    product: info.product_string().map(String::from),
                });
            }
        }

        Err(PadError::DeviceNotFound)
    }

    /// Open a macropad by path.
    ///
    /// Useful when multiple pads are connected.
    pub fn open_path(path: &std::ffi::CStr) -> Result<Self> {
        let api = HidApi::new().map_err(PadError::HidError)?;
        let device = api.open_path(path).map_err(PadError::HidError)?;

        Ok(Self {
            device,
            product: None,
        })
    }

    /// List all connected macropad lighting interfaces.
    ///
    /// Returns a vector of (path, product_string) tuples.
    pub fn list_devices() -> Result<Vec<(String, Option<String>)>> {
        let api = HidApi::new().map_err(PadError::HidError)?;

        let devices: Vec<_> = api
            .device_list()
            .filter(|info| {
                info.vendor_id() == MACROPAD_VID
                    && info.product_id() == MACROPAD_PID
                    && info.interface_number() == RGB_INTERFACE
            })
            .map(|info| {
                (
                    info.path().to_string_lossy().into_owned(),
                    info.product_string().map(String::from),
                )
            })
            .collect();

        Ok(devices)
    }

    /// Product string reported by the device, if it was enumerated.
    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    /// Write one lighting report with the given colors scaled by `x`.
    pub fn set_colors(&self, colors: &[RgbColor; KEY_COUNT], x: f32) -> Result<()> {
        let report = build_led_report(colors, x);
        self.device.write(&report).map_err(PadError::HidError)?;
        Ok(())
    }

    /// Turn all key backlights off.
    pub fn off(&self) -> Result<()> {
        self.set_colors(&[RgbColor::OFF; KEY_COUNT], 0.0)
    }

    /// Run the breathing effect.
    ///
    /// Writes one report per ramp step, sleeping `frame_delay` between
    /// steps. Runs for `cycles` full cycles, or until `running` is cleared
    /// (Ctrl+C handler) when `cycles` is `None`. On exit the palette is
    /// written once at full brightness, leaving the pad lit.
    ///
    /// # Arguments
    /// * `colors` - One color per key
    /// * `frame_delay` - Pause between ramp steps
    /// * `cycles` - Number of cycles, or `None` to run until stopped
    /// * `running` - Cleared externally to stop the effect
    pub fn breathe(
        &self,
        colors: &[RgbColor; KEY_COUNT],
        frame_delay: Duration,
        cycles: Option<u64>,
        running: &AtomicBool,
    ) -> Result<()> {
        let mut done = 0u64;

        'outer: while running.load(Ordering::SeqCst) {
            if let Some(n) = cycles
                && done >= n
            {
                break;
            }

            for x in BreathingCycle::new() {
                if !running.load(Ordering::SeqCst) {
                    break 'outer;
                }

                self.set_colors(colors, x)?;

                if !frame_delay.is_zero() {
                    std::thread::sleep(frame_delay);
                }
            }

            done += 1;
        }

        // Leave the pad fully lit on the way out
        self.set_colors(colors, SHUTDOWN_SCALE)
    }
}

impl std::fmt::Debug for Macropad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Macropad")
            .field("product", &self.product)
            .finish_non_exhaustive()
    }
}
