//! Breathing effect: a linear brightness ramp up and back down.
//!
//! One cycle is 100 up-steps (`x = 0/100 .. 99/100`) followed by 100
//! down-steps (`x = 100/100 .. 1/100`), matching the stock tooling frame
//! for frame. The device holds whatever state the last report set, so the
//! effect is driven entirely host-side, one report per step.

/// Steps per ramp direction.
pub const RAMP_STEPS: u32 = 100;

/// Brightness written on clean shutdown (full palette).
pub const SHUTDOWN_SCALE: f32 = 1.0;

/// Iterator over the brightness scalars of one breathing cycle.
///
/// Yields exactly `2 * RAMP_STEPS` values: the up-ramp never quite reaches
/// full brightness (tops out at 0.99) and the down-ramp starts at 1.0 and
/// stops just above black (0.01).
#[derive(Debug, Clone)]
pub struct BreathingCycle {
    step: u32,
}

impl BreathingCycle {
    pub fn new() -> Self {
        Self { step: 0 }
    }
}

impl Default for BreathingCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for BreathingCycle {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.step >= 2 * RAMP_STEPS {
            return None;
        }

        let x = if self.step < RAMP_STEPS {
            // Up: 0/100 .. 99/100
            self.step as f32 / RAMP_STEPS as f32
        } else {
            // Down: 100/100 .. 1/100
            (2 * RAMP_STEPS - self.step) as f32 / RAMP_STEPS as f32
        };

        self.step += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (2 * RAMP_STEPS - self.step) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for BreathingCycle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_length() {
        assert_eq!(BreathingCycle::new().count(), 200);
    }

    #[test]
    fn test_up_ramp_values() {
        let up: Vec<f32> = BreathingCycle::new().take(100).collect();
        assert_eq!(up.len(), 100);
        for (i, &x) in up.iter().enumerate() {
            assert_eq!(x, i as f32 / 100.0);
        }
        assert_eq!(up[0], 0.0);
        assert_eq!(*up.last().unwrap(), 0.99);
    }

    #[test]
    fn test_down_ramp_values() {
        let down: Vec<f32> = BreathingCycle::new().skip(100).collect();
        assert_eq!(down.len(), 100);
        for (i, &x) in down.iter().enumerate() {
            assert_eq!(x, (100 - i) as f32 / 100.0);
        }
        assert_eq!(down[0], 1.0);
        assert_eq!(*down.last().unwrap(), 0.01);
    }

    #[test]
    fn test_all_scales_in_unit_range() {
        assert!(BreathingCycle::new().all(|x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_shutdown_is_full_brightness() {
        use crate::protocol::{STOCK_PALETTE, build_led_report};

        let shutdown = build_led_report(&STOCK_PALETTE, SHUTDOWN_SCALE);
        assert_eq!(
            shutdown,
            [1, 0xFD, 0x80, 0x46, 0x80, 0x45, 0x65, 0x2D, 0x1D, 0x7A]
        );
    }
}
