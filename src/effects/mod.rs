//! Lighting effects driven from the host.

pub mod breathing;

pub use breathing::{BreathingCycle, RAMP_STEPS, SHUTDOWN_SCALE};
