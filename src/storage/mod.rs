//! Theme storage and persistence module.
//!
//! Handles saving and loading named themes to/from disk.

pub mod profiles;

// Re-export commonly used items
pub use profiles::*;
