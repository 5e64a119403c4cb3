//! Poll-cycle configuration
//!
//! Behavior is fixed at build time; `PollConfig::default()` is what the
//! firmware runs with.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::display::Rotation;

/// Minimum time between two samples (ms), measured from the end of a render
///
/// DHT-family sensors refresh at most every 1-2 seconds; reading faster
/// only returns stale or failed frames.
pub const SAMPLE_INTERVAL_MS: u32 = 2000;

/// Display update strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenderMode {
    /// Clear the whole screen and redraw everything on each change
    Full,
    /// Draw labels once, then overwrite only the value regions
    #[default]
    Partial,
}

/// Controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollConfig {
    /// Minimum wait between samples (ms)
    pub sample_interval_ms: u32,
    /// Display update strategy
    pub render_mode: RenderMode,
    /// Screen rotation applied at display init
    pub rotation: Rotation,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: SAMPLE_INTERVAL_MS,
            render_mode: RenderMode::Partial,
            rotation: Rotation::Deg0,
        }
    }
}
