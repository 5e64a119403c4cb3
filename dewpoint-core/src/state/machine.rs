//! Phase definitions
//!
//! Display and sensor activity is a function of the current phase and an
//! event. Every (phase, event) pair is listed; there is no catch-all arm.

use super::events::Event;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controller phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Read both sensor channels and run change detection
    #[default]
    Sample,
    /// Repaint the display if a change was detected
    Render,
    /// Non-blocking wait for the sample interval
    Idle,
}

impl Phase {
    /// Process an event and return the next phase
    ///
    /// Events that do not belong to the current phase leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Sample, SampleCaptured) => Render,
            (Sample, RenderComplete) => Sample,
            (Sample, IntervalElapsed) => Sample,
            (Sample, IntervalPending) => Sample,

            (Render, RenderComplete) => Idle,
            (Render, SampleCaptured) => Render,
            (Render, IntervalElapsed) => Render,
            (Render, IntervalPending) => Render,

            (Idle, IntervalElapsed) => Sample,
            (Idle, IntervalPending) => Idle,
            (Idle, SampleCaptured) => Idle,
            (Idle, RenderComplete) => Idle,
        }
    }
}
