//! Events that trigger phase transitions

/// Events produced by the controller while stepping a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Both sensor channels were read and compared
    SampleCaptured,
    /// Render step finished (whether or not the display was touched)
    RenderComplete,
    /// Sample interval has elapsed since the last render
    IntervalElapsed,
    /// Still inside the sample interval
    IntervalPending,
}
