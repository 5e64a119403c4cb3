//! Poll-cycle controller
//!
//! Coordinates timed sampling, change detection and display invalidation
//! without ever blocking. The firmware calls [`PollCycleController::tick`]
//! once per scheduler iteration; each call performs one bounded step of
//! the current phase and returns the next one.
//!
//! The per-phase steps ([`sample`], [`render`], [`idle`]) are plain
//! functions over [`ControllerState`] so they can be exercised on their own.

use crate::config::PollConfig;
use crate::reading::Reading;
use crate::render::{RenderStrategy, Renderer};
use crate::state::{Event, Phase};
use crate::traits::{elapsed_ms, Clock, HumitureSensor, StatusDisplay};

/// Everything the controller remembers between ticks
#[derive(Debug, Clone)]
pub struct ControllerState {
    /// Current phase
    phase: Phase,
    /// Timestamp (ms) taken at the end of the last render step
    last_sample_ms: u32,
    /// Reading captured by the most recent sample
    current: Reading,
    /// Reading last accepted as a change
    previous: Reading,
    /// Display is out of date
    redraw_needed: bool,
    /// Number of times the display was actually updated
    frames_presented: u32,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerState {
    /// Initial state: about to sample, first render forced
    pub fn new() -> Self {
        Self {
            phase: Phase::Sample,
            last_sample_ms: 0,
            current: Reading::default(),
            previous: Reading::default(),
            redraw_needed: true,
            frames_presented: 0,
        }
    }

    /// Get current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get timestamp of the end of the last render step
    pub fn last_sample_ms(&self) -> u32 {
        self.last_sample_ms
    }

    /// Get most recent reading
    pub fn current(&self) -> &Reading {
        &self.current
    }

    /// Get reading last accepted as a change
    pub fn previous(&self) -> &Reading {
        &self.previous
    }

    /// Check if the display is out of date
    pub fn redraw_needed(&self) -> bool {
        self.redraw_needed
    }

    /// Check if the most recent reading was valid
    pub fn is_valid(&self) -> bool {
        self.current.is_valid()
    }

    /// Get number of display updates so far (wraps)
    pub fn frames_presented(&self) -> u32 {
        self.frames_presented
    }
}

/// Sample step: read both channels and run change detection
///
/// Sets `redraw_needed` and promotes the new reading to `previous` when
/// temperature, humidity or validity differ from the last accepted reading.
/// An invalid read is not an error here; it becomes `Reading::Invalid`.
pub fn sample<S: HumitureSensor>(state: &mut ControllerState, sensor: &mut S) -> Event {
    let temperature = sensor.read_temperature();
    let humidity = sensor.read_humidity();

    state.current = Reading::capture(temperature, humidity);

    #[cfg(feature = "defmt")]
    if !state.current.is_valid() {
        defmt::warn!(
            "sensor read invalid: temperature={}, humidity={}",
            temperature,
            humidity
        );
    }

    if state.current.differs_from(&state.previous) {
        #[cfg(feature = "defmt")]
        defmt::debug!("reading changed: {} -> {}", state.previous, state.current);

        state.redraw_needed = true;
        state.previous = state.current;
    }

    Event::SampleCaptured
}

/// Render step: present the current reading if it changed
///
/// Reads the clock after presenting and records that as the start of the
/// next sample interval, whether or not the display was touched.
pub fn render<R, D, C>(
    state: &mut ControllerState,
    renderer: &mut R,
    display: &mut D,
    clock: &C,
) -> Event
where
    R: RenderStrategy,
    D: StatusDisplay,
    C: Clock,
{
    if state.redraw_needed {
        renderer.present(display, &state.current);
        state.redraw_needed = false;
        state.frames_presented = state.frames_presented.wrapping_add(1);
    }

    state.last_sample_ms = clock.now_ms();
    Event::RenderComplete
}

/// Idle step: non-blocking check of the sample interval
///
/// A late tick samples immediately; missed intervals are not caught up.
pub fn idle(state: &ControllerState, now_ms: u32, interval_ms: u32) -> Event {
    if elapsed_ms(now_ms, state.last_sample_ms) >= interval_ms {
        Event::IntervalElapsed
    } else {
        Event::IntervalPending
    }
}

/// The poll-cycle controller
///
/// Owns its state and render strategy. Sensor, display and clock are lent
/// to each call, so the caller keeps ownership of the peripherals.
pub struct PollCycleController<R = Renderer> {
    state: ControllerState,
    renderer: R,
    config: PollConfig,
}

impl PollCycleController<Renderer> {
    /// Create a controller using the configured render mode
    pub fn new(config: PollConfig) -> Self {
        Self::with_renderer(config, Renderer::for_mode(config.render_mode))
    }
}

impl<R: RenderStrategy> PollCycleController<R> {
    /// Create a controller with an explicit render strategy
    pub fn with_renderer(config: PollConfig, renderer: R) -> Self {
        Self {
            state: ControllerState::new(),
            renderer,
            config,
        }
    }

    /// One-time start-up: initialize collaborators and draw the static screen
    pub fn start<S, D>(&mut self, sensor: &mut S, display: &mut D)
    where
        S: HumitureSensor,
        D: StatusDisplay,
    {
        display.init(self.config.rotation);
        sensor.init();
        self.renderer.draw_static(display);
    }

    /// Run one step of the current phase and return the next phase
    pub fn tick<S, D, C>(&mut self, sensor: &mut S, display: &mut D, clock: &C) -> Phase
    where
        S: HumitureSensor,
        D: StatusDisplay,
        C: Clock,
    {
        let event = match self.state.phase {
            Phase::Sample => sample(&mut self.state, sensor),
            Phase::Render => render(&mut self.state, &mut self.renderer, display, clock),
            Phase::Idle => idle(&self.state, clock.now_ms(), self.config.sample_interval_ms),
        };

        self.state.phase = self.state.phase.transition(event);
        self.state.phase
    }

    /// Get controller state
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Get configuration
    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Get render strategy
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
