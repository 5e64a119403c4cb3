//! Status screen rendering
//!
//! Two strategies present a [`Reading`] on a [`StatusDisplay`]:
//!
//! - [`PartialRepaint`]: labels once, then only the value regions
//!   (default; no flicker, little bus traffic)
//! - [`FullRepaint`]: clear and redraw everything on every change
//!
//! [`Renderer`] picks one from [`RenderMode`] at start-up.

pub mod format;
pub mod full;
pub mod partial;

pub use format::{format_fixed2, format_with_unit};
pub use full::FullRepaint;
pub use partial::PartialRepaint;

use crate::config::layout::{BACKGROUND, HEADER, HEADER_LINES, TEXT_STYLE};
use crate::config::RenderMode;
use crate::reading::Reading;
use crate::traits::StatusDisplay;

/// Trait for display update strategies
pub trait RenderStrategy {
    /// Draw the parts of the screen that never change
    ///
    /// Called once, after display init and before the first sample.
    fn draw_static<D: StatusDisplay>(&mut self, display: &mut D);

    /// Present a reading
    ///
    /// Only called when the controller detected a change.
    fn present<D: StatusDisplay>(&mut self, display: &mut D, reading: &Reading);
}

/// Render strategy chosen by configuration
#[derive(Debug, Clone, Copy)]
pub enum Renderer {
    Full(FullRepaint),
    Partial(PartialRepaint),
}

impl Renderer {
    /// Create the strategy for a render mode
    pub const fn for_mode(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Full => Renderer::Full(FullRepaint::new()),
            RenderMode::Partial => Renderer::Partial(PartialRepaint::new()),
        }
    }

    /// Render mode of this strategy
    pub const fn mode(&self) -> RenderMode {
        match self {
            Renderer::Full(_) => RenderMode::Full,
            Renderer::Partial(_) => RenderMode::Partial,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::for_mode(RenderMode::default())
    }
}

impl RenderStrategy for Renderer {
    fn draw_static<D: StatusDisplay>(&mut self, display: &mut D) {
        match self {
            Renderer::Full(r) => r.draw_static(display),
            Renderer::Partial(r) => r.draw_static(display),
        }
    }

    fn present<D: StatusDisplay>(&mut self, display: &mut D, reading: &Reading) {
        match self {
            Renderer::Full(r) => r.present(display, reading),
            Renderer::Partial(r) => r.present(display, reading),
        }
    }
}

/// Clear the screen and print the header block
pub(crate) fn draw_header<D: StatusDisplay>(display: &mut D) {
    display.clear(BACKGROUND);
    display.set_text_style(TEXT_STYLE);
    display.set_cursor(HEADER.x, HEADER.y);
    for line in HEADER_LINES {
        display.println(line);
    }
}
