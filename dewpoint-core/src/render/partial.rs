//! Partial repaint strategy
//!
//! Header and labels are drawn once at start-up. Each redraw only
//! overwrites the three value regions, first blanking them so a shorter
//! value never leaves characters of a longer one behind.

use crate::config::layout::{
    Anchor, HUMIDITY_LABEL, HUMIDITY_LABEL_TEXT, HUMIDITY_VALUE, STATUS_LABEL,
    STATUS_LABEL_TEXT, STATUS_VALUE, TEMPERATURE_LABEL, TEMPERATURE_LABEL_TEXT, TEMPERATURE_VALUE,
    TEXT_STYLE,
};
use crate::reading::Reading;
use crate::traits::StatusDisplay;

use super::format::{humidity_text, status_text, temperature_text, BLANK_FIELD};
use super::{draw_header, RenderStrategy};

/// Value-region repaint
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRepaint;

impl PartialRepaint {
    pub const fn new() -> Self {
        Self
    }

    /// Blank one value region, then print the new value into it
    fn overwrite<D: StatusDisplay>(display: &mut D, at: Anchor, text: &str) {
        display.set_cursor(at.x, at.y);
        display.print(BLANK_FIELD);
        display.set_cursor(at.x, at.y);
        display.print(text);
    }
}

impl RenderStrategy for PartialRepaint {
    fn draw_static<D: StatusDisplay>(&mut self, display: &mut D) {
        draw_header(display);

        for (at, label) in [
            (STATUS_LABEL, STATUS_LABEL_TEXT),
            (TEMPERATURE_LABEL, TEMPERATURE_LABEL_TEXT),
            (HUMIDITY_LABEL, HUMIDITY_LABEL_TEXT),
        ] {
            display.set_cursor(at.x, at.y);
            display.println(label);
        }
    }

    fn present<D: StatusDisplay>(&mut self, display: &mut D, reading: &Reading) {
        display.set_text_style(TEXT_STYLE);

        Self::overwrite(display, STATUS_VALUE, status_text(reading));
        Self::overwrite(display, TEMPERATURE_VALUE, &temperature_text(reading));
        Self::overwrite(display, HUMIDITY_VALUE, &humidity_text(reading));
    }
}
