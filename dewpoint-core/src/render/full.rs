//! Full repaint strategy
//!
//! Every redraw clears the screen and draws header, labels and values
//! from scratch. Simpler than partial repaint, at the cost of visible
//! flicker and a full frame of bus traffic per change.

use crate::config::layout::{
    BANNER, BANNER_LINES, BANNER_STYLE, HUMIDITY_LABEL, HUMIDITY_LABEL_TEXT, HUMIDITY_VALUE,
    STATUS_LABEL, STATUS_LABEL_TEXT, STATUS_VALUE, TEMPERATURE_LABEL, TEMPERATURE_LABEL_TEXT,
    TEMPERATURE_VALUE,
};
use crate::reading::Reading;
use crate::traits::StatusDisplay;

use super::format::{humidity_text, status_text, temperature_text};
use super::{draw_header, RenderStrategy};

/// Whole-screen repaint
#[derive(Debug, Clone, Copy, Default)]
pub struct FullRepaint;

impl FullRepaint {
    pub const fn new() -> Self {
        Self
    }
}

impl RenderStrategy for FullRepaint {
    fn draw_static<D: StatusDisplay>(&mut self, display: &mut D) {
        draw_header(display);
    }

    fn present<D: StatusDisplay>(&mut self, display: &mut D, reading: &Reading) {
        draw_header(display);

        if !reading.is_valid() {
            display.set_text_style(BANNER_STYLE);
            display.set_cursor(BANNER.x, BANNER.y);
            for line in BANNER_LINES {
                display.println(line);
            }
            return;
        }

        let temperature = temperature_text(reading);
        let humidity = humidity_text(reading);

        for (label_at, label, value_at, value) in [
            (STATUS_LABEL, STATUS_LABEL_TEXT, STATUS_VALUE, status_text(reading)),
            (
                TEMPERATURE_LABEL,
                TEMPERATURE_LABEL_TEXT,
                TEMPERATURE_VALUE,
                temperature.as_str(),
            ),
            (
                HUMIDITY_LABEL,
                HUMIDITY_LABEL_TEXT,
                HUMIDITY_VALUE,
                humidity.as_str(),
            ),
        ] {
            display.set_cursor(label_at.x, label_at.y);
            display.print(label);
            display.set_cursor(value_at.x, value_at.y);
            display.print(value);
        }
    }
}
