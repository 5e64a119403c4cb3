//! Value formatting
//!
//! Readings are shown as fixed-point decimals with two fractional digits
//! and a unit suffix: `23.50 C`, `40.00 %`.

use core::fmt::Write;

use heapless::String;

use crate::config::layout::{
    CONNECTED_TEXT, DISCONNECTED_TEXT, NOT_AVAILABLE_TEXT, VALUE_FIELD_WIDTH,
};
use crate::reading::Reading;

/// Text of one value region
pub type ValueText = String<VALUE_FIELD_WIDTH>;

/// Spaces used to blank a value region
pub const BLANK_FIELD: &str = "            ";

/// Shown when a number does not fit the value region
pub const OVERFLOW_TEXT: &str = "---";

/// Temperature unit marker
pub const CELSIUS_UNIT: &str = "C";

/// Humidity unit marker
pub const PERCENT_UNIT: &str = "%";

/// Format a value with exactly two fractional digits
pub fn format_fixed2(value: f32) -> ValueText {
    let mut text = ValueText::new();
    if write!(text, "{:.2}", value).is_err() {
        overflow(&mut text);
    }
    text
}

/// Format a value with two fractional digits and a unit suffix
pub fn format_with_unit(value: f32, unit: &str) -> ValueText {
    let mut text = ValueText::new();
    if write!(text, "{:.2} {}", value, unit).is_err() {
        overflow(&mut text);
    }
    text
}

/// Temperature region text for a reading
pub fn temperature_text(reading: &Reading) -> ValueText {
    match reading.temperature_c() {
        Some(t) => format_with_unit(t, CELSIUS_UNIT),
        None => not_available(),
    }
}

/// Humidity region text for a reading
pub fn humidity_text(reading: &Reading) -> ValueText {
    match reading.humidity_pct() {
        Some(h) => format_with_unit(h, PERCENT_UNIT),
        None => not_available(),
    }
}

/// Status region text for a reading
pub fn status_text(reading: &Reading) -> &'static str {
    if reading.is_valid() {
        CONNECTED_TEXT
    } else {
        DISCONNECTED_TEXT
    }
}

fn not_available() -> ValueText {
    let mut text = ValueText::new();
    let _ = text.push_str(NOT_AVAILABLE_TEXT);
    text
}

fn overflow(text: &mut ValueText) {
    text.clear();
    let _ = text.push_str(OVERFLOW_TEXT);
}
