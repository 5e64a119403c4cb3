//! Screen layout
//!
//! Fixed pixel coordinates for a 135x240 portrait panel with the
//! standard 8-pixel-wide font (16 columns).

use crate::traits::display::{Color, Font, TextStyle};

/// A fixed text position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
}

impl Anchor {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Header lines, printed from the top-left corner
pub const HEADER_LINES: [&str; 3] = ["----------------", "  DHT11 Sensor", "----------------"];

/// Header position
pub const HEADER: Anchor = Anchor::new(0, 0);

/// Label positions
pub const STATUS_LABEL: Anchor = Anchor::new(0, 70);
pub const TEMPERATURE_LABEL: Anchor = Anchor::new(0, 120);
pub const HUMIDITY_LABEL: Anchor = Anchor::new(0, 170);

/// Value positions (one line below each label)
pub const STATUS_VALUE: Anchor = Anchor::new(0, 90);
pub const TEMPERATURE_VALUE: Anchor = Anchor::new(0, 140);
pub const HUMIDITY_VALUE: Anchor = Anchor::new(0, 190);

/// Banner shown instead of the values when the sensor is missing
pub const BANNER: Anchor = Anchor::new(0, 110);
pub const BANNER_LINES: [&str; 2] = ["Sensor Not", "Connected"];

/// Label text
pub const STATUS_LABEL_TEXT: &str = "Status:";
pub const TEMPERATURE_LABEL_TEXT: &str = "Temperature:";
pub const HUMIDITY_LABEL_TEXT: &str = "Humidity:";

/// Status text
pub const CONNECTED_TEXT: &str = "CONNECTED";
pub const DISCONNECTED_TEXT: &str = "DISCONNECTED";

/// Placeholder for values while the sensor is missing
pub const NOT_AVAILABLE_TEXT: &str = "N/A";

/// Characters blanked before a value is rewritten
///
/// Must cover the longest string ever printed in a value region.
pub const VALUE_FIELD_WIDTH: usize = 12;

/// Screen background
pub const BACKGROUND: Color = Color::BLACK;

/// Style for header, labels and values
pub const TEXT_STYLE: TextStyle = TextStyle::new(Color::WHITE, BACKGROUND, Font::Standard);

/// Style for the sensor-missing banner
pub const BANNER_STYLE: TextStyle = TextStyle::new(Color::RED, BACKGROUND, Font::Standard);
