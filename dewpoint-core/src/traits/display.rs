//! Text display trait for the status screen

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB565 color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const YELLOW: Color = Color(0xFFE0);

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Font selection
///
/// Concrete glyph sets are chosen by the display implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Font {
    /// Compact font for dense screens
    Small,
    /// Default body font
    #[default]
    Standard,
    /// Large font for headline values
    Large,
}

/// Screen rotation, in quarter turns clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Portrait
    #[default]
    Deg0,
    /// Landscape
    Deg90,
    /// Portrait, upside down
    Deg180,
    /// Landscape, upside down
    Deg270,
}

/// Foreground, background and font used for subsequent text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextStyle {
    pub fg: Color,
    pub bg: Color,
    pub font: Font,
}

impl TextStyle {
    pub const fn new(fg: Color, bg: Color, font: Font) -> Self {
        Self { fg, bg, font }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::BLACK, Font::Standard)
    }
}

/// Trait for a cursor-based text display
///
/// The controller only issues primitive drawing operations; layout lives in
/// the render strategies. Writes are fire-and-forget: no return values are
/// consumed, so implementations swallow bus errors themselves.
pub trait StatusDisplay {
    /// Initialize resolution/orientation
    fn init(&mut self, rotation: Rotation);

    /// Fill the entire screen with a color
    fn clear(&mut self, color: Color);

    /// Move the text cursor to a pixel position
    fn set_cursor(&mut self, x: u16, y: u16);

    /// Set colors and font for subsequent text
    ///
    /// Text is drawn with a filled background, so printing over old text
    /// erases it cell by cell.
    fn set_text_style(&mut self, style: TextStyle);

    /// Print text at the cursor and advance it
    fn print(&mut self, text: &str);

    /// Print text, then move the cursor to the start of the next line
    fn println(&mut self, text: &str);
}
