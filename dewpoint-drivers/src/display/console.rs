//! Cursor-based text console over an `embedded-graphics` target
//!
//! Glyphs are drawn with a filled background, so reprinting a field in
//! place erases what was there before.

use dewpoint_core::traits::{Color, Font, Rotation, StatusDisplay, TextStyle};
use embedded_graphics::mono_font::{ascii, MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

/// Map a font selection to a glyph set
pub fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Small => &ascii::FONT_6X10,
        Font::Standard => &ascii::FONT_8X13,
        Font::Large => &ascii::FONT_10X20,
    }
}

/// Convert a raw RGB565 color
pub fn rgb565(color: Color) -> Rgb565 {
    Rgb565::from(RawU16::new(color.raw()))
}

/// Text console
pub struct GraphicsConsole<D> {
    target: D,
    cursor: Point,
    style: TextStyle,
    rotation: Rotation,
}

impl<D> GraphicsConsole<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            style: TextStyle::default(),
            rotation: Rotation::default(),
        }
    }

    /// Rotation requested by the last `init`
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    /// Access the draw target, e.g. to change panel orientation
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Width of `text` in pixels with the current font
    fn advance(&self, text: &str) -> i32 {
        let font = mono_font(self.style.font);
        let pitch = font.character_size.width + font.character_spacing;
        (text.chars().count() as u32 * pitch) as i32
    }

    fn line_height(&self) -> i32 {
        mono_font(self.style.font).character_size.height as i32
    }
}

impl<D> StatusDisplay for GraphicsConsole<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn init(&mut self, rotation: Rotation) {
        self.rotation = rotation;
        self.cursor = Point::zero();
        self.style = TextStyle::default();
    }

    fn clear(&mut self, color: Color) {
        let _ = self.target.clear(rgb565(color));
        self.cursor = Point::zero();
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Point::new(x as i32, y as i32);
    }

    fn set_text_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    fn print(&mut self, text: &str) {
        let character_style = MonoTextStyleBuilder::new()
            .font(mono_font(self.style.font))
            .text_color(rgb565(self.style.fg))
            .background_color(rgb565(self.style.bg))
            .build();

        let _ = Text::with_baseline(text, self.cursor, character_style, Baseline::Top)
            .draw(&mut self.target);

        self.cursor.x += self.advance(text);
    }

    fn println(&mut self, text: &str) {
        self.print(text);
        self.cursor = Point::new(0, self.cursor.y + self.line_height());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn console() -> GraphicsConsole<MockDisplay<Rgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        GraphicsConsole::new(display)
    }

    fn small(fg: Color, bg: Color) -> TextStyle {
        TextStyle::new(fg, bg, Font::Small)
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(rgb565(Color::BLACK), Rgb565::BLACK);
        assert_eq!(rgb565(Color::WHITE), Rgb565::WHITE);
        assert_eq!(rgb565(Color::RED), Rgb565::RED);
        assert_eq!(rgb565(Color::GREEN), Rgb565::GREEN);
        assert_eq!(rgb565(Color::YELLOW), Rgb565::YELLOW);
    }

    #[test]
    fn test_font_metrics() {
        assert_eq!(mono_font(Font::Small).character_size, Size::new(6, 10));
        assert_eq!(mono_font(Font::Standard).character_size, Size::new(8, 13));
        assert_eq!(mono_font(Font::Large).character_size, Size::new(10, 20));
    }

    #[test]
    fn test_print_advances_cursor() {
        let mut console = console();
        console.set_text_style(small(Color::WHITE, Color::BLACK));
        console.set_cursor(4, 8);

        console.print("ab");
        assert_eq!(console.cursor(), Point::new(16, 8));

        console.print("c");
        assert_eq!(console.cursor(), Point::new(22, 8));
    }

    #[test]
    fn test_println_moves_to_next_line() {
        let mut console = console();
        console.set_text_style(small(Color::WHITE, Color::BLACK));
        console.set_cursor(12, 0);

        console.println("x");
        assert_eq!(console.cursor(), Point::new(0, 10));

        console.set_text_style(TextStyle::default());
        console.println("");
        assert_eq!(console.cursor(), Point::new(0, 23));
    }

    #[test]
    fn test_print_fills_background() {
        let mut console = console();
        console.set_text_style(small(Color::WHITE, Color::RED));
        console.set_cursor(6, 0);

        console.print(" ");

        // Blank glyph cell is solid background
        assert_eq!(console.target().get_pixel(Point::new(6, 0)), Some(Rgb565::RED));
        assert_eq!(console.target().get_pixel(Point::new(11, 9)), Some(Rgb565::RED));
        // Nothing left of the cursor
        assert_eq!(console.target().get_pixel(Point::new(5, 0)), None);
    }

    #[test]
    fn test_overprint_erases_old_text() {
        let mut console = console();
        console.set_text_style(small(Color::WHITE, Color::BLACK));

        console.print("8");
        console.set_cursor(0, 0);
        console.print(" ");

        for y in 0..10 {
            for x in 0..6 {
                assert_eq!(
                    console.target().get_pixel(Point::new(x, y)),
                    Some(Rgb565::BLACK)
                );
            }
        }
    }

    #[test]
    fn test_clear_fills_screen_and_homes_cursor() {
        let mut console = console();
        console.set_cursor(30, 30);
        console.clear(Color::GREEN);

        assert_eq!(console.cursor(), Point::zero());
        assert_eq!(console.target().get_pixel(Point::new(0, 0)), Some(Rgb565::GREEN));
        assert_eq!(console.target().get_pixel(Point::new(63, 63)), Some(Rgb565::GREEN));
    }

    #[test]
    fn test_init_resets_state() {
        let mut console = console();
        console.set_text_style(small(Color::RED, Color::WHITE));
        console.set_cursor(10, 10);

        console.init(Rotation::Deg90);

        assert_eq!(console.rotation(), Rotation::Deg90);
        assert_eq!(console.cursor(), Point::zero());
        assert_eq!(console.style(), TextStyle::default());
    }
}
