//! Board glue
//!
//! Binds the core traits to RP2040 peripherals: the ST7789 panel behind a
//! text console, and the embassy time driver as the poll clock.

use defmt::*;
use dewpoint_core::traits::{Clock, Color, Rotation, StatusDisplay, TextStyle};
use dewpoint_drivers::display::GraphicsConsole;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Delay, Instant};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{Orientation, Rotation as PanelRotation};
use mipidsi::NoResetPin;

/// SPI device owning the panel chip select
pub type PanelSpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, Delay>;

/// Initialized ST7789 panel
pub type Panel = mipidsi::Display<SpiInterface<'static, PanelSpi, Output<'static>>, ST7789, NoResetPin>;

fn panel_rotation(rotation: Rotation) -> PanelRotation {
    match rotation {
        Rotation::Deg0 => PanelRotation::Deg0,
        Rotation::Deg90 => PanelRotation::Deg90,
        Rotation::Deg180 => PanelRotation::Deg180,
        Rotation::Deg270 => PanelRotation::Deg270,
    }
}

/// Status display on the TFT panel
pub struct TftDisplay {
    console: GraphicsConsole<Panel>,
}

impl TftDisplay {
    pub fn new(panel: Panel) -> Self {
        Self {
            console: GraphicsConsole::new(panel),
        }
    }
}

impl StatusDisplay for TftDisplay {
    fn init(&mut self, rotation: Rotation) {
        let orientation = Orientation::new().rotate(panel_rotation(rotation));
        if self.console.target_mut().set_orientation(orientation).is_err() {
            warn!("Panel orientation write failed");
        }
        self.console.init(rotation);
    }

    fn clear(&mut self, color: Color) {
        self.console.clear(color);
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.console.set_cursor(x, y);
    }

    fn set_text_style(&mut self, style: TextStyle) {
        self.console.set_text_style(style);
    }

    fn print(&mut self, text: &str) {
        self.console.print(text);
    }

    fn println(&mut self, text: &str) {
        self.console.println(text);
    }
}

/// Milliseconds since boot, wrapping at `u32::MAX`
pub struct EmbassyClock {
    start: Instant,
}

impl EmbassyClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}
