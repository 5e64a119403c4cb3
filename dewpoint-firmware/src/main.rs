//! Dewpoint - Temperature & Humidity Status Display
//!
//! Firmware for RP2040 boards with a DHT11 and a 135x240 ST7789 panel.
//! A single cooperative loop samples the sensor every two seconds and
//! repaints only the fields whose values changed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output, OutputOpenDrain};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::ColorInversion;
use mipidsi::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dewpoint_core::config::{PollConfig, BOARD, PANEL_SPI_HZ};
use dewpoint_drivers::sensor::{Dht, DhtModel};

mod board;
mod poll;

use crate::board::{EmbassyClock, TftDisplay};

// Peripherals are picked by type below; keep them in step with BOARD.
const _: () = {
    core::assert!(BOARD.sensor_data.pin == 1);
    core::assert!(BOARD.panel.sck.pin == 18);
    core::assert!(BOARD.panel.mosi.pin == 19);
    core::assert!(BOARD.panel.cs.pin == 17);
    core::assert!(BOARD.panel.dc.pin == 16);
    core::assert!(BOARD.panel.backlight.pin == 20);
};

/// mipidsi command buffer (must live forever for the SPI interface)
static PANEL_BUF: StaticCell<[u8; 512]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Dewpoint firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // DHT11 data line: open drain, released high
    let mut data = OutputOpenDrain::new(p.PIN_1, Level::High);
    data.set_pullup(BOARD.sensor_data.pull_up);
    let mut sensor = Dht::new(data, Delay, DhtModel::Dht11);
    info!("DHT11 on GPIO{}", BOARD.sensor_data.pin);

    // ST7789 on SPI0 (write only)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = PANEL_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    let spi_device = match ExclusiveDevice::new(spi, cs, Delay) {
        Ok(device) => device,
        Err(_) => defmt::panic!("Panel chip select unavailable"),
    };
    let interface = SpiInterface::new(spi_device, dc, PANEL_BUF.init([0; 512]));

    let panel = match Builder::new(ST7789, interface)
        .display_size(BOARD.panel_width, BOARD.panel_height)
        .display_offset(BOARD.panel_offset_x, BOARD.panel_offset_y)
        .invert_colors(ColorInversion::Inverted)
        .init(&mut Delay)
    {
        Ok(panel) => panel,
        Err(_) => defmt::panic!("ST7789 init failed"),
    };
    info!(
        "ST7789 {}x{} ready (sck=GPIO{}, mosi=GPIO{}, cs=GPIO{}, dc=GPIO{})",
        BOARD.panel_width,
        BOARD.panel_height,
        BOARD.panel.sck.pin,
        BOARD.panel.mosi.pin,
        BOARD.panel.cs.pin,
        BOARD.panel.dc.pin
    );

    let mut display = TftDisplay::new(panel);
    let clock = EmbassyClock::new();

    poll::run(PollConfig::default(), &mut sensor, &mut display, &clock).await
}
