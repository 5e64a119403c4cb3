//! Hardware configuration
//!
//! Pin assignments and panel geometry for the reference board
//! (RP2040 with a 135x240 ST7789 panel on SPI0 and a DHT11 on GPIO1).
//! Changing boards means editing these constants and rebuilding.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            pull_up: true,
        }
    }
}

/// SPI wiring of the display panel
///
/// The panel reset line is tied to the board reset, so there is no pin for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelPins {
    pub sck: PinConfig,
    pub mosi: PinConfig,
    pub cs: PinConfig,
    pub dc: PinConfig,
    pub backlight: PinConfig,
}

/// Complete board description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// DHT single-wire data line (needs a pull-up, internal or external)
    pub sensor_data: PinConfig,
    /// Display panel wiring
    pub panel: PanelPins,
    /// Panel width in pixels (portrait)
    pub panel_width: u16,
    /// Panel height in pixels (portrait)
    pub panel_height: u16,
    /// Column offset of the visible area inside controller RAM
    pub panel_offset_x: u16,
    /// Row offset of the visible area inside controller RAM
    pub panel_offset_y: u16,
}

/// Reference board wiring
pub const BOARD: BoardConfig = BoardConfig {
    sensor_data: PinConfig::with_pullup(1),
    panel: PanelPins {
        sck: PinConfig::new(18),
        mosi: PinConfig::new(19),
        cs: PinConfig::new(17),
        dc: PinConfig::new(16),
        backlight: PinConfig::new(20),
    },
    panel_width: 135,
    panel_height: 240,
    panel_offset_x: 52,
    panel_offset_y: 40,
};

/// SPI clock for the display panel
pub const PANEL_SPI_HZ: u32 = 62_500_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_pin_has_pullup() {
        assert!(BOARD.sensor_data.pull_up);
        assert_eq!(BOARD.sensor_data.pin, 1);
    }

    #[test]
    fn test_pins_do_not_collide() {
        let p = &BOARD.panel;
        let pins = [
            BOARD.sensor_data.pin,
            p.sck.pin,
            p.mosi.pin,
            p.cs.pin,
            p.dc.pin,
            p.backlight.pin,
        ];
        for (i, a) in pins.iter().enumerate() {
            for b in &pins[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_panel_pins_route_to_spi0() {
        // RP2040 SPI0 function pins
        const SCK: [u8; 4] = [2, 6, 18, 22];
        const TX: [u8; 4] = [3, 7, 19, 23];
        const CSN: [u8; 4] = [1, 5, 17, 21];

        assert!(SCK.contains(&BOARD.panel.sck.pin));
        assert!(TX.contains(&BOARD.panel.mosi.pin));
        assert!(CSN.contains(&BOARD.panel.cs.pin));
    }
}
