//! DHT11 / DHT22 single-wire sensor
//!
//! Bit-banged driver over an open-drain GPIO. One transfer returns both
//! channels:
//!
//! ```text
//! host:   ‾‾‾\________(start)________/‾‾‾‾
//! sensor:                              \__80us__/‾‾80us‾‾\_50us_/‾26us or 70us‾\ ... x40
//! ```
//!
//! Frame layout: `[hum_hi, hum_lo, temp_hi, temp_lo, checksum]`, where the
//! checksum is the low byte of the sum of the first four bytes.
//!
//! A complete transfer takes about 4-5 ms plus the start pulse, and the
//! sensor must not be polled faster than once per second.

use dewpoint_core::traits::{HumitureSensor, SensorError};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Wait for the sensor to pull the line low after release (µs)
const RESPONSE_TIMEOUT_US: u32 = 100;

/// Max length of each handshake half (µs)
const HANDSHAKE_TIMEOUT_US: u32 = 100;

/// Max length of the low gap before each bit (µs)
const BIT_LOW_TIMEOUT_US: u32 = 80;

/// Max length of a high bit pulse (µs)
const BIT_HIGH_TIMEOUT_US: u32 = 100;

/// High pulses longer than this are a `1` (0 ≈ 26 µs, 1 ≈ 70 µs)
///
/// Polling overhead makes counts run short on real hardware, so the
/// threshold sits well below the midpoint.
const ONE_THRESHOLD_US: u32 = 40;

/// Number of data bits in a frame
const FRAME_BITS: usize = 40;

/// Errors that can occur during a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DhtError {
    /// Line did not change level in time (sensor missing or wedged)
    Timeout,
    /// Frame received with a bad checksum
    Checksum,
    /// GPIO reported an error
    Pin,
}

impl From<DhtError> for SensorError {
    fn from(err: DhtError) -> Self {
        match err {
            DhtError::Timeout => SensorError::Timeout,
            DhtError::Checksum => SensorError::Checksum,
            DhtError::Pin => SensorError::Bus,
        }
    }
}

/// Sensor variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DhtModel {
    /// 0-50°C, 20-90 %RH, whole-number resolution
    Dht11,
    /// -40-80°C, 0-100 %RH, 0.1 resolution
    Dht22,
}

impl DhtModel {
    /// Length of the host start pulse (µs)
    pub const fn start_low_us(self) -> u32 {
        match self {
            DhtModel::Dht11 => 18_000,
            DhtModel::Dht22 => 1_100,
        }
    }

    /// Decode a raw frame
    pub fn decode(self, frame: &[u8; 5]) -> Result<Measurement, DhtError> {
        if !checksum_ok(frame) {
            return Err(DhtError::Checksum);
        }

        let [b0, b1, b2, b3, _] = *frame;

        let measurement = match self {
            DhtModel::Dht11 => {
                // Integral byte + one decimal digit
                let humidity_x10 = b0 as u16 * 10 + b1 as u16;
                let temperature_x10 = b2 as u16 * 10 + (b3 & 0x7F) as u16;
                let negative = b3 & 0x80 != 0;
                Measurement::from_x10(temperature_x10, negative, humidity_x10)
            }
            DhtModel::Dht22 => {
                let humidity_x10 = u16::from_be_bytes([b0, b1]);
                let temperature_x10 = u16::from_be_bytes([b2 & 0x7F, b3]);
                let negative = b2 & 0x80 != 0;
                Measurement::from_x10(temperature_x10, negative, humidity_x10)
            }
        };

        Ok(measurement)
    }
}

/// Check the frame checksum
pub fn checksum_ok(frame: &[u8; 5]) -> bool {
    let sum = frame[..4]
        .iter()
        .fold(0u8, |acc, b| acc.wrapping_add(*b));
    sum == frame[4]
}

/// One decoded transfer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Degrees Celsius
    pub temperature_c: f32,
    /// Relative humidity, percent
    pub humidity_pct: f32,
}

impl Measurement {
    fn from_x10(temperature_x10: u16, negative: bool, humidity_x10: u16) -> Self {
        let magnitude = temperature_x10 as f32 / 10.0;
        // A set sign bit on a zero reading must not produce -0.0
        let negative = negative && temperature_x10 != 0;
        Self {
            temperature_c: if negative { -magnitude } else { magnitude },
            humidity_pct: humidity_x10 as f32 / 10.0,
        }
    }
}

/// DHT-family driver
///
/// `P` must be an open-drain pin with a pull-up: `set_high` releases the
/// line, `set_low` drives it, `is_high` samples it.
pub struct Dht<P, D> {
    pin: P,
    delay: D,
    model: DhtModel,
    /// Transfer taken by `read_temperature`, not yet consumed by `read_humidity`
    pending: Option<Result<Measurement, DhtError>>,
}

impl<P, D> Dht<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Create a new driver
    pub fn new(pin: P, delay: D, model: DhtModel) -> Self {
        Self {
            pin,
            delay,
            model,
            pending: None,
        }
    }

    /// Run one transfer and decode it
    pub fn read(&mut self) -> Result<Measurement, DhtError> {
        let frame = self.transfer()?;
        self.model.decode(&frame)
    }

    /// Run one transfer and return the raw frame
    pub fn transfer(&mut self) -> Result<[u8; 5], DhtError> {
        // Start signal
        self.pin.set_low().map_err(|_| DhtError::Pin)?;
        self.delay.delay_us(self.model.start_low_us());
        self.pin.set_high().map_err(|_| DhtError::Pin)?;

        // Handshake: sensor answers low ~80 µs, then high ~80 µs
        self.wait_while(true, RESPONSE_TIMEOUT_US)?;
        self.wait_while(false, HANDSHAKE_TIMEOUT_US)?;
        self.wait_while(true, HANDSHAKE_TIMEOUT_US)?;

        let mut frame = [0u8; 5];
        for bit in 0..FRAME_BITS {
            self.wait_while(false, BIT_LOW_TIMEOUT_US)?;
            let high_us = self.wait_while(true, BIT_HIGH_TIMEOUT_US)?;
            if high_us > ONE_THRESHOLD_US {
                frame[bit / 8] |= 1 << (7 - bit % 8);
            }
        }

        Ok(frame)
    }

    /// Poll in 1 µs steps while the line is at `high`
    ///
    /// Returns the number of steps spent, or `Timeout` after `timeout_us`.
    fn wait_while(&mut self, high: bool, timeout_us: u32) -> Result<u32, DhtError> {
        let mut elapsed = 0;
        while self.pin.is_high().map_err(|_| DhtError::Pin)? == high {
            if elapsed >= timeout_us {
                return Err(DhtError::Timeout);
            }
            self.delay.delay_us(1);
            elapsed += 1;
        }
        Ok(elapsed)
    }
}

impl<P, D> HumitureSensor for Dht<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn init(&mut self) {
        // Idle level is released/high
        let _ = self.pin.set_high();
        self.pending = None;
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        let result = self.read();
        self.pending = Some(result);

        #[cfg(feature = "defmt")]
        if let Err(e) = result {
            defmt::debug!("{} transfer failed: {}", self.model, e);
        }

        result.map(|m| m.temperature_c).map_err(SensorError::from)
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        let result = match self.pending.take() {
            Some(result) => result,
            None => self.read(),
        };
        result.map(|m| m.humidity_pct).map_err(SensorError::from)
    }
}
