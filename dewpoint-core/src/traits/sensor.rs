//! Temperature and humidity sensor trait

/// Errors that can occur while reading the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Driver produced a not-a-number value
    NotANumber,
    /// Sensor did not answer (disconnected or powered down)
    Timeout,
    /// Frame received but checksum mismatched
    Checksum,
    /// Pin or bus level error
    Bus,
}

/// Trait for combined temperature/humidity sensors
///
/// Implementations wrap the specific sensor type (DHT11, DHT22, SHT3x...).
/// A read that yields NaN is treated exactly like an error by the
/// controller, so drivers that only know how to report NaN can return it
/// as `Ok(f32::NAN)`.
pub trait HumitureSensor {
    /// One-time initialization, called before the first sample
    fn init(&mut self) {}

    /// Read the current temperature in degrees Celsius
    ///
    /// Takes `&mut self` because a read usually drives the bus.
    fn read_temperature(&mut self) -> Result<f32, SensorError>;

    /// Read the current relative humidity in percent
    fn read_humidity(&mut self) -> Result<f32, SensorError>;
}

/// Fold a raw channel value into a usable number
///
/// Errors and NaN both collapse to `None`.
pub fn usable(raw: Result<f32, SensorError>) -> Option<f32> {
    match raw {
        Ok(value) if !value.is_nan() => Some(value),
        _ => None,
    }
}
