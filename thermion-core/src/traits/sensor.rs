//! Temperature sensor trait

use crate::temperature::Temperature;

/// Errors that can occur during a temperature acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No presence pulse detected, sensor not found on the bus
    NoPresence,
    /// Scratchpad data failed checksum validation
    CorruptData,
}

/// Trait for temperature sensors
///
/// Implementations perform a complete acquisition (trigger a conversion,
/// wait for it, read the result) and return a tagged result instead of an
/// in-band sentinel value. A missing or unresponsive sensor is reported as
/// [`SensorError::NoPresence`].
pub trait TemperatureSensor {
    /// Acquire the current temperature
    ///
    /// Takes `&mut self` because bus transactions drive the data line.
    /// This call blocks for the sensor's full conversion time.
    fn read_temperature(&mut self) -> Result<Temperature, SensorError>;
}
