//! Temperature reading type
//!
//! The DS18B20 reports temperature as a 16-bit two's-complement register
//! at 1/16 degree Celsius per LSB. [`Temperature`] wraps that raw value and
//! provides the fixed-point conversions the rest of the firmware needs.

/// Temperature resolution of the sensor register: 0.0625 °C per LSB.
pub const CELSIUS_PER_LSB: f32 = 0.0625;

/// A temperature reading in raw sensor units (1/16 °C per LSB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    raw: i16,
}

impl Temperature {
    /// Create a reading from the raw two's-complement sensor register
    pub const fn from_raw(raw: i16) -> Self {
        Self { raw }
    }

    /// Create a reading from whole degrees Celsius
    pub const fn from_celsius(celsius: i16) -> Self {
        Self { raw: celsius * 16 }
    }

    /// The raw sensor register value
    pub const fn raw(self) -> i16 {
        self.raw
    }

    /// The reading in degrees Celsius
    pub fn celsius(self) -> f32 {
        f32::from(self.raw) * CELSIUS_PER_LSB
    }

    /// The reading in 0.1 °C units, truncated toward zero
    ///
    /// For example, 23.4375 °C (raw 375) gives 234 and -5.625 °C (raw -90)
    /// gives -56. Rust integer division truncates toward zero, which is the
    /// required behavior for both signs.
    pub const fn tenths(self) -> i16 {
        (self.raw as i32 * 10 / 16) as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_to_celsius() {
        // Datasheet examples: 0x0191 = +25.0625°C, 0xFF5E = -10.125°C
        assert_eq!(Temperature::from_raw(0x0191).celsius(), 25.0625);
        assert_eq!(Temperature::from_raw(0xFF5Eu16 as i16).celsius(), -10.125);
        assert_eq!(Temperature::from_raw(0).celsius(), 0.0);
    }

    #[test]
    fn test_from_celsius() {
        assert_eq!(Temperature::from_celsius(28).raw(), 448);
        assert_eq!(Temperature::from_celsius(-55).raw(), -880);
    }

    #[test]
    fn test_tenths_truncates_toward_zero() {
        // 23.4375°C -> 23.4, not 23.5
        assert_eq!(Temperature::from_raw(375).tenths(), 234);
        // -5.625°C -> -5.6, not -5.7
        assert_eq!(Temperature::from_raw(-90).tenths(), -56);
        // -10.125°C -> -10.1
        assert_eq!(Temperature::from_raw(-162).tenths(), -101);
    }

    #[test]
    fn test_tenths_exhaustive_matches_float_truncation() {
        // The integer path must agree with truncation of the exact value
        // over the full register range.
        for raw in i16::MIN..=i16::MAX {
            // `as` casts truncate toward zero, same as the required semantics.
            let exact = (f64::from(raw) * 0.625) as i32;
            assert_eq!(
                i32::from(Temperature::from_raw(raw).tenths()),
                exact,
                "raw = {raw}"
            );
        }
    }
}
