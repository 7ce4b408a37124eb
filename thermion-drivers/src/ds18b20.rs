//! DS18B20 temperature sensor driver
//!
//! Bit-banged 1-Wire master for a single DS18B20 on an open-drain data
//! line with a pull-up. The driver addresses the sensor with the Skip ROM
//! broadcast, so exactly one device may sit on the bus.
//!
//! Timing is the correctness contract here: each slot delay below comes
//! straight from the 1-Wire specification and must stay within a few
//! percent of the stated value - the sensor's sampling windows are fixed
//! in silicon. All waits are blocking busy-waits through the injected
//! [`DelayNs`] provider.

use embedded_hal::delay::DelayNs;

use thermion_core::temperature::Temperature;
use thermion_core::traits::{OpenDrainPin, SensorError, TemperatureSensor};

// Reset slot: hold low, release, sample presence, complete the slot.
// Total slot is >= 960 us, the protocol's minimum reset timing.
const RESET_LOW_US: u32 = 480;
const PRESENCE_WAIT_US: u32 = 70;
const PRESENCE_RELEASE_US: u32 = 410;

// Write slots (~70 us total either way).
const WRITE_1_LOW_US: u32 = 6;
const WRITE_1_HIGH_US: u32 = 64;
const WRITE_0_LOW_US: u32 = 60;
const WRITE_0_HIGH_US: u32 = 10;

// Read slot: init pulse, release, sample inside the master read window,
// then idle out the remainder of the slot.
const READ_INIT_LOW_US: u32 = 6;
const READ_SAMPLE_US: u32 = 9;
const READ_RECOVERY_US: u32 = 55;

// Worst-case conversion time at 12-bit resolution. The wait is a fixed,
// non-cancelable block; the line is not polled for completion.
const CONVERSION_WAIT_MS: u32 = 750;

// ROM and function commands.
const CMD_SKIP_ROM: u8 = 0xCC;
const CMD_CONVERT_T: u8 = 0x44;
const CMD_READ_SCRATCHPAD: u8 = 0xBE;

/// Scratchpad size: temperature LSB/MSB, alarm registers, config,
/// reserved bytes, CRC.
const SCRATCHPAD_LEN: usize = 9;

/// DS18B20 driver over a single open-drain bus pin
pub struct Ds18b20<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Ds18b20<P, D>
where
    P: OpenDrainPin,
    D: DelayNs,
{
    /// Create a driver for the given bus pin and delay provider
    ///
    /// The pin must follow the open-drain contract: driving low pulls the
    /// bus down, driving high releases it to the pull-up.
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Issue a bus reset and sample the presence pulse
    ///
    /// Returns `true` if a device pulled the line low in the presence
    /// window.
    pub fn reset(&mut self) -> bool {
        self.pin.set_low();
        self.delay.delay_us(RESET_LOW_US);

        self.pin.set_high();
        self.delay.delay_us(PRESENCE_WAIT_US);

        // A responding device holds the released line low.
        let present = self.pin.is_low();
        self.delay.delay_us(PRESENCE_RELEASE_US);

        present
    }

    /// Acquire a temperature reading with scratchpad CRC validation
    ///
    /// Same sequence as [`read_temperature`](Self::read_temperature), but
    /// reads the entire 9-byte scratchpad and verifies the Dallas CRC-8
    /// over the first eight bytes.
    ///
    /// # Errors
    ///
    /// [`SensorError::NoPresence`] if either reset sees no presence pulse,
    /// [`SensorError::CorruptData`] if the checksum does not match.
    pub fn read_temperature_checked(&mut self) -> Result<Temperature, SensorError> {
        self.start_conversion()?;

        if !self.reset() {
            return Err(SensorError::NoPresence);
        }
        self.write_byte(CMD_SKIP_ROM);
        self.write_byte(CMD_READ_SCRATCHPAD);

        let mut scratchpad = [0u8; SCRATCHPAD_LEN];
        for byte in &mut scratchpad {
            *byte = self.read_byte();
        }

        if crc8(&scratchpad[..SCRATCHPAD_LEN - 1]) != scratchpad[SCRATCHPAD_LEN - 1] {
            return Err(SensorError::CorruptData);
        }

        Ok(raw_to_temperature(scratchpad[0], scratchpad[1]))
    }

    /// Trigger a conversion and block for its worst-case duration
    fn start_conversion(&mut self) -> Result<(), SensorError> {
        if !self.reset() {
            return Err(SensorError::NoPresence);
        }
        self.write_byte(CMD_SKIP_ROM);
        self.write_byte(CMD_CONVERT_T);

        self.delay.delay_ms(CONVERSION_WAIT_MS);
        Ok(())
    }

    fn write_bit(&mut self, bit: bool) {
        // Both slots start by pulling the bus low; the low-time length
        // encodes the bit.
        self.pin.set_low();
        if bit {
            self.delay.delay_us(WRITE_1_LOW_US);
            self.pin.set_high();
            self.delay.delay_us(WRITE_1_HIGH_US);
        } else {
            self.delay.delay_us(WRITE_0_LOW_US);
            self.pin.set_high();
            self.delay.delay_us(WRITE_0_HIGH_US);
        }
    }

    fn read_bit(&mut self) -> bool {
        self.pin.set_low();
        self.delay.delay_us(READ_INIT_LOW_US);
        self.pin.set_high();
        self.delay.delay_us(READ_SAMPLE_US);

        let bit = self.pin.is_high();
        self.delay.delay_us(READ_RECOVERY_US);

        bit
    }

    /// Write a byte, least significant bit first
    fn write_byte(&mut self, byte: u8) {
        for i in 0..8 {
            self.write_bit((byte >> i) & 1 != 0);
        }
    }

    /// Read a byte, least significant bit first
    fn read_byte(&mut self) -> u8 {
        let mut byte = 0;
        for i in 0..8 {
            if self.read_bit() {
                byte |= 1 << i;
            }
        }
        byte
    }
}

impl<P, D> TemperatureSensor for Ds18b20<P, D>
where
    P: OpenDrainPin,
    D: DelayNs,
{
    /// Acquire a temperature reading
    ///
    /// Performs the full sequence: reset, Skip ROM, Convert T, the fixed
    /// 750 ms conversion wait, reset, Skip ROM, Read Scratchpad, then the
    /// two temperature bytes (LSB first).
    ///
    /// Only the temperature bytes are read and no checksum is validated,
    /// preserving the original firmware's wire behavior: a bit error in
    /// transfer silently yields a wrong reading. Use
    /// [`read_temperature_checked`](Self::read_temperature_checked) for
    /// the CRC-validated variant.
    fn read_temperature(&mut self) -> Result<Temperature, SensorError> {
        self.start_conversion()?;

        if !self.reset() {
            return Err(SensorError::NoPresence);
        }
        self.write_byte(CMD_SKIP_ROM);
        self.write_byte(CMD_READ_SCRATCHPAD);

        let lsb = self.read_byte();
        let msb = self.read_byte();

        Ok(raw_to_temperature(lsb, msb))
    }
}

/// Assemble the 16-bit two's-complement register from the wire bytes
fn raw_to_temperature(lsb: u8, msb: u8) -> Temperature {
    Temperature::from_raw(i16::from_le_bytes([lsb, msb]))
}

/// Dallas/Maxim CRC-8 (polynomial 0x8C, bit-reversed 0x31)
fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0;
    for &byte in data {
        let mut b = byte;
        for _ in 0..8 {
            let mix = (crc ^ b) & 0x01;
            crc >>= 1;
            if mix != 0 {
                crc ^= 0x8C;
            }
            b >>= 1;
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal_mock::eh1::delay::NoopDelay;
    use thermion_core::traits::{InputPin, OutputPin};

    /// Bus pin driven by a script of sampled line levels
    ///
    /// Every `is_high` pops the next scripted level; every drive is logged
    /// so tests can assert slot structure.
    struct ScriptedPin<'a> {
        levels: &'a [bool],
        cursor: usize,
        drives: heapless::Vec<bool, 256>,
    }

    impl<'a> ScriptedPin<'a> {
        fn new(levels: &'a [bool]) -> Self {
            Self {
                levels,
                cursor: 0,
                drives: heapless::Vec::new(),
            }
        }

        fn done(&self) {
            assert_eq!(self.cursor, self.levels.len(), "unconsumed scripted samples");
        }
    }

    impl OutputPin for ScriptedPin<'_> {
        fn set_high(&mut self) {
            self.drives.push(true).unwrap();
        }

        fn set_low(&mut self) {
            self.drives.push(false).unwrap();
        }
    }

    impl InputPin for ScriptedPin<'_> {
        fn is_high(&mut self) -> bool {
            let level = self.levels[self.cursor];
            self.cursor += 1;
            level
        }
    }

    /// Append the read-slot samples for one byte, LSB first
    fn push_byte_samples(levels: &mut heapless::Vec<bool, 128>, byte: u8) {
        for i in 0..8 {
            levels.push((byte >> i) & 1 != 0).unwrap();
        }
    }

    #[test]
    fn test_reset_detects_presence() {
        // Responding device pulls the released line low.
        let pin = ScriptedPin::new(&[false]);
        let mut sensor = Ds18b20::new(pin, NoopDelay::new());

        assert!(sensor.reset());
        // Reset drives: pull low, then release.
        assert_eq!(sensor.pin.drives.as_slice(), &[false, true]);
        sensor.pin.done();
    }

    #[test]
    fn test_reset_no_presence() {
        // Line stays high: nothing on the bus.
        let pin = ScriptedPin::new(&[true]);
        let mut sensor = Ds18b20::new(pin, NoopDelay::new());

        assert!(!sensor.reset());
        sensor.pin.done();
    }

    #[test]
    fn test_write_byte_slot_structure() {
        let pin = ScriptedPin::new(&[]);
        let mut sensor = Ds18b20::new(pin, NoopDelay::new());

        sensor.write_byte(CMD_SKIP_ROM);

        // Eight write slots, each a pull-low followed by a release.
        assert_eq!(sensor.pin.drives.len(), 16);
        for slot in sensor.pin.drives.chunks(2) {
            assert_eq!(slot, &[false, true]);
        }
    }

    #[test]
    fn test_read_temperature_no_presence() {
        // Acquisition against an always-high (absent) bus fails at the
        // first reset.
        let pin = ScriptedPin::new(&[true]);
        let mut sensor = Ds18b20::new(pin, NoopDelay::new());

        assert_eq!(sensor.read_temperature(), Err(SensorError::NoPresence));
        sensor.pin.done();
    }

    #[test]
    fn test_read_temperature_positive() {
        // Samples: presence pulse for each of the two resets, then the
        // temperature register 0x0191 (+25.0625°C), LSB byte first.
        let mut levels: heapless::Vec<bool, 128> = heapless::Vec::new();
        levels.push(false).unwrap();
        levels.push(false).unwrap();
        push_byte_samples(&mut levels, 0x91);
        push_byte_samples(&mut levels, 0x01);

        let pin = ScriptedPin::new(&levels);
        let mut sensor = Ds18b20::new(pin, NoopDelay::new());

        let temp = sensor.read_temperature().unwrap();
        assert_eq!(temp.raw(), 0x0191);
        assert_eq!(temp.celsius(), 25.0625);
        sensor.pin.done();
    }

    #[test]
    fn test_read_temperature_negative() {
        // Register 0xFF5E = -10.125°C.
        let mut levels: heapless::Vec<bool, 128> = heapless::Vec::new();
        levels.push(false).unwrap();
        levels.push(false).unwrap();
        push_byte_samples(&mut levels, 0x5E);
        push_byte_samples(&mut levels, 0xFF);

        let pin = ScriptedPin::new(&levels);
        let mut sensor = Ds18b20::new(pin, NoopDelay::new());

        let temp = sensor.read_temperature().unwrap();
        assert_eq!(temp.celsius(), -10.125);
        sensor.pin.done();
    }

    #[test]
    fn test_checked_read_accepts_valid_scratchpad() {
        let mut scratchpad = [0x91, 0x01, 0x4B, 0x46, 0x7F, 0xFF, 0x00, 0x10, 0x00];
        scratchpad[8] = crc8(&scratchpad[..8]);

        let mut levels: heapless::Vec<bool, 128> = heapless::Vec::new();
        levels.push(false).unwrap();
        levels.push(false).unwrap();
        for &byte in &scratchpad {
            push_byte_samples(&mut levels, byte);
        }

        let pin = ScriptedPin::new(&levels);
        let mut sensor = Ds18b20::new(pin, NoopDelay::new());

        let temp = sensor.read_temperature_checked().unwrap();
        assert_eq!(temp.raw(), 0x0191);
        sensor.pin.done();
    }

    #[test]
    fn test_checked_read_rejects_bad_crc() {
        let mut scratchpad = [0x91, 0x01, 0x4B, 0x46, 0x7F, 0xFF, 0x00, 0x10, 0x00];
        scratchpad[8] = crc8(&scratchpad[..8]) ^ 0xFF;

        let mut levels: heapless::Vec<bool, 128> = heapless::Vec::new();
        levels.push(false).unwrap();
        levels.push(false).unwrap();
        for &byte in &scratchpad {
            push_byte_samples(&mut levels, byte);
        }

        let pin = ScriptedPin::new(&levels);
        let mut sensor = Ds18b20::new(pin, NoopDelay::new());

        assert_eq!(
            sensor.read_temperature_checked(),
            Err(SensorError::CorruptData)
        );
        sensor.pin.done();
    }

    #[test]
    fn test_crc8_known_vector() {
        let data = [0x02, 0x4E, 0xB8, 0x1C, 0x46, 0x7F, 0xFF, 0x0C];
        assert_eq!(crc8(&data), 0xBE);
    }
}
