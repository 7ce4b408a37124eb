//! HD44780 character display driver (4-bit parallel mode)
//!
//! Drives a 16x2 HD44780-compatible module over six GPIO lines: register
//! select, enable strobe, and the upper four data lines. R/W is assumed
//! tied to ground, so the controller is never read back - busy-flag
//! polling is replaced by conservative fixed execution delays.
//!
//! The 4-bit startup handshake must run in the documented order with the
//! documented settle times: the controller powers up in an unknown
//! interface width, and the three 0x3 nibbles walk it into a known 8-bit
//! state before the final 0x2 nibble switches it to 4-bit mode.

use embedded_hal::delay::DelayNs;

use thermion_core::traits::{CharacterDisplay, OutputPin};

/// Controller commands (sent with RS low)
mod cmd {
    /// 4-bit interface, two display lines, 5x8 font
    pub const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
    /// Auto-increment cursor, no display shift
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    /// Clear display and home the cursor
    pub const CLEAR_DISPLAY: u8 = 0x01;
    /// Set DDRAM address (or'd with the address)
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

// Startup handshake nibbles and settle times.
const POWER_ON_WAIT_MS: u32 = 50;
const WAKE_NIBBLE: u8 = 0x03;
const WAKE_FIRST_SETTLE_MS: u32 = 5;
const WAKE_SECOND_SETTLE_US: u32 = 100;
const SET_4BIT_NIBBLE: u8 = 0x02;

// Enable strobe: brief high pulse latches the nibble, then the line must
// rest before it can be toggled again.
const ENABLE_PULSE_US: u32 = 1;
const ENABLE_RECOVERY_US: u32 = 100;

// Conservative execution wait after each command or data byte; covers all
// standard commands. Clear/home are slower and get an extra wait.
const EXEC_WAIT_MS: u32 = 2;
const CLEAR_EXTRA_WAIT_MS: u32 = 2;

/// DDRAM base address of each display line.
const LINE_ADDR: [u8; 2] = [0x00, 0x40];

/// HD44780 driver over six output pins
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    d4: P,
    d5: P,
    d6: P,
    d7: P,
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a driver from the six display pins and a delay provider
    ///
    /// Call [`init`](Self::init) before any other operation.
    pub fn new(rs: P, en: P, d4: P, d5: P, d6: P, d7: P, delay: D) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
        }
    }

    /// Run the power-up handshake and configure the display
    ///
    /// Leaves the controller in 4-bit, 2-line mode with the display on,
    /// cursor hidden, auto-increment addressing, and a cleared screen.
    pub fn init(&mut self) {
        self.delay.delay_ms(POWER_ON_WAIT_MS);

        // Wake sequence: the first two settle times are mandated by the
        // controller's power-on timing, not tunables.
        self.write_nibble(WAKE_NIBBLE);
        self.delay.delay_ms(WAKE_FIRST_SETTLE_MS);
        self.write_nibble(WAKE_NIBBLE);
        self.delay.delay_us(WAKE_SECOND_SETTLE_US);
        self.write_nibble(WAKE_NIBBLE);
        self.write_nibble(SET_4BIT_NIBBLE);

        self.command(cmd::FUNCTION_SET_4BIT_2LINE);
        self.command(cmd::DISPLAY_ON_CURSOR_OFF);
        self.command(cmd::ENTRY_MODE_INCREMENT);
        self.clear();
    }

    /// Clear the display and home the cursor
    pub fn clear(&mut self) {
        self.command(cmd::CLEAR_DISPLAY);
        self.delay.delay_ms(CLEAR_EXTRA_WAIT_MS);
    }

    /// Send a command byte
    pub fn command(&mut self, byte: u8) {
        self.rs.set_low();
        self.write_byte(byte);
    }

    /// Send a character-data byte
    pub fn data(&mut self, byte: u8) {
        self.rs.set_high();
        self.write_byte(byte);
    }

    /// Both halves of a byte, high nibble first, plus the execution wait
    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        self.delay.delay_ms(EXEC_WAIT_MS);
    }

    /// Put a nibble on D4..D7 and strobe it in
    fn write_nibble(&mut self, nibble: u8) {
        self.d4.set_state(nibble & 0x01 != 0);
        self.d5.set_state(nibble & 0x02 != 0);
        self.d6.set_state(nibble & 0x04 != 0);
        self.d7.set_state(nibble & 0x08 != 0);
        self.pulse_enable();
    }

    /// Rising-then-falling pulse on E latches the nibble
    fn pulse_enable(&mut self) {
        self.en.set_high();
        self.delay.delay_us(ENABLE_PULSE_US);
        self.en.set_low();
        self.delay.delay_us(ENABLE_RECOVERY_US);
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn set_cursor(&mut self, line: u8, col: u8) {
        let base = LINE_ADDR[usize::from(line) % LINE_ADDR.len()];
        self.command(cmd::SET_DDRAM_ADDR | (base + col));
    }

    fn print_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.data(byte);
        }
    }
}
