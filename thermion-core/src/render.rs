//! Display line rendering
//!
//! Builds the fixed-width byte buffers written to the character display.
//! Every rendered line is exactly [`LINE_WIDTH`] bytes, space-padded, so a
//! write always overwrites whatever the previous cycle left on that line.

use crate::temperature::Temperature;

/// Width of one physical display line in characters.
pub const LINE_WIDTH: usize = 16;

/// Degree symbol in the HD44780 A00 character ROM.
pub const DEGREE_SYMBOL: u8 = 0xDF;

/// Static first line printed once at startup.
pub const HEADER_TEXT: &str = "Temperature:";

/// Second-line text shown when no sensor responds on the bus.
pub const NO_SENSOR_TEXT: &str = "No sensor";

/// A fully padded display line.
pub type LineBuf = [u8; LINE_WIDTH];

/// Pad `text` with trailing spaces to the full line width.
///
/// Input longer than the line is truncated; the display has no wrapping.
pub fn padded_line(text: &[u8]) -> LineBuf {
    let mut line = [b' '; LINE_WIDTH];
    let len = text.len().min(LINE_WIDTH);
    line[..len].copy_from_slice(&text[..len]);
    line
}

/// The padded "No sensor" line.
pub fn no_sensor_line() -> LineBuf {
    padded_line(NO_SENSOR_TEXT.as_bytes())
}

/// Render a reading as `-12.3` + degree symbol + `C`, padded to the line
///
/// The fractional digit comes from the ×10 scaled value truncated toward
/// zero. Sign is emitted once, in front of the whole part, and the digits
/// are taken from the magnitude so a negative reading cannot corrupt the
/// fractional digit.
pub fn temperature_line(reading: Temperature) -> LineBuf {
    let tenths = reading.tenths();
    let magnitude = tenths.unsigned_abs();

    let mut text: heapless::Vec<u8, LINE_WIDTH> = heapless::Vec::new();
    if tenths < 0 {
        let _ = text.push(b'-');
    }
    push_decimal(&mut text, magnitude / 10);
    let _ = text.push(b'.');
    let _ = text.push(b'0' + (magnitude % 10) as u8);
    let _ = text.push(DEGREE_SYMBOL);
    let _ = text.push(b'C');

    padded_line(&text)
}

/// Append `value` in decimal, most significant digit first.
fn push_decimal(text: &mut heapless::Vec<u8, LINE_WIDTH>, value: u16) {
    let mut digits = [0u8; 5];
    let mut remaining = value;
    let mut count = 0;
    loop {
        digits[count] = b'0' + (remaining % 10) as u8;
        remaining /= 10;
        count += 1;
        if remaining == 0 {
            break;
        }
    }
    while count > 0 {
        count -= 1;
        let _ = text.push(digits[count]);
    }
}
