//! Character display trait

/// Trait for character-cell text displays
///
/// The display owns its cursor and visible contents; the caller is
/// responsible for positioning the cursor before printing and for not
/// exceeding the physical line width - there is no wrapping and no
/// bounds checking.
pub trait CharacterDisplay {
    /// Move the cursor to the given line and column
    fn set_cursor(&mut self, line: u8, col: u8);

    /// Print raw character-generator bytes at the cursor
    ///
    /// Bytes are sent as-is, so ROM-specific glyphs (e.g. the HD44780
    /// degree symbol at 0xDF) can be printed directly.
    fn print_bytes(&mut self, bytes: &[u8]);

    /// Print an ASCII string at the cursor
    fn print(&mut self, text: &str) {
        self.print_bytes(text.as_bytes());
    }
}
