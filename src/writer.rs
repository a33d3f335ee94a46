//! Chainable text positioning
//!
//! ```ignore
//! lcd.show("Hello").center()?;
//! lcd.show("World").at(0, 1)?;
//! ```
//!
//! Every terminal method consumes the [`DisplayWriter`], so a staged text is written exactly once.

use crate::{
    error::BusError,
    state::{CursorPosition, COLUMNS},
};

/// Anything that has a cursor and can write text at it
///
/// [`Lcd`](crate::lcd::Lcd) implements it.
pub trait TextDisplay {
    #[allow(missing_docs)]
    fn get_cursor_pos(&self) -> CursorPosition;
    #[allow(missing_docs)]
    fn set_cursor_pos(&mut self, column: u8, row: u8) -> Result<(), BusError>;
    /// write text from the current cursor
    fn write_str_to_cur(&mut self, text: &str) -> Result<(), BusError>;
}

/// A text waiting for its position
pub struct DisplayWriter<'d, 't, Display: TextDisplay + ?Sized> {
    display: &'d mut Display,
    text: &'t str,
}

/// Stage `text` on any [`TextDisplay`]
pub fn show<'d, 't, Display: TextDisplay + ?Sized>(
    display: &'d mut Display,
    text: &'t str,
) -> DisplayWriter<'d, 't, Display> {
    DisplayWriter::new(display, text)
}

impl<'d, 't, Display: TextDisplay + ?Sized> DisplayWriter<'d, 't, Display> {
    #[allow(missing_docs)]
    pub fn new(display: &'d mut Display, text: &'t str) -> Self {
        Self { display, text }
    }

    #[allow(missing_docs)]
    pub fn get_text(&self) -> &'t str {
        self.text
    }

    /// Write at a specific position
    pub fn at(self, column: u8, row: u8) -> Result<(), BusError> {
        self.display.set_cursor_pos(column, row)?;
        self.show()
    }

    /// Write horizontally centered on the current row
    pub fn center(self) -> Result<(), BusError> {
        let padding = center_padding(self.text);
        let row = self.display.get_cursor_pos().row;
        self.at(padding, row)
    }

    /// Write right aligned on the current row
    pub fn right(self) -> Result<(), BusError> {
        let padding = right_padding(self.text);
        let row = self.display.get_cursor_pos().row;
        self.at(padding, row)
    }

    /// Write from the current position, the cursor command is still sent
    pub fn left(self) -> Result<(), BusError> {
        let CursorPosition { column, row } = self.display.get_cursor_pos();
        self.at(column, row)
    }

    /// Write from the current position, without touching the cursor
    pub fn show(self) -> Result<(), BusError> {
        self.display.write_str_to_cur(self.text)
    }
}

fn text_len(text: &str) -> u8 {
    u8::try_from(text.chars().count()).unwrap_or(u8::MAX)
}

/// Start column that centers `text` on a row, rounded to the left.
/// Text as wide as the row or wider starts at 0
pub fn center_padding(text: &str) -> u8 {
    right_padding(text) / 2
}

/// Start column that ends `text` on the last column.
/// Text as wide as the row or wider starts at 0
pub fn right_padding(text: &str) -> u8 {
    COLUMNS.saturating_sub(text_len(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeDisplay {
        cursor: CursorPosition,
        moves: Vec<(u8, u8)>,
        written: Vec<String>,
    }

    impl TextDisplay for FakeDisplay {
        fn get_cursor_pos(&self) -> CursorPosition {
            self.cursor
        }

        fn set_cursor_pos(&mut self, column: u8, row: u8) -> Result<(), BusError> {
            self.moves.push((column, row));
            self.cursor = CursorPosition::clamped(column, row);
            Ok(())
        }

        fn write_str_to_cur(&mut self, text: &str) -> Result<(), BusError> {
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn padding_for_hello() {
        assert_eq!(center_padding("Hello"), 7);
        assert_eq!(right_padding("Hello"), 15);
    }

    #[test]
    fn padding_never_goes_negative() {
        let long = "123456789012345678901";
        assert_eq!(center_padding(long), 0);
        assert_eq!(right_padding(long), 0);
        assert_eq!(center_padding("12345678901234567890"), 0);
    }

    #[test]
    fn center_keeps_current_row() {
        let mut display = FakeDisplay {
            cursor: CursorPosition::new(3, 1),
            ..Default::default()
        };

        assert_eq!(show(&mut display, "Hello").center(), Ok(()));
        assert_eq!(display.moves, [(7, 1)]);
        assert_eq!(display.written, ["Hello"]);
    }

    #[test]
    fn right_keeps_current_row() {
        let mut display = FakeDisplay::default();

        assert_eq!(show(&mut display, "Hello").right(), Ok(()));
        assert_eq!(display.moves, [(15, 0)]);
    }

    #[test]
    fn left_resends_current_position() {
        let mut display = FakeDisplay {
            cursor: CursorPosition::new(4, 1),
            ..Default::default()
        };

        assert_eq!(show(&mut display, "x").left(), Ok(()));
        assert_eq!(display.moves, [(4, 1)]);
        assert_eq!(display.written, ["x"]);
    }

    #[test]
    fn at_moves_then_writes() {
        let mut display = FakeDisplay::default();

        assert_eq!(show(&mut display, "World").at(2, 1), Ok(()));
        assert_eq!(display.moves, [(2, 1)]);
        assert_eq!(display.written, ["World"]);
    }

    #[test]
    fn show_never_moves_cursor() {
        let mut display = FakeDisplay::default();

        assert_eq!(show(&mut display, "plain").show(), Ok(()));
        assert!(display.moves.is_empty());
        assert_eq!(display.written, ["plain"]);
    }

    #[test]
    fn creating_a_writer_sends_nothing() {
        let mut display = FakeDisplay::default();
        let writer = show(&mut display, "idle");
        assert_eq!(writer.get_text(), "idle");
        drop(writer);

        assert!(display.moves.is_empty());
        assert!(display.written.is_empty());
    }
}
