/// Characters per row
pub const COLUMNS: u8 = 20;

/// Rows on the module
pub const ROWS: u8 = 2;

/// DDRAM address of the first character of each row
pub(crate) const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

/// Where the driver believes the controller's cursor is
///
/// It's never read back from the hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    #[allow(missing_docs)]
    pub column: u8,
    #[allow(missing_docs)]
    pub row: u8,
}

impl CursorPosition {
    #[allow(missing_docs)]
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// row is clamped to the last row, column is kept as is
    pub fn clamped(column: u8, row: u8) -> Self {
        Self {
            column,
            row: row.min(ROWS - 1),
        }
    }
}

impl From<(u8, u8)> for CursorPosition {
    fn from((column, row): (u8, u8)) -> Self {
        Self { column, row }
    }
}

#[derive(Default)]
pub(crate) struct LcdState {
    cursor_pos: CursorPosition,
}

impl LcdState {
    pub(crate) fn get_cursor_pos(&self) -> CursorPosition {
        self.cursor_pos
    }

    pub(crate) fn set_cursor_pos(&mut self, pos: CursorPosition) {
        self.cursor_pos = CursorPosition::clamped(pos.column, pos.row);
    }

    /// move cursor `count` characters forward,
    /// running off the end of a row wraps to the start of the other row
    ///
    /// A cursor already past the last column only wraps once, to column 0 of the other row.
    pub(crate) fn advance_cursor(&mut self, count: u8) {
        let CursorPosition { column, row } = self.cursor_pos;
        if count == 0 {
            return;
        }
        if column >= COLUMNS {
            self.wrap_to_next_row();
            return;
        }

        let raw_column = u16::from(column) + u16::from(count);
        let cols = u16::from(COLUMNS);

        // both are below COLUMNS and ROWS, so they fit in u8
        let wraps = ((raw_column / cols) % u16::from(ROWS)) as u8;
        self.cursor_pos = CursorPosition {
            column: (raw_column % cols) as u8,
            row: (row + wraps) % ROWS,
        };
    }

    /// column 0 of the other row
    pub(crate) fn wrap_to_next_row(&mut self) {
        self.cursor_pos = CursorPosition {
            column: 0,
            row: (self.cursor_pos.row + 1) % ROWS,
        };
    }

    pub(crate) fn reset_cursor(&mut self) {
        self.cursor_pos = CursorPosition::default();
    }
}

/// DDRAM address of a position, the column is not range checked
pub(crate) fn ddram_address(pos: CursorPosition) -> u8 {
    let offset = ROW_OFFSETS
        .get(usize::from(pos.row))
        .copied()
        .unwrap_or(ROW_OFFSETS[ROW_OFFSETS.len() - 1]);
    pos.column.wrapping_add(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(column: u8, row: u8) -> LcdState {
        let mut state = LcdState::default();
        state.set_cursor_pos(CursorPosition::new(column, row));
        state
    }

    #[test]
    fn single_step_wraps_to_other_row() {
        let mut state = state_at(19, 0);
        state.advance_cursor(1);
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(0, 1));

        state.set_cursor_pos(CursorPosition::new(19, 1));
        state.advance_cursor(1);
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(0, 0));
    }

    #[test]
    fn forty_steps_land_on_same_cell() {
        let mut state = state_at(7, 1);
        state.advance_cursor(40);
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(7, 1));
    }

    #[test]
    fn row_is_clamped() {
        let state = state_at(3, 5);
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(3, 1));
    }

    #[test]
    fn column_is_not_clamped() {
        let state = state_at(42, 0);
        assert_eq!(state.get_cursor_pos().column, 42);
    }

    #[test]
    fn next_row_starts_at_column_zero() {
        let mut state = state_at(5, 0);
        state.wrap_to_next_row();
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(0, 1));

        state.wrap_to_next_row();
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(0, 0));
    }

    #[test]
    fn column_past_the_row_wraps_once() {
        let mut state = state_at(25, 0);
        state.advance_cursor(1);
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(0, 1));

        let mut state = state_at(45, 0);
        state.advance_cursor(1);
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(0, 1));

        let mut state = state_at(20, 1);
        state.advance_cursor(30);
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(0, 0));
    }

    #[test]
    fn next_row_from_past_the_row() {
        let mut state = state_at(25, 0);
        state.wrap_to_next_row();
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(0, 1));

        let mut state = state_at(40, 1);
        state.wrap_to_next_row();
        assert_eq!(state.get_cursor_pos(), CursorPosition::new(0, 0));
    }

    #[test]
    fn ddram_address_adds_row_offset() {
        assert_eq!(ddram_address(CursorPosition::new(0, 0)), 0x00);
        assert_eq!(ddram_address(CursorPosition::new(19, 0)), 0x13);
        assert_eq!(ddram_address(CursorPosition::new(0, 1)), 0x40);
        assert_eq!(ddram_address(CursorPosition::new(15, 1)), 0x4F);
    }
}
