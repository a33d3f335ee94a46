//! The LCD itself: text output, commands, and the cursor mirror

use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, MoveDirection, ShiftType, State},
    error::{BusError, ErrorPolicy},
    sender::SendCommand,
    state::{ddram_address, CursorPosition, LcdState, ROW_OFFSETS},
    writer::{DisplayWriter, TextDisplay},
};

mod init;

pub use init::Config;

/// Glyph written for characters outside ASCII
pub const UNKNOWN_GLYPH: u8 = 0xFF;

/// Module vendor's "display on" byte, `0x50`, every power / icon / contrast bit cleared
const VENDOR_DISPLAY_ON: CommandSet = CommandSet::PowerIconContrast {
    icon: State::Off,
    booster: State::Off,
    contrast_high: 0,
};

/// Module vendor's "display off" byte, `0x54`, only the booster bit set
const VENDOR_DISPLAY_OFF: CommandSet = CommandSet::PowerIconContrast {
    icon: State::Off,
    booster: State::On,
    contrast_high: 0,
};

/// A 2x20 ST7036 LCD, and the cursor position the driver believes it has
pub struct Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
    state: LcdState,
    config: Config,
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn dispatch(&mut self, command: CommandSet) -> Result<(), BusError> {
        let result = self.sender.send(command.into());
        self.config.get_error_policy().apply(result)
    }

    /// write a raw byte to current position
    pub fn write_u8_to_cur(&mut self, byte: u8) -> Result<(), BusError> {
        self.dispatch(CommandSet::WriteDataToRAM(byte))?;

        // AC of ST7036 increases by itself, we only mirror it
        self.state.advance_cursor(1);
        Ok(())
    }

    /// write [char] to current position
    /// Character outside ASCII will be displayed as [`UNKNOWN_GLYPH`]
    pub fn write_char_to_cur(&mut self, char: char) -> Result<(), BusError> {
        let out_byte = match char.is_ascii() {
            true => char as u8,
            false => UNKNOWN_GLYPH,
        };

        self.write_u8_to_cur(out_byte)
    }

    /// write string to current position, one transmission per character
    ///
    /// Text running past the end of a row continues on the other row.
    pub fn write_str_to_cur(&mut self, str: &str) -> Result<(), BusError> {
        str.chars()
            .try_for_each(|char| self.write_char_to_cur(char))
    }

    /// write string to specific position
    pub fn write_str_to_pos(&mut self, str: &str, pos: (u8, u8)) -> Result<(), BusError> {
        self.set_cursor_pos(pos.0, pos.1)?;
        self.write_str_to_cur(str)
    }

    /// Start staging `text` for [`DisplayWriter`] positioning, nothing is sent yet
    pub fn show<'t>(&mut self, text: &'t str) -> DisplayWriter<'_, 't, Self> {
        DisplayWriter::new(self, text)
    }

    /// Erase all characters
    ///
    /// Note:
    /// The mirrored cursor is NOT reset, use [`Lcd::return_home`] for that
    pub fn clear_display(&mut self) -> Result<(), BusError> {
        self.dispatch(CommandSet::ClearDisplay)
    }

    /// Cursor back to (0, 0)
    pub fn return_home(&mut self) -> Result<(), BusError> {
        self.dispatch(CommandSet::ReturnHome)?;
        self.state.reset_cursor();
        Ok(())
    }

    /// Jump to the start of the second row
    pub fn next_line(&mut self) -> Result<(), BusError> {
        self.dispatch(CommandSet::SetDDRAM(ROW_OFFSETS[1]))?;
        self.state.wrap_to_next_row();
        Ok(())
    }

    /// Move cursor, `row` larger than 1 is treated as 1,
    /// `column` is sent as is, keep it below [`COLUMNS`](crate::state::COLUMNS)
    pub fn set_cursor_pos(&mut self, column: u8, row: u8) -> Result<(), BusError> {
        let pos = CursorPosition::clamped(column, row);

        let result = self.sender.send_and_delay(
            CommandSet::SetDDRAM(ddram_address(pos)).into(),
            self.delayer,
            self.config.get_cursor_settle_ms(),
        );
        self.config.get_error_policy().apply(result)?;

        self.state.set_cursor_pos(pos);
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn get_cursor_pos(&self) -> CursorPosition {
        self.state.get_cursor_pos()
    }

    /// Shift all displayed characters by one position
    pub fn shift_display(&mut self, dir: MoveDirection) -> Result<(), BusError> {
        self.dispatch(CommandSet::CursorOrDisplayShift(
            ShiftType::CursorAndDisplay,
            dir,
        ))
    }

    #[allow(missing_docs)]
    pub fn scroll_left(&mut self) -> Result<(), BusError> {
        self.shift_display(MoveDirection::RightToLeft)
    }

    #[allow(missing_docs)]
    pub fn scroll_right(&mut self) -> Result<(), BusError> {
        self.shift_display(MoveDirection::LeftToRight)
    }

    /// Show or hide everything on the module
    ///
    /// Note:
    /// These are the bytes the module vendor uses for display on/off,
    /// on the ST7036 they land in the power / icon / contrast register
    pub fn set_display_state(&mut self, display: State) -> Result<(), BusError> {
        self.dispatch(match display {
            State::On => VENDOR_DISPLAY_ON,
            State::Off => VENDOR_DISPLAY_OFF,
        })
    }

    /// Show an underline cursor without blinking, or hide it
    pub fn set_cursor_state(&mut self, cursor: State) -> Result<(), BusError> {
        self.dispatch(CommandSet::DisplayOnOff {
            display: State::On,
            cursor,
            cursor_blink: State::Off,
        })
    }

    /// Turn on or off the blinking block
    pub fn set_cursor_blink_state(&mut self, blink: State) -> Result<(), BusError> {
        self.dispatch(CommandSet::DisplayOnOff {
            display: State::On,
            cursor: State::Off,
            cursor_blink: blink,
        })
    }

    #[allow(missing_docs)]
    pub fn cursor_on(&mut self) -> Result<(), BusError> {
        self.set_cursor_state(State::On)
    }

    #[allow(missing_docs)]
    pub fn cursor_off(&mut self) -> Result<(), BusError> {
        self.set_cursor_state(State::Off)
    }

    #[allow(missing_docs)]
    pub fn get_error_policy(&self) -> ErrorPolicy {
        self.config.get_error_policy()
    }

    #[allow(missing_docs)]
    pub fn set_error_policy(&mut self, policy: ErrorPolicy) {
        self.config = self.config.set_error_policy(policy);
    }

    #[allow(missing_docs)]
    pub fn get_config(&self) -> Config {
        self.config
    }

    /// Blocking wait with the driver's delayer
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }
}

impl<'a, 'b, Sender, Delayer> TextDisplay for Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn get_cursor_pos(&self) -> CursorPosition {
        Lcd::get_cursor_pos(self)
    }

    fn set_cursor_pos(&mut self, column: u8, row: u8) -> Result<(), BusError> {
        Lcd::set_cursor_pos(self, column, row)
    }

    fn write_str_to_cur(&mut self, text: &str) -> Result<(), BusError> {
        Lcd::write_str_to_cur(self, text)
    }
}

impl<'a, 'b, Sender, Delayer> core::fmt::Write for Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_str_to_cur(s).map_err(|_| core::fmt::Error)
    }
}
