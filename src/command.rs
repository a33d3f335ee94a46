//! ST7036 instruction set, and the bytes each instruction encodes to

use crate::utils::BitOps;

/// Instructions understood by the ST7036
///
/// The controller has two instruction tables. [`CommandSet::FunctionSet`] selects the table,
/// [`CommandSet::CursorOrDisplayShift`] lives in the normal table,
/// the bias / contrast / power / follower commands live in extension table 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// Fill DDRAM with spaces, and set address counter to 0
    ClearDisplay,
    /// Set address counter to 0, and undo display shift
    ReturnHome,
    /// Cursor move direction, and whether the display follows the cursor
    EntryModeSet(MoveDirection, ShiftType),
    #[allow(missing_docs)]
    DisplayOnOff {
        display: State,
        cursor: State,
        cursor_blink: State,
    },
    /// Shift the cursor, or the whole display, by one position
    CursorOrDisplayShift(ShiftType, MoveDirection),
    #[allow(missing_docs)]
    FunctionSet {
        width: DataWidth,
        line: LineMode,
        double_height: State,
        table: InstructionTable,
    },
    /// Internal oscillator frequency (3 bits) and LCD bias
    BiasOscSet {
        /// LCD bias
        bias: Bias,
        /// Oscillator frequency adjust, only the lower 3 bits are used
        frequency: u8,
    },
    /// Lower 4 bits of the 6 bit contrast value
    ContrastSet(u8),
    /// Icon display, booster circuit, and upper 2 bits of contrast
    PowerIconContrast {
        /// Icon display
        icon: State,
        /// Booster circuit
        booster: State,
        /// Upper 2 bits of contrast
        contrast_high: u8,
    },
    /// Voltage follower circuit, and its amplified ratio (3 bits)
    FollowerControl {
        /// Voltage follower circuit
        follower: State,
        /// Amplified ratio, only the lower 3 bits are used
        ratio: u8,
    },
    /// Set DDRAM address, the higher bit is dropped
    SetDDRAM(u8),
    /// Write one byte into DDRAM at the current address
    WriteDataToRAM(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum MoveDirection {
    RightToLeft,
    #[default]
    LeftToRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum ShiftType {
    #[default]
    CursorOnly,
    CursorAndDisplay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum State {
    Off,
    #[default]
    On,
}

impl From<bool> for State {
    fn from(enable: bool) -> Self {
        match enable {
            true => State::On,
            false => State::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum DataWidth {
    Bit4,
    #[default]
    Bit8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum LineMode {
    OneLine,
    #[default]
    TwoLine,
}

/// Which instruction table the controller decodes with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InstructionTable {
    /// IS2 = 0, IS1 = 0
    #[default]
    Normal,
    /// IS2 = 0, IS1 = 1
    Extension1,
    /// IS2 = 1, IS1 = 0
    Extension2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Bias {
    #[default]
    OneFifth,
    OneFourth,
}

/// Whether the byte following the control byte is an instruction or display data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelection {
    #[allow(missing_docs)]
    Command,
    #[allow(missing_docs)]
    Data,
}

impl RegisterSelection {
    /// The control byte that leads a transmission
    pub fn control_byte(self) -> u8 {
        match self {
            RegisterSelection::Command => 0x00,
            RegisterSelection::Data => 0x40,
        }
    }
}

/// One encoded byte, with the register it goes to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    rs: RegisterSelection,
    data: u8,
}

impl Command {
    pub(crate) fn new(rs: RegisterSelection, data: u8) -> Self {
        Self { rs, data }
    }

    #[allow(missing_docs)]
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    #[allow(missing_docs)]
    pub fn get_data(&self) -> u8 {
        self.data
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => Self::new(RegisterSelection::Command, 0b0000_0001),

            CommandSet::ReturnHome => Self::new(RegisterSelection::Command, 0b0000_0010),

            CommandSet::EntryModeSet(dir, st) => {
                let mut raw_bits: u8 = 0b0000_0100;

                raw_bits.put_bit(1, dir == MoveDirection::LeftToRight);
                raw_bits.put_bit(0, st == ShiftType::CursorAndDisplay);

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => {
                let mut raw_bits: u8 = 0b0000_1000;

                raw_bits.put_bit(2, display == State::On);
                raw_bits.put_bit(1, cursor == State::On);
                raw_bits.put_bit(0, cursor_blink == State::On);

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits: u8 = 0b0001_0000;

                raw_bits.put_bit(3, st == ShiftType::CursorAndDisplay);
                raw_bits.put_bit(2, dir == MoveDirection::LeftToRight);

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::FunctionSet {
                width,
                line,
                double_height,
                table,
            } => {
                let mut raw_bits: u8 = 0b0010_0000;

                raw_bits.put_bit(4, width == DataWidth::Bit8);
                raw_bits.put_bit(3, line == LineMode::TwoLine);
                raw_bits.put_bit(2, double_height == State::On);
                raw_bits.put_bit(1, table == InstructionTable::Extension2);
                raw_bits.put_bit(0, table == InstructionTable::Extension1);

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::BiasOscSet { bias, frequency } => {
                let mut raw_bits: u8 = 0b0001_0000 | (frequency & 0b111);

                raw_bits.put_bit(3, bias == Bias::OneFourth);

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::ContrastSet(contrast_low) => {
                Self::new(RegisterSelection::Command, 0b0111_0000 | (contrast_low & 0b1111))
            }

            CommandSet::PowerIconContrast {
                icon,
                booster,
                contrast_high,
            } => {
                let mut raw_bits: u8 = 0b0101_0000 | (contrast_high & 0b11);

                raw_bits.put_bit(3, icon == State::On);
                raw_bits.put_bit(2, booster == State::On);

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::FollowerControl { follower, ratio } => {
                let mut raw_bits: u8 = 0b0110_0000 | (ratio & 0b111);

                raw_bits.put_bit(3, follower == State::On);

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::SetDDRAM(addr) => {
                Self::new(RegisterSelection::Command, 0b1000_0000 | (addr & 0b0111_1111))
            }

            CommandSet::WriteDataToRAM(data) => Self::new(RegisterSelection::Data, data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte(command: CommandSet) -> u8 {
        Command::from(command).get_data()
    }

    #[test]
    fn init_instructions_encode_to_vendor_bytes() {
        assert_eq!(
            byte(CommandSet::FunctionSet {
                width: DataWidth::Bit8,
                line: LineMode::TwoLine,
                double_height: State::Off,
                table: InstructionTable::Extension1,
            }),
            0x39
        );
        assert_eq!(
            byte(CommandSet::BiasOscSet {
                bias: Bias::OneFifth,
                frequency: 0b100
            }),
            0x14
        );
        assert_eq!(byte(CommandSet::ContrastSet(0)), 0x70);
        assert_eq!(
            byte(CommandSet::PowerIconContrast {
                icon: State::On,
                booster: State::On,
                contrast_high: 0b10
            }),
            0x5E
        );
        assert_eq!(
            byte(CommandSet::FollowerControl {
                follower: State::On,
                ratio: 0b101
            }),
            0x6D
        );
        assert_eq!(
            byte(CommandSet::EntryModeSet(
                MoveDirection::LeftToRight,
                ShiftType::CursorOnly
            )),
            0x06
        );
    }

    #[test]
    fn display_shift_directions() {
        assert_eq!(
            byte(CommandSet::CursorOrDisplayShift(
                ShiftType::CursorAndDisplay,
                MoveDirection::RightToLeft
            )),
            0x18
        );
        assert_eq!(
            byte(CommandSet::CursorOrDisplayShift(
                ShiftType::CursorAndDisplay,
                MoveDirection::LeftToRight
            )),
            0x1C
        );
    }

    #[test]
    fn display_on_off_bits() {
        let display_on = |cursor: State, cursor_blink: State| {
            byte(CommandSet::DisplayOnOff {
                display: State::On,
                cursor,
                cursor_blink,
            })
        };

        assert_eq!(display_on(State::Off, State::Off), 0x0C);
        assert_eq!(display_on(State::On, State::Off), 0x0E);
        assert_eq!(display_on(State::Off, State::On), 0x0D);
    }

    #[test]
    fn ddram_address_keeps_command_bit() {
        assert_eq!(byte(CommandSet::SetDDRAM(0x40)), 0xC0);
        assert_eq!(byte(CommandSet::SetDDRAM(0xFF)), 0xFF);
    }

    #[test]
    fn data_goes_to_data_register() {
        let command = Command::from(CommandSet::WriteDataToRAM(b'A'));
        assert_eq!(command.get_register_selection(), RegisterSelection::Data);
        assert_eq!(command.get_register_selection().control_byte(), 0x40);
        assert_eq!(command.get_data(), b'A');
    }
}
