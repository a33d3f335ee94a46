use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    command::{
        Bias, Command, CommandSet, DataWidth, InstructionTable, LineMode, MoveDirection,
        ShiftType, State,
    },
    error::{BusError, ErrorPolicy},
    lcd::Lcd,
    sender::SendCommand,
    state::LcdState,
};

/// The vendor init sequence, sent as a single transmission
const INIT_SEQUENCE: [CommandSet; 8] = [
    CommandSet::FunctionSet {
        width: DataWidth::Bit8,
        line: LineMode::TwoLine,
        double_height: State::Off,
        table: InstructionTable::Extension1,
    },
    CommandSet::BiasOscSet {
        bias: Bias::OneFifth,
        frequency: 0b100,
    },
    CommandSet::ContrastSet(0b0000),
    CommandSet::PowerIconContrast {
        icon: State::On,
        booster: State::On,
        contrast_high: 0b10,
    },
    CommandSet::FollowerControl {
        follower: State::On,
        ratio: 0b101,
    },
    CommandSet::DisplayOnOff {
        display: State::On,
        cursor: State::Off,
        cursor_blink: State::Off,
    },
    CommandSet::ClearDisplay,
    CommandSet::EntryModeSet(MoveDirection::LeftToRight, ShiftType::CursorOnly),
];

/// [`Config`] is the init config of a [`Lcd`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    error_policy: ErrorPolicy,
    reset_settle_ms: u32,
    init_settle_ms: u32,
    cursor_settle_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::default(),
            reset_settle_ms: 10,
            init_settle_ms: 5,
            cursor_settle_ms: 5,
        }
    }
}

#[allow(missing_docs)]
impl Config {
    pub fn get_error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub fn set_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// wait between releasing reset and the init sequence
    pub fn get_reset_settle_ms(&self) -> u32 {
        self.reset_settle_ms
    }

    pub fn set_reset_settle_ms(mut self, ms: u32) -> Self {
        self.reset_settle_ms = ms;
        self
    }

    /// wait after the init sequence
    pub fn get_init_settle_ms(&self) -> u32 {
        self.init_settle_ms
    }

    pub fn set_init_settle_ms(mut self, ms: u32) -> Self {
        self.init_settle_ms = ms;
        self
    }

    /// wait after every cursor move
    pub fn get_cursor_settle_ms(&self) -> u32 {
        self.cursor_settle_ms
    }

    pub fn set_cursor_settle_ms(mut self, ms: u32) -> Self {
        self.cursor_settle_ms = ms;
        self
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] driver, and init LCD hardware
    ///
    /// The reset line should already be high, use [`Lcd::new_with_reset`] to let the driver do it
    pub fn new(
        sender: &'a mut Sender,
        delayer: &'b mut Delayer,
        config: Config,
    ) -> Result<Self, BusError> {
        #[cfg(feature = "defmt")]
        defmt::info!("initialising ST7036");

        delayer.delay_ms(config.get_reset_settle_ms());

        let sequence = INIT_SEQUENCE.map(Command::from);
        let result = sender.send_sequence(&sequence);

        delayer.delay_ms(config.get_init_settle_ms());
        config.get_error_policy().apply(result)?;

        #[cfg(feature = "defmt")]
        defmt::info!("ST7036 initialisation complete");

        Ok(Lcd {
            sender,
            delayer,
            state: LcdState::default(),
            config,
        })
    }

    /// Pull reset line high, then do what [`Lcd::new`] does
    pub fn new_with_reset<ResetPin: OutputPin>(
        sender: &'a mut Sender,
        delayer: &'b mut Delayer,
        reset: &mut ResetPin,
        config: Config,
    ) -> Result<Self, BusError> {
        let result = reset.set_high().map_err(|_| BusError::ResetPin);
        config.get_error_policy().apply(result)?;

        Self::new(sender, delayer, config)
    }
}
