//! Built-in sender
//! If you want to create a new sender, you will need to implement [`SendCommand`] trait

use embedded_hal::delay::DelayNs;

use crate::{command::Command, error::BusError};

mod i2c_sender;

pub use i2c_sender::{I2cSender, BIZ_ADDRESS, CIZ_ADDRESS, MAX_SEQUENCE_LEN};

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// The ST7036 is write-only from the driver's side, nothing is ever read back.
pub trait SendCommand<Delayer: DelayNs> {
    /// Send one [`Command`] as its own transmission
    fn send(&mut self, command: Command) -> Result<(), BusError>;

    /// Send several commands in one transmission,
    /// all of them go to the register of the first one
    fn send_sequence(&mut self, commands: &[Command]) -> Result<(), BusError>;

    /// Send command, then wait specific duration
    ///
    /// The wait happens even if the transmission failed
    fn send_and_delay(
        &mut self,
        command: Command,
        delayer: &mut Delayer,
        delay_ms: u32,
    ) -> Result<(), BusError> {
        let result = self.send(command);
        delayer.delay_ms(delay_ms);
        result
    }
}
