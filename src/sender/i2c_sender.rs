use embedded_hal::{
    delay::DelayNs,
    i2c::{Error, I2c, SevenBitAddress},
};

use crate::{command::Command, error::BusError, sender::SendCommand};

/// I2C address of the BiZ modules (0x78 shifted over 1 bit)
pub const BIZ_ADDRESS: SevenBitAddress = 0x3C;

/// I2C address of the CiZ modules (0x7C shifted over 1 bit)
pub const CIZ_ADDRESS: SevenBitAddress = 0x3E;

/// Longest command sequence [`I2cSender`] fits into one transmission
pub const MAX_SEQUENCE_LEN: usize = 16;

// every frame looks like:
// control byte (0x00 command / 0x40 data), payload byte(s)

/// Drive the LCD through its native I2C interface
pub struct I2cSender<'a, I2cLcd: I2c> {
    i2c: &'a mut I2cLcd,
    addr: SevenBitAddress,
}

impl<'a, I2cLcd: I2c> I2cSender<'a, I2cLcd> {
    /// Wrap an I2C bus, `addr` is usually [`BIZ_ADDRESS`] or [`CIZ_ADDRESS`]
    pub fn new(i2c: &'a mut I2cLcd, addr: SevenBitAddress) -> Self {
        Self { i2c, addr }
    }

    #[allow(missing_docs)]
    pub fn get_address(&self) -> SevenBitAddress {
        self.addr
    }
}

impl<'a, I2cLcd: I2c, Delayer: DelayNs> SendCommand<Delayer> for I2cSender<'a, I2cLcd> {
    fn send(&mut self, command: Command) -> Result<(), BusError> {
        let frame = [
            command.get_register_selection().control_byte(),
            command.get_data(),
        ];

        #[cfg(feature = "defmt")]
        defmt::trace!("i2c write {=u8:#x}: {=[u8]:#x}", self.addr, &frame[..]);

        self.i2c
            .write(self.addr, &frame)
            .map_err(|e| BusError::from(e.kind()))
    }

    fn send_sequence(&mut self, commands: &[Command]) -> Result<(), BusError> {
        let Some(first) = commands.first() else {
            return Ok(());
        };

        if commands.len() > MAX_SEQUENCE_LEN {
            return Err(BusError::SequenceTooLong);
        }

        let mut frame = [0u8; MAX_SEQUENCE_LEN + 1];
        frame[0] = first.get_register_selection().control_byte();
        frame[1..]
            .iter_mut()
            .zip(commands)
            .for_each(|(slot, command)| *slot = command.get_data());

        let frame = &frame[..=commands.len()];

        #[cfg(feature = "defmt")]
        defmt::trace!("i2c write {=u8:#x}: {=[u8]:#x}", self.addr, frame);

        self.i2c
            .write(self.addr, frame)
            .map_err(|e| BusError::from(e.kind()))
    }
}
