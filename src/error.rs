//! Bus errors, and how the driver reacts to them

use embedded_hal::i2c::ErrorKind;

/// Errors surfaced by a [`SendCommand`](crate::sender::SendCommand) implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Bus error (misplaced START or STOP condition)
    Bus,
    /// Another master took over the bus
    ArbitrationLoss,
    /// The LCD didn't acknowledge its address or a byte
    NoAcknowledge,
    /// Peripheral receive buffer overrun
    Overrun,
    /// Any other error reported by the I2C implementation
    Other,
    /// The reset line couldn't be driven
    ResetPin,
    /// A command sequence doesn't fit into one transmission
    SequenceTooLong,
}

impl From<ErrorKind> for BusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => BusError::Bus,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLoss,
            ErrorKind::NoAcknowledge(_) => BusError::NoAcknowledge,
            ErrorKind::Overrun => BusError::Overrun,
            _ => BusError::Other,
        }
    }
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus => write!(f, "I2C bus error"),
            Self::ArbitrationLoss => write!(f, "I2C arbitration lost"),
            Self::NoAcknowledge => write!(f, "LCD did not acknowledge"),
            Self::Overrun => write!(f, "I2C overrun"),
            Self::Other => write!(f, "I2C error"),
            Self::ResetPin => write!(f, "reset line error"),
            Self::SequenceTooLong => write!(f, "command sequence too long"),
        }
    }
}

/// What [`Lcd`](crate::lcd::Lcd) does when a transmission fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorPolicy {
    /// Drop the error and carry on, the mirrored cursor is updated as if the transmission succeeded
    #[default]
    Ignore,
    /// Return the error, the mirrored cursor is left as it was
    Strict,
}

impl ErrorPolicy {
    /// Filter a transmission result through the policy
    pub fn apply(self, result: Result<(), BusError>) -> Result<(), BusError> {
        match (result, self) {
            (Ok(()), _) => Ok(()),
            (Err(e), ErrorPolicy::Strict) => Err(e),
            (Err(_e), ErrorPolicy::Ignore) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ignoring bus error: {}", _e);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::NoAcknowledgeSource;

    #[test]
    fn error_kind_maps_to_bus_error() {
        assert_eq!(
            BusError::from(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            BusError::NoAcknowledge
        );
        assert_eq!(BusError::from(ErrorKind::Overrun), BusError::Overrun);
        assert_eq!(BusError::from(ErrorKind::Other), BusError::Other);
    }

    #[test]
    fn ignore_policy_swallows_errors() {
        assert_eq!(ErrorPolicy::Ignore.apply(Err(BusError::Bus)), Ok(()));
        assert_eq!(
            ErrorPolicy::Strict.apply(Err(BusError::Bus)),
            Err(BusError::Bus)
        );
        assert_eq!(ErrorPolicy::Strict.apply(Ok(())), Ok(()));
    }
}
