//! Common tools

/// The state of a bit,
/// It's either [`BitState::Clear`] to represent a 0
/// or [`BitState::Set`] to represent a 1
#[derive(PartialEq)]
pub enum BitState {
    /// Bit is 0
    Clear,
    /// Bit is 1
    Set,
}

/// Simple bit ops
///
/// Offsets larger than 7 fall off the byte, so they are no-ops for
/// [`BitOps::set_bit`] / [`BitOps::clear_bit`] and read as [`BitState::Clear`].
pub trait BitOps {
    #[allow(missing_docs)]
    fn set_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn clear_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn check_bit(&self, pos: u8) -> BitState;
    /// Set the bit when `state` is `true`, otherwise clear it
    fn put_bit(&mut self, pos: u8, state: bool) -> Self;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) -> Self {
        *self |= 1u8.checked_shl(pos as u32).unwrap_or(0);
        *self
    }

    fn clear_bit(&mut self, pos: u8) -> Self {
        *self &= !1u8.checked_shl(pos as u32).unwrap_or(0);
        *self
    }

    fn check_bit(&self, pos: u8) -> BitState {
        match self.checked_shr(pos as u32).unwrap_or(0) & 1 == 1 {
            true => BitState::Set,
            false => BitState::Clear,
        }
    }

    fn put_bit(&mut self, pos: u8, state: bool) -> Self {
        match state {
            true => self.set_bit(pos),
            false => self.clear_bit(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_bits() {
        let mut byte = 0b0000_1000u8;
        byte.set_bit(0);
        assert_eq!(byte, 0b0000_1001);
        byte.clear_bit(3);
        assert_eq!(byte, 0b0000_0001);
        assert!(byte.check_bit(0) == BitState::Set);
        assert!(byte.check_bit(1) == BitState::Clear);
    }

    #[test]
    fn out_of_range_offsets_are_ignored() {
        let mut byte = 0xA5u8;
        byte.set_bit(8);
        byte.clear_bit(12);
        assert_eq!(byte, 0xA5);
        assert!(byte.check_bit(9) == BitState::Clear);
    }
}
