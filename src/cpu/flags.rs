//! The processor status register.
//!
//! Only six of the eight bits physically exist on the part; bits 5 and B
//! are a stack-image fiction. [`Status`] models the live six-bit register.
//! The two extra bits are handled explicitly at the push/pull boundary in
//! [`Status::pushed_value`] and [`Status::from_pulled`] rather than stored.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

/// Bits 5 and B, present only in the byte pushed by PHP/BRK.
const PUSHED_UNUSED_AND_BREAK: u8 = 0b0011_0000;

impl Status {
    pub fn reset() -> Status {
        Status::INTERRUPT_DISABLE
    }

    /// The byte PHP or BRK writes to the stack: live flags with bits 5 and
    /// B forced to 1.
    pub fn pushed_value(self) -> u8 {
        self.bits() | PUSHED_UNUSED_AND_BREAK
    }

    /// Reconstruct live flags from a byte pulled off the stack (PLP, RTI),
    /// discarding bits 5 and B.
    pub fn from_pulled(byte: u8) -> Status {
        Status::from_bits_truncate(byte)
    }

    pub fn set_zero_negative(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_sets_only_interrupt_disable() {
        assert_eq!(Status::reset(), Status::INTERRUPT_DISABLE);
    }

    #[test]
    fn pushed_value_forces_bits_5_and_b() {
        let p = Status::CARRY | Status::ZERO;
        assert_eq!(p.pushed_value(), 0b0011_0011);
    }

    #[test]
    fn from_pulled_discards_bits_5_and_b() {
        let p = Status::from_pulled(0xFF);
        assert_eq!(p.bits() & 0b0011_0000, 0);
        assert_eq!(p, Status::all());
    }

    #[test]
    fn set_zero_negative_tracks_both_bits() {
        let mut p = Status::empty();
        p.set_zero_negative(0x00);
        assert!(p.contains(Status::ZERO));
        assert!(!p.contains(Status::NEGATIVE));
        p.set_zero_negative(0x80);
        assert!(!p.contains(Status::ZERO));
        assert!(p.contains(Status::NEGATIVE));
    }
}
