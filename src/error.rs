//! Library-level error types.
//!
//! The emulator core has exactly one failure mode: an opcode byte not in
//! the documented set. Everything else - addressing, arithmetic, stack
//! discipline - is total over its inputs and cannot fail.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown opcode ${opcode:02X} at PC=${pc:04X}")]
    UnknownOpcode { opcode: u8, pc: u16 },
}
