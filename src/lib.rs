//! NMOS 6502 instruction-set emulator: fetch-decode-execute core plus a
//! disassembler sharing its opcode table.

pub mod bus;
pub mod cpu;
pub mod disassembler;
pub mod error;

pub use bus::{Bus, Ram};
pub use cpu::Cpu;
pub use disassembler::disassemble;
pub use error::DecodeError;
