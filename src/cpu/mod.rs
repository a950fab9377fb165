//! The fetch-decode-execute core.
//!
//! [`Cpu`] owns the register file and drives a caller-supplied [`Bus`]. It
//! has two public operations, [`Cpu::reset`] and [`Cpu::step`], matching
//! the contract: reset performs the power-up sequence, step executes
//! exactly one instruction and reports a [`DecodeError`] if the opcode
//! isn't one of the documented 151.

pub mod flags;
pub mod opcodes;
mod opcodes_jump;
mod opcodes_logical;
mod opcodes_move;

#[cfg(test)]
mod test;

use log::{error, trace};

use crate::bus::Bus;
use crate::error::DecodeError;

pub use flags::Status;
pub use opcodes::{AddressingMode, Mnemonic, OpcodeInfo};

/// Where the stack page lives: pushes/pops address `STACK_BASE + SP`.
const STACK_BASE: u16 = 0x0100;

const RESET_VECTOR: u16 = 0xFFFC;
const IRQ_BRK_VECTOR: u16 = 0xFFFE;

/// A resolved operand: either an address to read/write through the bus, or
/// the accumulator itself (for the handful of opcodes with an accumulator
/// addressing mode), or nothing (implied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Address(u16),
    Accumulator,
    Implied,
}

/// The documented NMOS 6502 register file plus the bus it runs against.
pub struct Cpu<B: Bus> {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
    pub bus: B,
}

impl<B: Bus> Cpu<B> {
    pub fn new(bus: B) -> Cpu<B> {
        Cpu {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            status: Status::reset(),
            bus,
        }
    }

    /// Power-up/reset sequence: zero the visible registers other than SP,
    /// set only the interrupt-disable flag, and load PC from the reset
    /// vector. Memory is untouched.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.status = Status::reset();
        self.pc = self.bus.read_u16(RESET_VECTOR);
    }

    /// Execute exactly one instruction. Returns the decoded opcode info on
    /// success, or a [`DecodeError`] if the opcode isn't documented.
    pub fn step(&mut self) -> Result<OpcodeInfo, DecodeError> {
        let pc_at_fetch = self.pc;
        let opcode = self.fetch_u8();
        let info = opcodes::opcode_info(opcode).ok_or_else(|| {
            error!("unknown opcode ${:02X} at PC=${:04X}", opcode, pc_at_fetch);
            DecodeError::UnknownOpcode { opcode, pc: pc_at_fetch }
        })?;
        trace!("${:04X}  {:02X}  {}", pc_at_fetch, opcode, info.mnemonic);

        // JSR's push happens between fetching the target's low and high
        // bytes, not after both - it gets its own addressing path instead
        // of running through the generic Absolute resolver.
        if info.mnemonic == Mnemonic::Jsr {
            opcodes_jump::jsr(self);
        } else {
            let operand = self.resolve_operand(info.mode);
            self.execute(info.mnemonic, operand);
        }

        Ok(info)
    }

    /// Resolve an opcode's addressing mode, fetching whatever operand
    /// bytes it needs and advancing PC past them.
    fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::Address(addr)
            }
            AddressingMode::ZeroPage => {
                let d = self.fetch_u8();
                Operand::Address(d as u16)
            }
            AddressingMode::ZeroPageX => {
                let d = self.fetch_u8();
                Operand::Address(d.wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let d = self.fetch_u8();
                Operand::Address(d.wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_u16();
                Operand::Address(addr)
            }
            AddressingMode::AbsoluteX => {
                let addr = self.fetch_u16();
                Operand::Address(addr.wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                let addr = self.fetch_u16();
                Operand::Address(addr.wrapping_add(self.y as u16))
            }
            AddressingMode::Relative => {
                let offset = self.fetch_u8() as i8;
                let target = self.pc.wrapping_add(offset as i16 as u16);
                Operand::Address(target)
            }
            AddressingMode::IndexedIndirect => {
                let d = self.fetch_u8().wrapping_add(self.x);
                let lo = self.bus.read(d as u16);
                let hi = self.bus.read(d.wrapping_add(1) as u16);
                Operand::Address(u16::from_le_bytes([lo, hi]))
            }
            AddressingMode::IndirectIndexed => {
                let d = self.fetch_u8();
                let lo = self.bus.read(d as u16);
                let hi = self.bus.read(d.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([lo, hi]);
                Operand::Address(base.wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_u16();
                Operand::Address(self.bus.read_u16(ptr))
            }
        }
    }

    fn execute(&mut self, mnemonic: Mnemonic, operand: Operand) {
        use Mnemonic::*;
        match mnemonic {
            Lda | Ldx | Ldy | Sta | Stx | Sty | Tax | Tay | Txa | Tya | Tsx | Txs | Pha
            | Php | Pla | Plp => opcodes_move::execute(self, mnemonic, operand),

            And | Ora | Eor | Adc | Sbc | Cmp | Cpx | Cpy | Bit | Inc | Dec | Inx | Iny
            | Dex | Dey | Asl | Lsr | Rol | Ror => opcodes_logical::execute(self, mnemonic, operand),

            Clc | Sec | Cli | Sei | Clv | Cld | Sed | Bpl | Bmi | Bvc | Bvs | Bcc | Bcs
            | Bne | Beq | Jmp | Rts | Brk | Rti | Nop => {
                opcodes_jump::execute(self, mnemonic, operand)
            }

            Jsr => unreachable!("JSR is dispatched directly from step(), never through execute()"),
        }
    }

    fn fetch_u8(&mut self) -> u8 {
        let byte = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    fn fetch_u16(&mut self) -> u16 {
        let value = self.bus.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    fn push_u8(&mut self, value: u8) {
        self.bus.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pop_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(STACK_BASE + self.sp as u16)
    }

    fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    fn pop_u16(&mut self) -> u16 {
        let lo = self.pop_u8();
        let hi = self.pop_u8();
        u16::from_le_bytes([lo, hi])
    }

    /// Read the operand byte an addressing mode resolved to. Panics if
    /// called with [`Operand::Implied`] - implied-mode opcodes never read
    /// an operand through this path.
    fn read_operand(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Address(addr) => self.bus.read(addr),
            Operand::Accumulator => self.a,
            Operand::Implied => unreachable!("implied operand has no value"),
        }
    }

    fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Address(addr) => self.bus.write(addr, value),
            Operand::Accumulator => self.a = value,
            Operand::Implied => unreachable!("implied operand has no value"),
        }
    }
}

#[cfg(test)]
mod bus_contract_tests {
    use super::*;
    use crate::bus::Ram;

    #[test]
    fn reset_loads_vector_and_clears_registers() {
        let mut ram = Ram::new();
        ram.load(RESET_VECTOR, &[0x00, 0x80]);
        let mut cpu = Cpu::new(ram);
        cpu.a = 0xFF;
        cpu.reset();
        assert_eq!(cpu.a, 0);
        assert_eq!(cpu.x, 0);
        assert_eq!(cpu.y, 0);
        assert_eq!(cpu.sp, 0xFD);
        assert_eq!(cpu.status, Status::INTERRUPT_DISABLE);
        assert_eq!(cpu.pc, 0x8000);
    }

    #[test]
    fn step_on_unknown_opcode_reports_pc_at_fetch() {
        let mut ram = Ram::new();
        ram.load(RESET_VECTOR, &[0x00, 0x80]);
        ram.write(0x8000, 0x02);
        let mut cpu = Cpu::new(ram);
        cpu.reset();
        let err = cpu.step().unwrap_err();
        assert_eq!(err, DecodeError::UnknownOpcode { opcode: 0x02, pc: 0x8000 });
    }
}
