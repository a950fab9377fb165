//! The opcode table: one row per documented NMOS 6502 opcode, shared by the
//! CPU's dispatch loop and the disassembler so the two can never disagree
//! about what a byte means.

use std::fmt;

/// One of the 56 documented mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

impl Mnemonic {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC", Mnemonic::And => "AND", Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC", Mnemonic::Bcs => "BCS", Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT", Mnemonic::Bmi => "BMI", Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL", Mnemonic::Brk => "BRK", Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS", Mnemonic::Clc => "CLC", Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI", Mnemonic::Clv => "CLV", Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX", Mnemonic::Cpy => "CPY", Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX", Mnemonic::Dey => "DEY", Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC", Mnemonic::Inx => "INX", Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP", Mnemonic::Jsr => "JSR", Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX", Mnemonic::Ldy => "LDY", Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP", Mnemonic::Ora => "ORA", Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP", Mnemonic::Pla => "PLA", Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL", Mnemonic::Ror => "ROR", Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS", Mnemonic::Sbc => "SBC", Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED", Mnemonic::Sei => "SEI", Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX", Mnemonic::Sty => "STY", Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY", Mnemonic::Tsx => "TSX", Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS", Mnemonic::Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the 13 addressing modes a documented opcode can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Relative,
    IndexedIndirect,
    IndirectIndexed,
    Indirect,
}

impl AddressingMode {
    /// Total instruction length in bytes, opcode included.
    pub const fn instruction_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }
}

/// A decoded row of the opcode table: what an opcode byte means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
}

impl OpcodeInfo {
    pub const fn len(self) -> u16 {
        self.mode.instruction_len()
    }
}

macro_rules! op {
    ($opcode:expr, $mnemonic:ident, $mode:ident) => {
        Some(OpcodeInfo {
            opcode: $opcode,
            mnemonic: Mnemonic::$mnemonic,
            mode: AddressingMode::$mode,
        })
    };
}

/// Look up the documented meaning of an opcode byte.
///
/// Returns `None` for any of the 105 byte values not in the documented
/// NMOS instruction set; the CPU turns that into a decode failure, the
/// disassembler into a `DB` pseudo-op line.
pub const fn opcode_info(opcode: u8) -> Option<OpcodeInfo> {
    use AddressingMode::*;
    use Mnemonic::*;
    match opcode {
        0x00 => op!(0x00, Brk, Implied),
        0x01 => op!(0x01, Ora, IndexedIndirect),
        0x05 => op!(0x05, Ora, ZeroPage),
        0x06 => op!(0x06, Asl, ZeroPage),
        0x08 => op!(0x08, Php, Implied),
        0x09 => op!(0x09, Ora, Immediate),
        0x0A => op!(0x0A, Asl, Accumulator),
        0x0D => op!(0x0D, Ora, Absolute),
        0x0E => op!(0x0E, Asl, Absolute),

        0x10 => op!(0x10, Bpl, Relative),
        0x11 => op!(0x11, Ora, IndirectIndexed),
        0x15 => op!(0x15, Ora, ZeroPageX),
        0x16 => op!(0x16, Asl, ZeroPageX),
        0x18 => op!(0x18, Clc, Implied),
        0x19 => op!(0x19, Ora, AbsoluteY),
        0x1D => op!(0x1D, Ora, AbsoluteX),
        0x1E => op!(0x1E, Asl, AbsoluteX),

        0x20 => op!(0x20, Jsr, Absolute),
        0x21 => op!(0x21, And, IndexedIndirect),
        0x24 => op!(0x24, Bit, ZeroPage),
        0x25 => op!(0x25, And, ZeroPage),
        0x26 => op!(0x26, Rol, ZeroPage),
        0x28 => op!(0x28, Plp, Implied),
        0x29 => op!(0x29, And, Immediate),
        0x2A => op!(0x2A, Rol, Accumulator),
        0x2C => op!(0x2C, Bit, Absolute),
        0x2D => op!(0x2D, And, Absolute),
        0x2E => op!(0x2E, Rol, Absolute),

        0x30 => op!(0x30, Bmi, Relative),
        0x31 => op!(0x31, And, IndirectIndexed),
        0x35 => op!(0x35, And, ZeroPageX),
        0x36 => op!(0x36, Rol, ZeroPageX),
        0x38 => op!(0x38, Sec, Implied),
        0x39 => op!(0x39, And, AbsoluteY),
        0x3D => op!(0x3D, And, AbsoluteX),
        0x3E => op!(0x3E, Rol, AbsoluteX),

        0x40 => op!(0x40, Rti, Implied),
        0x41 => op!(0x41, Eor, IndexedIndirect),
        0x45 => op!(0x45, Eor, ZeroPage),
        0x46 => op!(0x46, Lsr, ZeroPage),
        0x48 => op!(0x48, Pha, Implied),
        0x49 => op!(0x49, Eor, Immediate),
        0x4A => op!(0x4A, Lsr, Accumulator),
        0x4C => op!(0x4C, Jmp, Absolute),
        0x4D => op!(0x4D, Eor, Absolute),
        0x4E => op!(0x4E, Lsr, Absolute),

        0x50 => op!(0x50, Bvc, Relative),
        0x51 => op!(0x51, Eor, IndirectIndexed),
        0x55 => op!(0x55, Eor, ZeroPageX),
        0x56 => op!(0x56, Lsr, ZeroPageX),
        0x58 => op!(0x58, Cli, Implied),
        0x59 => op!(0x59, Eor, AbsoluteY),
        0x5D => op!(0x5D, Eor, AbsoluteX),
        0x5E => op!(0x5E, Lsr, AbsoluteX),

        0x60 => op!(0x60, Rts, Implied),
        0x61 => op!(0x61, Adc, IndexedIndirect),
        0x65 => op!(0x65, Adc, ZeroPage),
        0x66 => op!(0x66, Ror, ZeroPage),
        0x68 => op!(0x68, Pla, Implied),
        0x69 => op!(0x69, Adc, Immediate),
        0x6A => op!(0x6A, Ror, Accumulator),
        0x6C => op!(0x6C, Jmp, Indirect),
        0x6D => op!(0x6D, Adc, Absolute),
        0x6E => op!(0x6E, Ror, Absolute),

        0x70 => op!(0x70, Bvs, Relative),
        0x71 => op!(0x71, Adc, IndirectIndexed),
        0x75 => op!(0x75, Adc, ZeroPageX),
        0x76 => op!(0x76, Ror, ZeroPageX),
        0x78 => op!(0x78, Sei, Implied),
        0x79 => op!(0x79, Adc, AbsoluteY),
        0x7D => op!(0x7D, Adc, AbsoluteX),
        0x7E => op!(0x7E, Ror, AbsoluteX),

        0x81 => op!(0x81, Sta, IndexedIndirect),
        0x84 => op!(0x84, Sty, ZeroPage),
        0x85 => op!(0x85, Sta, ZeroPage),
        0x86 => op!(0x86, Stx, ZeroPage),
        0x88 => op!(0x88, Dey, Implied),
        0x8A => op!(0x8A, Txa, Implied),
        0x8C => op!(0x8C, Sty, Absolute),
        0x8D => op!(0x8D, Sta, Absolute),
        0x8E => op!(0x8E, Stx, Absolute),

        0x90 => op!(0x90, Bcc, Relative),
        0x91 => op!(0x91, Sta, IndirectIndexed),
        0x94 => op!(0x94, Sty, ZeroPageX),
        0x95 => op!(0x95, Sta, ZeroPageX),
        0x96 => op!(0x96, Stx, ZeroPageY),
        0x98 => op!(0x98, Tya, Implied),
        0x99 => op!(0x99, Sta, AbsoluteY),
        0x9A => op!(0x9A, Txs, Implied),
        0x9D => op!(0x9D, Sta, AbsoluteX),

        0xA0 => op!(0xA0, Ldy, Immediate),
        0xA1 => op!(0xA1, Lda, IndexedIndirect),
        0xA2 => op!(0xA2, Ldx, Immediate),
        0xA4 => op!(0xA4, Ldy, ZeroPage),
        0xA5 => op!(0xA5, Lda, ZeroPage),
        0xA6 => op!(0xA6, Ldx, ZeroPage),
        0xA8 => op!(0xA8, Tay, Implied),
        0xA9 => op!(0xA9, Lda, Immediate),
        0xAA => op!(0xAA, Tax, Implied),
        0xAC => op!(0xAC, Ldy, Absolute),
        0xAD => op!(0xAD, Lda, Absolute),
        0xAE => op!(0xAE, Ldx, Absolute),

        0xB0 => op!(0xB0, Bcs, Relative),
        0xB1 => op!(0xB1, Lda, IndirectIndexed),
        0xB4 => op!(0xB4, Ldy, ZeroPageX),
        0xB5 => op!(0xB5, Lda, ZeroPageX),
        0xB6 => op!(0xB6, Ldx, ZeroPageY),
        0xB8 => op!(0xB8, Clv, Implied),
        0xB9 => op!(0xB9, Lda, AbsoluteY),
        0xBA => op!(0xBA, Tsx, Implied),
        0xBC => op!(0xBC, Ldy, AbsoluteX),
        0xBD => op!(0xBD, Lda, AbsoluteX),
        0xBE => op!(0xBE, Ldx, AbsoluteY),

        0xC0 => op!(0xC0, Cpy, Immediate),
        0xC1 => op!(0xC1, Cmp, IndexedIndirect),
        0xC4 => op!(0xC4, Cpy, ZeroPage),
        0xC5 => op!(0xC5, Cmp, ZeroPage),
        0xC6 => op!(0xC6, Dec, ZeroPage),
        0xC8 => op!(0xC8, Iny, Implied),
        0xC9 => op!(0xC9, Cmp, Immediate),
        0xCA => op!(0xCA, Dex, Implied),
        0xCC => op!(0xCC, Cpy, Absolute),
        0xCD => op!(0xCD, Cmp, Absolute),
        0xCE => op!(0xCE, Dec, Absolute),

        0xD0 => op!(0xD0, Bne, Relative),
        0xD1 => op!(0xD1, Cmp, IndirectIndexed),
        0xD5 => op!(0xD5, Cmp, ZeroPageX),
        0xD6 => op!(0xD6, Dec, ZeroPageX),
        0xD8 => op!(0xD8, Cld, Implied),
        0xD9 => op!(0xD9, Cmp, AbsoluteY),
        0xDD => op!(0xDD, Cmp, AbsoluteX),
        0xDE => op!(0xDE, Dec, AbsoluteX),

        0xE0 => op!(0xE0, Cpx, Immediate),
        0xE1 => op!(0xE1, Sbc, IndexedIndirect),
        0xE4 => op!(0xE4, Cpx, ZeroPage),
        0xE5 => op!(0xE5, Sbc, ZeroPage),
        0xE6 => op!(0xE6, Inc, ZeroPage),
        0xE8 => op!(0xE8, Inx, Implied),
        0xE9 => op!(0xE9, Sbc, Immediate),
        0xEA => op!(0xEA, Nop, Implied),
        0xEC => op!(0xEC, Cpx, Absolute),
        0xED => op!(0xED, Sbc, Absolute),
        0xEE => op!(0xEE, Inc, Absolute),

        0xF0 => op!(0xF0, Beq, Relative),
        0xF1 => op!(0xF1, Sbc, IndirectIndexed),
        0xF5 => op!(0xF5, Sbc, ZeroPageX),
        0xF6 => op!(0xF6, Inc, ZeroPageX),
        0xF8 => op!(0xF8, Sed, Implied),
        0xF9 => op!(0xF9, Sbc, AbsoluteY),
        0xFD => op!(0xFD, Sbc, AbsoluteX),
        0xFE => op!(0xFE, Inc, AbsoluteX),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_opcode_count_is_151() {
        let count = (0u16..256).filter(|&op| opcode_info(op as u8).is_some()).count();
        assert_eq!(count, 151);
    }

    #[test]
    fn undocumented_opcode_is_none() {
        assert!(opcode_info(0x02).is_none());
        assert!(opcode_info(0xFF).is_none());
        assert!(opcode_info(0x04).is_none());
    }

    #[test]
    fn jsr_is_three_bytes_absolute() {
        let info = opcode_info(0x20).unwrap();
        assert_eq!(info.mnemonic, Mnemonic::Jsr);
        assert_eq!(info.mode, AddressingMode::Absolute);
        assert_eq!(info.len(), 3);
    }
}
