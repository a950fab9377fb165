//! Renders machine code back to mnemonic text.
//!
//! Consults the same [`opcode_info`] table the CPU's dispatch loop uses,
//! so the two components cannot silently drift apart on what a byte means.

use crate::cpu::opcodes::{opcode_info, AddressingMode};

/// Disassemble one instruction starting at `address`. `bytes` holds the
/// opcode plus up to two following bytes (zero-padded by the caller if
/// fewer are available); only as many are consulted as the addressing
/// mode requires.
pub fn disassemble(bytes: [u8; 3], address: u16) -> String {
    let opcode = bytes[0];

    let Some(info) = opcode_info(opcode) else {
        return format!("{:04X}:\tDB\t${:02X}\t; illegal instruction\n", address, opcode);
    };

    let mnemonic = info.mnemonic.as_str();
    let operand = render_operand(info.mode, bytes, address, info.len());

    match operand {
        Some(operand) => format!("{:04X}:\t{}\t{}\n", address, mnemonic, operand),
        None => format!("{:04X}:\t{}\n", address, mnemonic),
    }
}

fn render_operand(mode: AddressingMode, bytes: [u8; 3], address: u16, len: u16) -> Option<String> {
    let byte1 = bytes[1];
    let word = u16::from_le_bytes([bytes[1], bytes[2]]);

    match mode {
        AddressingMode::Implied => None,
        AddressingMode::Accumulator => Some("A".to_string()),
        AddressingMode::Immediate => Some(format!("#${:02X}", byte1)),
        AddressingMode::ZeroPage => Some(format!("${:02X}", byte1)),
        AddressingMode::ZeroPageX => Some(format!("${:02X},X", byte1)),
        AddressingMode::ZeroPageY => Some(format!("${:02X},Y", byte1)),
        AddressingMode::Absolute => Some(format!("${:04X}", word)),
        AddressingMode::AbsoluteX => Some(format!("${:04X},X", word)),
        AddressingMode::AbsoluteY => Some(format!("${:04X},Y", word)),
        AddressingMode::Relative => {
            let target = address
                .wrapping_add(len)
                .wrapping_add(byte1 as i8 as i16 as u16);
            Some(format!("${:04X}\t; +{:02X}", target, byte1))
        }
        AddressingMode::IndexedIndirect => Some(format!("(${:04X},X)", word)),
        AddressingMode::IndirectIndexed => Some(format!("(${:04X},Y)", word)),
        AddressingMode::Indirect => Some(format!("(${:04X})", word)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disassembles_jsr_absolute() {
        let line = disassemble([0x20, 0x00, 0x90], 0x8000);
        assert_eq!(line, "8000:\tJSR\t$9000\n");
    }

    #[test]
    fn disassembles_relative_branch_with_offset_comment() {
        let line = disassemble([0xD0, 0xFE, 0x00], 0x8000);
        assert_eq!(line, "8000:\tBNE\t$8000\t; +FE\n");
    }

    #[test]
    fn disassembles_implied_with_no_operand() {
        let line = disassemble([0xEA, 0x00, 0x00], 0x1000);
        assert_eq!(line, "1000:\tNOP\n");
    }

    #[test]
    fn disassembles_immediate() {
        let line = disassemble([0xA9, 0x7F, 0x00], 0x0200);
        assert_eq!(line, "0200:\tLDA\t#$7F\n");
    }

    #[test]
    fn disassembles_indexed_indirect() {
        let line = disassemble([0xA1, 0x20, 0x00], 0x8000);
        assert_eq!(line, "8000:\tLDA\t($0020,X)\n");
    }

    #[test]
    fn unknown_opcode_renders_as_db() {
        let line = disassemble([0x02, 0x00, 0x00], 0x4000);
        assert_eq!(line, "4000:\tDB\t$02\t; illegal instruction\n");
    }

    #[test]
    fn disassembler_and_cpu_dispatch_agree_on_every_documented_opcode() {
        for opcode in 0u16..256 {
            let Some(info) = opcode_info(opcode as u8) else { continue };
            let line = disassemble([opcode as u8, 0x01, 0x01], 0x0000);
            assert!(line.contains(info.mnemonic.as_str()));
        }
    }
}
