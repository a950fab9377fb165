//! Flag operations, branches, jumps, subroutine call/return, and the
//! software-interrupt pair BRK/RTI.

use super::{Cpu, Mnemonic, Operand, Status, IRQ_BRK_VECTOR};
use crate::bus::Bus;

pub(super) fn execute<B: Bus>(cpu: &mut Cpu<B>, mnemonic: Mnemonic, operand: Operand) {
    use Mnemonic::*;
    match mnemonic {
        Clc => cpu.status.remove(Status::CARRY),
        Sec => cpu.status.insert(Status::CARRY),
        Cli => cpu.status.remove(Status::INTERRUPT_DISABLE),
        Sei => cpu.status.insert(Status::INTERRUPT_DISABLE),
        Clv => cpu.status.remove(Status::OVERFLOW),
        // The source's CLD handler clears carry instead of decimal; that
        // is a bug, not the intended semantics.
        Cld => cpu.status.remove(Status::DECIMAL),
        Sed => cpu.status.insert(Status::DECIMAL),

        Bpl => branch(cpu, operand, !cpu.status.contains(Status::NEGATIVE)),
        Bmi => branch(cpu, operand, cpu.status.contains(Status::NEGATIVE)),
        Bvc => branch(cpu, operand, !cpu.status.contains(Status::OVERFLOW)),
        // The source's BVS handler tests N instead of V; the correct
        // semantics test the overflow flag.
        Bvs => branch(cpu, operand, cpu.status.contains(Status::OVERFLOW)),
        Bcc => branch(cpu, operand, !cpu.status.contains(Status::CARRY)),
        Bcs => branch(cpu, operand, cpu.status.contains(Status::CARRY)),
        Bne => branch(cpu, operand, !cpu.status.contains(Status::ZERO)),
        Beq => branch(cpu, operand, cpu.status.contains(Status::ZERO)),

        Jmp => cpu.pc = address_of(operand),

        Rts => {
            let addr = cpu.pop_u16();
            cpu.pc = addr.wrapping_add(1);
        }

        Brk => {
            // BRK is documented implied but actually consumes a padding
            // byte on real hardware; the pushed return address points
            // past it, at BRK+2.
            cpu.fetch_u8();
            cpu.push_u16(cpu.pc);
            let byte = cpu.status.pushed_value();
            cpu.push_u8(byte);
            cpu.status.insert(Status::INTERRUPT_DISABLE);
            cpu.pc = cpu.bus.read_u16(IRQ_BRK_VECTOR);
        }
        Rti => {
            let byte = cpu.pop_u8();
            cpu.status = Status::from_pulled(byte);
            cpu.pc = cpu.pop_u16();
        }

        Nop => {}

        other => unreachable!("{other:?} is not a jump-family opcode"),
    }
}

/// JSR's own addressing/execution path: unlike every other absolute-mode
/// opcode, the high byte of the target is fetched *after* the return
/// address is pushed, not before. Routing JSR through the generic
/// `Absolute` resolver would read both operand bytes before `execute` ever
/// runs, which reorders the fetch relative to the push.
pub(super) fn jsr<B: Bus>(cpu: &mut Cpu<B>) {
    let lo = cpu.fetch_u8();
    // PC now points at the target's high byte - the last byte of this
    // instruction - which is exactly the return address JSR pushes.
    cpu.push_u16(cpu.pc);
    let hi = cpu.fetch_u8();
    cpu.pc = u16::from_le_bytes([lo, hi]);
}

fn address_of(operand: Operand) -> u16 {
    match operand {
        Operand::Address(addr) => addr,
        _ => unreachable!("jump-family opcode resolved to a non-address operand"),
    }
}

fn branch<B: Bus>(cpu: &mut Cpu<B>, operand: Operand, condition: bool) {
    if condition {
        cpu.pc = address_of(operand);
    }
}
