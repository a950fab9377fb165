//! Loads, stores, register transfers, and stack operations.

use super::{Cpu, Mnemonic, Operand, Status};
use crate::bus::Bus;

pub(super) fn execute<B: Bus>(cpu: &mut Cpu<B>, mnemonic: Mnemonic, operand: Operand) {
    use Mnemonic::*;
    match mnemonic {
        Lda => {
            let value = cpu.read_operand(operand);
            cpu.a = value;
            cpu.status.set_zero_negative(value);
        }
        Ldx => {
            let value = cpu.read_operand(operand);
            cpu.x = value;
            cpu.status.set_zero_negative(value);
        }
        Ldy => {
            let value = cpu.read_operand(operand);
            cpu.y = value;
            cpu.status.set_zero_negative(value);
        }
        Sta => cpu.write_operand(operand, cpu.a),
        Stx => cpu.write_operand(operand, cpu.x),
        Sty => cpu.write_operand(operand, cpu.y),

        Tax => {
            cpu.x = cpu.a;
            cpu.status.set_zero_negative(cpu.x);
        }
        Tay => {
            cpu.y = cpu.a;
            cpu.status.set_zero_negative(cpu.y);
        }
        Txa => {
            cpu.a = cpu.x;
            cpu.status.set_zero_negative(cpu.a);
        }
        Tya => {
            cpu.a = cpu.y;
            cpu.status.set_zero_negative(cpu.a);
        }
        Tsx => {
            cpu.x = cpu.sp;
            cpu.status.set_zero_negative(cpu.x);
        }
        // TXS does not touch the flags - the stack pointer isn't an
        // arithmetic register.
        Txs => cpu.sp = cpu.x,

        Pha => cpu.push_u8(cpu.a),
        Php => {
            let byte = cpu.status.pushed_value();
            cpu.push_u8(byte);
        }
        Pla => {
            let value = cpu.pop_u8();
            cpu.a = value;
            cpu.status.set_zero_negative(value);
        }
        Plp => {
            let byte = cpu.pop_u8();
            cpu.status = Status::from_pulled(byte);
        }

        other => unreachable!("{other:?} is not a move-family opcode"),
    }
}
