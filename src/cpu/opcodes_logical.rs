//! Logical, arithmetic, compare, bit-test, increment/decrement, and
//! shift/rotate families - everything whose flag math is non-trivial.

use super::{Cpu, Mnemonic, Operand, Status};
use crate::bus::Bus;

pub(super) fn execute<B: Bus>(cpu: &mut Cpu<B>, mnemonic: Mnemonic, operand: Operand) {
    use Mnemonic::*;
    match mnemonic {
        And => {
            let value = cpu.read_operand(operand);
            cpu.a &= value;
            cpu.status.set_zero_negative(cpu.a);
        }
        Ora => {
            let value = cpu.read_operand(operand);
            cpu.a |= value;
            cpu.status.set_zero_negative(cpu.a);
        }
        Eor => {
            let value = cpu.read_operand(operand);
            cpu.a ^= value;
            cpu.status.set_zero_negative(cpu.a);
        }

        Adc => {
            let value = cpu.read_operand(operand);
            adc(cpu, value);
        }
        Sbc => {
            let value = cpu.read_operand(operand);
            adc(cpu, !value);
        }

        Cmp => {
            let value = cpu.read_operand(operand);
            compare(cpu, cpu.a, value);
        }
        Cpx => {
            let value = cpu.read_operand(operand);
            compare(cpu, cpu.x, value);
        }
        Cpy => {
            let value = cpu.read_operand(operand);
            compare(cpu, cpu.y, value);
        }

        Bit => {
            let value = cpu.read_operand(operand);
            cpu.status.set(Status::ZERO, cpu.a & value == 0);
            cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
            cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
        }

        Inc => {
            let value = cpu.read_operand(operand).wrapping_add(1);
            cpu.write_operand(operand, value);
            cpu.status.set_zero_negative(value);
        }
        Dec => {
            let value = cpu.read_operand(operand).wrapping_sub(1);
            cpu.write_operand(operand, value);
            cpu.status.set_zero_negative(value);
        }
        Inx => {
            cpu.x = cpu.x.wrapping_add(1);
            cpu.status.set_zero_negative(cpu.x);
        }
        Iny => {
            cpu.y = cpu.y.wrapping_add(1);
            cpu.status.set_zero_negative(cpu.y);
        }
        Dex => {
            cpu.x = cpu.x.wrapping_sub(1);
            cpu.status.set_zero_negative(cpu.x);
        }
        Dey => {
            cpu.y = cpu.y.wrapping_sub(1);
            cpu.status.set_zero_negative(cpu.y);
        }

        Asl => {
            let value = cpu.read_operand(operand);
            let result = value << 1;
            cpu.status.set(Status::CARRY, value & 0x80 != 0);
            cpu.write_operand(operand, result);
            cpu.status.set_zero_negative(result);
        }
        Lsr => {
            let value = cpu.read_operand(operand);
            let result = value >> 1;
            cpu.status.set(Status::CARRY, value & 0x01 != 0);
            cpu.write_operand(operand, result);
            cpu.status.set_zero_negative(result);
        }
        Rol => {
            let value = cpu.read_operand(operand);
            let carry_in = cpu.status.contains(Status::CARRY) as u8;
            let result = (value << 1) | carry_in;
            cpu.status.set(Status::CARRY, value & 0x80 != 0);
            cpu.write_operand(operand, result);
            cpu.status.set_zero_negative(result);
        }
        Ror => {
            let value = cpu.read_operand(operand);
            let carry_in = cpu.status.contains(Status::CARRY) as u8;
            let result = (value >> 1) | (carry_in << 7);
            cpu.status.set(Status::CARRY, value & 0x01 != 0);
            cpu.write_operand(operand, result);
            cpu.status.set_zero_negative(result);
        }

        other => unreachable!("{other:?} is not a logical-family opcode"),
    }
}

/// Shared core of ADC and SBC: SBC is ADC of the bitwise complement of the
/// operand, which is exactly how this core's NMOS ancestor implements it
/// (subtraction reuses the adder, inverting the carry-in/out sense).
fn adc<B: Bus>(cpu: &mut Cpu<B>, operand: u8) {
    let carry_in = cpu.status.contains(Status::CARRY) as u16;
    let a = cpu.a;

    let sum = a as u16 + operand as u16 + carry_in;
    let signed = a as i8 as i16 + operand as i8 as i16 + carry_in as i16;

    let result = sum as u8;
    cpu.a = result;
    cpu.status.set(Status::CARRY, sum > 0xFF);
    cpu.status.set(Status::OVERFLOW, !(-128..=127).contains(&signed));
    cpu.status.set_zero_negative(result);
}

/// Shared core of CMP/CPX/CPY: an unsigned subtraction whose flags are not
/// written back to the register being compared.
fn compare<B: Bus>(cpu: &mut Cpu<B>, register: u8, operand: u8) {
    let diff = register as u16 + (!operand) as u16 + 1;
    let result = diff as u8;
    cpu.status.set(Status::CARRY, diff > 0xFF);
    cpu.status.set_zero_negative(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Ram;
    use crate::cpu::Cpu;

    fn cpu() -> Cpu<Ram> {
        Cpu::new(Ram::new())
    }

    #[test]
    fn adc_overflow_scenario() {
        let mut cpu = cpu();
        cpu.a = 0x50;
        cpu.status.remove(Status::CARRY);
        adc(&mut cpu, 0x50);
        assert_eq!(cpu.a, 0xA0);
        assert!(cpu.status.contains(Status::NEGATIVE));
        assert!(cpu.status.contains(Status::OVERFLOW));
        assert!(!cpu.status.contains(Status::ZERO));
        assert!(!cpu.status.contains(Status::CARRY));
    }

    #[test]
    fn sbc_with_borrow_scenario() {
        let mut cpu = cpu();
        cpu.a = 0x50;
        cpu.status.insert(Status::CARRY);
        adc(&mut cpu, !0xF0u8);
        assert_eq!(cpu.a, 0x60);
        assert!(!cpu.status.contains(Status::CARRY));
        assert!(!cpu.status.contains(Status::OVERFLOW));
        assert!(!cpu.status.contains(Status::NEGATIVE));
        assert!(!cpu.status.contains(Status::ZERO));
    }

    #[test]
    fn compare_sets_carry_when_register_is_greater_or_equal() {
        let mut cpu = cpu();
        compare(&mut cpu, 0x50, 0x10);
        assert!(cpu.status.contains(Status::CARRY));
        assert!(!cpu.status.contains(Status::ZERO));
    }

    #[test]
    fn compare_matches_sbc_flags_ignoring_v_and_a() {
        let mut lhs = cpu();
        compare(&mut lhs, 0x10, 0x20);

        let mut rhs = cpu();
        rhs.a = 0x10;
        rhs.status.insert(Status::CARRY);
        adc(&mut rhs, !0x20u8);

        assert_eq!(lhs.status.contains(Status::CARRY), rhs.status.contains(Status::CARRY));
        assert_eq!(lhs.status.contains(Status::ZERO), rhs.status.contains(Status::ZERO));
        assert_eq!(lhs.status.contains(Status::NEGATIVE), rhs.status.contains(Status::NEGATIVE));
    }

    #[test]
    fn rol_then_ror_restores_value_with_consistent_carry() {
        let mut cpu = cpu();
        cpu.a = 0x81;
        cpu.status.remove(Status::CARRY);
        execute(&mut cpu, Mnemonic::Rol, Operand::Accumulator);
        execute(&mut cpu, Mnemonic::Ror, Operand::Accumulator);
        assert_eq!(cpu.a, 0x81);
    }
}
