//! End-to-end scenarios driving [`Cpu`] over a [`Ram`] bus one `step` at a
//! time, matching how a host harness is expected to use this crate.

use super::{Cpu, Status, RESET_VECTOR};
use crate::bus::{Bus, Ram};

fn cpu_at(entry: u16) -> Cpu<Ram> {
    let mut ram = Ram::new();
    ram.load(RESET_VECTOR, &entry.to_le_bytes());
    let mut cpu = Cpu::new(ram);
    cpu.reset();
    cpu
}

#[test]
fn lda_immediate_zero_sets_flags() {
    let mut cpu = cpu_at(0x8000);
    cpu.bus.load(0x8000, &[0xA9, 0x00]);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.status.contains(Status::ZERO));
    assert!(!cpu.status.contains(Status::NEGATIVE));
    assert_eq!(cpu.pc, 0x8002);
}

#[test]
fn indexed_indirect_load() {
    let mut cpu = cpu_at(0x8000);
    cpu.x = 0x04;
    cpu.bus.load(0x0024, &[0x34, 0x12]);
    cpu.bus.write(0x1234, 0x77);
    cpu.bus.load(0x8000, &[0xA1, 0x20]);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x77);
    assert_eq!(cpu.pc, 0x8002);
}

#[test]
fn pha_pla_round_trip_restores_a_and_flags() {
    let mut cpu = cpu_at(0x8000);
    cpu.a = 0x00;
    cpu.bus.load(0x8000, &[0x48, 0xA9, 0xFF, 0x68]);

    cpu.step().unwrap(); // PHA
    cpu.step().unwrap(); // LDA #$FF, clobbers A and flags
    assert_eq!(cpu.a, 0xFF);
    cpu.step().unwrap(); // PLA

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.status.contains(Status::ZERO));
    assert!(!cpu.status.contains(Status::NEGATIVE));
}

#[test]
fn php_plp_round_trip_discards_bits_5_and_b() {
    let mut cpu = cpu_at(0x8000);
    cpu.status.insert(Status::CARRY | Status::OVERFLOW);
    cpu.bus.load(0x8000, &[0x08, 0x28]);

    cpu.step().unwrap(); // PHP
    let pushed = cpu.bus.read(0x0100 + (cpu.sp.wrapping_add(1)) as u16);
    assert_eq!(pushed & 0b0011_0000, 0b0011_0000);

    cpu.step().unwrap(); // PLP
    assert_eq!(cpu.status, Status::CARRY | Status::OVERFLOW);
}

#[test]
fn brk_pushes_pc_and_status_then_loads_irq_vector() {
    let mut cpu = cpu_at(0x8000);
    cpu.bus.load(0xFFFE, &[0x00, 0x90]);
    cpu.bus.load(0x8000, &[0x00]);
    let sp_before = cpu.sp;

    cpu.step().unwrap();

    assert_eq!(cpu.pc, 0x9000);
    assert!(cpu.status.contains(Status::INTERRUPT_DISABLE));
    assert_eq!(cpu.sp, sp_before.wrapping_sub(3));
}

#[test]
fn every_documented_opcode_executes_without_panicking() {
    for opcode in 0u16..256 {
        let Some(info) = crate::cpu::opcodes::opcode_info(opcode as u8) else {
            continue;
        };
        let mut cpu = cpu_at(0x8000);
        let mut bytes = vec![opcode as u8];
        bytes.resize(info.len() as usize, 0x01);
        cpu.bus.load(0x8000, &bytes);
        cpu.step().unwrap();
    }
}

#[test]
fn reads_and_writes_during_a_step_stay_in_bounds() {
    // IndirectIndexed wraps its pointer byte within the zero page and the
    // final address within the 64-KiB space; nothing a step does should
    // panic on an out-of-range index.
    let mut cpu = cpu_at(0x8000);
    cpu.y = 0xFF;
    cpu.bus.load(0x00FF, &[0xFF, 0xFF]);
    cpu.bus.load(0x8000, &[0xB1, 0xFF]);

    cpu.step().unwrap();
    assert_eq!(cpu.pc, 0x8002);
}
