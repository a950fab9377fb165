use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use nmos6502::bus::Ram;
use nmos6502::{disassemble, Bus, Cpu};

/// NMOS 6502 instruction-set emulator and disassembler.
#[derive(Parser, Debug)]
#[command(name = "nmos6502", version, about)]
struct Args {
    /// Raw binary image to load.
    #[arg(long)]
    load: PathBuf,

    /// Load address for the image.
    #[arg(long, value_parser = parse_hex_u16, default_value = "0x8000")]
    address: u16,

    /// Disassemble the image instead of running it.
    #[arg(long)]
    disassemble: bool,

    /// Do not point the reset vector at the load address.
    #[arg(long)]
    no_reset_vector: bool,

    /// Maximum number of instructions to execute when running.
    #[arg(long, default_value_t = 100_000)]
    steps: u64,

    /// Raise log verbosity (-v, -vv).
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_hex_u16(s: &str) -> Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let image = fs::read(&args.load).with_context(|| format!("reading {}", args.load.display()))?;
    anyhow::ensure!(
        (args.address as usize) + image.len() <= 0x1_0000,
        "image of {} bytes at ${:04X} does not fit in the 64 KiB address space",
        image.len(),
        args.address,
    );

    let mut ram = Ram::new();
    ram.load(args.address, &image);
    if !args.no_reset_vector {
        ram.load(0xFFFC, &args.address.to_le_bytes());
    }

    if args.disassemble {
        run_disassembler(&mut ram, args.address, image.len());
        return Ok(());
    }

    let mut cpu = Cpu::new(ram);
    cpu.reset();
    info!("reset: PC=${:04X}", cpu.pc);

    for _ in 0..args.steps {
        cpu.step()
            .with_context(|| format!("decode failure at PC=${:04X}", cpu.pc))?;
    }

    info!("executed {} instructions", args.steps);
    Ok(())
}

fn run_disassembler(ram: &mut Ram, base: u16, len: usize) {
    let mut addr = base;
    let end = base as u32 + len as u32;
    while (addr as u32) < end {
        let bytes = [
            ram.read(addr),
            ram.read(addr.wrapping_add(1)),
            ram.read(addr.wrapping_add(2)),
        ];
        let line = disassemble(bytes, addr);
        print!("{line}");

        let info_len = nmos6502::cpu::opcodes::opcode_info(bytes[0])
            .map(|info| info.len())
            .unwrap_or(1);
        addr = addr.wrapping_add(info_len);
    }
}
