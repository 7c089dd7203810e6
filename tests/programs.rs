// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Small programs, run through the public interface only.

use gameboy_cpu::bus::ram::FlatMemory;
use gameboy_cpu::config::{Config, IllegalOpcodePolicy};
use gameboy_cpu::cpu::interrupts::Interrupt;
use gameboy_cpu::cpu::state::Register;
use gameboy_cpu::cpu::{Cpu, RunState};
use gameboy_cpu::GameboyError;

/// Ticks until the cpu halts, returning the total amount of cycles.
fn run_until_halt(cpu: &mut Cpu, limit: usize) -> Result<usize, GameboyError> {
	let mut total = 0;

	for _ in 0..limit {
		total += cpu.tick()?;

		if cpu.state() == RunState::Halted {
			return Ok(total);
		}
	}

	panic!("the program did not halt within {} ticks", limit);
}

fn load(program: &[u8]) -> FlatMemory {
	let mut memory = FlatMemory::new();
	memory.load(0x0100, program);
	memory
}

#[test]
fn test_countdown_loop() -> Result<(), GameboyError> {
	let config = Config::default();
	let mut memory = load(&[
		0x06, 0x05, // ld B, 5
		0xAF,       // xor A
		0x80,       // add A, B
		0x05,       // dec B
		0x20, 0xFC, // jr NZ, -4
		0x76,       // halt
	]);
	let mut cpu = Cpu::new(&config, &mut memory);

	let cycles = run_until_halt(&mut cpu, 100)?;

	assert_eq!(15, cpu.registers().get(Register::A));
	assert_eq!(0, cpu.registers().get(Register::B));
	assert_eq!(0x0108, cpu.registers().pc());
	// ld + xor + 4 taken iterations + a final one + halt
	assert_eq!(8 + 4 + 4 * 20 + 16 + 4, cycles);

	Ok(())
}

#[test]
fn test_subroutine() -> Result<(), GameboyError> {
	let config = Config::default();
	let mut memory = load(&[
		0x31, 0x00, 0xD0, // ld SP, 0xD000
		0x01, 0x34, 0x12, // ld BC, 0x1234
		0xCD, 0x10, 0x01, // call 0x0110
		0x76,             // halt
	]);
	memory.load(0x0110, &[
		0xC5, // push BC
		0xD1, // pop DE
		0x13, // inc DE
		0xC9, // ret
	]);
	let mut cpu = Cpu::new(&config, &mut memory);

	run_until_halt(&mut cpu, 100)?;

	assert_eq!(0x1235, cpu.registers().get(Register::DE));
	assert_eq!(0xD000, cpu.registers().sp());
	assert_eq!(0x010A, cpu.registers().pc());

	Ok(())
}

#[test]
fn test_bcd_addition() -> Result<(), GameboyError> {
	let config = Config::default();
	let mut memory = load(&[
		0x3E, 0x15, // ld A, 0x15
		0xC6, 0x27, // add A, 0x27
		0x27,       // daa
		0x76,       // halt
	]);
	let mut cpu = Cpu::new(&config, &mut memory);

	run_until_halt(&mut cpu, 10)?;

	assert_eq!(0x42, cpu.registers().get(Register::A));

	Ok(())
}

#[test]
fn test_interrupt_handler() -> Result<(), GameboyError> {
	let config = Config::default();
	let mut memory = load(&[
		0xFB, // ei
		0x76, // halt
		0x3C, // inc A
		0x76, // halt
	]);
	memory.load(0x0050, &[
		0x3E, 0x99, // ld A, 0x99
		0xD9,       // reti
	]);
	let mut cpu = Cpu::new(&config, &mut memory);

	run_until_halt(&mut cpu, 10)?;
	assert!(cpu.interrupts_enabled());

	cpu.request_interrupt(Interrupt::Timer);

	assert_eq!(20, cpu.tick()?);
	assert_eq!(0x0050, cpu.registers().pc());

	run_until_halt(&mut cpu, 10)?;

	assert_eq!(0x9A, cpu.registers().get(Register::A));
	assert_eq!(0x0104, cpu.registers().pc());
	assert!(cpu.interrupts_enabled());

	Ok(())
}

#[test]
fn test_illegal_opcode_policies() -> Result<(), GameboyError> {
	let program = [0x3C, 0xDD, 0x3C, 0x76];

	let config = Config::default();
	let mut memory = load(&program);
	let mut cpu = Cpu::new(&config, &mut memory);

	let error = run_until_halt(&mut cpu, 10).unwrap_err();
	assert_eq!(GameboyError::BadOpcode { opcode: 0xDD, address: 0x0101 }, error);
	assert_eq!("illegal opcode 0xdd at 0x0101", error.to_string());
	assert_eq!(0x02, cpu.registers().get(Register::A));

	let config = Config { illegal_opcodes: IllegalOpcodePolicy::Ignore, ..Config::default() };
	let mut memory = load(&program);
	let mut cpu = Cpu::new(&config, &mut memory);

	run_until_halt(&mut cpu, 10)?;
	assert_eq!(0x03, cpu.registers().get(Register::A));

	Ok(())
}

#[test]
fn test_snapshot_display() -> Result<(), GameboyError> {
	let config = Config::default();
	let mut memory = load(&[0x76]);
	let mut cpu = Cpu::new(&config, &mut memory);

	run_until_halt(&mut cpu, 1)?;

	assert_eq!(
		"AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE PC=0101 [Z-HC] IME=0 IF=00 Halted",
		cpu.snapshot().to_string()
	);

	Ok(())
}
