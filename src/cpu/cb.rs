// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Instructions prefixed by 0xCB: rotations, shifts and single bit operations.
//!
//! Each instruction is generic over its operand (and bit index), so the whole table is made
//! of instances of the functions below. Operations on `(HL)` read-modify-write the bus.

use super::Cpu;
use super::alu::alu8;
use super::instructions::InsnResult;
use super::instructions::util::*;

/// rlc r
pub fn rlc<const R: u8>(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, R, |value, _| alu8::rlc(value))
}

/// rrc r
pub fn rrc<const R: u8>(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, R, |value, _| alu8::rrc(value))
}

/// rl r
pub fn rl<const R: u8>(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, R, alu8::rl)
}

/// rr r
pub fn rr<const R: u8>(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, R, alu8::rr)
}

/// sla r
pub fn sla<const R: u8>(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, R, |value, _| alu8::sla(value))
}

/// sra r
pub fn sra<const R: u8>(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, R, |value, _| alu8::sra(value))
}

/// swap r
pub fn swap<const R: u8>(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, R, |value, _| alu8::swap(value))
}

/// srl r
pub fn srl<const R: u8>(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, R, |value, _| alu8::srl(value))
}

/// bit n, r
pub fn bit<const N: u8, const R: u8>(cpu: &mut Cpu) -> InsnResult {
	let value = read_operand(cpu, R)?;
	let flags = alu8::bit(value, N, cpu.registers.flags());

	cpu.registers.set_flags(flags);

	Ok(())
}

/// res n, r
pub fn res<const N: u8, const R: u8>(cpu: &mut Cpu) -> InsnResult {
	let value = read_operand(cpu, R)?;

	write_operand(cpu, R, value & !(1 << N))
}

/// set n, r
pub fn set<const N: u8, const R: u8>(cpu: &mut Cpu) -> InsnResult {
	let value = read_operand(cpu, R)?;

	write_operand(cpu, R, value | (1 << N))
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::super::instructions::operands::*;
	use super::super::registers::Flags;
	use super::super::state::Register;
	use crate::GameboyError;
	use crate::bus::Memory;
	use crate::bus::ram::FlatMemory;
	use crate::config::Config;

	#[test]
	fn test_rotations() -> Result<(), GameboyError> {
		let config = Config::default();
		let mut memory = FlatMemory::new();
		let mut cpu = Cpu::new(&config, &mut memory);

		cpu.registers.set(Register::B, 0x85);
		rlc::<B>(&mut cpu)?;
		assert_eq!(0x0B, cpu.registers.get(Register::B));
		assert_eq!(Flags::CARRY, cpu.registers.flags());

		// rl shifts the carry in.
		cpu.registers.set(Register::E, 0x00);
		rl::<E>(&mut cpu)?;
		assert_eq!(0x01, cpu.registers.get(Register::E));
		assert_eq!(Flags::empty(), cpu.registers.flags());

		// Unlike rlca, a zero result sets the zero flag.
		cpu.registers.set(Register::A, 0x80);
		sla::<A>(&mut cpu)?;
		assert_eq!(0x00, cpu.registers.get(Register::A));
		assert_eq!(Flags::ZERO | Flags::CARRY, cpu.registers.flags());

		Ok(())
	}

	#[test]
	fn test_memory_operand() -> Result<(), GameboyError> {
		let config = Config::default();
		let mut memory = FlatMemory::new();
		memory.load(0xC000, &[0xF1]);
		let mut cpu = Cpu::new(&config, &mut memory);

		cpu.registers.set(Register::HL, 0xC000);

		swap::<HL>(&mut cpu)?;
		assert_eq!(0x1F, cpu.mmap.read(0xC000)?);

		srl::<HL>(&mut cpu)?;
		assert_eq!(0x0F, cpu.mmap.read(0xC000)?);
		assert_eq!(Flags::CARRY, cpu.registers.flags());

		set::<7, HL>(&mut cpu)?;
		res::<0, HL>(&mut cpu)?;
		assert_eq!(0x8E, cpu.mmap.read(0xC000)?);

		Ok(())
	}

	#[test]
	fn test_bit_keeps_carry() -> Result<(), GameboyError> {
		let config = Config::default();
		let mut memory = FlatMemory::new();
		let mut cpu = Cpu::new(&config, &mut memory);

		cpu.registers.set_flags(Flags::CARRY | Flags::SUBTRACT);
		cpu.registers.set(Register::H, 0x7F);

		bit::<7, H>(&mut cpu)?;
		assert_eq!(Flags::ZERO | Flags::HALF_CARRY | Flags::CARRY, cpu.registers.flags());

		bit::<0, H>(&mut cpu)?;
		assert_eq!(Flags::HALF_CARRY | Flags::CARRY, cpu.registers.flags());

		// Bit tests never write back.
		assert_eq!(0x7F, cpu.registers.get(Register::H));

		Ok(())
	}

	#[test]
	fn test_res_set_leave_flags() -> Result<(), GameboyError> {
		let config = Config::default();
		let mut memory = FlatMemory::new();
		let mut cpu = Cpu::new(&config, &mut memory);

		cpu.registers.set_flags(Flags::ZERO);
		cpu.registers.set(Register::C, 0x00);

		set::<3, C>(&mut cpu)?;
		assert_eq!(0x08, cpu.registers.get(Register::C));

		res::<3, C>(&mut cpu)?;
		assert_eq!(0x00, cpu.registers.get(Register::C));
		assert_eq!(Flags::ZERO, cpu.registers.flags());

		Ok(())
	}
}
