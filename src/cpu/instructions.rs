// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Implementation of the Z80-like cpu's instructions.
//!
//! Instructions only perform their side effects. Their cost is looked up by the
//! dispatcher in the [`cycles`](super::cycles) tables, conditional instructions
//! report whether they branched through [`Cpu`]'s branch marker.

use super::Cpu;
use super::RunState;
use super::alu::{alu8, alu16};
use super::alu::alu8::AluOp;
use super::registers::{Flags, RegisterAccess};
use super::state::Register;

use crate::bus::consts::IO_PAGE;
use crate::GameboyError;

use log::debug;

/// Instructions implementations return nothing but the relevant error, if occured.
pub type InsnResult = Result<(), GameboyError>;
/// An instruction's method.
pub type Instruction = fn(&mut Cpu) -> InsnResult;

/// 8-bit operands, as encoded in the lower 3 bits of the regular opcodes.
#[allow(missing_docs)]
pub mod operands {
	pub const B: u8 = 0;
	pub const C: u8 = 1;
	pub const D: u8 = 2;
	pub const E: u8 = 3;
	pub const H: u8 = 4;
	pub const L: u8 = 5;
	/// The memory pointed by HL.
	pub const HL: u8 = 6;
	pub const A: u8 = 7;
}

/// Internal utilities for implementing repeating logic once.
pub(super) mod util {
	use super::*;

	/// Branch conditions of `jr`, `jp`, `call` and `ret`.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub enum Condition {
		Always,
		NotZero,
		Zero,
		NotCarry,
		Carry,
	}

	/// Evaluates the condition, and marks the cpu as branched if it holds.
	pub fn check(cpu: &mut Cpu, condition: Condition) -> bool {
		let flags = cpu.registers.flags();

		let taken = match condition {
			Condition::Always => true,
			Condition::NotZero => !flags.contains(Flags::ZERO),
			Condition::Zero => flags.contains(Flags::ZERO),
			Condition::NotCarry => !flags.contains(Flags::CARRY),
			Condition::Carry => flags.contains(Flags::CARRY),
		};

		cpu.branched = taken;

		taken
	}

	/// The register behind an operand, `None` for the memory pointed by HL.
	fn register_of(operand: u8) -> Option<Register> {
		match operand & 7 {
			operands::B => Some(Register::B),
			operands::C => Some(Register::C),
			operands::D => Some(Register::D),
			operands::E => Some(Register::E),
			operands::H => Some(Register::H),
			operands::L => Some(Register::L),
			operands::A => Some(Register::A),
			_ => None,
		}
	}

	/// Reads an 8-bit operand.
	pub fn read_operand(cpu: &mut Cpu, operand: u8) -> Result<u8, GameboyError> {
		match register_of(operand) {
			Some(reg) => Ok(cpu.registers.get(reg) as u8),
			None => {
				let address = cpu.registers.get(Register::HL);
				cpu.mmap.read(address)
			}
		}
	}

	/// Writes an 8-bit operand.
	pub fn write_operand(cpu: &mut Cpu, operand: u8, value: u8) -> InsnResult {
		match register_of(operand) {
			Some(reg) => {
				cpu.registers.set(reg, value as u16);
				Ok(())
			}
			None => {
				let address = cpu.registers.get(Register::HL);
				cpu.mmap.write(address, value)
			}
		}
	}

	/// Read-modify-writes an 8-bit operand, replacing the flags.
	pub fn modify_operand(cpu: &mut Cpu,
						  operand: u8,
						  op: fn(u8, Flags) -> (u8, Flags)) -> InsnResult {

		let value = read_operand(cpu, operand)?;
		let (result, flags) = op(value, cpu.registers.flags());

		write_operand(cpu, operand, result)?;
		cpu.registers.set_flags(flags);

		Ok(())
	}

	/// Loads an 8-bit immediate into the given operand.
	pub fn load_imm8(cpu: &mut Cpu, operand: u8) -> InsnResult {
		let value: u8 = cpu.fetch()?;

		write_operand(cpu, operand, value)
	}

	/// Loads a 16-bit immediate into the given register.
	pub fn load_imm16(cpu: &mut Cpu, reg: Register) -> InsnResult {
		let value: u16 = cpu.fetch()?;
		cpu.registers.set(reg, value);

		Ok(())
	}

	/// Reads the memory at the given address into the accumulator.
	pub fn load_a(cpu: &mut Cpu, address: u16) -> InsnResult {
		let value = cpu.mmap.read(address)?;
		cpu.registers.set(Register::A, value as u16);

		Ok(())
	}

	/// Writes the accumulator to the memory at the given address.
	pub fn store_a(cpu: &mut Cpu, address: u16) -> InsnResult {
		let value = cpu.registers.get(Register::A) as u8;

		cpu.mmap.write(address, value)
	}

	/// Returns HL, then increments or decrements it (`(HL+)`, `(HL-)`).
	pub fn hl_then(cpu: &mut Cpu, increment: bool) -> u16 {
		let address = cpu.registers.get(Register::HL);
		step16(cpu, Register::HL, increment);

		address
	}

	/// Increments or decrements a 16-bit register, flags are not affected.
	pub fn step16(cpu: &mut Cpu, reg: Register, increment: bool) {
		match reg {
			Register::SP => {
				let sp = cpu.registers.wide_mut(Register::SP);
				if increment { sp.increment() } else { sp.decrement() }
			}
			_ => {
				let mut pair = cpu.registers.pair_mut(reg);
				if increment { pair.increment() } else { pair.decrement() }
			}
		}
	}

	/// Adds a 16-bit register to HL.
	pub fn add_hl(cpu: &mut Cpu, reg: Register) -> InsnResult {
		let hl = cpu.registers.get(Register::HL);
		let value = cpu.registers.get(reg);

		let (result, flags) = alu16::add(hl, value, cpu.registers.flags(), cpu.config.wide_add_zero);

		cpu.registers.set(Register::HL, result);
		cpu.registers.set_flags(flags);

		Ok(())
	}

	/// Computes SP plus the signed immediate, storing it in `dst`.
	pub fn sp_offset_into(cpu: &mut Cpu, dst: Register) -> InsnResult {
		let offset = cpu.fetch::<u8>()? as i8;

		let (result, flags) = alu16::add_signed(cpu.registers.sp(), offset);

		cpu.registers.set(dst, result);
		cpu.registers.set_flags(flags);

		Ok(())
	}

	/// Applies an accumulator operation with the given operand.
	pub fn accumulate(cpu: &mut Cpu, op: AluOp, value: u8) -> InsnResult {
		let a = cpu.registers.get(Register::A) as u8;
		let (result, flags) = op.apply(a, value, cpu.registers.flags());

		if op.stores_result() {
			cpu.registers.set(Register::A, result as u16);
		}
		cpu.registers.set_flags(flags);

		Ok(())
	}

	/// Applies an accumulator operation with an 8-bit immediate.
	pub fn accumulate_imm(cpu: &mut Cpu, op: AluOp) -> InsnResult {
		let value: u8 = cpu.fetch()?;

		accumulate(cpu, op, value)
	}

	/// Rotates the accumulator (`rlca`, `rrca`, `rla`, `rra`).
	pub fn rotate_a(cpu: &mut Cpu, op: fn(u8, Flags) -> (u8, Flags)) -> InsnResult {
		let a = cpu.registers.get(Register::A) as u8;
		let (result, flags) = alu8::accumulator(op(a, cpu.registers.flags()));

		cpu.registers.set(Register::A, result as u16);
		cpu.registers.set_flags(flags);

		Ok(())
	}

	/// Places a 16-bit register on the stack.
	pub fn push_nn(cpu: &mut Cpu, reg: Register) -> InsnResult {
		let value = cpu.registers.get(reg);

		cpu.push(value)
	}

	/// Pops a 16-bit register from the stack.
	pub fn pop_nn(cpu: &mut Cpu, reg: Register) -> InsnResult {
		let value = cpu.pop()?;
		cpu.registers.set(reg, value);

		Ok(())
	}

	/// Relative jump by the signed immediate.
	pub fn jump_relative(cpu: &mut Cpu, condition: Condition) -> InsnResult {
		let offset = cpu.fetch::<u8>()? as i8;

		if check(cpu, condition) {
			let pc = cpu.registers.pc();

			// Add the offset to the program counter (preserving the offset's sign)
			cpu.registers.set(Register::PC, pc.wrapping_add(offset as i16 as u16));
		}

		Ok(())
	}

	/// Absolute jump to the 16-bit immediate.
	pub fn jump(cpu: &mut Cpu, condition: Condition) -> InsnResult {
		let address: u16 = cpu.fetch()?;

		if check(cpu, condition) {
			cpu.registers.set(Register::PC, address);
		}

		Ok(())
	}

	/// Calls the 16-bit immediate, pushing the return address.
	pub fn call(cpu: &mut Cpu, condition: Condition) -> InsnResult {
		let address: u16 = cpu.fetch()?;

		if check(cpu, condition) {
			cpu.push(cpu.registers.pc())?;
			cpu.registers.set(Register::PC, address);
		}

		Ok(())
	}

	/// Returns to the address on top of the stack.
	pub fn ret(cpu: &mut Cpu, condition: Condition) -> InsnResult {
		if check(cpu, condition) {
			let address = cpu.pop()?;
			cpu.registers.set(Register::PC, address);
		}

		Ok(())
	}

	/// Calls one of the fixed restart vectors.
	pub fn restart(cpu: &mut Cpu, vector: u16) -> InsnResult {
		cpu.push(cpu.registers.pc())?;
		cpu.registers.set(Register::PC, vector);

		Ok(())
	}
}

use util::*;
use operands::*;

/// nop
pub fn opcode_00(_cpu: &mut Cpu) -> InsnResult {
	Ok(())
}

/// ld BC, nn
pub fn opcode_01(cpu: &mut Cpu) -> InsnResult {
	load_imm16(cpu, Register::BC)
}

/// ld (BC), A
pub fn opcode_02(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::BC);
	store_a(cpu, address)
}

/// inc BC
pub fn opcode_03(cpu: &mut Cpu) -> InsnResult {
	step16(cpu, Register::BC, true);
	Ok(())
}

/// inc B
pub fn opcode_04(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, B, alu8::inc)
}

/// dec B
pub fn opcode_05(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, B, alu8::dec)
}

/// ld B, n
pub fn opcode_06(cpu: &mut Cpu) -> InsnResult {
	load_imm8(cpu, B)
}

/// rlca
pub fn opcode_07(cpu: &mut Cpu) -> InsnResult {
	rotate_a(cpu, |value, _| alu8::rlc(value))
}

/// ld (nn), SP
pub fn opcode_08(cpu: &mut Cpu) -> InsnResult {
	let address: u16 = cpu.fetch()?;
	let [high, low] = cpu.registers.sp().to_be_bytes();

	cpu.mmap.write(address, low)?;
	cpu.mmap.write(address.wrapping_add(1), high)
}

/// add HL, BC
pub fn opcode_09(cpu: &mut Cpu) -> InsnResult {
	add_hl(cpu, Register::BC)
}

/// ld A, (BC)
pub fn opcode_0a(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::BC);
	load_a(cpu, address)
}

/// dec BC
pub fn opcode_0b(cpu: &mut Cpu) -> InsnResult {
	step16(cpu, Register::BC, false);
	Ok(())
}

/// inc C
pub fn opcode_0c(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, C, alu8::inc)
}

/// dec C
pub fn opcode_0d(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, C, alu8::dec)
}

/// ld C, n
pub fn opcode_0e(cpu: &mut Cpu) -> InsnResult {
	load_imm8(cpu, C)
}

/// rrca
pub fn opcode_0f(cpu: &mut Cpu) -> InsnResult {
	rotate_a(cpu, |value, _| alu8::rrc(value))
}

/// stop
///
/// The instruction is followed by a padding byte, which is skipped.
pub fn opcode_10(cpu: &mut Cpu) -> InsnResult {
	let _padding: u8 = cpu.fetch()?;

	debug!("stopped at {:#06x}", cpu.registers.pc());
	cpu.state = RunState::Stopped;

	Ok(())
}

/// ld DE, nn
pub fn opcode_11(cpu: &mut Cpu) -> InsnResult {
	load_imm16(cpu, Register::DE)
}

/// ld (DE), A
pub fn opcode_12(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::DE);
	store_a(cpu, address)
}

/// inc DE
pub fn opcode_13(cpu: &mut Cpu) -> InsnResult {
	step16(cpu, Register::DE, true);
	Ok(())
}

/// inc D
pub fn opcode_14(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, D, alu8::inc)
}

/// dec D
pub fn opcode_15(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, D, alu8::dec)
}

/// ld D, n
pub fn opcode_16(cpu: &mut Cpu) -> InsnResult {
	load_imm8(cpu, D)
}

/// rla
pub fn opcode_17(cpu: &mut Cpu) -> InsnResult {
	rotate_a(cpu, alu8::rl)
}

/// jr n
pub fn opcode_18(cpu: &mut Cpu) -> InsnResult {
	jump_relative(cpu, Condition::Always)
}

/// add HL, DE
pub fn opcode_19(cpu: &mut Cpu) -> InsnResult {
	add_hl(cpu, Register::DE)
}

/// ld A, (DE)
pub fn opcode_1a(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::DE);
	load_a(cpu, address)
}

/// dec DE
pub fn opcode_1b(cpu: &mut Cpu) -> InsnResult {
	step16(cpu, Register::DE, false);
	Ok(())
}

/// inc E
pub fn opcode_1c(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, E, alu8::inc)
}

/// dec E
pub fn opcode_1d(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, E, alu8::dec)
}

/// ld E, n
pub fn opcode_1e(cpu: &mut Cpu) -> InsnResult {
	load_imm8(cpu, E)
}

/// rra
pub fn opcode_1f(cpu: &mut Cpu) -> InsnResult {
	rotate_a(cpu, alu8::rr)
}

/// jr NZ, n
pub fn opcode_20(cpu: &mut Cpu) -> InsnResult {
	jump_relative(cpu, Condition::NotZero)
}

/// ld HL, nn
pub fn opcode_21(cpu: &mut Cpu) -> InsnResult {
	load_imm16(cpu, Register::HL)
}

/// ld (HL+), A
pub fn opcode_22(cpu: &mut Cpu) -> InsnResult {
	let address = hl_then(cpu, true);
	store_a(cpu, address)
}

/// inc HL
pub fn opcode_23(cpu: &mut Cpu) -> InsnResult {
	step16(cpu, Register::HL, true);
	Ok(())
}

/// inc H
pub fn opcode_24(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, H, alu8::inc)
}

/// dec H
pub fn opcode_25(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, H, alu8::dec)
}

/// ld H, n
pub fn opcode_26(cpu: &mut Cpu) -> InsnResult {
	load_imm8(cpu, H)
}

/// daa
pub fn opcode_27(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, A, alu8::daa)
}

/// jr Z, n
pub fn opcode_28(cpu: &mut Cpu) -> InsnResult {
	jump_relative(cpu, Condition::Zero)
}

/// add HL, HL
pub fn opcode_29(cpu: &mut Cpu) -> InsnResult {
	add_hl(cpu, Register::HL)
}

/// ld A, (HL+)
pub fn opcode_2a(cpu: &mut Cpu) -> InsnResult {
	let address = hl_then(cpu, true);
	load_a(cpu, address)
}

/// dec HL
pub fn opcode_2b(cpu: &mut Cpu) -> InsnResult {
	step16(cpu, Register::HL, false);
	Ok(())
}

/// inc L
pub fn opcode_2c(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, L, alu8::inc)
}

/// dec L
pub fn opcode_2d(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, L, alu8::dec)
}

/// ld L, n
pub fn opcode_2e(cpu: &mut Cpu) -> InsnResult {
	load_imm8(cpu, L)
}

/// cpl
pub fn opcode_2f(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, A, alu8::cpl)
}

/// jr NC, n
pub fn opcode_30(cpu: &mut Cpu) -> InsnResult {
	jump_relative(cpu, Condition::NotCarry)
}

/// ld SP, nn
pub fn opcode_31(cpu: &mut Cpu) -> InsnResult {
	load_imm16(cpu, Register::SP)
}

/// ld (HL-), A
pub fn opcode_32(cpu: &mut Cpu) -> InsnResult {
	let address = hl_then(cpu, false);
	store_a(cpu, address)
}

/// inc SP
pub fn opcode_33(cpu: &mut Cpu) -> InsnResult {
	step16(cpu, Register::SP, true);
	Ok(())
}

/// inc (HL)
pub fn opcode_34(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, HL, alu8::inc)
}

/// dec (HL)
pub fn opcode_35(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, HL, alu8::dec)
}

/// ld (HL), n
pub fn opcode_36(cpu: &mut Cpu) -> InsnResult {
	load_imm8(cpu, HL)
}

/// scf
pub fn opcode_37(cpu: &mut Cpu) -> InsnResult {
	let flags = alu8::scf(cpu.registers.flags());
	cpu.registers.set_flags(flags);

	Ok(())
}

/// jr C, n
pub fn opcode_38(cpu: &mut Cpu) -> InsnResult {
	jump_relative(cpu, Condition::Carry)
}

/// add HL, SP
pub fn opcode_39(cpu: &mut Cpu) -> InsnResult {
	add_hl(cpu, Register::SP)
}

/// ld A, (HL-)
pub fn opcode_3a(cpu: &mut Cpu) -> InsnResult {
	let address = hl_then(cpu, false);
	load_a(cpu, address)
}

/// dec SP
pub fn opcode_3b(cpu: &mut Cpu) -> InsnResult {
	step16(cpu, Register::SP, false);
	Ok(())
}

/// inc A
pub fn opcode_3c(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, A, alu8::inc)
}

/// dec A
pub fn opcode_3d(cpu: &mut Cpu) -> InsnResult {
	modify_operand(cpu, A, alu8::dec)
}

/// ld A, n
pub fn opcode_3e(cpu: &mut Cpu) -> InsnResult {
	load_imm8(cpu, A)
}

/// ccf
pub fn opcode_3f(cpu: &mut Cpu) -> InsnResult {
	let flags = alu8::ccf(cpu.registers.flags());
	cpu.registers.set_flags(flags);

	Ok(())
}

/// ld r, r' (0x40 - 0x7F, except for 0x76)
///
/// Either operand may be the memory pointed by HL.
pub fn ld<const DST: u8, const SRC: u8>(cpu: &mut Cpu) -> InsnResult {
	let value = read_operand(cpu, SRC)?;

	write_operand(cpu, DST, value)
}

/// halt
pub fn opcode_76(cpu: &mut Cpu) -> InsnResult {
	debug!("halted at {:#06x}", cpu.registers.pc());
	cpu.state = RunState::Halted;

	Ok(())
}

/// add/adc/sub/sbc/and/xor/or/cp A, r (0x80 - 0xBF)
pub fn alu<const OP: u8, const SRC: u8>(cpu: &mut Cpu) -> InsnResult {
	let value = read_operand(cpu, SRC)?;

	accumulate(cpu, AluOp::from_index(OP), value)
}

/// ret NZ
pub fn opcode_c0(cpu: &mut Cpu) -> InsnResult {
	ret(cpu, Condition::NotZero)
}

/// pop BC
pub fn opcode_c1(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::BC)
}

/// jp NZ, nn
pub fn opcode_c2(cpu: &mut Cpu) -> InsnResult {
	jump(cpu, Condition::NotZero)
}

/// jp nn
pub fn opcode_c3(cpu: &mut Cpu) -> InsnResult {
	jump(cpu, Condition::Always)
}

/// call NZ, nn
pub fn opcode_c4(cpu: &mut Cpu) -> InsnResult {
	call(cpu, Condition::NotZero)
}

/// push BC
pub fn opcode_c5(cpu: &mut Cpu) -> InsnResult {
	push_nn(cpu, Register::BC)
}

/// add A, n
pub fn opcode_c6(cpu: &mut Cpu) -> InsnResult {
	accumulate_imm(cpu, AluOp::Add)
}

/// rst 00H
pub fn opcode_c7(cpu: &mut Cpu) -> InsnResult {
	restart(cpu, 0x00)
}

/// ret Z
pub fn opcode_c8(cpu: &mut Cpu) -> InsnResult {
	ret(cpu, Condition::Zero)
}

/// ret
pub fn opcode_c9(cpu: &mut Cpu) -> InsnResult {
	ret(cpu, Condition::Always)
}

/// jp Z, nn
pub fn opcode_ca(cpu: &mut Cpu) -> InsnResult {
	jump(cpu, Condition::Zero)
}

/// call Z, nn
pub fn opcode_cc(cpu: &mut Cpu) -> InsnResult {
	call(cpu, Condition::Zero)
}

/// call nn
pub fn opcode_cd(cpu: &mut Cpu) -> InsnResult {
	call(cpu, Condition::Always)
}

/// adc A, n
pub fn opcode_ce(cpu: &mut Cpu) -> InsnResult {
	accumulate_imm(cpu, AluOp::Adc)
}

/// rst 08H
pub fn opcode_cf(cpu: &mut Cpu) -> InsnResult {
	restart(cpu, 0x08)
}

/// ret NC
pub fn opcode_d0(cpu: &mut Cpu) -> InsnResult {
	ret(cpu, Condition::NotCarry)
}

/// pop DE
pub fn opcode_d1(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::DE)
}

/// jp NC, nn
pub fn opcode_d2(cpu: &mut Cpu) -> InsnResult {
	jump(cpu, Condition::NotCarry)
}

/// call NC, nn
pub fn opcode_d4(cpu: &mut Cpu) -> InsnResult {
	call(cpu, Condition::NotCarry)
}

/// push DE
pub fn opcode_d5(cpu: &mut Cpu) -> InsnResult {
	push_nn(cpu, Register::DE)
}

/// sub A, n
pub fn opcode_d6(cpu: &mut Cpu) -> InsnResult {
	accumulate_imm(cpu, AluOp::Sub)
}

/// rst 10H
pub fn opcode_d7(cpu: &mut Cpu) -> InsnResult {
	restart(cpu, 0x10)
}

/// ret C
pub fn opcode_d8(cpu: &mut Cpu) -> InsnResult {
	ret(cpu, Condition::Carry)
}

/// reti
///
/// Unlike `ei`, interrupts are enabled right away.
pub fn opcode_d9(cpu: &mut Cpu) -> InsnResult {
	ret(cpu, Condition::Always)?;

	cpu.ime = true;
	cpu.ime_scheduled = false;

	Ok(())
}

/// jp C, nn
pub fn opcode_da(cpu: &mut Cpu) -> InsnResult {
	jump(cpu, Condition::Carry)
}

/// call C, nn
pub fn opcode_dc(cpu: &mut Cpu) -> InsnResult {
	call(cpu, Condition::Carry)
}

/// sbc A, n
pub fn opcode_de(cpu: &mut Cpu) -> InsnResult {
	accumulate_imm(cpu, AluOp::Sbc)
}

/// rst 18H
pub fn opcode_df(cpu: &mut Cpu) -> InsnResult {
	restart(cpu, 0x18)
}

/// ldh (n), A
pub fn opcode_e0(cpu: &mut Cpu) -> InsnResult {
	let offset: u8 = cpu.fetch()?;
	store_a(cpu, IO_PAGE | offset as u16)
}

/// pop HL
pub fn opcode_e1(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::HL)
}

/// ld (C), A
pub fn opcode_e2(cpu: &mut Cpu) -> InsnResult {
	let offset = cpu.registers.get(Register::C);
	store_a(cpu, IO_PAGE | offset)
}

/// push HL
pub fn opcode_e5(cpu: &mut Cpu) -> InsnResult {
	push_nn(cpu, Register::HL)
}

/// and A, n
pub fn opcode_e6(cpu: &mut Cpu) -> InsnResult {
	accumulate_imm(cpu, AluOp::And)
}

/// rst 20H
pub fn opcode_e7(cpu: &mut Cpu) -> InsnResult {
	restart(cpu, 0x20)
}

/// add SP, n
pub fn opcode_e8(cpu: &mut Cpu) -> InsnResult {
	sp_offset_into(cpu, Register::SP)
}

/// jp HL
pub fn opcode_e9(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::HL);
	cpu.registers.set(Register::PC, address);

	Ok(())
}

/// ld (nn), A
pub fn opcode_ea(cpu: &mut Cpu) -> InsnResult {
	let address: u16 = cpu.fetch()?;
	store_a(cpu, address)
}

/// xor A, n
pub fn opcode_ee(cpu: &mut Cpu) -> InsnResult {
	accumulate_imm(cpu, AluOp::Xor)
}

/// rst 28H
pub fn opcode_ef(cpu: &mut Cpu) -> InsnResult {
	restart(cpu, 0x28)
}

/// ldh A, (n)
pub fn opcode_f0(cpu: &mut Cpu) -> InsnResult {
	let offset: u8 = cpu.fetch()?;
	load_a(cpu, IO_PAGE | offset as u16)
}

/// pop AF
pub fn opcode_f1(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::AF)
}

/// ld A, (C)
pub fn opcode_f2(cpu: &mut Cpu) -> InsnResult {
	let offset = cpu.registers.get(Register::C);
	load_a(cpu, IO_PAGE | offset)
}

/// di
pub fn opcode_f3(cpu: &mut Cpu) -> InsnResult {
	cpu.ime = false;
	cpu.ime_scheduled = false;

	Ok(())
}

/// push AF
pub fn opcode_f5(cpu: &mut Cpu) -> InsnResult {
	push_nn(cpu, Register::AF)
}

/// or A, n
pub fn opcode_f6(cpu: &mut Cpu) -> InsnResult {
	accumulate_imm(cpu, AluOp::Or)
}

/// rst 30H
pub fn opcode_f7(cpu: &mut Cpu) -> InsnResult {
	restart(cpu, 0x30)
}

/// ld HL, SP+n
pub fn opcode_f8(cpu: &mut Cpu) -> InsnResult {
	sp_offset_into(cpu, Register::HL)
}

/// ld SP, HL
pub fn opcode_f9(cpu: &mut Cpu) -> InsnResult {
	let value = cpu.registers.get(Register::HL);
	cpu.registers.set(Register::SP, value);

	Ok(())
}

/// ld A, (nn)
pub fn opcode_fa(cpu: &mut Cpu) -> InsnResult {
	let address: u16 = cpu.fetch()?;
	load_a(cpu, address)
}

/// ei
///
/// Interrupts are enabled once the following instruction is done.
pub fn opcode_fb(cpu: &mut Cpu) -> InsnResult {
	cpu.ime_scheduled = true;

	Ok(())
}

/// cp A, n
pub fn opcode_fe(cpu: &mut Cpu) -> InsnResult {
	accumulate_imm(cpu, AluOp::Cp)
}

/// rst 38H
pub fn opcode_ff(cpu: &mut Cpu) -> InsnResult {
	restart(cpu, 0x38)
}
