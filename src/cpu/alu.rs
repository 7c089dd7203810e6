// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Gameboy cpu's arithmetic and logic unit.
//!
//! Every operation is a pure function of its operands and the current flags, returning the
//! result along with the complete new flag set. Writing them back is up to the instruction.

use super::registers::Flags;

/// Implementation of 8-bit arithmetic operations.
pub mod alu8 {
	use super::*;

	/// The eight accumulator operations, ordered as encoded in bits 3-5 of their opcodes.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub enum AluOp {
		/// `add A, x`
		Add,
		/// `adc A, x`
		Adc,
		/// `sub A, x`
		Sub,
		/// `sbc A, x`
		Sbc,
		/// `and A, x`
		And,
		/// `xor A, x`
		Xor,
		/// `or A, x`
		Or,
		/// `cp A, x`
		Cp,
	}

	#[allow(missing_docs)]
	pub mod ops {
		pub const ADD: u8 = 0;
		pub const ADC: u8 = 1;
		pub const SUB: u8 = 2;
		pub const SBC: u8 = 3;
		pub const AND: u8 = 4;
		pub const XOR: u8 = 5;
		pub const OR: u8 = 6;
		pub const CP: u8 = 7;
	}

	impl AluOp {
		/// Decodes the operation from its 3-bit encoding.
		pub const fn from_index(index: u8) -> Self {
			match index & 7 {
				ops::ADD => AluOp::Add,
				ops::ADC => AluOp::Adc,
				ops::SUB => AluOp::Sub,
				ops::SBC => AluOp::Sbc,
				ops::AND => AluOp::And,
				ops::XOR => AluOp::Xor,
				ops::OR => AluOp::Or,
				_ => AluOp::Cp,
			}
		}

		/// Compare operations do not affect the accumulator.
		pub fn stores_result(self) -> bool {
			self != AluOp::Cp
		}

		/// Applies the operation on the accumulator and the operand.
		pub fn apply(self, lhs: u8, rhs: u8, flags: Flags) -> (u8, Flags) {
			match self {
				AluOp::Add => add(lhs, rhs, false),
				AluOp::Adc => add(lhs, rhs, flags.contains(Flags::CARRY)),
				AluOp::Sub => sub(lhs, rhs, false),
				AluOp::Sbc => sub(lhs, rhs, flags.contains(Flags::CARRY)),
				AluOp::And => and(lhs, rhs),
				AluOp::Xor => xor(lhs, rhs),
				AluOp::Or => or(lhs, rhs),
				// Compare is subtraction with the result thrown away.
				AluOp::Cp => sub(lhs, rhs, false),
			}
		}
	}

	/// Adds the given arguments and the carry-in, if set.
	pub fn add(lhs: u8, rhs: u8, carry_in: bool) -> (u8, Flags) {
		let carry = carry_in as u8;

		let result_16 = lhs as u16 + rhs as u16 + carry as u16;
		let result_4 = (lhs & 0x0F) + (rhs & 0x0F) + carry;

		let result = (result_16 & 0xFF) as u8;

		(result, Flags::with(result == 0, false, result_4 > 0x0F, result_16 > 0xFF))
	}

	/// Subtracts the given arguments and the borrow-in, if set.
	pub fn sub(lhs: u8, rhs: u8, borrow_in: bool) -> (u8, Flags) {
		let borrow = borrow_in as u8;

		let result = lhs.wrapping_sub(rhs).wrapping_sub(borrow);

		let half_borrow = (lhs & 0x0F) < (rhs & 0x0F) + borrow;
		let full_borrow = (lhs as u16) < (rhs as u16) + (borrow as u16);

		(result, Flags::with(result == 0, true, half_borrow, full_borrow))
	}

	/// Performs logical AND between the given arguments.
	pub fn and(lhs: u8, rhs: u8) -> (u8, Flags) {
		let result = lhs & rhs;

		(result, Flags::with(result == 0, false, true, false))
	}

	/// Performs logical OR between the given arguments.
	pub fn or(lhs: u8, rhs: u8) -> (u8, Flags) {
		let result = lhs | rhs;

		(result, Flags::with(result == 0, false, false, false))
	}

	/// Performs logical XOR between the given arguments.
	pub fn xor(lhs: u8, rhs: u8) -> (u8, Flags) {
		let result = lhs ^ rhs;

		(result, Flags::with(result == 0, false, false, false))
	}

	/// Increments the value. The carry flag is not affected.
	pub fn inc(value: u8, flags: Flags) -> (u8, Flags) {
		let result = value.wrapping_add(1);

		// The lower nibble rolled over from 0xF to 0x0.
		let half_carry = (result & 0x0F) == 0;

		(result, Flags::with(result == 0, false, half_carry, flags.contains(Flags::CARRY)))
	}

	/// Decrements the value. The carry flag is not affected.
	pub fn dec(value: u8, flags: Flags) -> (u8, Flags) {
		let result = value.wrapping_sub(1);

		// The lower nibble rolled under from 0x0 to 0xF.
		let half_borrow = (result & 0x0F) == 0x0F;

		(result, Flags::with(result == 0, true, half_borrow, flags.contains(Flags::CARRY)))
	}

	/// Adjusts the accumulator to binary-coded decimal after an addition or a subtraction.
	pub fn daa(value: u8, flags: Flags) -> (u8, Flags) {
		let subtract = flags.contains(Flags::SUBTRACT);
		let mut carry = flags.contains(Flags::CARRY);
		let mut adjust = 0_u8;

		let result = if subtract {
			if flags.contains(Flags::HALF_CARRY) {
				adjust |= 0x06;
			}
			if carry {
				adjust |= 0x60;
			}

			value.wrapping_sub(adjust)
		} else {
			if flags.contains(Flags::HALF_CARRY) || (value & 0x0F) > 0x09 {
				adjust |= 0x06;
			}
			if carry || value > 0x99 {
				adjust |= 0x60;
				carry = true;
			}

			value.wrapping_add(adjust)
		};

		(result, Flags::with(result == 0, subtract, false, carry))
	}

	/// Complements the accumulator.
	pub fn cpl(value: u8, flags: Flags) -> (u8, Flags) {
		(!value, flags | Flags::SUBTRACT | Flags::HALF_CARRY)
	}

	/// Sets the carry flag.
	pub fn scf(flags: Flags) -> Flags {
		(flags & Flags::ZERO) | Flags::CARRY
	}

	/// Complements the carry flag.
	pub fn ccf(flags: Flags) -> Flags {
		let mut result = flags & Flags::ZERO;
		result.set(Flags::CARRY, !flags.contains(Flags::CARRY));

		result
	}

	/// Flags of the rotations and shifts: zero from the result, carry from the bit moved out.
	fn shifted(result: u8, carry: bool) -> (u8, Flags) {
		(result, Flags::with(result == 0, false, false, carry))
	}

	/// Rotates left, bit 7 moves both to bit 0 and to the carry flag.
	pub fn rlc(value: u8) -> (u8, Flags) {
		shifted(value.rotate_left(1), value & 0x80 != 0)
	}

	/// Rotates right, bit 0 moves both to bit 7 and to the carry flag.
	pub fn rrc(value: u8) -> (u8, Flags) {
		shifted(value.rotate_right(1), value & 1 != 0)
	}

	/// Rotates left through the carry flag.
	pub fn rl(value: u8, flags: Flags) -> (u8, Flags) {
		shifted((value << 1) | flags.carry_bit(), value & 0x80 != 0)
	}

	/// Rotates right through the carry flag.
	pub fn rr(value: u8, flags: Flags) -> (u8, Flags) {
		shifted((value >> 1) | (flags.carry_bit() << 7), value & 1 != 0)
	}

	/// Shifts left, bit 0 is cleared.
	pub fn sla(value: u8) -> (u8, Flags) {
		shifted(value << 1, value & 0x80 != 0)
	}

	/// Shifts right arithmetically, the MSB stays the same.
	pub fn sra(value: u8) -> (u8, Flags) {
		shifted((value >> 1) | (value & 0x80), value & 1 != 0)
	}

	/// Shifts right logically, the MSB is cleared.
	pub fn srl(value: u8) -> (u8, Flags) {
		shifted(value >> 1, value & 1 != 0)
	}

	/// Swaps the lower and higher nibbles of the given value.
	pub fn swap(value: u8) -> (u8, Flags) {
		shifted(value.rotate_left(4), false)
	}

	/// Tests a single bit. The carry flag is not affected.
	pub fn bit(value: u8, bit: u8, flags: Flags) -> Flags {
		let clear = value & (1 << bit) == 0;

		Flags::with(clear, false, true, flags.contains(Flags::CARRY))
	}

	/// Rotations of the accumulator (`rlca`, `rrca`, `rla`, `rra`) always clear the zero flag.
	pub fn accumulator(rotated: (u8, Flags)) -> (u8, Flags) {
		let (result, flags) = rotated;

		(result, flags - Flags::ZERO)
	}
}

/// Implementation of 16-bit arithmetic operations.
pub mod alu16 {
	use super::*;
	use crate::config::WideAddZeroFlag;

	/// Adds the given arguments (`add HL, rr`). The subtract flag is cleared and the zero
	/// flag is handled according to `zero`.
	pub fn add(lhs: u16, rhs: u16, flags: Flags, zero: WideAddZeroFlag) -> (u16, Flags) {
		let result_32 = lhs as u32 + rhs as u32;
		let result_12 = (lhs & 0x0FFF) + (rhs & 0x0FFF);

		let result = (result_32 & 0xFFFF) as u16;

		let zero = match zero {
			WideAddZeroFlag::FromResult => result == 0,
			WideAddZeroFlag::Unaffected => flags.contains(Flags::ZERO),
		};

		(result, Flags::with(zero, false, result_12 > 0x0FFF, result_32 > 0xFFFF))
	}

	/// Adds a signed 8-bit displacement (`add SP, e` and `ld HL, SP+e`).
	///
	/// The carries are taken from adding the unsigned operand byte to the low byte of
	/// `lhs`, whatever the sign of the displacement.
	pub fn add_signed(lhs: u16, offset: i8) -> (u16, Flags) {
		let operand = offset as u8;
		let result = lhs.wrapping_add(offset as i16 as u16);

		let half_carry = (lhs & 0x000F) + (operand as u16 & 0x000F) > 0x000F;
		let carry = (lhs & 0x00FF) + (operand as u16) > 0x00FF;

		(result, Flags::with(false, false, half_carry, carry))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::alu8::*;
	use crate::config::WideAddZeroFlag;

	#[test]
	fn test_writeback() {
		assert!(!AluOp::Cp.stores_result());
		assert!(AluOp::Sub.stores_result());
		assert_eq!(AluOp::Cp, AluOp::from_index(ops::CP));
		assert_eq!(AluOp::Xor, AluOp::from_index(0xAF >> 3));
	}

	#[test]
	fn test_add() {
		// add A, A with A = 0x80
		assert_eq!((0x00, Flags::ZERO | Flags::CARRY), add(0x80, 0x80, false));
		assert_eq!((0x10, Flags::HALF_CARRY), add(0x0F, 0x01, false));
		assert_eq!((0x3B, Flags::empty()), add(0x3A, 0x01, false));
		assert_eq!((0x00, Flags::all() - Flags::SUBTRACT), add(0xFF, 0x01, false));
	}

	#[test]
	fn test_adc_includes_carry_in_half_carry() {
		assert_eq!((0x10, Flags::HALF_CARRY), add(0x0E, 0x01, true));
		assert_eq!((0x00, Flags::all() - Flags::SUBTRACT), add(0xFE, 0x01, true));
		assert_eq!(
			(0x00, Flags::ZERO | Flags::HALF_CARRY | Flags::CARRY),
			AluOp::Adc.apply(0xE1, 0x1E, Flags::CARRY)
		);
	}

	#[test]
	fn test_sub() {
		assert_eq!((0xFF, Flags::all() - Flags::ZERO), sub(0x00, 0x01, false));
		assert_eq!((0x00, Flags::ZERO | Flags::SUBTRACT), sub(0x3E, 0x3E, false));
		assert_eq!((0x2F, Flags::SUBTRACT | Flags::HALF_CARRY), sub(0x3E, 0x0F, false));
		assert_eq!((0xF0, Flags::SUBTRACT | Flags::CARRY), sub(0x30, 0x40, false));
	}

	#[test]
	fn test_sbc() {
		// 0x3B - 0x2A - 1
		assert_eq!((0x10, Flags::SUBTRACT), sub(0x3B, 0x2A, true));
		// 0x3B - 0x4F - 1
		assert_eq!(
			(0xEB, Flags::SUBTRACT | Flags::HALF_CARRY | Flags::CARRY),
			AluOp::Sbc.apply(0x3B, 0x4F, Flags::CARRY)
		);
		// Borrowing only because of the carry.
		assert_eq!((0xFF, Flags::all() - Flags::ZERO), sub(0x00, 0x00, true));
	}

	#[test]
	fn test_cp_flags_follow_the_difference() {
		let (_, flags) = AluOp::Cp.apply(0x3C, 0x3C, Flags::empty());
		assert_eq!(Flags::ZERO | Flags::SUBTRACT, flags);

		let (_, flags) = AluOp::Cp.apply(0x00, 0x3C, Flags::empty());
		assert_eq!(Flags::SUBTRACT | Flags::HALF_CARRY | Flags::CARRY, flags);
	}

	#[test]
	fn test_logic() {
		assert_eq!((0x1A, Flags::HALF_CARRY), and(0x5A, 0x3F));
		assert_eq!((0x00, Flags::ZERO | Flags::HALF_CARRY), and(0x5A, 0x00));
		assert_eq!((0x5F, Flags::empty()), or(0x5A, 0x0F));
		assert_eq!((0x00, Flags::ZERO), xor(0xFF, 0xFF));
	}

	#[test]
	fn test_inc_keeps_carry() {
		assert_eq!((0x00, Flags::ZERO | Flags::HALF_CARRY), inc(0xFF, Flags::empty()));
		assert_eq!((0x00, Flags::ZERO | Flags::HALF_CARRY | Flags::CARRY), inc(0xFF, Flags::CARRY));
		assert_eq!((0x51, Flags::CARRY), inc(0x50, Flags::all()));
	}

	#[test]
	fn test_dec_keeps_carry() {
		assert_eq!((0x00, Flags::ZERO | Flags::SUBTRACT), dec(0x01, Flags::empty()));
		assert_eq!((0xFF, Flags::SUBTRACT | Flags::HALF_CARRY | Flags::CARRY), dec(0x00, Flags::CARRY));
		assert_eq!((0x0F, Flags::SUBTRACT | Flags::HALF_CARRY), dec(0x10, Flags::empty()));
		assert_eq!((0x0E, Flags::SUBTRACT), dec(0x0F, Flags::empty()));
	}

	#[test]
	fn test_daa() {
		// 0x15 + 0x27 = 0x3C -> 42
		let (sum, flags) = add(0x15, 0x27, false);
		assert_eq!((0x42, Flags::empty()), daa(sum, flags));

		// 0x99 + 0x01 = 0x9A -> 00 with carry
		let (sum, flags) = add(0x99, 0x01, false);
		assert_eq!((0x00, Flags::ZERO | Flags::CARRY), daa(sum, flags));

		// 0x42 - 0x15 = 0x2D -> 27
		let (difference, flags) = sub(0x42, 0x15, false);
		assert_eq!((0x27, Flags::SUBTRACT), daa(difference, flags));
	}

	#[test]
	fn test_misc_flag_ops() {
		assert_eq!((0xCA, Flags::all()), cpl(0x35, Flags::ZERO | Flags::CARRY));
		assert_eq!(Flags::ZERO | Flags::CARRY, scf(Flags::ZERO | Flags::SUBTRACT));
		assert_eq!(Flags::empty(), ccf(Flags::CARRY | Flags::HALF_CARRY));
		assert_eq!(Flags::ZERO | Flags::CARRY, ccf(Flags::ZERO));
	}

	#[test]
	fn test_rotations() {
		assert_eq!((0x0B, Flags::CARRY), rlc(0x85));
		assert_eq!((0x00, Flags::ZERO), rlc(0x00));
		assert_eq!((0x80, Flags::CARRY), rrc(0x01));
		assert_eq!((0x2B, Flags::CARRY), rl(0x95, Flags::CARRY));
		assert_eq!((0x00, Flags::ZERO | Flags::CARRY), rl(0x80, Flags::empty()));
		assert_eq!((0x80, Flags::CARRY), rr(0x01, Flags::CARRY));
		assert_eq!((0x00, Flags::ZERO | Flags::CARRY), rr(0x01, Flags::empty()));
	}

	#[test]
	fn test_accumulator_rotations_clear_zero() {
		assert_eq!((0x00, Flags::CARRY), accumulator(rl(0x80, Flags::empty())));
		assert_eq!((0x00, Flags::empty()), accumulator(rlc(0x00)));
	}

	#[test]
	fn test_shifts() {
		assert_eq!((0x00, Flags::ZERO | Flags::CARRY), sla(0x80));
		assert_eq!((0xFE, Flags::CARRY), sla(0xFF));
		assert_eq!((0xC5, Flags::empty()), sra(0x8A));
		assert_eq!((0x00, Flags::ZERO | Flags::CARRY), sra(0x01));
		assert_eq!((0x7F, Flags::CARRY), srl(0xFF));
		assert_eq!((0x00, Flags::ZERO | Flags::CARRY), srl(0x01));
		assert_eq!((0xF0, Flags::empty()), swap(0x0F));
		assert_eq!((0x00, Flags::ZERO), swap(0x00));
	}

	#[test]
	fn test_bit() {
		assert_eq!(Flags::ZERO | Flags::HALF_CARRY, bit(0x7F, 7, Flags::SUBTRACT));
		assert_eq!(Flags::HALF_CARRY | Flags::CARRY, bit(0x80, 7, Flags::CARRY | Flags::ZERO));
	}

	#[test]
	fn test_add_hl_zero_flag() {
		let (result, flags) = alu16::add(0x8A23, 0x0605, Flags::empty(), WideAddZeroFlag::FromResult);
		assert_eq!((0x9028, Flags::HALF_CARRY), (result, flags));

		let (result, flags) = alu16::add(0x8A23, 0x8A23, Flags::ZERO, WideAddZeroFlag::FromResult);
		assert_eq!((0x1446, Flags::HALF_CARRY | Flags::CARRY), (result, flags));

		// 0xFFFF + 1 wraps to zero.
		let (result, flags) = alu16::add(0xFFFF, 0x0001, Flags::empty(), WideAddZeroFlag::FromResult);
		assert_eq!((0x0000, Flags::all() - Flags::SUBTRACT), (result, flags));

		let (_, flags) = alu16::add(0xFFFF, 0x0001, Flags::empty(), WideAddZeroFlag::Unaffected);
		assert_eq!(Flags::HALF_CARRY | Flags::CARRY, flags);

		let (_, flags) = alu16::add(0x0001, 0x0001, Flags::ZERO | Flags::SUBTRACT, WideAddZeroFlag::Unaffected);
		assert_eq!(Flags::ZERO, flags);
	}

	#[test]
	fn test_add_signed() {
		// Positive displacement carrying out of both the nibble and the byte.
		assert_eq!((0x0000, Flags::HALF_CARRY | Flags::CARRY), alu16::add_signed(0xFFFF, 1));

		// -1 is added as 0xFF for the flags.
		assert_eq!((0x0000, Flags::HALF_CARRY | Flags::CARRY), alu16::add_signed(0x0001, -1));
		assert_eq!((0xFFFF, Flags::empty()), alu16::add_signed(0x0000, -1));

		// -128 from 0xFFF8.
		assert_eq!((0xFF78, Flags::CARRY), alu16::add_signed(0xFFF8, -128));

		// The zero flag is never set, even for a zero result.
		assert_eq!((0xD000, Flags::HALF_CARRY | Flags::CARRY), alu16::add_signed(0xCFF8, 8));
	}
}
