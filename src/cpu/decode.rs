// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Gameboy cpu's opcode decoder.
//!
//! Decoding is a lookup in one of two static tables of 256 entries each: the base table,
//! indexed by the fetched opcode, and the table of 0xCB-prefixed instructions, indexed by
//! the byte following the prefix.

use super::cb::*;
use super::instructions::*;
use super::instructions::operands::*;
use super::alu::alu8::ops::*;

use Opcode::*;

/// The entry of an opcode in the base table.
#[derive(Clone, Copy)]
pub enum Opcode {
	/// A regular instruction.
	Execute(Instruction),
	/// The 0xCB prefix: another byte selects the instruction from [`CB_TABLE`].
	PrefixCb,
	/// No instruction is assigned to the opcode.
	Illegal,
}

/// Returns the entry that matches the given opcode.
#[inline(always)]
pub fn decode(opcode: u8) -> Opcode {
	BASE_TABLE[opcode as usize]
}

/// Returns the instruction that matches the byte following a 0xCB prefix.
#[inline(always)]
pub fn decode_cb(opcode: u8) -> Instruction {
	CB_TABLE[opcode as usize]
}

/// Instructions by their opcode.
#[rustfmt::skip]
pub static BASE_TABLE: [Opcode; 256] = [
	// 0x00
	Execute(opcode_00), Execute(opcode_01), Execute(opcode_02), Execute(opcode_03),
	Execute(opcode_04), Execute(opcode_05), Execute(opcode_06), Execute(opcode_07),
	Execute(opcode_08), Execute(opcode_09), Execute(opcode_0a), Execute(opcode_0b),
	Execute(opcode_0c), Execute(opcode_0d), Execute(opcode_0e), Execute(opcode_0f),
	// 0x10
	Execute(opcode_10), Execute(opcode_11), Execute(opcode_12), Execute(opcode_13),
	Execute(opcode_14), Execute(opcode_15), Execute(opcode_16), Execute(opcode_17),
	Execute(opcode_18), Execute(opcode_19), Execute(opcode_1a), Execute(opcode_1b),
	Execute(opcode_1c), Execute(opcode_1d), Execute(opcode_1e), Execute(opcode_1f),
	// 0x20
	Execute(opcode_20), Execute(opcode_21), Execute(opcode_22), Execute(opcode_23),
	Execute(opcode_24), Execute(opcode_25), Execute(opcode_26), Execute(opcode_27),
	Execute(opcode_28), Execute(opcode_29), Execute(opcode_2a), Execute(opcode_2b),
	Execute(opcode_2c), Execute(opcode_2d), Execute(opcode_2e), Execute(opcode_2f),
	// 0x30
	Execute(opcode_30), Execute(opcode_31), Execute(opcode_32), Execute(opcode_33),
	Execute(opcode_34), Execute(opcode_35), Execute(opcode_36), Execute(opcode_37),
	Execute(opcode_38), Execute(opcode_39), Execute(opcode_3a), Execute(opcode_3b),
	Execute(opcode_3c), Execute(opcode_3d), Execute(opcode_3e), Execute(opcode_3f),
	// 0x40
	Execute(ld::<B, B>), Execute(ld::<B, C>), Execute(ld::<B, D>), Execute(ld::<B, E>),
	Execute(ld::<B, H>), Execute(ld::<B, L>), Execute(ld::<B, HL>), Execute(ld::<B, A>),
	Execute(ld::<C, B>), Execute(ld::<C, C>), Execute(ld::<C, D>), Execute(ld::<C, E>),
	Execute(ld::<C, H>), Execute(ld::<C, L>), Execute(ld::<C, HL>), Execute(ld::<C, A>),
	// 0x50
	Execute(ld::<D, B>), Execute(ld::<D, C>), Execute(ld::<D, D>), Execute(ld::<D, E>),
	Execute(ld::<D, H>), Execute(ld::<D, L>), Execute(ld::<D, HL>), Execute(ld::<D, A>),
	Execute(ld::<E, B>), Execute(ld::<E, C>), Execute(ld::<E, D>), Execute(ld::<E, E>),
	Execute(ld::<E, H>), Execute(ld::<E, L>), Execute(ld::<E, HL>), Execute(ld::<E, A>),
	// 0x60
	Execute(ld::<H, B>), Execute(ld::<H, C>), Execute(ld::<H, D>), Execute(ld::<H, E>),
	Execute(ld::<H, H>), Execute(ld::<H, L>), Execute(ld::<H, HL>), Execute(ld::<H, A>),
	Execute(ld::<L, B>), Execute(ld::<L, C>), Execute(ld::<L, D>), Execute(ld::<L, E>),
	Execute(ld::<L, H>), Execute(ld::<L, L>), Execute(ld::<L, HL>), Execute(ld::<L, A>),
	// 0x70
	Execute(ld::<HL, B>), Execute(ld::<HL, C>), Execute(ld::<HL, D>), Execute(ld::<HL, E>),
	Execute(ld::<HL, H>), Execute(ld::<HL, L>), Execute(opcode_76), Execute(ld::<HL, A>),
	Execute(ld::<A, B>), Execute(ld::<A, C>), Execute(ld::<A, D>), Execute(ld::<A, E>),
	Execute(ld::<A, H>), Execute(ld::<A, L>), Execute(ld::<A, HL>), Execute(ld::<A, A>),
	// 0x80
	Execute(alu::<ADD, B>), Execute(alu::<ADD, C>), Execute(alu::<ADD, D>), Execute(alu::<ADD, E>),
	Execute(alu::<ADD, H>), Execute(alu::<ADD, L>), Execute(alu::<ADD, HL>), Execute(alu::<ADD, A>),
	Execute(alu::<ADC, B>), Execute(alu::<ADC, C>), Execute(alu::<ADC, D>), Execute(alu::<ADC, E>),
	Execute(alu::<ADC, H>), Execute(alu::<ADC, L>), Execute(alu::<ADC, HL>), Execute(alu::<ADC, A>),
	// 0x90
	Execute(alu::<SUB, B>), Execute(alu::<SUB, C>), Execute(alu::<SUB, D>), Execute(alu::<SUB, E>),
	Execute(alu::<SUB, H>), Execute(alu::<SUB, L>), Execute(alu::<SUB, HL>), Execute(alu::<SUB, A>),
	Execute(alu::<SBC, B>), Execute(alu::<SBC, C>), Execute(alu::<SBC, D>), Execute(alu::<SBC, E>),
	Execute(alu::<SBC, H>), Execute(alu::<SBC, L>), Execute(alu::<SBC, HL>), Execute(alu::<SBC, A>),
	// 0xA0
	Execute(alu::<AND, B>), Execute(alu::<AND, C>), Execute(alu::<AND, D>), Execute(alu::<AND, E>),
	Execute(alu::<AND, H>), Execute(alu::<AND, L>), Execute(alu::<AND, HL>), Execute(alu::<AND, A>),
	Execute(alu::<XOR, B>), Execute(alu::<XOR, C>), Execute(alu::<XOR, D>), Execute(alu::<XOR, E>),
	Execute(alu::<XOR, H>), Execute(alu::<XOR, L>), Execute(alu::<XOR, HL>), Execute(alu::<XOR, A>),
	// 0xB0
	Execute(alu::<OR, B>), Execute(alu::<OR, C>), Execute(alu::<OR, D>), Execute(alu::<OR, E>),
	Execute(alu::<OR, H>), Execute(alu::<OR, L>), Execute(alu::<OR, HL>), Execute(alu::<OR, A>),
	Execute(alu::<CP, B>), Execute(alu::<CP, C>), Execute(alu::<CP, D>), Execute(alu::<CP, E>),
	Execute(alu::<CP, H>), Execute(alu::<CP, L>), Execute(alu::<CP, HL>), Execute(alu::<CP, A>),
	// 0xC0
	Execute(opcode_c0), Execute(opcode_c1), Execute(opcode_c2), Execute(opcode_c3),
	Execute(opcode_c4), Execute(opcode_c5), Execute(opcode_c6), Execute(opcode_c7),
	Execute(opcode_c8), Execute(opcode_c9), Execute(opcode_ca), PrefixCb,
	Execute(opcode_cc), Execute(opcode_cd), Execute(opcode_ce), Execute(opcode_cf),
	// 0xD0
	Execute(opcode_d0), Execute(opcode_d1), Execute(opcode_d2), Illegal,
	Execute(opcode_d4), Execute(opcode_d5), Execute(opcode_d6), Execute(opcode_d7),
	Execute(opcode_d8), Execute(opcode_d9), Execute(opcode_da), Illegal,
	Execute(opcode_dc), Illegal, Execute(opcode_de), Execute(opcode_df),
	// 0xE0
	Execute(opcode_e0), Execute(opcode_e1), Execute(opcode_e2), Illegal,
	Illegal, Execute(opcode_e5), Execute(opcode_e6), Execute(opcode_e7),
	Execute(opcode_e8), Execute(opcode_e9), Execute(opcode_ea), Illegal,
	Illegal, Illegal, Execute(opcode_ee), Execute(opcode_ef),
	// 0xF0
	Execute(opcode_f0), Execute(opcode_f1), Execute(opcode_f2), Execute(opcode_f3),
	Illegal, Execute(opcode_f5), Execute(opcode_f6), Execute(opcode_f7),
	Execute(opcode_f8), Execute(opcode_f9), Execute(opcode_fa), Execute(opcode_fb),
	Illegal, Illegal, Execute(opcode_fe), Execute(opcode_ff),
];

/// 0xCB-prefixed instructions by the byte following the prefix.
#[rustfmt::skip]
pub static CB_TABLE: [Instruction; 256] = [
	// 0x00
	rlc::<B>, rlc::<C>, rlc::<D>, rlc::<E>, rlc::<H>, rlc::<L>, rlc::<HL>, rlc::<A>,
	rrc::<B>, rrc::<C>, rrc::<D>, rrc::<E>, rrc::<H>, rrc::<L>, rrc::<HL>, rrc::<A>,
	// 0x10
	rl::<B>, rl::<C>, rl::<D>, rl::<E>, rl::<H>, rl::<L>, rl::<HL>, rl::<A>,
	rr::<B>, rr::<C>, rr::<D>, rr::<E>, rr::<H>, rr::<L>, rr::<HL>, rr::<A>,
	// 0x20
	sla::<B>, sla::<C>, sla::<D>, sla::<E>, sla::<H>, sla::<L>, sla::<HL>, sla::<A>,
	sra::<B>, sra::<C>, sra::<D>, sra::<E>, sra::<H>, sra::<L>, sra::<HL>, sra::<A>,
	// 0x30
	swap::<B>, swap::<C>, swap::<D>, swap::<E>, swap::<H>, swap::<L>, swap::<HL>, swap::<A>,
	srl::<B>, srl::<C>, srl::<D>, srl::<E>, srl::<H>, srl::<L>, srl::<HL>, srl::<A>,
	// 0x40
	bit::<0, B>, bit::<0, C>, bit::<0, D>, bit::<0, E>, bit::<0, H>, bit::<0, L>, bit::<0, HL>, bit::<0, A>,
	bit::<1, B>, bit::<1, C>, bit::<1, D>, bit::<1, E>, bit::<1, H>, bit::<1, L>, bit::<1, HL>, bit::<1, A>,
	// 0x50
	bit::<2, B>, bit::<2, C>, bit::<2, D>, bit::<2, E>, bit::<2, H>, bit::<2, L>, bit::<2, HL>, bit::<2, A>,
	bit::<3, B>, bit::<3, C>, bit::<3, D>, bit::<3, E>, bit::<3, H>, bit::<3, L>, bit::<3, HL>, bit::<3, A>,
	// 0x60
	bit::<4, B>, bit::<4, C>, bit::<4, D>, bit::<4, E>, bit::<4, H>, bit::<4, L>, bit::<4, HL>, bit::<4, A>,
	bit::<5, B>, bit::<5, C>, bit::<5, D>, bit::<5, E>, bit::<5, H>, bit::<5, L>, bit::<5, HL>, bit::<5, A>,
	// 0x70
	bit::<6, B>, bit::<6, C>, bit::<6, D>, bit::<6, E>, bit::<6, H>, bit::<6, L>, bit::<6, HL>, bit::<6, A>,
	bit::<7, B>, bit::<7, C>, bit::<7, D>, bit::<7, E>, bit::<7, H>, bit::<7, L>, bit::<7, HL>, bit::<7, A>,
	// 0x80
	res::<0, B>, res::<0, C>, res::<0, D>, res::<0, E>, res::<0, H>, res::<0, L>, res::<0, HL>, res::<0, A>,
	res::<1, B>, res::<1, C>, res::<1, D>, res::<1, E>, res::<1, H>, res::<1, L>, res::<1, HL>, res::<1, A>,
	// 0x90
	res::<2, B>, res::<2, C>, res::<2, D>, res::<2, E>, res::<2, H>, res::<2, L>, res::<2, HL>, res::<2, A>,
	res::<3, B>, res::<3, C>, res::<3, D>, res::<3, E>, res::<3, H>, res::<3, L>, res::<3, HL>, res::<3, A>,
	// 0xA0
	res::<4, B>, res::<4, C>, res::<4, D>, res::<4, E>, res::<4, H>, res::<4, L>, res::<4, HL>, res::<4, A>,
	res::<5, B>, res::<5, C>, res::<5, D>, res::<5, E>, res::<5, H>, res::<5, L>, res::<5, HL>, res::<5, A>,
	// 0xB0
	res::<6, B>, res::<6, C>, res::<6, D>, res::<6, E>, res::<6, H>, res::<6, L>, res::<6, HL>, res::<6, A>,
	res::<7, B>, res::<7, C>, res::<7, D>, res::<7, E>, res::<7, H>, res::<7, L>, res::<7, HL>, res::<7, A>,
	// 0xC0
	set::<0, B>, set::<0, C>, set::<0, D>, set::<0, E>, set::<0, H>, set::<0, L>, set::<0, HL>, set::<0, A>,
	set::<1, B>, set::<1, C>, set::<1, D>, set::<1, E>, set::<1, H>, set::<1, L>, set::<1, HL>, set::<1, A>,
	// 0xD0
	set::<2, B>, set::<2, C>, set::<2, D>, set::<2, E>, set::<2, H>, set::<2, L>, set::<2, HL>, set::<2, A>,
	set::<3, B>, set::<3, C>, set::<3, D>, set::<3, E>, set::<3, H>, set::<3, L>, set::<3, HL>, set::<3, A>,
	// 0xE0
	set::<4, B>, set::<4, C>, set::<4, D>, set::<4, E>, set::<4, H>, set::<4, L>, set::<4, HL>, set::<4, A>,
	set::<5, B>, set::<5, C>, set::<5, D>, set::<5, E>, set::<5, H>, set::<5, L>, set::<5, HL>, set::<5, A>,
	// 0xF0
	set::<6, B>, set::<6, C>, set::<6, D>, set::<6, E>, set::<6, H>, set::<6, L>, set::<6, HL>, set::<6, A>,
	set::<7, B>, set::<7, C>, set::<7, D>, set::<7, E>, set::<7, H>, set::<7, L>, set::<7, HL>, set::<7, A>,
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_illegal_opcodes() {
		let illegal = [0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD];

		for opcode in 0..=0xFF_u8 {
			let expected = illegal.contains(&opcode);
			assert_eq!(expected, matches!(decode(opcode), Illegal), "{:#04x}", opcode);
		}
	}

	#[test]
	fn test_prefix() {
		assert!(matches!(decode(0xCB), PrefixCb));

		let prefixes = (0..=0xFF_u8).filter(|opcode| matches!(decode(*opcode), PrefixCb)).count();
		assert_eq!(1, prefixes);
	}
}
