// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Instruction timing, in clock cycles (4 cycles make a machine cycle).
//!
//! Unassigned opcodes hold a placeholder 0 that is never charged. The cost of a 0xCB-prefixed
//! instruction comes from [`CYCLES_CB`] alone, so the prefix entry holds 0 as well.

/// The cost of base instructions whose condition was false (or that have no condition).
#[rustfmt::skip]
pub static CYCLES: [u8; 256] = [
//  x0  x1  x2  x3  x4  x5  x6  x7  x8  x9  xA  xB  xC  xD  xE  xF
	 4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x
	 4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 1x
	 8, 12,  8,  8,  4,  4,  8,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 2x
	 8, 12,  8,  8, 12, 12, 12,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 3x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 4x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 5x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 6x
	 8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 7x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 8x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 9x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Ax
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Bx
	 8, 12, 12, 16, 12, 16,  8, 16,  8, 16, 12,  0, 12, 24,  8, 16, // Cx
	 8, 12, 12,  0, 12, 16,  8, 16,  8, 16, 12,  0, 12,  0,  8, 16, // Dx
	12, 12,  8,  0,  0, 16,  8, 16, 16,  4, 16,  0,  0,  0,  8, 16, // Ex
	12, 12,  8,  4,  0, 16,  8, 16, 12,  8, 16,  4,  0,  0,  8, 16, // Fx
];

/// The cost of conditional base instructions that took the branch.
#[rustfmt::skip]
pub static CYCLES_BRANCHED: [u8; 256] = [
//  x0  x1  x2  x3  x4  x5  x6  x7  x8  x9  xA  xB  xC  xD  xE  xF
	 4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x
	 4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 1x
	12, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 2x
	12, 12,  8,  8, 12, 12, 12,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 3x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 4x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 5x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 6x
	 8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 7x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 8x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 9x
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Ax
	 4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Bx
	20, 12, 16, 16, 24, 16,  8, 16, 20, 16, 16,  0, 24, 24,  8, 16, // Cx
	20, 12, 16,  0, 24, 16,  8, 16, 20, 16, 16,  0, 24,  0,  8, 16, // Dx
	12, 12,  8,  0,  0, 16,  8, 16, 16,  4, 16,  0,  0,  0,  8, 16, // Ex
	12, 12,  8,  4,  0, 16,  8, 16, 12,  8, 16,  4,  0,  0,  8, 16, // Fx
];

/// The cost of 0xCB-prefixed instructions, prefix included.
#[rustfmt::skip]
pub static CYCLES_CB: [u8; 256] = [
//  x0  x1  x2  x3  x4  x5  x6  x7  x8  x9  xA  xB  xC  xD  xE  xF
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 1x
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 2x
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 3x
	 8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 4x
	 8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 5x
	 8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 6x
	 8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 7x
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 8x
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 9x
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // Ax
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // Bx
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // Cx
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // Dx
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // Ex
	 8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // Fx
];

/// The cost of an unassigned opcode executed as a no-op.
pub const ILLEGAL_OPCODE_CYCLES: usize = 4;

/// The cost of servicing an interrupt.
pub const INTERRUPT_CYCLES: usize = 20;

/// The cost of a tick spent halted or stopped.
pub const IDLE_CYCLES: usize = 4;

/// Returns the cost of a base instruction.
#[inline(always)]
pub fn cost(opcode: u8, branched: bool) -> usize {
	if branched {
		CYCLES_BRANCHED[opcode as usize] as usize
	} else {
		CYCLES[opcode as usize] as usize
	}
}

/// Returns the cost of a 0xCB-prefixed instruction.
#[inline(always)]
pub fn cost_cb(opcode: u8) -> usize {
	CYCLES_CB[opcode as usize] as usize
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Opcodes whose cost depends on the branch.
	const CONDITIONAL: [u8; 16] = [
		0x20, 0x28, 0x30, 0x38,
		0xC0, 0xC8, 0xD0, 0xD8,
		0xC2, 0xCA, 0xD2, 0xDA,
		0xC4, 0xCC, 0xD4, 0xDC,
	];

	#[test]
	fn test_tables_differ_only_on_conditionals() {
		for opcode in 0..=0xFF_u8 {
			if CONDITIONAL.contains(&opcode) {
				assert!(cost(opcode, true) > cost(opcode, false), "{:#04x}", opcode);
			} else {
				assert_eq!(cost(opcode, false), cost(opcode, true), "{:#04x}", opcode);
			}
		}
	}

	#[test]
	fn test_placeholders() {
		for opcode in [0xCB, 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD] {
			assert_eq!(0, cost(opcode, false));
			assert_eq!(0, cost(opcode, true));
		}
	}

	#[test]
	fn test_well_known_costs() {
		// nop, ld (nn), SP, jr, call, ret, reti, rst
		assert_eq!(4, cost(0x00, false));
		assert_eq!(20, cost(0x08, false));
		assert_eq!(12, cost(0x18, false));
		assert_eq!(24, cost(0xCD, false));
		assert_eq!(16, cost(0xC9, false));
		assert_eq!(16, cost(0xD9, false));
		assert_eq!(16, cost(0xFF, false));

		// jr nz / ret z / jp c / call nc
		assert_eq!((8, 12), (cost(0x20, false), cost(0x20, true)));
		assert_eq!((8, 20), (cost(0xC8, false), cost(0xC8, true)));
		assert_eq!((12, 16), (cost(0xDA, false), cost(0xDA, true)));
		assert_eq!((12, 24), (cost(0xD4, false), cost(0xD4, true)));
	}

	#[test]
	fn test_cb_costs() {
		// rlc B, rlc (HL), bit 0, (HL), res 0, (HL), set 7, A
		assert_eq!(8, cost_cb(0x00));
		assert_eq!(16, cost_cb(0x06));
		assert_eq!(12, cost_cb(0x46));
		assert_eq!(16, cost_cb(0x86));
		assert_eq!(8, cost_cb(0xFF));
	}
}
