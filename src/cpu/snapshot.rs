// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! A read-only copy of the processor's state, for debuggers and tests.

use core::fmt;

use super::RunState;
use super::interrupts::InterruptMask;
use super::registers::Flags;
use super::state::{Register, RegisterFile};

/// The state of the processor between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuSnapshot {
	/// The register file.
	pub registers: RegisterFile,
	/// Whether the cpu is running, halted or stopped.
	pub state: RunState,
	/// The interrupt master enable.
	pub ime: bool,
	/// Interrupts that were requested and not serviced yet.
	pub pending: InterruptMask,
}

impl fmt::Display for CpuSnapshot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let regs = &self.registers;
		let flags = regs.flags();

		let flag = |flag: Flags, name: char| if flags.contains(flag) { name } else { '-' };

		write!(
			f,
			"AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X} [{}{}{}{}] IME={} IF={:02X} {:?}",
			regs.get(Register::AF),
			regs.get(Register::BC),
			regs.get(Register::DE),
			regs.get(Register::HL),
			regs.sp(),
			regs.pc(),
			flag(Flags::ZERO, 'Z'),
			flag(Flags::SUBTRACT, 'N'),
			flag(Flags::HALF_CARRY, 'H'),
			flag(Flags::CARRY, 'C'),
			self.ime as u8,
			self.pending,
			self.state,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::string::ToString;
	use crate::config::Config;

	#[test]
	fn test_display() {
		let snapshot = CpuSnapshot {
			registers: RegisterFile::new(&Config::default()),
			state: RunState::Halted,
			ime: true,
			pending: 0x04,
		};

		assert_eq!(
			"AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE PC=0100 [Z-HC] IME=1 IF=04 Halted",
			snapshot.to_string()
		);
	}
}
