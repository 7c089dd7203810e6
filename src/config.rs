// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Emulator hardware emulation configuration and preferences.

/// The emulated model, which selects the post-boot register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareModel {
	/// Original GameBoy
	GB,
	/// Gameboy Color
	GBC,
	/// GameBoy Pocket
	GBP,
	/// Super GameBoy
	SGB,
}

/// What to do when the processor fetches one of the unassigned opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalOpcodePolicy {
	/// Treat the opcode as a no-op of one machine cycle (4 clock cycles) and keep running.
	Ignore,
	/// Abort the instruction with [`GameboyError::BadOpcode`](crate::GameboyError::BadOpcode).
	Report,
}

/// How `add HL, rr` treats the zero flag.
///
/// The reference hardware leaves the zero flag alone. Older builds of this core derived it
/// from the 16-bit result, and that behavior remains the default until the intended target
/// is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WideAddZeroFlag {
	/// Set the zero flag when the 16-bit result is zero.
	FromResult,
	/// Leave the zero flag untouched, as the hardware does.
	Unaffected,
}

/// Emulation settings and preferences goes here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// The model of the emulated machine
	pub model: HardwareModel,
	/// Handling of unassigned opcodes
	pub illegal_opcodes: IllegalOpcodePolicy,
	/// Zero flag handling of 16-bit additions into HL
	pub wide_add_zero: WideAddZeroFlag,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			model: HardwareModel::GB,
			illegal_opcodes: IllegalOpcodePolicy::Report,
			wide_add_zero: WideAddZeroFlag::FromResult,
		}
	}
}
