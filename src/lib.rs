// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
//! This library provides emulation of the gameboy's Z80-like CPU (the Sharp LR35902),
//! as described in the publicly available "Game Boy CPU Manual".
//!
//! The processor is driven one instruction at a time through [`cpu::Cpu::tick`], which
//! returns the amount of clock cycles the instruction took, so that the caller can advance
//! the rest of the hardware (video, timers, audio) accordingly.

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod bus;
pub mod cpu;
pub mod config;

/// Errors that may abort the execution of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameboyError {
	/// The processor fetched an opcode that has no instruction assigned to it.
	#[error("illegal opcode {opcode:#04x} at {address:#06x}")]
	BadOpcode {
		/// The offending opcode.
		opcode: u8,
		/// The address the opcode was fetched from.
		address: u16,
	},
	/// The bus refused an access to the given address.
	#[error("bus fault at {0:#06x}")]
	BadAddress(u16),
}
