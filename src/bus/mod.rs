// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! The processor's view of the gameboy's memory bus.
//!
//! Memory mapping, bank switching and peripherals live behind the [`Memory`] trait and are
//! not emulated by this crate; [`ram::FlatMemory`] is a plain reference implementation.

pub mod ram;

use crate::GameboyError;

/// Bus locations-related constants.
#[allow(missing_docs)]
pub mod consts {
	pub type MemoryRange = core::ops::RangeInclusive<u16>;

	/// The region between OAM and the I/O ports which is not wired to anything.
	pub const MMAP_UNUSABLE: MemoryRange = 0xFEA0..=0xFEFF;
	/// Base of the I/O page addressed by `ldh` and `ld (C)`.
	pub const IO_PAGE: u16 = 0xFF00;
}

/// A peripheral that can be written and read by the cpu.
///
/// Every access is synchronous. A peripheral reports addresses it does not map with
/// [`GameboyError::BadAddress`], which aborts the running instruction.
pub trait Memory {
	/// Write a 8-bit value to the peripheral.
	///
	/// * `address` - The absolute memory address to write into.
	/// * `value` - The value to write.
	fn write(&mut self, address: u16, value: u8) -> Result<(), GameboyError>;

	/// Read a 8-bit value from this peripheral.
	///
	/// * `address` - The absolute memory address to read from.
	fn read(&self, address: u16) -> Result<u8, GameboyError>;
}
