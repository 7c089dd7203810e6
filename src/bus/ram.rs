// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! A flat 64KB memory, useful for running the cpu without a full system bus.

use super::Memory;
use super::consts::*;

use crate::GameboyError;

/// The size of the flat memory.
const MEMORY_SIZE: usize = 0x10000;

/// Every address maps to a plain byte, except the unusable region. The hardware reads
/// open bus there; this memory reports a bus fault instead, to exercise fault handling.
pub struct FlatMemory {
	data: [u8; MEMORY_SIZE],
}

impl FlatMemory {
	/// Initialize a zeroed memory.
	pub fn new() -> Self {
		FlatMemory {
			data: [0_u8; MEMORY_SIZE],
		}
	}

	/// Copies `bytes` into memory starting at `address`, wrapping at the end
	/// of the address space.
	pub fn load(&mut self, address: u16, bytes: &[u8]) {
		for (index, value) in bytes.iter().enumerate() {
			let offset = address.wrapping_add(index as u16);
			self.data[offset as usize] = *value;
		}
	}

	fn check(address: u16) -> Result<usize, GameboyError> {
		if MMAP_UNUSABLE.contains(&address) {
			return Err(GameboyError::BadAddress(address));
		}

		Ok(address as usize)
	}
}

impl Default for FlatMemory {
	fn default() -> Self {
		Self::new()
	}
}

impl Memory for FlatMemory {
	fn write(&mut self, address: u16, value: u8) -> Result<(), GameboyError> {
		let offset = Self::check(address)?;
		self.data[offset] = value;

		Ok(())
	}

	fn read(&self, address: u16) -> Result<u8, GameboyError> {
		let offset = Self::check(address)?;

		Ok(self.data[offset])
	}
}
