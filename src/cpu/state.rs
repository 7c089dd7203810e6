// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Gameboy's processor state.

use crate::config::{Config, HardwareModel};
use super::registers::*;

/// Identifiers of the cpu's registers.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Register {
	/// Accumulator
	A,
	/// Flags, only the upper nibble is backed
	F,
	/// Accumulator and flags
	AF,
	/// General purpose register
	B,
	/// General purpose register
	C,
	/// B and C as a pair
	BC,
	/// General purpose register
	D,
	/// General purpose register
	E,
	/// D and E as a pair
	DE,
	/// High byte of the indirect access register
	H,
	/// Low byte of the indirect access register
	L,
	/// Indirect access register
	HL,
	/// Stack pointer
	SP,
	/// Program counter
	PC,
}

/// The register's "type" is the location of the register within the register file.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RegisterType {
	/// An 8-bit register at the given byte slot.
	Byte(usize),
	/// A pair of 8-bit registers, starting at the given (high) byte slot.
	Pair(usize),
	/// A stand-alone 16-bit register.
	Wide,
}

/// The amount of 8-bit registers.
pub const NUM_BYTE_REGS: usize = 8;

/// Slots are ordered so that every pair occupies two adjacent slots, high byte first.
const SLOT_A: usize = 0;
const SLOT_F: usize = 1;
const SLOT_B: usize = 2;
const SLOT_C: usize = 3;
const SLOT_D: usize = 4;
const SLOT_E: usize = 5;
const SLOT_H: usize = 6;
const SLOT_L: usize = 7;

/// Only the upper nibble of F is backed by flags.
const FLAGS_MASK: u8 = 0xF0;

/// Returns where the given register lives within the register file.
pub fn get_type(reg: Register) -> RegisterType {
	match reg {
		Register::A => RegisterType::Byte(SLOT_A),
		Register::F => RegisterType::Byte(SLOT_F),
		Register::B => RegisterType::Byte(SLOT_B),
		Register::C => RegisterType::Byte(SLOT_C),
		Register::D => RegisterType::Byte(SLOT_D),
		Register::E => RegisterType::Byte(SLOT_E),
		Register::H => RegisterType::Byte(SLOT_H),
		Register::L => RegisterType::Byte(SLOT_L),

		Register::AF => RegisterType::Pair(SLOT_A),
		Register::BC => RegisterType::Pair(SLOT_B),
		Register::DE => RegisterType::Pair(SLOT_D),
		Register::HL => RegisterType::Pair(SLOT_H),

		Register::SP |
		Register::PC => RegisterType::Wide,
	}
}

/// The complete register file of the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterFile {
	bytes: [ByteRegister; NUM_BYTE_REGS],
	sp: WordRegister,
	pc: WordRegister,
}

impl RegisterFile {
	/// Initializes a register file in the model's post-boot state.
	pub fn new(config: &Config) -> Self {
		let mut registers = RegisterFile {
			bytes: [ByteRegister::default(); NUM_BYTE_REGS],
			sp: WordRegister::default(),
			pc: WordRegister::default(),
		};

		registers.reset(config);

		registers
	}

	/// Reset registers to the state the boot rom leaves them in.
	pub fn reset(&mut self, config: &Config) {
		self.set(Register::F, 0xB0);
		self.set(Register::BC, 0x0013);
		self.set(Register::DE, 0x00D8);
		self.set(Register::HL, 0x014D);
		self.set(Register::SP, 0xFFFE);
		self.set(Register::PC, 0x0100);

		let a = match config.model {
			HardwareModel::GB | HardwareModel::SGB => 0x01,
			HardwareModel::GBC => 0x11,
			HardwareModel::GBP => 0xFF,
		};

		self.set(Register::A, a);
	}

	/// Writes a value to a given register.
	///
	/// * `reg` - The register to write into.
	/// * `value` - The value to write. In cases of 8-bit register,
	///     the higher 8 bits will be discarded.
	pub fn set(&mut self, reg: Register, value: u16) {
		match get_type(reg) {
			RegisterType::Byte(SLOT_F) => self.bytes[SLOT_F].set(value as u8 & FLAGS_MASK),
			RegisterType::Byte(slot) => self.bytes[slot].set(value as u8),
			RegisterType::Pair(_) => self.pair_mut(reg).set(value),
			RegisterType::Wide => self.wide_mut(reg).set(value),
		}
	}

	/// Reads the given register.
	pub fn get(&self, reg: Register) -> u16 {
		match get_type(reg) {
			RegisterType::Byte(slot) => self.bytes[slot].get() as u16,
			RegisterType::Pair(slot) => {
				u16::from_be_bytes([self.bytes[slot].get(), self.bytes[slot + 1].get()])
			}
			RegisterType::Wide if reg == Register::SP => self.sp.get(),
			RegisterType::Wide => self.pc.get(),
		}
	}

	/// Returns a 16-bit view over one of the register pairs (AF, BC, DE, HL).
	///
	/// # Panics
	///
	/// Panics if `reg` is not a register pair.
	pub fn pair_mut(&mut self, reg: Register) -> PairView<'_> {
		let slot = match get_type(reg) {
			RegisterType::Pair(slot) => slot,
			_ => panic!("{:?} is not a register pair", reg),
		};

		let (high, low) = self.bytes[slot..slot + 2].split_at_mut(1);
		let mask = if slot == SLOT_A { FLAGS_MASK } else { 0xFF };

		PairView::masked(&mut high[0], &mut low[0], mask)
	}

	/// Returns one of the stand-alone 16-bit registers (SP, PC).
	///
	/// # Panics
	///
	/// Panics if `reg` is not SP or PC.
	pub fn wide_mut(&mut self, reg: Register) -> &mut WordRegister {
		match reg {
			Register::SP => &mut self.sp,
			Register::PC => &mut self.pc,
			_ => panic!("{:?} is not a 16-bit register", reg),
		}
	}

	/// The program counter.
	#[inline(always)]
	pub fn pc(&self) -> u16 {
		self.pc.get()
	}

	/// The stack pointer.
	#[inline(always)]
	pub fn sp(&self) -> u16 {
		self.sp.get()
	}

	/// Returns the flags stored in the F register.
	pub fn flags(&self) -> Flags {
		Flags::from_bits_truncate(self.bytes[SLOT_F].get())
	}

	/// Replaces the flags stored in the F register.
	pub fn set_flags(&mut self, flags: Flags) {
		self.bytes[SLOT_F].set(flags.bits());
	}

	/// Returns the state of a single flag.
	pub fn flag(&self, flag: Flags) -> bool {
		self.flags().contains(flag)
	}

	/// Turns a single flag on or off, leaving the others intact.
	pub fn set_flag(&mut self, flag: Flags, value: bool) {
		let mut flags = self.flags();
		flags.set(flag, value);
		self.set_flags(flags);
	}
}
