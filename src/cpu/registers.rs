// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! The cpu's register shapes: 8-bit registers, 16-bit registers, and a 16-bit view
//! over a pair of 8-bit registers.

use num::{One, PrimInt};
use num::traits::{WrappingAdd, WrappingSub};

use bitflags::bitflags;

/// Operations shared by every register shape.
///
/// Increment and decrement wrap around; overflowing a register is regular
/// hardware behavior and never affects the flags by itself.
pub trait RegisterAccess {
	/// The register's native width.
	type Value: PrimInt + WrappingAdd + WrappingSub;

	/// Reads the register.
	fn get(&self) -> Self::Value;

	/// Writes a value to the register.
	fn set(&mut self, value: Self::Value);

	/// Returns the state of a single bit (0 is the least significant).
	fn get_bit(&self, bit: u8) -> bool {
		let one = Self::Value::one();

		(self.get() >> bit as usize) & one == one
	}

	/// Turns a single bit on or off.
	fn set_bit(&mut self, bit: u8, value: bool) {
		let mask = Self::Value::one() << bit as usize;
		let old = self.get();

		self.set(if value { old | mask } else { old & !mask });
	}

	/// Adds one to the register, wrapping around at the maximum value.
	fn increment(&mut self) {
		let value = self.get().wrapping_add(&Self::Value::one());
		self.set(value);
	}

	/// Subtracts one from the register, wrapping around at zero.
	fn decrement(&mut self) {
		let value = self.get().wrapping_sub(&Self::Value::one());
		self.set(value);
	}
}

/// An 8-bit register.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByteRegister(u8);

impl ByteRegister {
	/// Creates a register holding `value`.
	pub const fn new(value: u8) -> Self {
		ByteRegister(value)
	}
}

impl RegisterAccess for ByteRegister {
	type Value = u8;

	#[inline(always)]
	fn get(&self) -> u8 {
		self.0
	}

	#[inline(always)]
	fn set(&mut self, value: u8) {
		self.0 = value;
	}
}

/// A 16-bit register, such as SP or PC.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WordRegister(u16);

impl WordRegister {
	/// Creates a register holding `value`.
	pub const fn new(value: u16) -> Self {
		WordRegister(value)
	}

	/// The most significant byte.
	pub fn high(&self) -> u8 {
		(self.0 >> 8) as u8
	}

	/// The least significant byte.
	pub fn low(&self) -> u8 {
		(self.0 & 0xFF) as u8
	}

	/// Returns a byte of the register, byte 0 being the high byte.
	pub fn byte(&self, index: usize) -> u8 {
		self.0.to_be_bytes()[index & 1]
	}
}

impl RegisterAccess for WordRegister {
	type Value = u16;

	#[inline(always)]
	fn get(&self) -> u16 {
		self.0
	}

	#[inline(always)]
	fn set(&mut self, value: u16) {
		self.0 = value;
	}
}

/// A 16-bit view composed of two 8-bit registers it does not own.
///
/// The view borrows both halves from the register file, so every read reflects
/// their live values and every write is split back into them.
pub struct PairView<'r> {
	high: &'r mut ByteRegister,
	low: &'r mut ByteRegister,
	/// Bits of the low register that can hold a value (F keeps its lower nibble clear).
	low_mask: u8,
}

impl<'r> PairView<'r> {
	/// Combines `high` and `low` into a 16-bit view.
	pub fn new(high: &'r mut ByteRegister, low: &'r mut ByteRegister) -> Self {
		PairView { high, low, low_mask: 0xFF }
	}

	/// A view whose low register only keeps the bits in `mask`.
	pub(crate) fn masked(high: &'r mut ByteRegister, low: &'r mut ByteRegister, mask: u8) -> Self {
		PairView { high, low, low_mask: mask }
	}
}

impl RegisterAccess for PairView<'_> {
	type Value = u16;

	fn get(&self) -> u16 {
		u16::from_be_bytes([self.high.get(), self.low.get()])
	}

	fn set(&mut self, value: u16) {
		let [high, low] = value.to_be_bytes();

		self.high.set(high);
		self.low.set(low & self.low_mask);
	}
}

bitflags! {
	/// The flags stored in the upper nibble of the F register.
	///
	/// The lower nibble has no flags assigned, so it always reads as zero.
	#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
	pub struct Flags: u8 {
		/// The last result was zero.
		const ZERO = 1 << 7;
		/// The last operation was a subtraction.
		const SUBTRACT = 1 << 6;
		/// Carry out of bit 3 (or borrow into it).
		const HALF_CARRY = 1 << 5;
		/// Carry out of bit 7 (or borrow into it).
		const CARRY = 1 << 4;
	}
}

impl Flags {
	/// Builds a flag set from the four flag states.
	pub fn with(zero: bool, subtract: bool, half_carry: bool, carry: bool) -> Self {
		let mut flags = Flags::empty();

		flags.set(Flags::ZERO, zero);
		flags.set(Flags::SUBTRACT, subtract);
		flags.set(Flags::HALF_CARRY, half_carry);
		flags.set(Flags::CARRY, carry);

		flags
	}

	/// The carry flag as a number, for the carry-in of `adc`, `sbc` and rotations.
	pub fn carry_bit(&self) -> u8 {
		self.contains(Flags::CARRY) as u8
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_byte_register_round_trip() {
		for value in 0..=0xFF_u8 {
			let mut reg = ByteRegister::new(value);

			reg.increment();
			reg.decrement();
			assert_eq!(value, reg.get());

			reg.decrement();
			reg.increment();
			assert_eq!(value, reg.get());
		}
	}

	#[test]
	fn test_byte_register_wraps() {
		let mut reg = ByteRegister::new(0xFF);
		reg.increment();
		assert_eq!(0x00, reg.get());

		reg.decrement();
		assert_eq!(0xFF, reg.get());
	}

	#[test]
	fn test_word_register_round_trip() {
		for value in [0x0000_u16, 0x0001, 0x00FF, 0x0100, 0x7FFF, 0xFFFE, 0xFFFF] {
			let mut reg = WordRegister::new(value);

			reg.increment();
			reg.decrement();
			assert_eq!(value, reg.get());

			reg.decrement();
			reg.increment();
			assert_eq!(value, reg.get());
		}

		let mut reg = WordRegister::new(0xFFFF);
		reg.increment();
		assert_eq!(0x0000, reg.get());
	}

	#[test]
	fn test_word_register_bytes() {
		let reg = WordRegister::new(0xABCD);

		assert_eq!(0xAB, reg.high());
		assert_eq!(0xCD, reg.low());
		assert_eq!(0xAB, reg.byte(0));
		assert_eq!(0xCD, reg.byte(1));
	}

	#[test]
	fn test_register_bits() {
		let mut reg = ByteRegister::new(0);

		reg.set_bit(7, true);
		reg.set_bit(0, true);
		assert_eq!(0x81, reg.get());
		assert!(reg.get_bit(7) && reg.get_bit(0) && !reg.get_bit(3));

		reg.set_bit(7, false);
		assert_eq!(0x01, reg.get());
	}

	#[test]
	fn test_pair_view_crosses_byte_boundary() {
		let mut high = ByteRegister::new(0x00);
		let mut low = ByteRegister::new(0xFF);

		{
			let mut pair = PairView::new(&mut high, &mut low);
			assert_eq!(0x00FF, pair.get());

			pair.increment();
			assert_eq!(0x0100, pair.get());
		}

		assert_eq!(0x01, high.get());
		assert_eq!(0x00, low.get());

		{
			let mut pair = PairView::new(&mut high, &mut low);
			pair.decrement();
			assert_eq!(0x00FF, pair.get());
		}

		assert_eq!((0x00, 0xFF), (high.get(), low.get()));
	}

	#[test]
	fn test_pair_view_matches_composition() {
		let mut high = ByteRegister::new(0x12);
		let mut low = ByteRegister::new(0x34);

		let steps: [fn(&mut PairView); 4] = [
			|pair| pair.increment(),
			|pair| pair.decrement(),
			|pair| pair.set(0xFFFF),
			|pair| pair.increment(),
		];

		for step in steps.iter() {
			let value = {
				let mut pair = PairView::new(&mut high, &mut low);
				step(&mut pair);
				pair.get()
			};

			assert_eq!(((high.get() as u16) << 8) | low.get() as u16, value);
		}

		// The last step wrapped 0xFFFF around.
		assert_eq!((0x00, 0x00), (high.get(), low.get()));
	}

	#[test]
	fn test_pair_view_bits() {
		let mut high = ByteRegister::new(0);
		let mut low = ByteRegister::new(0);

		let mut pair = PairView::new(&mut high, &mut low);
		pair.set_bit(0, true);
		pair.set_bit(15, true);
		pair.set_bit(8, true);

		assert!(pair.get_bit(0) && pair.get_bit(8) && pair.get_bit(15));
		assert!(!pair.get_bit(7));
		assert_eq!(0x8101, pair.get());

		drop(pair);
		assert_eq!((0x81, 0x01), (high.get(), low.get()));
	}

	#[test]
	fn test_masked_pair_view() {
		let mut a = ByteRegister::new(0);
		let mut f = ByteRegister::new(0);

		let mut af = PairView::masked(&mut a, &mut f, 0xF0);
		af.set(0x12FF);
		assert_eq!(0x12F0, af.get());
	}

	#[test]
	fn test_flags_lower_nibble() {
		let flags = Flags::from_bits_truncate(0xFF);

		assert_eq!(0xF0, flags.bits());
		assert_eq!(Flags::all(), Flags::with(true, true, true, true));
		assert_eq!(1, Flags::CARRY.carry_bit());
		assert_eq!(0, Flags::ZERO.carry_bit());
	}
}
