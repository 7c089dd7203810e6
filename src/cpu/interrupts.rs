// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Abstraction for the cpu's interrupts.
//!
//! Peripherals raise interrupts; the cpu only keeps track of which ones are pending
//! and services them once interrupts are enabled.

use core::iter::Iterator;

/// Marks which interrupts are currently active.
pub type InterruptMask = u8;

/// All the bits that have an interrupt assigned.
pub const INTERRUPT_MASK_ALL: InterruptMask = 0x1F;

/// Represents a peripheral that may raise interrupts.
pub trait InterruptSource {
	/// The interrupts the peripheral currently requests.
	fn interrupts(&self) -> InterruptMask;

	/// Acknowledges the requested interrupts.
	fn clear(&mut self);
}

/// Interrupts that can be thrown by peripherals, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
	/// The LCD entered the vertical blanking period (vector 0x40).
	VerticalBlank,
	/// One of the LCD status conditions selected in STAT (vector 0x48).
	LcdStat,
	/// The timer counter overflowed (vector 0x50).
	Timer,
	/// A serial transfer completed (vector 0x58).
	Serial,
	/// A joypad line went low, the only interrupt that ends `stop` (vector 0x60).
	Joypad,
}

impl Interrupt {
	/// The interrupt's bit index, which is also its priority (0 is the highest).
	pub fn ordinal(&self) -> u8 {
		match self {
			Interrupt::VerticalBlank => 0,
			Interrupt::LcdStat => 1,
			Interrupt::Timer => 2,
			Interrupt::Serial => 3,
			Interrupt::Joypad => 4,
		}
	}

	/// The interrupt's bit in an [`InterruptMask`].
	pub fn value(&self) -> InterruptMask {
		1 << self.ordinal()
	}

	/// The address the cpu jumps to when servicing the interrupt.
	pub fn vector(&self) -> u16 {
		0x0040 + 8 * self.ordinal() as u16
	}
}

/// Iterates over the interrupts of a mask, highest priority first.
pub struct InterruptIter {
	/// The iterator's active interrupts mask.
	/// Iterated interrupts are popped from the mask.
	pub mask: InterruptMask,
}

impl InterruptIter {
	/// Create a new interrupt iterator.
	pub fn new(mask: InterruptMask) -> Self {
		InterruptIter {
			mask: mask & INTERRUPT_MASK_ALL,
		}
	}
}

impl Iterator for InterruptIter {
	type Item = Interrupt;

	fn next(&mut self) -> Option<Self::Item> {
		let interrupt = [
			Interrupt::VerticalBlank,
			Interrupt::LcdStat,
			Interrupt::Timer,
			Interrupt::Serial,
			Interrupt::Joypad,
		]
		.iter()
		.copied()
		.find(|interrupt| self.mask & interrupt.value() != 0)?;

		self.mask &= !interrupt.value();

		Some(interrupt)
	}
}
