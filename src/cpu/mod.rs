// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Gameboy's processor emulation.

pub mod registers;
pub mod state;
pub mod alu;
pub mod interrupts;
pub mod instructions;
pub mod cb;
pub mod decode;
pub mod cycles;
pub mod snapshot;

use num::{PrimInt, Zero};
use core::mem::size_of;

use log::{debug, trace, warn};

use state::*;
use interrupts::*;
use decode::Opcode;
use snapshot::CpuSnapshot;

use crate::bus::Memory;
use crate::GameboyError;
use crate::config::{Config, IllegalOpcodePolicy};

/// The processor's power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
	/// Fetching and executing instructions.
	Running,
	/// Idle after `halt`, until an interrupt is pending.
	Halted,
	/// Idle after `stop`, until the joypad interrupt is pending.
	Stopped,
}

/// Everything a failed tick has to roll back.
#[derive(Clone, Copy)]
struct Checkpoint {
	registers: RegisterFile,
	state: RunState,
	ime: bool,
	ime_scheduled: bool,
	pending: InterruptMask,
}

/// The gameboy's processor.
///
/// This struct contains the complete processor's state. Memory and peripherals are
/// borrowed for the lifetime of the cpu and reached through the [`Memory`] trait.
pub struct Cpu<'a> {
	/// The cpu's registers.
	registers: RegisterFile,
	/// The devices' memory mapping
	pub mmap: &'a mut dyn Memory,
	/// The emulator's configuration
	pub config: &'a Config,
	/// The cpu's power state.
	state: RunState,
	/// Interrupt master enable.
	ime: bool,
	/// Set by `ei`, enables interrupts after the following instruction.
	ime_scheduled: bool,
	/// Requested interrupts that were not serviced yet.
	pending: InterruptMask,
	/// Whether the last conditional instruction took its branch.
	branched: bool,
}

impl<'a> Cpu<'a> {
	/// Initializes a new virtual cpu, in the state the boot rom leaves it in.
	#[inline(always)]
	pub fn new(config: &'a Config, mmap: &'a mut dyn Memory) -> Self {
		Cpu {
			registers: RegisterFile::new(config),
			mmap,
			config,
			state: RunState::Running,
			ime: false,
			ime_scheduled: false,
			pending: 0,
			branched: false,
		}
	}

	/// Brings the cpu back to its post-boot state.
	///
	/// Pending interrupts are dropped and interrupts are disabled.
	pub fn reset(&mut self) {
		debug!("cpu reset");

		self.registers.reset(self.config);
		self.state = RunState::Running;
		self.ime = false;
		self.ime_scheduled = false;
		self.pending = 0;
		self.branched = false;
	}

	/// The register file.
	pub fn registers(&self) -> &RegisterFile {
		&self.registers
	}

	/// The register file, for debuggers and test harnesses to set the cpu up.
	pub fn registers_mut(&mut self) -> &mut RegisterFile {
		&mut self.registers
	}

	/// The cpu's power state.
	pub fn state(&self) -> RunState {
		self.state
	}

	/// Whether interrupts are currently serviced.
	pub fn interrupts_enabled(&self) -> bool {
		self.ime
	}

	/// Interrupts that were requested and not serviced yet.
	pub fn pending_interrupts(&self) -> InterruptMask {
		self.pending
	}

	/// Copies the cpu's state.
	pub fn snapshot(&self) -> CpuSnapshot {
		CpuSnapshot {
			registers: self.registers,
			state: self.state,
			ime: self.ime,
			pending: self.pending,
		}
	}

	/// Marks an interrupt as pending.
	pub fn request_interrupt(&mut self, interrupt: Interrupt) {
		self.raise(interrupt.value());
	}

	/// Collects the interrupts raised by a peripheral, and clears them at the peripheral.
	pub fn poll(&mut self, source: &mut dyn InterruptSource) {
		let mask = source.interrupts();
		source.clear();

		self.raise(mask);
	}

	fn raise(&mut self, mask: InterruptMask) {
		self.pending |= mask & INTERRUPT_MASK_ALL;
		self.wake();
	}

	/// Leaves `halt` on any pending interrupt, and `stop` on a pending joypad interrupt.
	fn wake(&mut self) {
		let wake = match self.state {
			RunState::Running => false,
			RunState::Halted => self.pending != 0,
			RunState::Stopped => self.pending & Interrupt::Joypad.value() != 0,
		};

		if wake {
			debug!("woken up at {:#06x} by {:#04x}", self.registers.pc(), self.pending);
			self.state = RunState::Running;
		}
	}

	/// Reads the next instruction bytes and increments the program counter appropriately.
	///
	/// The function works in little-endian, that is, when reading 2 bytes,
	/// the first byte will be the least-significant one.
	pub fn fetch<T: PrimInt + From<u8>>(&mut self) -> Result<T, GameboyError> {
		let mut result = T::zero();

		for i in 0..size_of::<T>() {
			// Read the next byte.
			let pc = self.registers.pc();
			let data: T = self.mmap.read(pc)?.into();

			// We're using little-endianity.
			result = result | (data << (8 * i));

			// Move the PC forward.
			self.registers.set(Register::PC, pc.wrapping_add(1));
		}

		Ok(result)
	}

	/// Pushes a 16-bit value to the stack, high byte first.
	pub(crate) fn push(&mut self, value: u16) -> Result<(), GameboyError> {
		let [high, low] = value.to_be_bytes();
		let sp = self.registers.sp();

		self.mmap.write(sp.wrapping_sub(1), high)?;
		self.mmap.write(sp.wrapping_sub(2), low)?;

		self.registers.set(Register::SP, sp.wrapping_sub(2));

		Ok(())
	}

	/// Pops a 16-bit value from the stack.
	pub(crate) fn pop(&mut self) -> Result<u16, GameboyError> {
		let sp = self.registers.sp();

		let low = self.mmap.read(sp)?;
		let high = self.mmap.read(sp.wrapping_add(1))?;

		self.registers.set(Register::SP, sp.wrapping_add(2));

		Ok(u16::from_be_bytes([high, low]))
	}

	/// Emulates a single step of the processor: servicing an interrupt, executing a single
	/// instruction or idling.
	///
	/// Returns the number of clock cycles the step has taken. A failed step leaves the
	/// registers as they were before it.
	pub fn tick(&mut self) -> Result<usize, GameboyError> {
		let checkpoint = self.checkpoint();

		let result = self.advance();
		if result.is_err() {
			self.restore(checkpoint);
		}

		result
	}

	fn advance(&mut self) -> Result<usize, GameboyError> {
		// Interrupts may have been pending since before `halt` or `stop`.
		self.wake();

		if self.state != RunState::Running {
			return Ok(cycles::IDLE_CYCLES);
		}

		if self.ime {
			if let Some(interrupt) = InterruptIter::new(self.pending).next() {
				return self.service(interrupt);
			}
		}

		let enable_interrupts = self.ime_scheduled;

		let num_cycles = self.step()?;

		// `di` cancels a preceding `ei`.
		if enable_interrupts && self.ime_scheduled {
			self.ime = true;
			self.ime_scheduled = false;
		}

		Ok(num_cycles)
	}

	/// Jumps to the interrupt's handler.
	fn service(&mut self, interrupt: Interrupt) -> Result<usize, GameboyError> {
		debug!("servicing {:?} at {:#06x}", interrupt, self.registers.pc());

		self.ime = false;
		self.pending &= !interrupt.value();

		self.push(self.registers.pc())?;
		self.registers.set(Register::PC, interrupt.vector());

		Ok(cycles::INTERRUPT_CYCLES)
	}

	/// Fetches, decodes and executes a single instruction.
	fn step(&mut self) -> Result<usize, GameboyError> {
		let address = self.registers.pc();

		// Fetch the opcode from the memory.
		let opcode: u8 = self.fetch()?;
		self.branched = false;

		trace!("{:#06x}: {:#04x}", address, opcode);

		// Decode the given opcode, execute it and return the number of cycles taken.
		match decode::decode(opcode) {
			Opcode::Execute(insn) => {
				insn(self)?;
				Ok(cycles::cost(opcode, self.branched))
			}
			Opcode::PrefixCb => {
				let opcode: u8 = self.fetch()?;
				decode::decode_cb(opcode)(self)?;
				Ok(cycles::cost_cb(opcode))
			}
			Opcode::Illegal => self.illegal(opcode, address),
		}
	}

	fn illegal(&mut self, opcode: u8, address: u16) -> Result<usize, GameboyError> {
		match self.config.illegal_opcodes {
			IllegalOpcodePolicy::Ignore => {
				warn!("ignoring illegal opcode {:#04x} at {:#06x}", opcode, address);
				Ok(cycles::ILLEGAL_OPCODE_CYCLES)
			}
			IllegalOpcodePolicy::Report => Err(GameboyError::BadOpcode { opcode, address }),
		}
	}

	fn checkpoint(&self) -> Checkpoint {
		Checkpoint {
			registers: self.registers,
			state: self.state,
			ime: self.ime,
			ime_scheduled: self.ime_scheduled,
			pending: self.pending,
		}
	}

	fn restore(&mut self, checkpoint: Checkpoint) {
		self.registers = checkpoint.registers;
		self.state = checkpoint.state;
		self.ime = checkpoint.ime;
		self.ime_scheduled = checkpoint.ime_scheduled;
		self.pending = checkpoint.pending;
	}
}
