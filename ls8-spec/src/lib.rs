//! # LS-8 Instruction Set
//!
//! Core types for the LS-8 8-bit register machine:
//! - 256 bytes of memory shared by code and data (von Neumann)
//! - 8 general-purpose 8-bit registers, R7 doubling as the stack pointer
//! - a 3-bit comparison flags register (Less/Greater/Equal)
//! - one-byte opcodes carrying family and operand count in fixed bit fields
//!
//! The decoder is a pure function over the opcode byte; the recognized
//! operation sets are enumerated types with compile-time encodings.

pub mod error;
pub mod flags;
pub mod opcode;
pub mod program;
pub mod register;

pub use error::IsaError;
pub use flags::Flags;
pub use opcode::{decode, AluOp, ControlOp, Decoded, Family, PrimaryOp};
pub use program::Program;
pub use register::{Register, NUM_REGISTERS};

/// Memory size in bytes (addresses 0-255)
pub const MEMORY_SIZE: usize = 256;

/// Initial stack pointer value; the stack grows downward from here
pub const STACK_INIT: u8 = 0xF4;
