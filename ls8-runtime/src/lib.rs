//! # LS-8 Runtime
//!
//! Execute LS-8 programs: an 8-bit register machine with 256 bytes of
//! memory shared by code and data, eight general-purpose registers, a
//! comparison flags register, and a stack growing downward from 0xF4.
//!
//! The [`Cpu`] owns one [`Machine`] and drives the fetch-decode-execute
//! loop until the program halts or a fatal error stops it. Two concurrent
//! runs need two `Cpu` instances; nothing here is shared.
//!
//! ## Example
//!
//! ```rust
//! use ls8_runtime::Cpu;
//! use ls8_spec::Program;
//!
//! // LDI R0, 8; PRN R0; HLT
//! let program = Program::new(vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]).unwrap();
//! let result = Cpu::new(&program).run().unwrap();
//! assert_eq!(result.outputs, vec![8]);
//! ```

pub mod cpu;
pub mod error;
pub mod io;
pub mod machine;
pub mod memory;

mod alu;
mod execute;

pub use cpu::{Cpu, CpuConfig, ExecutionResult};
pub use error::{Result, RuntimeError};
pub use io::IoHandler;
pub use machine::Machine;
pub use memory::Memory;

/// Simple execution helper
///
/// Runs a program to completion and returns the values it printed.
pub fn run(program: &ls8_spec::Program) -> Result<Vec<u8>> {
    Ok(Cpu::new(program).run()?.outputs)
}
