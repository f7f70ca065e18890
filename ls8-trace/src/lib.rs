//! # LS-8 Trace
//!
//! Read-only inspection for the LS-8 machine: per-cycle trace lines,
//! mnemonic lookup, and program disassembly. Nothing in this crate
//! mutates machine state; callers pass in the values to render.
//!
//! ## Example
//!
//! ```rust
//! use ls8_spec::Program;
//! use ls8_trace::disassemble;
//!
//! // LDI R0, 8; HLT
//! let program = Program::new(vec![0b1000_0010, 0, 8, 0b0000_0001]).unwrap();
//! let listing = disassemble(&program).unwrap();
//! assert!(listing.contains("LDI R0, 8"));
//! ```

pub mod disassembler;
pub mod error;
pub mod formatter;

pub use disassembler::disassemble;
pub use error::{Result, TraceError};
pub use formatter::{format_instruction, mnemonic, trace_line};
