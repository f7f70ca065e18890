//! Runtime error types for the LS-8 machine
//!
//! Every variant is fatal to the run loop: execution stops and the error is
//! surfaced with enough context (opcode value, program counter) to
//! diagnose. Nothing is retried or silently skipped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Unsupported opcode {opcode:#010b} at PC {pc:#04X}")]
    UnsupportedOpcode { opcode: u8, pc: u8 },

    #[error("Division by zero at PC {pc:#04X}")]
    DivisionByZero { pc: u8 },

    #[error("Memory access out of bounds: address {address}")]
    MemoryOutOfBounds { address: usize },

    #[error("Invalid register index {index} at PC {pc:#04X}")]
    InvalidRegister { index: u8, pc: u8 },

    #[error("Cycle limit exceeded: {limit}")]
    CycleLimitExceeded { limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
