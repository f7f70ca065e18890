//! Trace and disassembly errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Unknown opcode: {0:#010b}")]
    UnknownOpcode(u8),
}

pub type Result<T> = std::result::Result<T, TraceError>;
