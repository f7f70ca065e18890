//! # Error Types for the LS-8 ISA

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IsaError {
    #[error("Program too large: {size} bytes (memory holds {} bytes)", crate::MEMORY_SIZE)]
    ProgramTooLarge { size: usize },
}
