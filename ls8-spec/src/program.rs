//! # Program Container
//!
//! A program image is a flat sequence of instruction bytes written into
//! memory starting at address 0. The only structural constraint is that it
//! fits in the machine's 256 bytes of memory.

use crate::error::IsaError;
use crate::MEMORY_SIZE;
use serde::{Deserialize, Serialize};

/// A validated LS-8 program image
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    /// Create a program from raw instruction bytes
    pub fn new(bytes: Vec<u8>) -> Result<Self, IsaError> {
        if bytes.len() > MEMORY_SIZE {
            return Err(IsaError::ProgramTooLarge { size: bytes.len() });
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
