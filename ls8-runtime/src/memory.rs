//! Memory subsystem
//!
//! 256 zero-initialized byte cells shared by code and data, with no
//! protection between the two. The public accessors take a plain address
//! and bounds-check it; addresses already narrowed to `u8` use the
//! infallible accessors.

use crate::error::{Result, RuntimeError};
use ls8_spec::{Program, MEMORY_SIZE};

#[derive(Clone)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Bounds-checked read
    pub fn read(&self, address: usize) -> Result<u8> {
        self.cells
            .get(address)
            .copied()
            .ok_or(RuntimeError::MemoryOutOfBounds { address })
    }

    /// Bounds-checked write
    pub fn write(&mut self, address: usize, value: u8) -> Result<()> {
        match self.cells.get_mut(address) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(RuntimeError::MemoryOutOfBounds { address }),
        }
    }

    /// Read at a byte address; a `u8` cannot index past the end
    #[inline]
    pub fn get(&self, address: u8) -> u8 {
        self.cells[address as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, address: u8, value: u8) {
        self.cells[address as usize] = value;
    }

    /// Copy a program image in, starting at address 0
    pub fn load(&mut self, program: &Program) {
        self.cells[..program.len()].copy_from_slice(program.bytes());
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("cells", &format_args!("[..; {}]", MEMORY_SIZE))
            .finish()
    }
}
