use std::ops::Range;

use crate::constants::{MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Fault, LoadError};

/// # Memory
/// 4096 bytes of flat, byte-addressable memory.
///
/// - `0x000..0x200` is reserved and only ever written by the initial load (which leaves it zeroed)
/// - `0x200..0x1000` holds the program and its data
///
/// Every access made on behalf of a program is bounds checked and reported as a `Fault`.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            bytes: [0; MEMORY_SIZE],
        }
    }

    /// Copies `program` verbatim to `PROGRAM_START`, zeroing whatever followed it before.
    ///
    /// Fails without touching memory if the program can't fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > MAX_ROM_SIZE {
            return Err(LoadError::TooLarge {
                size: program.len(),
                max: MAX_ROM_SIZE,
            });
        }

        let start = PROGRAM_START as usize;
        let region = &mut self.bytes[start..];
        region.iter_mut().for_each(|b| *b = 0);
        region[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Reads the byte at `address`
    pub fn read(&self, address: usize) -> Result<u8, Fault> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(Fault::MemoryOutOfBounds { address })
    }

    /// Borrows `len` bytes starting at `address`.
    /// The reported address on failure is the first one past the end of memory.
    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8], Fault> {
        let range: Range<usize> = address..address + len;
        if range.end > MEMORY_SIZE {
            return Err(Fault::MemoryOutOfBounds {
                address: address.max(MEMORY_SIZE),
            });
        }
        Ok(&self.bytes[range])
    }

    pub fn as_bytes(&self) -> &[u8; MEMORY_SIZE] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
