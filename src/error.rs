use std::io;

use thiserror::Error;

/// A fault raised by a single instruction.
///
/// Faults are detected before any state is mutated, so the machine is left exactly as it was
/// and `pc` still points at the offending instruction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Fault {
    #[error("stack overflow: call at {pc:#06X} with all 16 return slots in use")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    #[error("program counter {pc:#06X} is not aligned to an instruction boundary")]
    UnalignedProgramCounter { pc: u16 },

    #[error("key {key:#04X} does not exist on the keypad")]
    KeyOutOfRange { key: u8 },
}

/// Failure to load a program into memory. Nothing is written when this is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("unable to read ROM: {0}")]
    Io(#[from] io::Error),
}
