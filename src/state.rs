use crate::constants::{FLAG_REGISTER, OPCODE_SIZE, PROGRAM_START, REGISTER_COUNT};
use crate::display::DisplayBuffer;
use crate::error::Fault;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::opcode;
use crate::stack::CallStack;
use crate::timers::Timers;

/// The complete Chip-8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag and is clobbered by those instructions
/// - (i) a 16-bit index register, normally holding a 12-bit address
///
/// Counter
/// - (pc) a 16-bit program counter, always even when an instruction is fetched
///
/// ## Memory
/// - 4096 bytes of addressable memory, programs start at 0x200
/// - a call stack of up to 16 return addresses
/// - a 64x32 frame buffer with a dirty flag
///
/// ## Timers
/// - 2 8-bit timers (delay & sound), ticked at 60Hz by the driver
///
/// ## Input
/// - 16 key states, written by the input collaborator and read by instructions
///
/// A `State` has a single owner and is mutated in place.
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub stack: CallStack,
    pub timers: Timers,
    pub memory: Memory,
    pub display: DisplayBuffer,
    pub keypad: Keypad,
}

impl State {
    pub fn new() -> Self {
        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            stack: CallStack::new(),
            timers: Timers::new(),
            memory: Memory::new(),
            display: DisplayBuffer::new(),
            keypad: Keypad::new(),
        }
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&self) -> Result<u16, Fault> {
        if self.pc % OPCODE_SIZE != 0 {
            return Err(Fault::UnalignedProgramCounter { pc: self.pc });
        }
        let pc = self.pc as usize;
        let high = self.memory.read(pc)?;
        let low = self.memory.read(pc + 1)?;
        Ok(opcode::from_bytes(high, low))
    }

    /// Moves on to the next instruction
    pub fn advance(&mut self) {
        self.pc = self.pc.wrapping_add(OPCODE_SIZE);
    }

    /// Moves on to the next instruction, or the one after it if `condition` holds
    pub fn skip_if(&mut self, condition: bool) {
        let step = if condition { 2 * OPCODE_SIZE } else { OPCODE_SIZE };
        self.pc = self.pc.wrapping_add(step);
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG_REGISTER] = u8::from(flag);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
