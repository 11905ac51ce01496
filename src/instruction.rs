use rand::RngCore;

use crate::error::Fault;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A decoded instruction with its operands pulled out of the opcode.
///
/// Decoding never fails: anything outside the supported set becomes `Unknown`, which executes as
/// a no-op that only advances the program counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    Clear,
    /// `00EE`
    Return,
    /// `1NNN`
    Jump { address: u16 },
    /// `2NNN`
    Call { address: u16 },
    /// `3XNN`
    SkipEqual { x: usize, byte: u8 },
    /// `4XNN`
    SkipNotEqual { x: usize, byte: u8 },
    /// `6XNN`
    Load { x: usize, byte: u8 },
    /// `7XNN`
    Add { x: usize, byte: u8 },
    /// `8XY0`
    Move { x: usize, y: usize },
    /// `8XY1`
    Or { x: usize, y: usize },
    /// `8XY2`
    And { x: usize, y: usize },
    /// `8XY3`
    Xor { x: usize, y: usize },
    /// `8XY4`
    AddRegisters { x: usize, y: usize },
    /// `8XY5`
    Sub { x: usize, y: usize },
    /// `ANNN`
    LoadIndex { address: u16 },
    /// `CXNN`
    Random { x: usize, mask: u8 },
    /// `DXYN`
    Draw { x: usize, y: usize, height: u8 },
    /// `EX9E`
    SkipPressed { x: usize },
    /// `EXA1`
    SkipNotPressed { x: usize },
    /// `FX07`
    ReadDelay { x: usize },
    /// `FX15`
    SetDelay { x: usize },
    /// `FX18`
    SetSound { x: usize },
    Unknown(u16),
}

impl Instruction {
    /// Selects the correct Instruction for a given Opcode
    pub fn decode(op: u16) -> Self {
        use Instruction::*;

        let (x, y) = (op.x(), op.y());
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x1, ..) => Jump { address: op.nnn() },
            (0x2, ..) => Call { address: op.nnn() },
            (0x3, ..) => SkipEqual { x, byte: op.nn() },
            (0x4, ..) => SkipNotEqual { x, byte: op.nn() },
            (0x6, ..) => Load { x, byte: op.nn() },
            (0x7, ..) => Add { x, byte: op.nn() },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddRegisters { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0xA, ..) => LoadIndex { address: op.nnn() },
            (0xC, ..) => Random { x, mask: op.nn() },
            (0xD, ..) => Draw {
                x,
                y,
                height: op.n(),
            },
            (0xE, _, 0x9, 0xE) => SkipPressed { x },
            (0xE, _, 0xA, 0x1) => SkipNotPressed { x },
            (0xF, _, 0x0, 0x7) => ReadDelay { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            _ => Unknown(op),
        }
    }

    /// Applies the instruction to `state`, leaving `pc` at the next instruction to run.
    ///
    /// On a fault nothing has been changed.
    pub fn execute(self, state: &mut State, rng: &mut dyn RngCore) -> Result<(), Fault> {
        use Instruction::*;

        match self {
            Clear => clr(state),
            Return => rts(state)?,
            Jump { address } => jump(state, address),
            Call { address } => call(state, address)?,
            SkipEqual { x, byte } => ske(state, x, byte),
            SkipNotEqual { x, byte } => skne(state, x, byte),
            Load { x, byte } => load(state, x, byte),
            Add { x, byte } => add(state, x, byte),
            Move { x, y } => mv(state, x, y),
            Or { x, y } => or(state, x, y),
            And { x, y } => and(state, x, y),
            Xor { x, y } => xor(state, x, y),
            AddRegisters { x, y } => addr(state, x, y),
            Sub { x, y } => sub(state, x, y),
            LoadIndex { address } => loadi(state, address),
            Random { x, mask } => rand(state, x, mask, rng),
            Draw { x, y, height } => draw(state, x, y, height)?,
            SkipPressed { x } => skpr(state, x)?,
            SkipNotPressed { x } => skup(state, x)?,
            ReadDelay { x } => moved(state, x),
            SetDelay { x } => loads(state, x),
            SetSound { x } => ld(state, x),
            Unknown(op) => {
                log::warn!("unknown opcode {:04X} at {:04X}, skipping", op, state.pc);
                state.advance();
            }
        }
        Ok(())
    }
}
