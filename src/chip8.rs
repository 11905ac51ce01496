use std::io::Read;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::MAX_ROM_SIZE;
use crate::display::FrameBuffer;
use crate::error::{Fault, LoadError};
use crate::instruction::Instruction;
use crate::state::State;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random source used by `CXNN`
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - taking its frame buffer for rendering by some display
///
/// Stepping and ticking are separate on purpose: `tick` belongs to wall-clock time (60Hz) and
/// `step` to however fast the driver wants to run instructions.
pub struct Chip8 {
    state: State,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A machine whose `CXNN` results are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: State::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Copies a program into memory at 0x200
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.state.memory.load_program(program)?;
        log::debug!("loaded {} byte program", program.len());
        Ok(())
    }

    /// Load a rom from a source file, returning its size
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize, LoadError> {
        let mut rom = Vec::with_capacity(MAX_ROM_SIZE);
        reader.read_to_end(&mut rom)?;
        log::debug!("ROM size: {} bytes", rom.len());
        self.load_program(&rom)?;
        Ok(rom.len())
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        if !self.state.keypad.set(key, true) {
            log::warn!("ignoring press of unknown key {:#04X}", key);
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        if !self.state.keypad.set(key, false) {
            log::warn!("ignoring release of unknown key {:#04X}", key);
        }
    }

    /// Advances the CPU by a single instruction
    /// - gets the opcode pointed at by the pc
    /// - decodes and executes it
    ///
    /// A fault leaves the machine untouched; it is up to the driver whether to keep going.
    pub fn step(&mut self) -> Result<(), Fault> {
        let op = self.state.fetch()?;
        log::trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        Instruction::decode(op).execute(&mut self.state, &mut self.rng)
    }

    /// Decrements the delay and sound timers; call at 60Hz
    pub fn tick(&mut self) {
        self.state.timers.tick();
    }

    /// Returns the FrameBuffer if the display should be redrawn, marking it as consumed
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        self.state.display.take()
    }

    /// The current frame, whether or not it has changed
    pub fn frame(&self) -> &FrameBuffer {
        &self.state.display.frame
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip8_with(program: &[u8]) -> Chip8 {
        let mut chip8 = Chip8::with_seed(0);
        chip8.load_program(program).unwrap();
        chip8
    }

    #[test]
    fn test_loads_rom_from_reader() {
        let mut chip8 = Chip8::new();
        let rom: &[u8] = &[0x00, 0xE0, 0x12, 0x00];
        assert_eq!(chip8.load_rom(&mut &rom[..]).unwrap(), 4);
        assert_eq!(chip8.state().memory.as_bytes()[0x200..0x204], [0x00, 0xE0, 0x12, 0x00]);
    }

    #[test]
    fn test_rejects_oversized_rom() {
        let mut chip8 = Chip8::new();
        let rom = vec![0xFF; 10_000];
        match chip8.load_rom(&mut &rom[..]) {
            Err(e @ LoadError::TooLarge { .. }) => {
                assert!(matches!(e, LoadError::TooLarge { size: 10_000, max: 3584 }));
                assert!(e.to_string().contains("10000 bytes"));
            }
            other => panic!("expected TooLarge, got {:?}", other),
        }
        assert!(chip8.state().memory.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_steps_through_program() {
        let mut chip8 = chip8_with(&[0x00, 0xE0, 0x61, 0x05]);
        chip8.step().unwrap();
        assert_eq!(chip8.state().pc, 0x202);
        chip8.step().unwrap();
        assert_eq!(chip8.state().pc, 0x204);
        assert_eq!(chip8.state().v[0x1], 0x05);
    }

    #[test]
    fn test_clear_blanks_any_frame() {
        let mut chip8 = chip8_with(&[0x00, 0xE0]);
        for row in chip8.state_mut().display.frame.iter_mut() {
            row.iter_mut().for_each(|c| *c = 1);
        }
        chip8.state_mut().display.dirty = false;
        chip8.step().unwrap();
        assert!(chip8.frame().iter().flatten().all(|&c| c == 0));
        assert!(chip8.state().display.dirty);
    }

    #[test]
    fn test_add_wraps_without_touching_flag() {
        let mut chip8 = chip8_with(&[0x63, 0xFF, 0x73, 0x02]);
        chip8.state_mut().v[0xF] = 0x9;
        chip8.step().unwrap();
        chip8.step().unwrap();
        assert_eq!(chip8.state().v[0x3], 0x01);
        assert_eq!(chip8.state().v[0xF], 0x9);
    }

    #[test]
    fn test_call_then_return() {
        // 0x200: call 0x300 / 0x202: (return target) / 0x300: return
        let mut program = vec![0; 0x102];
        program[0x000..0x002].copy_from_slice(&[0x23, 0x00]);
        program[0x100..0x102].copy_from_slice(&[0x00, 0xEE]);
        let mut chip8 = chip8_with(&program);
        chip8.step().unwrap();
        assert_eq!(chip8.state().pc, 0x300);
        chip8.step().unwrap();
        assert_eq!(chip8.state().pc, 0x202);
        assert_eq!(chip8.state().stack.depth(), 0);
    }

    #[test]
    fn test_nested_calls_unwind_and_overflow() {
        // 0x200 + 2k: call 0x200 + 2(k+1), for k in 0..=16; 0x300: return
        let mut program = vec![0; 0x102];
        for k in 0..=16u16 {
            let target = 0x202 + 2 * k;
            let at = 2 * k as usize;
            program[at..at + 2].copy_from_slice(&(0x2000 | target).to_be_bytes());
        }
        program[0x100..0x102].copy_from_slice(&[0x00, 0xEE]);
        let mut chip8 = chip8_with(&program);

        for _ in 0..16 {
            chip8.step().unwrap();
        }
        assert_eq!(chip8.state().stack.depth(), 16);
        assert_eq!(chip8.state().pc, 0x220);
        // the 17th call has nowhere to go
        assert_eq!(chip8.step(), Err(Fault::StackOverflow { pc: 0x220 }));
        assert_eq!(chip8.state().pc, 0x220);

        // unwind from a shared return instruction
        for _ in 0..16 {
            chip8.state_mut().pc = 0x300;
            chip8.step().unwrap();
        }
        assert_eq!(chip8.state().pc, 0x202);
        assert_eq!(chip8.state().stack.depth(), 0);
    }

    #[test]
    fn test_drawing_twice_restores_frame_and_collides() {
        // I = 0x208; draw 3 rows at (V0, V1) twice; pad; sprite data
        let mut chip8 = chip8_with(&[
            0xA2, 0x08, 0xD0, 0x13, 0xD0, 0x13, 0x00, 0x00, 0xF0, 0x90, 0x3C,
        ]);
        chip8.state_mut().v[0x0] = 10;
        chip8.state_mut().v[0x1] = 4;
        chip8.step().unwrap();
        chip8.step().unwrap();
        assert_eq!(chip8.state().v[0xF], 0x0);
        assert_eq!(chip8.frame()[4][10..14], [1, 1, 1, 1]);
        chip8.step().unwrap();
        assert_eq!(chip8.state().v[0xF], 0x1);
        assert!(chip8.frame().iter().flatten().all(|&c| c == 0));
    }

    #[test]
    fn test_arithmetic_flags() {
        let mut chip8 = chip8_with(&[0x81, 0x24, 0x83, 0x45]);
        chip8.state_mut().v[0x1] = 200;
        chip8.state_mut().v[0x2] = 100;
        chip8.state_mut().v[0x3] = 10;
        chip8.state_mut().v[0x4] = 20;
        chip8.step().unwrap();
        assert_eq!(chip8.state().v[0x1], 44);
        assert_eq!(chip8.state().v[0xF], 1);
        chip8.step().unwrap();
        assert_eq!(chip8.state().v[0x3], 246);
        assert_eq!(chip8.state().v[0xF], 0);
    }

    #[test]
    fn test_timers_follow_ticks_not_steps() {
        // V0 = 5; DT = V0; then spin on a jump to self
        let mut chip8 = chip8_with(&[0x60, 0x05, 0xF0, 0x15, 0x12, 0x04]);
        chip8.step().unwrap();
        chip8.step().unwrap();
        for _ in 0..100 {
            chip8.step().unwrap();
        }
        assert_eq!(chip8.state().timers.delay, 5);
        for _ in 0..3 {
            chip8.tick();
            chip8.step().unwrap();
        }

        // read the delay timer into V2
        chip8.state_mut().memory.load_program(&[0xF2, 0x07]).unwrap();
        chip8.state_mut().pc = 0x200;
        chip8.step().unwrap();
        assert_eq!(chip8.state().v[0x2], 2);

        chip8.tick();
        chip8.tick();
        assert_eq!(chip8.state().timers.delay, 0);
        chip8.tick();
        assert_eq!(chip8.state().timers.delay, 0);
    }

    #[test]
    fn test_unknown_opcode_leaves_machine_alone() {
        let mut chip8 = chip8_with(&[0xB1, 0x23]);
        chip8.state_mut().v = [0x11; 16];
        let before = *chip8.state().memory.as_bytes();
        chip8.step().unwrap();
        assert_eq!(chip8.state().pc, 0x202);
        assert_eq!(chip8.state().v, [0x11; 16]);
        assert_eq!(chip8.state().stack.depth(), 0);
        assert_eq!(chip8.state().memory.as_bytes()[..], before[..]);
    }

    #[test]
    fn test_keys_reach_the_keypad() {
        let mut chip8 = chip8_with(&[0xE5, 0x9E]);
        chip8.state_mut().v[0x5] = 0xA;
        chip8.key_press(0xA);
        chip8.key_press(0x42);
        chip8.step().unwrap();
        assert_eq!(chip8.state().pc, 0x204);
        chip8.key_release(0xA);
        assert_eq!(chip8.state().keypad.is_pressed(0xA), Ok(false));
    }

    #[test]
    fn test_take_frame_consumes_dirty_flag() {
        let mut chip8 = Chip8::new();
        assert!(chip8.take_frame().is_some());
        assert!(chip8.take_frame().is_none());
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = chip8_with(&[0xC0, 0xFF, 0xC1, 0xFF]);
        let mut b = chip8_with(&[0xC0, 0xFF, 0xC1, 0xFF]);
        for _ in 0..2 {
            a.step().unwrap();
            b.step().unwrap();
        }
        assert_eq!(a.state().v[..2], b.state().v[..2]);
    }
}
