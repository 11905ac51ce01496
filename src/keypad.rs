use crate::constants::KEY_COUNT;
use crate::error::Fault;

/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// This is a level-triggered latch: the input collaborator sets and clears keys as host events
/// arrive (last write wins), and instructions only ever read it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pressed status of `key`, returning false if there is no such key
    pub fn set(&mut self, key: u8, pressed: bool) -> bool {
        match self.pressed.get_mut(key as usize) {
            Some(state) => {
                *state = pressed;
                true
            }
            None => false,
        }
    }

    /// Whether `key` is held; keys are named by register values so anything past 0xF faults
    pub fn is_pressed(&self, key: u8) -> Result<bool, Fault> {
        self.pressed
            .get(key as usize)
            .copied()
            .ok_or(Fault::KeyOutOfRange { key })
    }
}
