/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Where programs are loaded; everything below is reserved
pub const PROGRAM_START: u16 = 0x200;

/// The largest program that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Width of an instruction in bytes
pub const OPCODE_SIZE: u16 = 0x2;

pub const REGISTER_COUNT: usize = 16;
pub const STACK_DEPTH: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Index of VF, the carry/borrow/collision flag register
pub const FLAG_REGISTER: usize = 0xF;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Sprites are always a single byte wide
pub const SPRITE_WIDTH: usize = 8;

/// Rate at which the delay and sound timers count down
pub const TIMER_HZ: u32 = 60;

/// Instructions executed per timer tick unless configured otherwise
pub const DEFAULT_INSTRUCTIONS_PER_TICK: u32 = 10;
