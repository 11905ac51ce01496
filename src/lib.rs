pub use chip8::Chip8;
pub use display::FrameBuffer;
pub use error::{Fault, LoadError};
pub use instruction::Instruction;
pub use scheduler::{ClockConfig, Scheduler};
pub use state::State;

mod chip8;
pub mod constants;
pub mod display;
mod error;
mod instruction;
pub mod keypad;
pub mod memory;
mod opcode;
mod operations;
mod scheduler;
pub mod stack;
pub mod state;
pub mod timers;
