use crate::constants::STACK_DEPTH;
use crate::error::Fault;

/// # Call Stack
/// Holds return addresses for up to 16 nested subroutine calls.
///
/// `sp` is the current depth; `stack[sp - 1]` is the most recent return address.
#[derive(Debug, Default)]
pub struct CallStack {
    pub stack: [u16; STACK_DEPTH],
    pub sp: usize,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `pc` as a return address.
    /// `pc` is the address of the faulting call, if the stack is already full.
    pub fn push(&mut self, pc: u16) -> Result<(), Fault> {
        let slot = self
            .stack
            .get_mut(self.sp)
            .ok_or(Fault::StackOverflow { pc })?;
        *slot = pc;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address.
    /// `pc` is the address of the faulting return, if the stack is empty.
    pub fn pop(&mut self, pc: u16) -> Result<u16, Fault> {
        if self.sp == 0 {
            return Err(Fault::StackUnderflow { pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }

    pub fn depth(&self) -> usize {
        self.sp
    }
}
