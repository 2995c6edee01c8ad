use tinyvec::ArrayVec;

use crate::{definitions::cpu, StackError};

/// The stack is only used to store return addresses when subroutines are called. The original
/// [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes for up to
/// `12` levels of nesting; modern implementations usually have more.
/// (here we are using `16`)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stack {
    entries: ArrayVec<[u16; cpu::stack::SIZE]>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Will push the pointer to the stack
    pub fn push(&mut self, pointer: usize) -> Result<(), StackError> {
        match self.entries.try_push(pointer as u16) {
            None => Ok(()),
            Some(_) => Err(StackError::Full),
        }
    }

    /// Will pop the latest pointer
    pub fn pop(&mut self) -> Result<usize, StackError> {
        self.entries
            .pop()
            .map(|pointer| pointer as usize)
            .ok_or(StackError::Empty)
    }

    /// The stack pointer, it is always one bigger then the entry it points to
    pub fn pointer(&self) -> usize {
        self.entries.len()
    }

    pub fn as_slice(&self) -> &[u16] {
        self.entries.as_slice()
    }
}
