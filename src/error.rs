use thiserror::Error;

use crate::opcode::Opcode;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ProcessError {
    #[error("Invalid opcode state '{0}'.")]
    Opcode(#[from] OpcodeError),
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    InvalidOpcode(Opcode),
    #[error("Pointer location invalid there can not be an opcode at {pointer:#06X}, if data len is {len:#06X}")]
    MemoryInvalid { pointer: usize, len: usize },
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}

/// A fatal fault, it pins the [`ProcessError`] to the instruction that caused it.
#[derive(Error, Debug, PartialEq, Clone)]
#[error("Execution halted at {pointer:#06X} running opcode {opcode:#06X}: {source}")]
pub struct ExecutionError {
    /// the failing instruction word
    pub opcode: Opcode,
    /// the address the instruction was fetched from
    pub pointer: usize,
    #[source]
    pub source: ProcessError,
}

#[derive(Error, Debug)]
pub enum RomError {
    #[error("The rom '{name}' is {len} bytes long, only {max} bytes fit into memory.")]
    TooLarge { name: String, len: usize, max: usize },
    #[error("Unable to read the rom: {0}")]
    Io(#[from] std::io::Error),
}
