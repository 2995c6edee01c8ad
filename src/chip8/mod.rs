//! The full implementation of the chip8 cpu, from the memory layout to the opcodes and an
//! option to pretty print the whole state.
mod chipset;
mod memory;
mod opcodes;
mod print;
mod stack;

/// reexport chipset structs and data for simpler usage
pub use chipset::*;
pub use memory::Memory;
pub use stack::Stack;
