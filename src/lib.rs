//! A CHIP-8 cpu core: decoder, execution engine, timers and the
//! collaborator interfaces a frontend has to fulfill.
pub mod chip8;
pub mod definitions;
pub mod devices;
pub mod opcode;
pub mod resources;
pub mod timer;
mod error;
mod runner;

// reexporting for convinience
pub use error::*;
pub use runner::*;
