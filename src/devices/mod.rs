//! The collaborators the cpu talks to, and reference implementations of
//! them that a frontend can build upon.
mod framebuffer;
mod keypad;

pub use framebuffer::*;
pub use keypad::*;

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will clear the display
    fn clear(&mut self);
    /// Will xor the sprite rows onto the display at the given location,
    /// returns if any set pixel got unset.
    fn blit(&mut self, x: usize, y: usize, rows: &[u8]) -> bool;
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard data
pub trait KeyboardCommands {
    /// If the key `0x0` to `0xF` is currently held down.
    fn is_pressed(&self, key: u8) -> bool;
    /// Takes the oldest key press not yet handed out, if there is one.
    fn next_key_press(&mut self) -> Option<u8>;
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for the buzzer
pub trait SoundCommands {
    fn set_active(&mut self, active: bool);
}

/// A buzzer that never makes a sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundCommands for Silent {
    fn set_active(&mut self, _active: bool) {}
}
