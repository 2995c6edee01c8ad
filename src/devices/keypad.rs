use std::{collections::VecDeque, sync::Arc};

use parking_lot::Mutex;

use super::KeyboardCommands;
use crate::definitions::keyboard;

/// The most presses kept around for a pending key wait.
const PRESS_QUEUE_SIZE: usize = 8;

#[derive(Debug, Default)]
struct KeyState {
    keys: [bool; keyboard::SIZE],
    presses: VecDeque<u8>,
}

/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input.
///
/// The keypad is cheap to clone, all clones share the same state, so that an input thread can
/// write while the cpu reads.
#[derive(Debug, Default, Clone)]
pub struct Keypad {
    state: Arc<Mutex<KeyState>>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the key as held down and records the press.
    pub fn press(&self, key: u8) {
        debug_assert!((key as usize) < keyboard::SIZE);
        let key = key & 0xF;
        let mut state = self.state.lock();
        state.keys[key as usize] = true;
        if state.presses.len() == PRESS_QUEUE_SIZE {
            state.presses.pop_front();
        }
        state.presses.push_back(key);
    }

    pub fn release(&self, key: u8) {
        self.state.lock().keys[(key & 0xF) as usize] = false;
    }

    /// Will get the current state of all the keys
    pub fn get_keys(&self) -> [bool; keyboard::SIZE] {
        self.state.lock().keys
    }
}

impl KeyboardCommands for Keypad {
    fn is_pressed(&self, key: u8) -> bool {
        self.state.lock().keys[(key & 0xF) as usize]
    }

    fn next_key_press(&mut self) -> Option<u8> {
        self.state.lock().presses.pop_front()
    }
}
