use super::DisplayCommands;
use crate::definitions::display;

/// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
/// `(64 x 32)`. Sprites are xored onto it and wrap around on both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<bool>,
    /// set whenever the content changed, until it gets taken
    dirty: bool,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self {
            pixels: vec![false; display::RESOLUTION],
            dirty: false,
        }
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn index(x: usize, y: usize) -> usize {
        (y % display::HEIGHT) * display::WIDTH + (x % display::WIDTH)
    }

    /// Will return if the pixel is set, coordinates wrap around.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[Self::index(x, y)]
    }

    /// Will iterate over the rows of the display from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks(display::WIDTH)
    }

    /// Returns if the content changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl DisplayCommands for FrameBuffer {
    fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = false);
        self.dirty = true;
    }

    fn blit(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let mut collided = false;

        for (i, row) in rows.iter().enumerate() {
            // Attention the most significant bit is the leftmost pixel.
            for (m, j) in (0..display::SPRITE_WIDTH).rev().zip(0..display::SPRITE_WIDTH) {
                let mask = 1 << m;
                if row & mask != mask {
                    continue;
                }

                let index = Self::index(x + j, y + i);
                let pixel = self.pixels[index];
                self.pixels[index] = !pixel;
                collided |= pixel;
            }
        }

        self.dirty = true;
        collided
    }
}
