use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, SPRITE_WIDTH};

/// The FrameBuffer is indexed as [y][x]; each cell is 1 (on) or 0 (off)
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Display Buffer
/// The 64x32 monochrome frame plus a dirty flag.
///
/// Any mutating draw sets `dirty`; the renderer clears it once it has consumed the frame.
/// It starts dirty so the first frame is always drawn.
pub struct DisplayBuffer {
    pub frame: FrameBuffer,
    pub dirty: bool,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        DisplayBuffer {
            frame: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            dirty: true,
        }
    }

    /// Turns every cell off
    pub fn clear(&mut self) {
        self.frame = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    /// XORs `sprite` onto the frame with its top-left corner at `x0, y0`.
    ///
    /// Each byte is one row, most significant bit leftmost. Coordinates wrap around both edges.
    /// Returns whether any lit cell was turned off.
    pub fn draw_sprite(&mut self, x0: usize, y0: usize, sprite: &[u8]) -> bool {
        let mut collision = false;

        for (row, &byte) in sprite.iter().enumerate() {
            let y = (y0 + row) % DISPLAY_HEIGHT;
            for col in 0..SPRITE_WIDTH {
                if byte >> (7 - col) & 1 == 0 {
                    continue;
                }
                let x = (x0 + col) % DISPLAY_WIDTH;
                let cell = &mut self.frame[y][x];
                collision |= *cell == 1;
                *cell ^= 1;
            }
        }

        self.dirty = true;
        collision
    }

    /// Returns the frame if it changed since the last call, clearing the dirty flag
    pub fn take(&mut self) -> Option<FrameBuffer> {
        if self.dirty {
            self.dirty = false;
            Some(self.frame)
        } else {
            None
        }
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}
