use sdl2::pixels::PixelFormatEnum;
use thiserror::Error;

use vm8::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vm8::FrameBuffer;

use crate::palette::Palette;

/// Anything SDL2 can fail with while setting up or drawing the window
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl2: {0}")]
    Sdl(String),
}

fn sdl_err<E: ToString>(e: E) -> DisplayError {
    DisplayError::Sdl(e.to_string())
}

/// # Display
/// The Chip-8 display is composed of 64x32 monochrome pixels.
/// The on/off state of these pixels is encoded as 1/0 respectively in a 2d array of 64x32 bytes.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    palette: Palette,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    /// * `palette` colours for lit and unlit pixels
    pub fn new(sdl: &sdl2::Sdl, scale: u32, palette: Palette) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(sdl_err)?;
        let window = video_subsystem
            .window(
                "vm8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(sdl_err)?;
        let canvas = window.into_canvas().build().map_err(sdl_err)?;

        Ok(Display { canvas, palette })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
    ///
    /// This creates a two colour rendering by:
    /// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
    /// - Replacing each cell with the RGB triple for its palette colour
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    /// * `palette` the colours to use
    fn frame_to_sdl_texture(frame: &FrameBuffer, palette: &Palette) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|&cell| palette.color(cell))
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(sdl_err)?;

        let pixels = Display::frame_to_sdl_texture(frame, &self.palette);
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                // rows may be padded past 3 * DISPLAY_WIDTH bytes
                for (y, row) in pixels.chunks(DISPLAY_WIDTH * 3).enumerate() {
                    buffer[y * pitch..y * pitch + row.len()].copy_from_slice(row);
                }
            })
            .map_err(sdl_err)?;

        self.canvas.copy(&texture, None, None).map_err(sdl_err)?;
        self.canvas.present();
        Ok(())
    }
}
