use sdl2::pixels::PixelFormatEnum;

use chipvm_core::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Size multiplier for each cell when none is given
pub const DEFAULT_SCALE: u32 = 16;

/// Bytes per RGB24 pixel
const CHANNELS: usize = 3;

/// # Display
/// Presents a machine's 64x32 black/white surface in an SDL2 window.
/// Lit cells are white and unlit cells are black; the window is the surface
/// size multiplied by `scale`.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each cell
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats a FrameBuffer as RGB24 bytes.
    ///
    /// An SDL2 RGB24 texture is concatenated rows of 3-byte pixels, so this:
    /// - Flattens the 2D frame buffer by concatenating its rows
    /// - Triplicates each cell to give its R, G and B values
    /// - Scales each value from 0/1 up to 0/255 intensity
    ///
    /// # Arguments
    /// * `frame` a FrameBuffer
    pub fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|cell| std::iter::repeat(*cell).take(CHANNELS))
            .map(|cell| cell * 255)
            .collect()
    }

    /// Formats the FrameBuffer as an SDL2 RGB24 texture and presents it.
    ///
    /// # Arguments
    /// * `frame` a FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = Display::frame_to_rgb24(frame);
        let row_bytes = self.width * CHANNELS;
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (y, row) in pixels.chunks(row_bytes).enumerate() {
                buffer[y * pitch..y * pitch + row_bytes].copy_from_slice(row);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_rgb24() {
        let mut frame: FrameBuffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        frame[0][0..2].copy_from_slice(&[0, 1]);
        frame[1][0..2].copy_from_slice(&[1, 0]);
        let frame = Display::frame_to_rgb24(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(frame, expected);
    }

    #[test]
    fn test_blank_frame_is_black() {
        let frame: FrameBuffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        assert!(Display::frame_to_rgb24(&frame).iter().all(|b| *b == 0));
    }
}
