use sdl2::pixels::PixelFormatEnum;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::state::FrameBuffer;

/// The size multiplier for each Chip-8 pixel.
const SCALE: usize = 10;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels whose on/off
/// state is encoded as 1/0 in the core's frame buffer.
///
/// `render` is only called when the interpreter reports that the frame
/// buffer changed; sdl2's string errors are handed back to the caller.
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
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "Chip-8",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats a frame for rendering as an SDL2 RGB24 texture.
    ///
    /// An RGB24 texture is a 1D array of bytes, three per pixel, row by row.
    /// Each binary pixel state becomes three identical 0/255 intensities,
    /// which renders as black and white.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 frame buffer
    fn frame_to_texture_data(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flatten()
            .flat_map(|&px| {
                let intensity = px * 255;
                vec![intensity; 3]
            })
            .collect()
    }

    /// Presents the frame buffer in the window, scaled to its size.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 frame buffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        texture.with_lock(None, |buffer: &mut [u8], _pitch: usize| {
            buffer.copy_from_slice(&Display::frame_to_texture_data(frame));
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod test_display {
    use super::*;

    #[test]
    fn test_frame_to_texture_data() {
        let mut frame: FrameBuffer = [[0; 64]; 32];
        frame[0][0..2].copy_from_slice(&[0, 1]);
        frame[1][0..2].copy_from_slice(&[1, 0]);
        let data = Display::frame_to_texture_data(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(data, expected);
    }
}
