use crate::controllers::ports::frame_presenter::FramePresenter;
use crate::core::data::pixel_buffer::PixelBuffer;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use std::fmt;
use winit::window::Window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelsPresentError {
    SizeMismatch {
        frame_width: u32,
        frame_height: u32,
        surface_width: u32,
        surface_height: u32,
    },
}

impl fmt::Display for PixelsPresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                frame_width,
                frame_height,
                surface_width,
                surface_height,
            } => {
                write!(
                    f,
                    "frame {}x{} does not match pixel surface {}x{}",
                    frame_width, frame_height, surface_width, surface_height
                )
            }
        }
    }
}

impl Error for PixelsPresentError {}

/// `pixels`-backed frame presenter: keeps a GPU-scaled framebuffer the size
/// of the iteration grid and copies each presented RGB frame into it.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
    }
}

impl FramePresenter for PixelsPresenter {
    type Failure = PixelsPresentError;

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), PixelsPresentError> {
        if buffer.width() != self.width || buffer.height() != self.height {
            return Err(PixelsPresentError::SizeMismatch {
                frame_width: buffer.width(),
                frame_height: buffer.height(),
                surface_width: self.width,
                surface_height: self.height,
            });
        }

        let frame = self.pixels.frame_mut();
        for (src_pixel, dst_pixel) in buffer
            .data()
            .chunks_exact(3)
            .zip(frame.chunks_exact_mut(4))
        {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }

        Ok(())
    }
}
