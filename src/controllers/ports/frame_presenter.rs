use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;

/// Presentation collaborator: receives one finished frame per recompute
/// cycle and is responsible for getting it on screen.
pub trait FramePresenter {
    type Failure: Error;

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Failure>;
}
