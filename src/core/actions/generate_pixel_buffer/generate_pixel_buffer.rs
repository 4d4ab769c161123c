use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    Allocation(TryReserveError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Allocation(err) => write!(f, "cannot allocate pixel buffer: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => err.source(),
            Self::Allocation(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps every grid value to a colour and packs the result as 24-bit RGB.
///
/// Any colour map failure aborts the whole buffer; a partial frame is never
/// returned.
pub fn generate_pixel_buffer<M>(
    grid: &IterationGrid,
    mapper: &M,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    M: ColourMap<Value = f64>,
    M::Failure: 'static,
{
    let byte_len = grid.values().len() * 3;
    let mut data = Vec::new();
    data.try_reserve_exact(byte_len)
        .map_err(GeneratePixelBufferError::Allocation)?;

    for &value in grid.values() {
        let colour = mapper
            .map(value)
            .map_err(|err| GeneratePixelBufferError::ColourMap(Box::new(err)))?;
        data.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(PixelBuffer::from_data(grid.width(), grid.height(), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use std::convert::Infallible;

    #[derive(Debug)]
    struct StubGreyscaleMap;

    impl ColourMap for StubGreyscaleMap {
        type Value = f64;
        type Failure = Infallible;

        fn map(&self, value: f64) -> Result<Colour, Infallible> {
            let level = value as u8;
            Ok(Colour {
                r: level,
                g: level,
                b: level,
            })
        }
    }

    #[derive(Debug, PartialEq)]
    struct StubError;

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubFailingMap;

    impl ColourMap for StubFailingMap {
        type Value = f64;
        type Failure = StubError;

        fn map(&self, _: f64) -> Result<Colour, StubError> {
            Err(StubError)
        }
    }

    fn grid_2x2() -> IterationGrid {
        IterationGrid::from_values(2, 2, vec![0.0, 10.0, 20.0, 30.0]).unwrap()
    }

    #[test]
    fn test_generates_three_bytes_per_pixel_in_row_major_order() {
        let buffer = generate_pixel_buffer(&grid_2x2(), &StubGreyscaleMap).unwrap();

        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        assert_eq!(
            buffer.data(),
            &[0, 0, 0, 10, 10, 10, 20, 20, 20, 30, 30, 30]
        );
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let result = generate_pixel_buffer(&grid_2x2(), &StubFailingMap);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::ColourMap(_))
        ));
    }
}
