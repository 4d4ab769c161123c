use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSpecError {
    InvalidSize { width: u32, height: u32 },
    ZeroMaxIterations,
    ZeroSupersample,
}

impl fmt::Display for GridSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid size must be positive: {}x{}", width, height)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::ZeroSupersample => {
                write!(f, "supersample factor must be greater than zero")
            }
        }
    }
}

impl Error for GridSpecError {}

/// Dimensions and sampling parameters for one iteration grid.
///
/// Construction validates every field, so a `GridSpec` that exists is safe
/// to hand to the computation engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSpec {
    width: u32,
    height: u32,
    max_iterations: u32,
    supersample: u32,
}

impl GridSpec {
    pub fn new(
        width: u32,
        height: u32,
        max_iterations: u32,
        supersample: u32,
    ) -> Result<Self, GridSpecError> {
        if width == 0 || height == 0 {
            return Err(GridSpecError::InvalidSize { width, height });
        }
        if max_iterations == 0 {
            return Err(GridSpecError::ZeroMaxIterations);
        }
        if supersample == 0 {
            return Err(GridSpecError::ZeroSupersample);
        }

        Ok(Self {
            width,
            height,
            max_iterations,
            supersample,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn supersample(&self) -> u32 {
        self.supersample
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
