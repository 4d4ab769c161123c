use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NotFinite { min: Complex, max: Complex },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "region size must be positive: {}x{}", width, height)
            }
            Self::NotFinite { min, max } => {
                write!(
                    f,
                    "region corners must be finite: ({}, {}) to ({}, {})",
                    min.real, min.imag, max.real, max.imag
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// The visible rectangle of the complex plane.
///
/// `min` holds the smaller real and imaginary coordinates. The session owns
/// a single instance and replaces it wholesale when the viewport zooms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ComplexRectError::NotFinite { min, max });
        }

        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    /// Linear interpolation across the rect; `(0, 0)` is the min corner and
    /// `(1, 1)` the max corner.
    #[must_use]
    pub fn point_at(&self, tx: f64, ty: f64) -> Complex {
        Complex {
            real: self.min.real + tx * self.width(),
            imag: self.min.imag + ty * self.height(),
        }
    }
}
