use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationGridError {
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "grid length {} does not match expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for IterationGridError {}

/// Row-major grid of per-pixel mean escape times.
///
/// Values lie in `[0, max_iterations]`; `max_iterations` marks a pixel whose
/// samples never escaped. A grid is only ever constructed from a fully
/// computed vector and is replaced by move, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationGrid {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl IterationGrid {
    pub fn from_values(
        width: u32,
        height: u32,
        values: Vec<f64>,
    ) -> Result<Self, IterationGridError> {
        let expected = width as usize * height as usize;

        if values.len() != expected {
            return Err(IterationGridError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            width,
            height,
            values,
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
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at pixel `(x, y)`. Panics when out of range, like slice indexing.
    #[must_use]
    pub fn value(&self, x: u32, y: u32) -> f64 {
        assert!(x < self.width && y < self.height);
        self.values[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_valid() {
        let grid = IterationGrid::from_values(3, 2, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.value(0, 0), 0.0);
        assert_eq!(grid.value(2, 0), 2.0);
        assert_eq!(grid.value(0, 1), 3.0);
        assert_eq!(grid.value(2, 1), 5.0);
    }

    #[test]
    fn test_from_values_rejects_length_mismatch() {
        let result = IterationGrid::from_values(3, 2, vec![0.0; 5]);

        assert_eq!(
            result,
            Err(IterationGridError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    #[should_panic]
    fn test_value_out_of_range_panics() {
        let grid = IterationGrid::from_values(2, 2, vec![0.0; 4]).unwrap();

        grid.value(2, 0);
    }
}
