use crate::core::actions::compute_grid::compute_grid_parallel::compute_grid_parallel;
use crate::core::actions::compute_grid::compute_grid_serial::compute_grid_serial;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_spec::GridSpec;
use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ComputeGridError {
    Allocation(TryReserveError),
    Grid(IterationGridError),
}

impl fmt::Display for ComputeGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(err) => write!(f, "cannot allocate iteration grid: {}", err),
            Self::Grid(err) => write!(f, "iteration grid error: {}", err),
        }
    }
}

impl Error for ComputeGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<IterationGridError> for ComputeGridError {
    fn from(err: IterationGridError) -> Self {
        Self::Grid(err)
    }
}

/// Reserves the full grid up front so an allocation failure surfaces as an
/// error instead of a partially sized buffer.
pub(crate) fn allocate_values(len: usize) -> Result<Vec<f64>, ComputeGridError> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(ComputeGridError::Allocation)?;
    values.resize(len, 0.0);
    Ok(values)
}

/// Execution strategy for the computation engine, selected by configuration
/// at the call site.
///
/// Both variants honor the identical contract and produce identical grids;
/// the parallel variant only differs in how the work is scheduled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComputeStrategy {
    Serial,
    Parallel,
}

impl ComputeStrategy {
    /// Computes the escape-time grid for `region`. Blocks until the whole
    /// grid is ready.
    pub fn compute(
        &self,
        region: &ComplexRect,
        spec: &GridSpec,
    ) -> Result<IterationGrid, ComputeGridError> {
        match self {
            Self::Serial => compute_grid_serial(region, spec),
            Self::Parallel => compute_grid_parallel(region, spec),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn classic_region() -> ComplexRect {
        ComplexRect::new(
            Complex {
                real: -2.0,
                imag: -1.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_strategies_agree_through_dispatch() {
        let spec = GridSpec::new(50, 40, 60, 2).unwrap();

        let serial = ComputeStrategy::Serial
            .compute(&classic_region(), &spec)
            .unwrap();
        let parallel = ComputeStrategy::Parallel
            .compute(&classic_region(), &spec)
            .unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let spec = GridSpec::new(30, 30, 80, 2).unwrap();

        let first = ComputeStrategy::Parallel
            .compute(&classic_region(), &spec)
            .unwrap();
        let second = ComputeStrategy::Parallel
            .compute(&classic_region(), &spec)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_interior_pixel_reports_full_budget() {
        // 100x100 over x in [-2, 1], y in [-1, 1]: pixel (66, 49) samples
        // (-0.005, -0.01), inside the main cardioid
        let spec = GridSpec::new(100, 100, 50, 1).unwrap();

        let grid = ComputeStrategy::Serial
            .compute(&classic_region(), &spec)
            .unwrap();

        assert_eq!(grid.value(66, 49), 50.0);
    }

    #[test]
    fn test_region_corner_pixel_escapes_quickly() {
        let spec = GridSpec::new(100, 100, 50, 1).unwrap();

        let grid = ComputeStrategy::Serial
            .compute(&classic_region(), &spec)
            .unwrap();

        assert!(grid.value(99, 99) <= 5.0);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ComputeStrategy::Serial.display_name(), "serial");
        assert_eq!(ComputeStrategy::Parallel.display_name(), "parallel");
    }
}
