use crate::core::actions::compute_grid::strategy::ComputeStrategy;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::grid_spec::{GridSpec, GridSpecError};
use clap::{Parser, ValueEnum};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Serial,
    Parallel,
}

/// Command-line configuration surface.
///
/// Numeric bounds are enforced by clap where possible; the region bounds are
/// validated by the constructors before the core ever runs.
#[derive(Debug, Parser)]
#[command(name = "mandelzoom", about = "Escape-time Mandelbrot explorer")]
pub struct CliArgs {
    /// Image width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Maximum iterations per sample
    #[arg(long = "max-iter", default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_iterations: u32,

    /// Supersampling factor (1 = no antialiasing)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub supersample: u32,

    /// Minimum real coordinate
    #[arg(long = "xmin", default_value_t = -2.0, allow_hyphen_values = true)]
    pub x_min: f64,

    /// Maximum real coordinate
    #[arg(long = "xmax", default_value_t = 1.0, allow_hyphen_values = true)]
    pub x_max: f64,

    /// Minimum imaginary coordinate
    #[arg(long = "ymin", default_value_t = -1.0, allow_hyphen_values = true)]
    pub y_min: f64,

    /// Maximum imaginary coordinate
    #[arg(long = "ymax", default_value_t = 1.0, allow_hyphen_values = true)]
    pub y_max: f64,

    /// Execution strategy for the computation engine
    #[arg(long, value_enum, default_value_t = StrategyArg::Serial)]
    pub strategy: StrategyArg,
}

impl CliArgs {
    pub fn region(&self) -> Result<ComplexRect, ComplexRectError> {
        ComplexRect::new(
            Complex {
                real: self.x_min,
                imag: self.y_min,
            },
            Complex {
                real: self.x_max,
                imag: self.y_max,
            },
        )
    }

    pub fn grid_spec(&self) -> Result<GridSpec, GridSpecError> {
        GridSpec::new(
            self.width,
            self.height,
            self.max_iterations,
            self.supersample,
        )
    }

    #[must_use]
    pub fn compute_strategy(&self) -> ComputeStrategy {
        match self.strategy {
            StrategyArg::Serial => ComputeStrategy::Serial,
            StrategyArg::Parallel => ComputeStrategy::Parallel,
        }
    }
}
