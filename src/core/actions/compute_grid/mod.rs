//! The computation engine: evaluates the escape-time kernel over a
//! supersampled pixel grid, with serial and rayon-parallel strategies that
//! produce bitwise-identical grids.

pub mod compute_grid_parallel;
pub mod compute_grid_serial;
mod sample_lattice;
pub mod strategy;

pub use strategy::{ComputeGridError, ComputeStrategy};
