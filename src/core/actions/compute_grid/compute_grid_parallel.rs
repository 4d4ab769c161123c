use rayon::prelude::*;

use crate::core::actions::compute_grid::sample_lattice::SampleLattice;
use crate::core::actions::compute_grid::strategy::{ComputeGridError, allocate_values};
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_spec::GridSpec;
use crate::core::data::iteration_grid::IterationGrid;

/// Parallel grid computation on rayon's work-stealing pool.
///
/// Each task owns one disjoint row slice of the output vector, and the
/// parallel iterator joins before the grid is assembled, so no partial
/// result is ever observable.
pub fn compute_grid_parallel(
    region: &ComplexRect,
    spec: &GridSpec,
) -> Result<IterationGrid, ComputeGridError> {
    let lattice = SampleLattice::new(region, spec);
    let width = spec.width() as usize;
    let mut values = allocate_values(spec.pixel_count())?;

    values
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = lattice.pixel_mean(x as u32, y as u32);
            }
        });

    Ok(IterationGrid::from_values(spec.width(), spec.height(), values)?)
}
