use crate::core::actions::compute_grid::sample_lattice::SampleLattice;
use crate::core::actions::compute_grid::strategy::{ComputeGridError, allocate_values};
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_spec::GridSpec;
use crate::core::data::iteration_grid::IterationGrid;

/// Single-threaded grid computation: nested iteration over rows, columns
/// and sub-samples.
pub fn compute_grid_serial(
    region: &ComplexRect,
    spec: &GridSpec,
) -> Result<IterationGrid, ComputeGridError> {
    let lattice = SampleLattice::new(region, spec);
    let width = spec.width() as usize;
    let mut values = allocate_values(spec.pixel_count())?;

    for y in 0..spec.height() {
        for x in 0..spec.width() {
            values[y as usize * width + x as usize] = lattice.pixel_mean(x, y);
        }
    }

    Ok(IterationGrid::from_values(spec.width(), spec.height(), values)?)
}
