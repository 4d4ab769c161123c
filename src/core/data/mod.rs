pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod grid_spec;
pub mod iteration_grid;
pub mod pixel_buffer;
