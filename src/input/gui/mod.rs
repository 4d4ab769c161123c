//! GUI input adapter: a winit window whose mouse wheel drives the zoom and
//! whose redraw cycle drives the recompute controller.

mod event_loop;

pub use event_loop::run_gui;
