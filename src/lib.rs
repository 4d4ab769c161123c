mod controllers;
mod core;
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use controllers::events::{InputEvent, ZoomEvent};
pub use controllers::headless::run_headless;
pub use controllers::ports::frame_presenter::FramePresenter;
pub use controllers::session::{ExplorerSession, SessionError, SessionStatus};
pub use crate::core::actions::compute_grid::strategy::{ComputeGridError, ComputeStrategy};
pub use crate::core::actions::zoom_viewport::{ZOOM_STEP, ZoomDirection, zoom_viewport};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::grid_spec::{GridSpec, GridSpecError};
pub use crate::core::data::iteration_grid::IterationGrid;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use input::cli::CliArgs;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
