use crate::controllers::events::InputEvent;
use crate::controllers::ports::frame_presenter::FramePresenter;
use crate::core::actions::compute_grid::strategy::{ComputeGridError, ComputeStrategy};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::zoom_viewport::zoom_viewport;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_spec::GridSpec;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::fractals::mandelbrot::hsv_colour_map::HsvColourMap;
use std::error::Error;
use std::fmt;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Continue,
    Quit,
}

#[derive(Debug)]
pub enum SessionError {
    Compute(ComputeGridError),
    PixelBuffer(GeneratePixelBufferError),
    Present(Box<dyn Error>),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compute(err) => write!(f, "compute error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Present(err) => write!(f, "present error: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compute(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Present(err) => Some(err.as_ref()),
        }
    }
}

impl From<ComputeGridError> for SessionError {
    fn from(err: ComputeGridError) -> Self {
        Self::Compute(err)
    }
}

impl From<GeneratePixelBufferError> for SessionError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Owns the viewport state and decides when the grid must be recomputed.
///
/// The session starts dirty so the first frame always computes. Zooming
/// marks it dirty again; `refresh` clears the flag only after a new grid has
/// been computed and its frame handed to the presenter. The previously
/// presented grid stays alive until that hand-off succeeds.
#[derive(Debug)]
pub struct ExplorerSession {
    region: ComplexRect,
    grid_spec: GridSpec,
    strategy: ComputeStrategy,
    colour_map: HsvColourMap,
    grid: Option<IterationGrid>,
    dirty: bool,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(region: ComplexRect, grid_spec: GridSpec, strategy: ComputeStrategy) -> Self {
        Self {
            region,
            grid_spec,
            strategy,
            colour_map: HsvColourMap::new(grid_spec.max_iterations()),
            grid: None,
            dirty: true,
        }
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn grid_spec(&self) -> GridSpec {
        self.grid_spec
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn grid(&self) -> Option<&IterationGrid> {
        self.grid.as_ref()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> SessionStatus {
        match event {
            InputEvent::Zoom(zoom) => {
                self.region = zoom_viewport(
                    zoom.cursor_x,
                    zoom.cursor_y,
                    self.grid_spec.width(),
                    self.grid_spec.height(),
                    &self.region,
                    zoom.direction,
                );
                self.dirty = true;
                SessionStatus::Continue
            }
            InputEvent::Quit => {
                self.grid = None;
                SessionStatus::Quit
            }
        }
    }

    /// Recomputes and presents when dirty; a no-op otherwise.
    ///
    /// Returns whether a new frame was presented. On error the session stays
    /// dirty and the previous grid is untouched, so a failed cycle never
    /// presents a stale or torn frame as fresh.
    pub fn refresh<P>(&mut self, presenter: &mut P) -> Result<bool, SessionError>
    where
        P: FramePresenter,
        P::Failure: 'static,
    {
        if !self.dirty {
            return Ok(false);
        }

        let start = Instant::now();
        let grid = self.strategy.compute(&self.region, &self.grid_spec)?;
        info!(
            strategy = self.strategy.display_name(),
            width = self.grid_spec.width(),
            height = self.grid_spec.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "computed iteration grid"
        );

        let buffer = generate_pixel_buffer(&grid, &self.colour_map)?;
        presenter
            .present(&buffer)
            .map_err(|err| SessionError::Present(Box::new(err)))?;

        self.grid = Some(grid);
        self.dirty = false;
        Ok(true)
    }
}
