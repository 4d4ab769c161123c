use crate::controllers::ports::frame_presenter::FramePresenter;
use crate::controllers::session::ExplorerSession;
use crate::core::actions::compute_grid::strategy::ComputeStrategy;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_spec::GridSpec;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::convert::Infallible;
use std::time::Instant;

/// Presenter for headless runs: accepts the frame and drops it.
#[derive(Debug)]
struct DiscardPresenter;

impl FramePresenter for DiscardPresenter {
    type Failure = Infallible;

    fn present(&mut self, _: &PixelBuffer) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Computes and colours a single grid, reporting timing to stdout.
///
/// Used by the headless binary to exercise the engine without a window; the
/// frame itself is discarded.
pub fn run_headless(
    region: ComplexRect,
    grid_spec: GridSpec,
    strategy: ComputeStrategy,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", grid_spec.width(), grid_spec.height());
    println!("Max iterations: {}", grid_spec.max_iterations());
    println!("Supersample: {}", grid_spec.supersample());
    println!("Strategy: {}", strategy.display_name());

    let mut session = ExplorerSession::new(region, grid_spec, strategy);
    let start = Instant::now();
    session.refresh(&mut DiscardPresenter)?;
    println!("Duration:   {:?}", start.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_run_headless_returns_ok() {
        let region = ComplexRect::new(
            Complex {
                real: -2.0,
                imag: -1.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
        )
        .unwrap();
        let spec = GridSpec::new(40, 30, 25, 1).unwrap();

        let result = run_headless(region, spec, ComputeStrategy::Parallel);

        assert!(result.is_ok());
    }
}
