use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_spec::GridSpec;
use crate::core::fractals::mandelbrot::escape_time::escape_time;

/// Per-render sampling constants shared by both execution strategies.
///
/// Serial and parallel computation route every pixel through
/// [`SampleLattice::pixel_mean`], so the two strategies perform the exact
/// same floating-point operations and their grids compare equal bitwise.
#[derive(Debug, Copy, Clone)]
pub(crate) struct SampleLattice {
    x_min: f64,
    y_min: f64,
    dx: f64,
    dy: f64,
    supersample: u32,
    inv_ss2: f64,
    max_iterations: u32,
}

impl SampleLattice {
    pub(crate) fn new(region: &ComplexRect, spec: &GridSpec) -> Self {
        let ss = f64::from(spec.supersample());

        Self {
            x_min: region.min().real,
            y_min: region.min().imag,
            dx: region.width() / f64::from(spec.width()),
            dy: region.height() / f64::from(spec.height()),
            supersample: spec.supersample(),
            inv_ss2: 1.0 / (ss * ss),
            max_iterations: spec.max_iterations(),
        }
    }

    /// Mean escape time over the SS x SS sub-samples of pixel `(x, y)`.
    ///
    /// Sub-sample offsets are spaced by `1/SS^2`, not `1/SS`: for SS > 1 the
    /// samples sit toward the pixel's lower corner. Deterministic, no
    /// randomness.
    pub(crate) fn pixel_mean(&self, x: u32, y: u32) -> f64 {
        let mut sum = 0.0;

        for sy in 0..self.supersample {
            for sx in 0..self.supersample {
                let c = Complex {
                    real: self.x_min
                        + (f64::from(x) + (f64::from(sx) + 0.5) * self.inv_ss2) * self.dx,
                    imag: self.y_min
                        + (f64::from(y) + (f64::from(sy) + 0.5) * self.inv_ss2) * self.dy,
                };
                sum += f64::from(escape_time(c, self.max_iterations));
            }
        }

        sum * self.inv_ss2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_pixel_mean_without_supersampling_samples_pixel_center() {
        let spec = GridSpec::new(3, 2, 10, 1).unwrap();
        let lattice = SampleLattice::new(&classic_region(), &spec);

        // pixel (0, 0) center is (-1.5, -0.5), which escapes
        let value = lattice.pixel_mean(0, 0);

        assert_eq!(
            value,
            f64::from(escape_time(
                Complex {
                    real: -1.5,
                    imag: -0.5
                },
                10
            ))
        );
    }

    #[test]
    fn test_pixel_mean_stays_within_iteration_budget() {
        let spec = GridSpec::new(8, 8, 25, 3).unwrap();
        let lattice = SampleLattice::new(&classic_region(), &spec);

        for y in 0..8 {
            for x in 0..8 {
                let value = lattice.pixel_mean(x, y);

                assert!(value >= 0.0);
                assert!(value <= 25.0);
            }
        }
    }

    #[test]
    fn test_pixel_mean_is_deterministic() {
        let spec = GridSpec::new(5, 5, 40, 2).unwrap();
        let first = SampleLattice::new(&classic_region(), &spec);
        let second = SampleLattice::new(&classic_region(), &spec);

        assert_eq!(
            first.pixel_mean(2, 3).to_bits(),
            second.pixel_mean(2, 3).to_bits()
        );
    }

    #[test]
    fn test_supersampled_mean_can_be_fractional() {
        // a pixel straddling the set boundary averages escaped and
        // non-escaped samples
        let spec = GridSpec::new(10, 10, 60, 4).unwrap();
        let lattice = SampleLattice::new(&classic_region(), &spec);

        let fractional = (0..10)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .map(|(x, y)| lattice.pixel_mean(x, y))
            .any(|value| value.fract() != 0.0);

        assert!(fractional);
    }
}
