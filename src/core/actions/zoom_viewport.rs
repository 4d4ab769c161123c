use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;

/// Linear scale applied to each half of the region on a single zoom-in step.
pub const ZOOM_STEP: f64 = 0.8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    #[must_use]
    fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_STEP,
            Self::Out => 1.0 / ZOOM_STEP,
        }
    }
}

/// Zooms `region` about the plane point under the cursor.
///
/// The cursor pixel is interpolated to a focus point, and each bound moves
/// toward (zoom-in) or away from (zoom-out) the focus by the zoom factor.
/// The focus keeps its relative screen position, so zooming in and back out
/// at the same cursor inverts the transform.
///
/// Precondition: `window_width` and `window_height` are non-zero.
#[must_use]
pub fn zoom_viewport(
    cursor_x: f64,
    cursor_y: f64,
    window_width: u32,
    window_height: u32,
    region: &ComplexRect,
    direction: ZoomDirection,
) -> ComplexRect {
    assert!(
        window_width > 0 && window_height > 0,
        "window dimensions must be non-zero"
    );

    let focus = region.point_at(
        cursor_x / f64::from(window_width),
        cursor_y / f64::from(window_height),
    );
    let factor = direction.factor();

    let min = Complex {
        real: focus.real - (focus.real - region.min().real) * factor,
        imag: focus.imag - (focus.imag - region.min().imag) * factor,
    };
    let max = Complex {
        real: focus.real + (region.max().real - focus.real) * factor,
        imag: focus.imag + (region.max().imag - focus.imag) * factor,
    };

    // scaling both spans by a positive factor keeps min < max
    ComplexRect::new(min, max).expect("zoomed region keeps a positive size")
}
