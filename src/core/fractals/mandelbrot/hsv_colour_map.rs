use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum HsvColourMapError {
    NonFiniteValue(f64),
}

impl fmt::Display for HsvColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue(value) => {
                write!(f, "escape value must be finite, got {}", value)
            }
        }
    }
}

impl Error for HsvColourMapError {}

/// Full-saturation HSV rainbow over the escape-time range.
///
/// Hue sweeps 0..360 degrees as the mean escape value approaches
/// `max_iterations`; pixels that never escaped are black.
#[derive(Debug, Copy, Clone)]
pub struct HsvColourMap {
    max_iterations: u32,
}

impl HsvColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for HsvColourMap {
    type Value = f64;
    type Failure = HsvColourMapError;

    fn map(&self, value: f64) -> Result<Colour, HsvColourMapError> {
        if !value.is_finite() {
            return Err(HsvColourMapError::NonFiniteValue(value));
        }

        if value >= f64::from(self.max_iterations) {
            return Ok(Colour::BLACK);
        }

        let hue = 360.0 * value / f64::from(self.max_iterations);
        Ok(hsv_to_rgb(hue, 1.0, 1.0))
    }
}

/// Standard six-sector HSV to RGB conversion.
///
/// `h` in degrees `[0, 360)`, `s` and `v` in `[0, 1]`.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Colour {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (rp, gp, bp) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Colour {
        r: channel(rp + m),
        g: channel(gp + m),
        b: channel(bp + m),
    }
}

fn channel(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}
