use crate::core::data::complex::Complex;

/// Number of iterations of `z = z^2 + c` a point survives before `|z|^2`
/// exceeds 4, or `max_iterations` if it never does within the budget.
///
/// The escape test runs before each step, so a point outside the radius-2
/// circle escapes at iteration 1. Pure and safe to call from any thread.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > 4.0 {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}
