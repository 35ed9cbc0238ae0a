#[macro_use]
mod macros;

pub mod area;
pub mod emissions;
pub mod energy;
pub mod power;
pub mod time;
pub mod water;

/// Replace `NaN` and infinities with zero, so that they never reach the rendered results.
#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
