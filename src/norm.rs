//! Standard normal distribution seam.
//!
//! The pricing and sensitivity formulas need exactly two functions from a
//! statistics library: the standard normal CDF `Φ` and PDF `φ`. Keeping them
//! behind this module means the rest of the crate never names the library,
//! and swapping it touches one file.

use std::f64::consts::SQRT_2;

use statrs::consts::SQRT_2PI;
use statrs::function::erf::erfc;

/// Standard normal cumulative distribution function Φ(x).
pub(crate) fn cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function φ(x).
pub(crate) fn pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}
