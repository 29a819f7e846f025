//! Analytic sensitivities of the Black-Scholes-Merton price.
//!
//! # Formulas
//! ```text
//! vega  = S·e^(−qT)·φ(d1)·√T
//! delta = e^(−qT)·Φ(d1)            (call)
//!       = −e^(−qT)·Φ(−d1)          (put)
//! gamma = e^(−qT)·φ(d1) / (S·σ·√T)
//! ```
//!
//! Vega is reported per unit of volatility (a vega of 37.5 means the price
//! moves ≈ 0.375 for a one-point move in σ). It is non-negative for all
//! valid inputs — the price is monotonically non-decreasing in volatility
//! for both calls and puts — which is what lets the Newton iteration in
//! [`implied`](crate::implied) use it as a convergence direction.

use crate::norm;
use crate::pricing::d1_d2;
use crate::types::{MarketParameters, OptionType};

/// Sensitivity of the option price to volatility, `∂price/∂σ`.
///
/// Identical for calls and puts.
///
/// # Errors
/// Returns [`VolRootError`](crate::VolRootError) `::Domain` if `sigma` is
/// zero, negative, or non-finite.
///
/// # Examples
/// ```
/// use volroot::{greeks, MarketParameters};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 1.0)?;
/// let vega = greeks::vega(&params, 0.2)?;
/// assert!((vega - 37.524).abs() < 1e-3);
/// # Ok::<(), volroot::VolRootError>(())
/// ```
pub fn vega(params: &MarketParameters, sigma: f64) -> crate::error::Result<f64> {
    let (d1, _) = d1_d2(params, sigma)?;
    let discounted_spot = params.spot() * (-params.dividend_yield() * params.expiry()).exp();
    Ok(discounted_spot * norm::pdf(d1) * params.expiry().sqrt())
}

/// Sensitivity of the option price to the underlying, `∂price/∂S`.
///
/// # Errors
/// Returns [`VolRootError`](crate::VolRootError) `::Domain` if `sigma` is
/// zero, negative, or non-finite.
pub fn delta(
    option_type: OptionType,
    params: &MarketParameters,
    sigma: f64,
) -> crate::error::Result<f64> {
    let (d1, _) = d1_d2(params, sigma)?;
    let q_discount = (-params.dividend_yield() * params.expiry()).exp();
    let value = match option_type {
        OptionType::Call => q_discount * norm::cdf(d1),
        OptionType::Put => -q_discount * norm::cdf(-d1),
    };
    Ok(value)
}

/// Second-order sensitivity to the underlying, `∂²price/∂S²`.
///
/// Identical for calls and puts.
///
/// # Errors
/// Returns [`VolRootError`](crate::VolRootError) `::Domain` if `sigma` is
/// zero, negative, or non-finite.
pub fn gamma(params: &MarketParameters, sigma: f64) -> crate::error::Result<f64> {
    let (d1, _) = d1_d2(params, sigma)?;
    let q_discount = (-params.dividend_yield() * params.expiry()).exp();
    Ok(q_discount * norm::pdf(d1) / (params.spot() * sigma * params.expiry().sqrt()))
}
