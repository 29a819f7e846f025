//! Black-Scholes-Merton pricing of European options.
//!
//! # Formula
//! ```text
//! d1 = ( ln(S/K) + (r − q + σ²/2)·T ) / (σ√T)
//! d2 = d1 − σ√T
//!
//! call = S·e^(−qT)·Φ(d1) − K·e^(−rT)·Φ(d2)
//! put  = K·e^(−rT)·Φ(−d2) − S·e^(−qT)·Φ(−d1)
//! ```
//!
//! where `Φ` is the standard normal CDF and `q` the continuous dividend
//! yield (zero unless set on [`MarketParameters`]).
//!
//! # References
//! - Black, F. & Scholes, M. "The Pricing of Options and Corporate
//!   Liabilities" (1973)
//! - Merton, R. "Theory of Rational Option Pricing" (1973)

use crate::error::VolRootError;
use crate::norm;
use crate::types::{MarketParameters, OptionType};

/// Compute the `(d1, d2)` intermediate terms.
///
/// `d1`/`d2` divide by `σ√T`; zero volatility is therefore a domain error
/// here rather than a NaN propagated downstream. `T > 0` is guaranteed by
/// the [`MarketParameters`] invariant.
pub(crate) fn d1_d2(params: &MarketParameters, sigma: f64) -> crate::error::Result<(f64, f64)> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(VolRootError::Domain {
            message: format!("sigma must be positive and finite, got {sigma}"),
        });
    }
    let sqrt_t = params.expiry().sqrt();
    let sigma_sqrt_t = sigma * sqrt_t;
    let d1 = ((params.spot() / params.strike()).ln()
        + (params.rate() - params.dividend_yield() + 0.5 * sigma * sigma) * params.expiry())
        / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;
    Ok((d1, d2))
}

/// Black-Scholes-Merton present value of a European option.
///
/// # Arguments
/// * `option_type` — Call or Put
/// * `params` — Market parameters (validated at construction)
/// * `sigma` — Annualized volatility (must be > 0)
///
/// # Errors
/// Returns [`VolRootError::Domain`] if `sigma` is zero, negative, or
/// non-finite.
///
/// # Examples
/// ```
/// use volroot::{pricing, MarketParameters, OptionType};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 1.0)?;
/// let call = pricing::price(OptionType::Call, &params, 0.2)?;
/// assert!((call - 10.4506).abs() < 1e-4);
/// # Ok::<(), volroot::VolRootError>(())
/// ```
pub fn price(
    option_type: OptionType,
    params: &MarketParameters,
    sigma: f64,
) -> crate::error::Result<f64> {
    let (d1, d2) = d1_d2(params, sigma)?;
    let discounted_spot = params.spot() * (-params.dividend_yield() * params.expiry()).exp();
    let discounted_strike = params.strike() * (-params.rate() * params.expiry()).exp();
    let value = match option_type {
        OptionType::Call => discounted_spot * norm::cdf(d1) - discounted_strike * norm::cdf(d2),
        OptionType::Put => discounted_strike * norm::cdf(-d2) - discounted_spot * norm::cdf(-d1),
    };
    Ok(value)
}
