//! Core domain types for option pricing and implied volatility extraction.
//!
//! # Newtype Strategy
//!
//! **Outputs use newtypes** — [`Vol`] wraps the volatility a solve returns so
//! callers can't accidentally mix it with a price or a rate.
//!
//! **Inputs use bare `f64`** — API methods like `price(..., sigma: f64)`
//! accept raw floats for ergonomics. Requiring `price(Vol(0.2))` at every
//! call site adds ceremony without meaningful safety (the caller already
//! knows they're passing a volatility). Newtypes guard against *silent*
//! misuse of outputs, while inputs are self-documenting via parameter names.
//!
//! # Why no `Eq` or `Ord`?
//! [`Vol`] wraps `f64`, which does not implement `Eq` or `Ord` because `NaN`
//! breaks total ordering. We derive `PartialEq` and `PartialOrd` only.

use serde::{Deserialize, Serialize};

use crate::error::VolRootError;
use crate::validate::{validate_finite, validate_positive};

/// Option type: call or put.
///
/// Selects which payoff formula applies in pricing and implied volatility
/// extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Right to buy at strike price.
    Call,
    /// Right to sell at strike price.
    Put,
}

/// Implied volatility `σ`, measured as annualized standard deviation.
///
/// A vol of 0.20 represents 20% annualized volatility.
///
/// # Examples
/// ```
/// use volroot::Vol;
/// let vol = Vol(0.20);
/// assert_eq!(vol.0, 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Vol(pub f64);

/// Market parameters of a European option, fixed for the life of a pricing
/// or solving call.
///
/// Invariants are enforced once at construction (and again on
/// deserialization): `spot > 0`, `strike > 0`, `expiry > 0`, and the rate
/// and dividend yield finite. The rate may be negative — real-world nominal
/// rates can be. Values are immutable after creation, so downstream code
/// never re-validates.
///
/// # Examples
/// ```
/// use volroot::MarketParameters;
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 1.0).unwrap();
/// assert_eq!(params.spot(), 100.0);
/// assert_eq!(params.dividend_yield(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MarketParametersRaw", into = "MarketParametersRaw")]
pub struct MarketParameters {
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
}

#[derive(Serialize, Deserialize)]
struct MarketParametersRaw {
    spot: f64,
    strike: f64,
    rate: f64,
    #[serde(default)]
    dividend_yield: f64,
    expiry: f64,
}

impl TryFrom<MarketParametersRaw> for MarketParameters {
    type Error = VolRootError;
    fn try_from(raw: MarketParametersRaw) -> Result<Self, Self::Error> {
        Self::new(raw.spot, raw.strike, raw.rate, raw.expiry)?
            .with_dividend_yield(raw.dividend_yield)
    }
}

impl From<MarketParameters> for MarketParametersRaw {
    fn from(p: MarketParameters) -> Self {
        Self {
            spot: p.spot,
            strike: p.strike,
            rate: p.rate,
            dividend_yield: p.dividend_yield,
            expiry: p.expiry,
        }
    }
}

impl MarketParameters {
    /// Create market parameters with no dividend yield.
    ///
    /// # Arguments
    /// * `spot` — Current underlying price (must be > 0)
    /// * `strike` — Strike price (must be > 0)
    /// * `rate` — Continuously compounded risk-free rate (may be negative)
    /// * `expiry` — Time to expiry in years (must be > 0)
    ///
    /// # Errors
    /// Returns [`VolRootError::InvalidInput`] if `spot`, `strike`, or
    /// `expiry` is not positive and finite, or `rate` is not finite.
    pub fn new(spot: f64, strike: f64, rate: f64, expiry: f64) -> crate::error::Result<Self> {
        validate_positive(spot, "spot")?;
        validate_positive(strike, "strike")?;
        validate_finite(rate, "rate")?;
        validate_positive(expiry, "expiry")?;
        Ok(Self {
            spot,
            strike,
            rate,
            dividend_yield: 0.0,
            expiry,
        })
    }

    /// Set a continuously compounded dividend yield.
    ///
    /// # Errors
    /// Returns [`VolRootError::InvalidInput`] if `dividend_yield` is not
    /// finite.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> crate::error::Result<Self> {
        validate_finite(dividend_yield, "dividend_yield")?;
        self.dividend_yield = dividend_yield;
        Ok(self)
    }

    /// Current underlying price `S`.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price `K`.
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Continuously compounded risk-free rate `r`.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Continuously compounded dividend yield `q`.
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Time to expiry `T` in years.
    pub fn expiry(&self) -> f64 {
        self.expiry
    }
}
