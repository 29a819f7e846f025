//! Implied volatility extraction via Newton-Raphson root-finding.
//!
//! Given an observed market price, finds the volatility σ at which the
//! Black-Scholes price matches it — the one model input the market does not
//! quote directly. The iteration roots `f(σ) = price(σ) − market_price`
//! using vega as the analytic derivative:
//!
//! ```text
//! σ_{i+1} = σ_i − (price(σ_i) − market_price) / vega(σ_i)
//! ```
//!
//! Newton-Raphson is used rather than bisection because vega is a free,
//! cheap derivative and the price-volatility curve is smooth and monotonic,
//! giving quadratic convergence near the root. The trade-off is the flat
//! regime (deep out-of-the-money, short expiry) where vega vanishes and the
//! update is undefined; the solve then fails with
//! [`FailureReason::FlatVega`] instead of looping or emitting NaN. No
//! fallback bisection is attempted — callers needing robustness in that
//! regime supply their own bracketing.

use serde::{Deserialize, Serialize};

use crate::error::VolRootError;
use crate::greeks::vega;
use crate::pricing::price;
use crate::types::{MarketParameters, OptionType, Vol};
use crate::validate::validate_positive;

/// Floor applied when a Newton step overshoots to a non-positive volatility.
///
/// A single aggressive step from a high trial vol can land below zero, which
/// the pricer rejects as a domain error. Clamping to this floor keeps the
/// iteration alive; if the floor is still far from the root the solve
/// terminates through the flat-vega or iteration-budget paths with full
/// diagnostics instead of a fatal error mid-loop.
pub const VOL_FLOOR: f64 = 1e-4;

/// Vega magnitudes below this are treated as vanished: the Newton update
/// would divide by (numerically) zero.
pub const FLAT_VEGA_TOL: f64 = 1e-12;

/// Tuning for the Newton-Raphson iteration.
///
/// The defaults are the recommended starting point for equity-style quotes;
/// all three knobs are validated by [`ImpliedVolSolver::new`].
///
/// # Examples
/// ```
/// use volroot::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.initial_guess, 0.2);
/// assert_eq!(config.tolerance, 1e-6);
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Starting trial volatility σ₀ (must be > 0; it is fed straight into
    /// the pricer).
    pub initial_guess: f64,
    /// Convergence threshold on the absolute price error
    /// `|price(σ) − market_price|`, in price units. The test is on price
    /// error, not step size, and is applied in exactly one place.
    pub tolerance: f64,
    /// Iteration cap (must be > 0).
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.2,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

/// Why a solve stopped without converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    /// Vega vanished at the trial volatility; the Newton update is
    /// undefined. Typical for deep out-of-the-money options near expiry.
    FlatVega,
    /// The iteration budget was exhausted before the price error fell
    /// within tolerance.
    NotConverged,
}

/// Outcome of one implied volatility solve.
///
/// Every failure path carries the last trial volatility and the iteration
/// count, so the caller can diagnose the trajectory or retry with a larger
/// budget or a different guess. `iterations` is the number of Newton updates
/// performed before termination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolverResult {
    /// The price error fell within tolerance at `vol`.
    Converged {
        /// Volatility that reprices the quote within tolerance.
        vol: Vol,
        /// Newton updates performed before convergence.
        iterations: u32,
    },
    /// The iteration stopped without meeting the tolerance.
    Failed {
        /// Which termination path was taken.
        reason: FailureReason,
        /// Trial volatility when the solve stopped.
        last_vol: Vol,
        /// Newton updates performed before termination.
        iterations: u32,
    },
}

impl SolverResult {
    /// Whether the solve converged.
    pub fn is_converged(&self) -> bool {
        matches!(self, SolverResult::Converged { .. })
    }

    /// Newton updates performed before termination, on either path.
    pub fn iterations(&self) -> u32 {
        match self {
            SolverResult::Converged { iterations, .. } => *iterations,
            SolverResult::Failed { iterations, .. } => *iterations,
        }
    }
}

/// Newton-Raphson implied volatility solver.
///
/// Stateless across calls: each [`solve`](Self::solve) is an independent,
/// side-effect-free computation, so one solver can be shared freely across
/// threads.
///
/// # Examples
/// ```
/// use volroot::{ImpliedVolSolver, MarketParameters, OptionType, SolverConfig, SolverResult};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 1.0)?;
/// let solver = ImpliedVolSolver::new(SolverConfig {
///     initial_guess: 0.3,
///     ..SolverConfig::default()
/// })?;
///
/// match solver.solve(OptionType::Call, &params, 10.4506)? {
///     SolverResult::Converged { vol, .. } => assert!((vol.0 - 0.2).abs() < 1e-4),
///     SolverResult::Failed { reason, .. } => panic!("solve failed: {reason:?}"),
/// }
/// # Ok::<(), volroot::VolRootError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImpliedVolSolver {
    config: SolverConfig,
}

impl ImpliedVolSolver {
    /// Create a solver with the given tuning.
    ///
    /// # Errors
    /// Returns [`VolRootError::InvalidInput`] if `initial_guess` or
    /// `tolerance` is not positive and finite, or `max_iterations` is zero.
    pub fn new(config: SolverConfig) -> crate::error::Result<Self> {
        validate_positive(config.initial_guess, "initial_guess")?;
        validate_positive(config.tolerance, "tolerance")?;
        if config.max_iterations == 0 {
            return Err(VolRootError::InvalidInput {
                message: "max_iterations must be at least 1".into(),
            });
        }
        Ok(Self { config })
    }

    /// Create a solver with the recommended default tuning.
    pub fn with_defaults() -> Self {
        // Default tuning always passes validation
        Self {
            config: SolverConfig::default(),
        }
    }

    /// The solver's tuning.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the volatility at which the model price matches `market_price`.
    ///
    /// Iterates Newton-Raphson from the configured initial guess. Each pass
    /// first tests convergence on the absolute price error, then the
    /// flat-vega guard, then takes the update step; a step that lands at or
    /// below zero is clamped to [`VOL_FLOOR`]. The iteration state lives
    /// entirely on this call's stack and is discarded on return.
    ///
    /// # Arguments
    /// * `option_type` — Call or Put
    /// * `params` — Market parameters (validated at construction)
    /// * `market_price` — Observed option price (must be > 0)
    ///
    /// # Errors
    /// Returns [`VolRootError::InvalidInput`] if `market_price` is not
    /// positive and finite. A solve that terminates without a root is not an
    /// error: it is [`SolverResult::Failed`] with the reason, last trial
    /// volatility, and iteration count.
    pub fn solve(
        &self,
        option_type: OptionType,
        params: &MarketParameters,
        market_price: f64,
    ) -> crate::error::Result<SolverResult> {
        validate_positive(market_price, "market_price")?;

        #[cfg(feature = "logging")]
        tracing::debug!(
            ?option_type,
            market_price,
            initial_guess = self.config.initial_guess,
            tolerance = self.config.tolerance,
            max_iterations = self.config.max_iterations,
            "implied vol solve started"
        );

        let mut sigma = self.config.initial_guess;
        for iteration in 0..self.config.max_iterations {
            let model_price = price(option_type, params, sigma)?;
            let diff = model_price - market_price;

            if diff.abs() < self.config.tolerance {
                #[cfg(feature = "logging")]
                tracing::debug!(vol = sigma, iteration, "implied vol solve converged");
                return Ok(SolverResult::Converged {
                    vol: Vol(sigma),
                    iterations: iteration,
                });
            }

            let v = vega(params, sigma)?;
            if v.abs() < FLAT_VEGA_TOL {
                #[cfg(feature = "logging")]
                tracing::debug!(vol = sigma, iteration, "implied vol solve hit flat vega");
                return Ok(SolverResult::Failed {
                    reason: FailureReason::FlatVega,
                    last_vol: Vol(sigma),
                    iterations: iteration,
                });
            }

            sigma -= diff / v;
            if sigma <= 0.0 {
                sigma = VOL_FLOOR;
            }
        }

        #[cfg(feature = "logging")]
        tracing::debug!(
            vol = sigma,
            iterations = self.config.max_iterations,
            "implied vol solve exhausted iteration budget"
        );
        Ok(SolverResult::Failed {
            reason: FailureReason::NotConverged,
            last_vol: Vol(sigma),
            iterations: self.config.max_iterations,
        })
    }
}
