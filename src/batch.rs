//! Batch APIs for pricing and solving, with optional parallelism via the
//! `parallel` feature.
//!
//! Each element is an independent, side-effect-free computation, so the
//! parallel variants need no locking and preserve input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::implied::{ImpliedVolSolver, SolverResult};
use crate::pricing::price;
use crate::types::{MarketParameters, OptionType};

/// Price one option across a slice of volatilities, serially.
pub fn price_batch(
    option_type: OptionType,
    params: &MarketParameters,
    sigmas: &[f64],
) -> Vec<crate::error::Result<f64>> {
    sigmas
        .iter()
        .map(|&sigma| price(option_type, params, sigma))
        .collect()
}

/// Solve implied volatility for a slice of market prices, serially.
pub fn solve_batch(
    solver: &ImpliedVolSolver,
    option_type: OptionType,
    params: &MarketParameters,
    market_prices: &[f64],
) -> Vec<crate::error::Result<SolverResult>> {
    market_prices
        .iter()
        .map(|&market_price| solver.solve(option_type, params, market_price))
        .collect()
}

/// Parallel price batch if the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub fn price_batch_par(
    option_type: OptionType,
    params: &MarketParameters,
    sigmas: &[f64],
) -> Vec<crate::error::Result<f64>> {
    sigmas
        .par_iter()
        .map(|&sigma| price(option_type, params, sigma))
        .collect()
}

/// Parallel solve batch if the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub fn solve_batch_par(
    solver: &ImpliedVolSolver,
    option_type: OptionType,
    params: &MarketParameters,
    market_prices: &[f64],
) -> Vec<crate::error::Result<SolverResult>> {
    market_prices
        .par_iter()
        .map(|&market_price| solver.solve(option_type, params, market_price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VolRootError;
    use approx::assert_abs_diff_eq;

    fn make_params() -> MarketParameters {
        MarketParameters::new(100.0, 100.0, 0.05, 1.0).unwrap()
    }

    #[test]
    fn price_batch_aligns_with_inputs() {
        let params = make_params();
        let sigmas = [0.1, 0.2, 0.3];
        let results = price_batch(OptionType::Call, &params, &sigmas);
        assert_eq!(results.len(), 3);
        for (result, &sigma) in results.iter().zip(sigmas.iter()) {
            let expected = price(OptionType::Call, &params, sigma).unwrap();
            assert_abs_diff_eq!(*result.as_ref().unwrap(), expected, epsilon = 1e-15);
        }
    }

    #[test]
    fn price_batch_keeps_per_element_errors() {
        let params = make_params();
        let results = price_batch(OptionType::Call, &params, &[0.2, 0.0, 0.3]);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(VolRootError::Domain { .. })));
        assert!(results[2].is_ok());
    }

    #[test]
    fn solve_batch_recovers_vols() {
        let params = make_params();
        let solver = ImpliedVolSolver::with_defaults();
        let sigmas = [0.15, 0.25, 0.4];
        let prices: Vec<f64> = sigmas
            .iter()
            .map(|&s| price(OptionType::Put, &params, s).unwrap())
            .collect();
        let results = solve_batch(&solver, OptionType::Put, &params, &prices);
        for (result, &sigma_true) in results.iter().zip(sigmas.iter()) {
            match result.as_ref().unwrap() {
                SolverResult::Converged { vol, .. } => {
                    assert_abs_diff_eq!(vol.0, sigma_true, epsilon = 1e-6);
                }
                SolverResult::Failed { reason, .. } => panic!("solve failed: {reason:?}"),
            }
        }
    }

    #[test]
    fn empty_batch_is_empty() {
        let params = make_params();
        assert!(price_batch(OptionType::Call, &params, &[]).is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_batches_match_serial() {
        let params = make_params();
        let solver = ImpliedVolSolver::with_defaults();
        let sigmas: Vec<f64> = (1..=50).map(|i| 0.02 * i as f64).collect();
        let serial = price_batch(OptionType::Call, &params, &sigmas);
        let parallel = price_batch_par(OptionType::Call, &params, &sigmas);
        for (s, p) in serial.iter().zip(parallel.iter()) {
            assert_eq!(s.as_ref().unwrap(), p.as_ref().unwrap());
        }

        let prices: Vec<f64> = sigmas
            .iter()
            .map(|&s| price(OptionType::Call, &params, s).unwrap())
            .collect();
        let serial = solve_batch(&solver, OptionType::Call, &params, &prices);
        let parallel = solve_batch_par(&solver, OptionType::Call, &params, &prices);
        for (s, p) in serial.iter().zip(parallel.iter()) {
            assert_eq!(s.as_ref().unwrap(), p.as_ref().unwrap());
        }
    }
}
