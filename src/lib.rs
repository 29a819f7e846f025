//! # volroot
//!
//! Black-Scholes European option pricing and implied volatility extraction.
//!
//! Provides deterministic closed-form pricing, the analytic sensitivities
//! the pricing function exposes, and the inversion of the pricing function —
//! recovering the volatility consistent with an observed market price via
//! Newton-Raphson root-finding.
//!
//! ## Architecture
//!
//! - **`pricing`** — Black-Scholes-Merton call/put present values
//! - **`greeks`** — Vega (the solver's derivative), delta, gamma
//! - **`implied`** — Newton-Raphson implied volatility solver, the core
//! - **`batch`** — Slice-mapped pricing/solving, parallel behind the
//!   `parallel` feature
//!
//! ## Design
//!
//! - **Newtypes for outputs, bare `f64` for inputs.** [`Vol`] wraps the
//!   solver's result to prevent accidental mixing. Inputs take raw `f64`
//!   for ergonomics — validation happens once, inside
//!   [`MarketParameters::new`] and [`ImpliedVolSolver::new`].
//! - **No panics.** Every fallible operation returns [`Result`]. Library
//!   code never calls `unwrap()` or `expect()`.
//! - **Failures are data.** A solve that stops without a root returns
//!   [`SolverResult::Failed`] carrying the reason, last trial volatility,
//!   and iteration count — never a NaN, never a swallowed error.
//! - **Thread-safe.** Every operation is a pure function of its inputs with
//!   no shared mutable state; concurrent callers need no locking.
//! - **Serializable.** All value types implement Serde
//!   `Serialize` / `Deserialize`, with validation on deserialization where
//!   invariants exist ([`MarketParameters`]).
//!
//! ## Example
//!
//! ```
//! use volroot::{pricing, ImpliedVolSolver, MarketParameters, OptionType, SolverResult};
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.05, 1.0)?;
//! let call = pricing::price(OptionType::Call, &params, 0.2)?;
//!
//! let solver = ImpliedVolSolver::with_defaults();
//! let result = solver.solve(OptionType::Call, &params, call)?;
//! assert!(result.is_converged());
//! # Ok::<(), volroot::VolRootError>(())
//! ```

pub mod batch;
pub mod error;
pub mod greeks;
pub mod implied;
mod norm;
pub mod pricing;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{Result, VolRootError};
#[doc(inline)]
pub use implied::{FailureReason, ImpliedVolSolver, SolverConfig, SolverResult};
#[doc(inline)]
pub use types::{MarketParameters, OptionType, Vol};
