//! # gkquad: Adaptive Gauss-Kronrod Quadrature
//!
//! Numerical approximation of definite integrals of one-dimensional real
//! functions over finite intervals.
//!
//! ## Features
//!
//! - Embedded G7/K15 pair: 15 evaluations per interval serve both rules
//! - Local error indicator from the Gauss/Kronrod discrepancy
//! - Uniform bisection bounded by a halving recursion budget
//! - Opaque caller context forwarded to every integrand call
//! - Optional explicit work-list traversal for very deep subdivision
//! - Minimal dependencies
//!
//! ## Basic Usage
//!
//! ```rust
//! use gkquad::integrate;
//!
//! // The context can carry parameters or collect statistics
//! let mut calls = 0u64;
//! let area = integrate(
//!     |x: f64, calls: &mut u64| {
//!         *calls += 1;
//!         (x.sin() + x).ln()
//!     },
//!     &mut calls,
//!     1.0,
//!     2.0,
//! );
//!
//! assert!((area - 0.890373044577735).abs() < 1e-12);
//! assert_eq!(calls % 15, 0);
//! ```
//!
//! ## Recursion Budget
//!
//! [`integrate_with_budget`] takes a [`Budget`] or a plain integer:
//!
//! - **Positive** `n`: the interval may split while `n > 0`, each half
//!   receiving `n / 2`, so depth grows with `log2(n)`
//! - **Zero**: one rule application over the whole interval
//! - **Negative**: split until the error test passes, however deep
//!
//! ```rust
//! use gkquad::{integrate_with_budget, Budget};
//!
//! let f = |x: f64, _: &mut ()| x.sqrt();
//! let one_shot = integrate_with_budget(f, &mut (), 0.0, 1.0, 0);
//! let refined = integrate_with_budget(f, &mut (), 0.0, 1.0, Budget::Unlimited);
//!
//! assert!((refined - 2.0 / 3.0).abs() < (one_shot - 2.0 / 3.0).abs());
//! ```
//!
//! A result that ran out of budget before converging is returned without
//! any signal. [`Quadrature`] reports convergence, an error estimate and
//! evaluation counts, and [`Quadrature::try_integrate`] turns saturation
//! and non-finite values into a [`QuadratureError`].
//!
//! ## Algorithm Details
//!
//! Each interval [a, b] is mapped onto [-1, 1] and the integrand is
//! evaluated at the 15 Kronrod nodes, the first 7 of which are the Gauss
//! nodes. With `G` and `K` the two weighted sums, the error indicator is
//! `200 |K - G|^1.5`; the interval is accepted (returning `K`) when that
//! drops below `f64::EPSILON` or the budget is zero, otherwise it is split
//! at the midpoint and both halves are integrated left then right.
//!
//! ## References
//!
//! 1. Kronrod, A.S. (1965). "Nodes and Weights of Quadrature Formulas".
//!    Consultants Bureau.
//!
//! 2. Piessens, R., de Doncker-Kapenga, E., Überhuber, C., & Kahaner, D.
//!    (1983). "QUADPACK: A Subroutine Package for Automatic Integration".
//!    Springer.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod budget;
pub mod coefficients;
pub mod error;
pub mod solver;

pub use budget::{Budget, Traversal};
pub use coefficients::{QuadratureRule, GK15};
pub use error::QuadratureError;
pub use solver::{
    adaptive_integrate, evaluate_segment, integrate, integrate_with_budget, map_to_interval, quad,
    Integrand, QuadResult, Quadrature, SegmentEstimate, Stats,
};
