//! Errors reported by the checked integration surface.
//!
//! The raw entry points never fail: they always return a number, let NaN
//! and infinity propagate, and silently accept whatever estimate they have
//! when the budget runs out. [`crate::Quadrature::try_integrate`] turns
//! those situations into errors.

use thiserror::Error;

/// Errors that can occur during checked integration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    /// An interval bound is NaN or infinite
    #[error("interval bounds must be finite, got [{a}, {b}]")]
    NonFiniteBound {
        /// Lower bound
        a: f64,
        /// Upper bound
        b: f64,
    },

    /// The integrand produced a NaN or infinite estimate
    #[error("integral estimate is not finite: {value}")]
    NonFiniteResult {
        /// The estimate that was produced
        value: f64,
    },

    /// Some segments were accepted only because their budget ran out
    #[error("{saturated_segments} segment(s) exhausted the recursion budget before converging (estimate {value})")]
    NotConverged {
        /// Best estimate at the depth reached
        value: f64,
        /// Number of segments accepted without passing the error test
        saturated_segments: u64,
    },
}
