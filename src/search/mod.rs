// src/search/mod.rs

//! Brute-force searches for formulas that land near a target value.
//!
//! * [`ProductSpace`] enumerates `a × e^b × φ^c × π^d` over small rational
//!   exponents.
//! * [`NestedSpace`] enumerates `e^(±φ^(aπ + b))` over an evenly spaced grid.
//! * [`ProductGrid`] precomputes the product values so the chance of a
//!   random target being hit can be estimated.
//! * The [`solve`] functions invert the headline forms exactly.

pub mod nested;
pub mod product;
pub mod significance;
pub mod solve;

pub use nested::{NestedHit, NestedSpace};
pub use product::{Divisor, ProductHit, ProductSpace};
pub use significance::{ProductGrid, Significance};
pub use solve::{correction_factor, solve_nested_delta, solve_phi_exponent};

use crate::core::{Result, ShovelcatError};
use serde::Serialize;

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSummary<H> {
    /// Combinations that produced a finite value.
    pub evaluated: usize,
    /// Combinations that could not be evaluated (non-finite results).
    pub skipped: usize,
    /// Hits sorted by ascending relative error, truncated to the search limit.
    pub hits: Vec<H>,
}

/// Implemented by hit types so they can be ranked uniformly.
pub trait Ranked {
    fn rel_error(&self) -> f64;
}

impl<H: Ranked> SearchSummary<H> {
    /// Sorts `hits` by error and keeps the first `limit`. Equal errors keep
    /// the order in which they were found.
    pub(crate) fn finish(evaluated: usize, skipped: usize, mut hits: Vec<H>, limit: usize) -> Self {
        hits.sort_by(|a, b| a.rel_error().total_cmp(&b.rel_error()));
        hits.truncate(limit);
        Self { evaluated, skipped, hits }
    }

    /// The hit with the smallest relative error.
    pub fn best(&self) -> Option<&H> {
        self.hits.first()
    }
}

/// Largest number of grid points a search space may enumerate.
pub const MAX_POINTS: usize = 10_000_000;

/// Product of axis lengths, saturating at `usize::MAX` on overflow.
pub(crate) fn grid_size(axes: &[usize]) -> usize {
    axes.iter()
        .try_fold(1usize, |acc, &len| acc.checked_mul(len))
        .unwrap_or(usize::MAX)
}

pub(crate) fn check_size(size: usize) -> Result<()> {
    if size > MAX_POINTS {
        return Err(ShovelcatError::InvalidSearchSpace {
            message: format!("space has more than {} points", MAX_POINTS),
        });
    }
    Ok(())
}

/// Checks an open `(low, high)` acceptance window.
pub(crate) fn check_window(window: (f64, f64)) -> Result<()> {
    let (low, high) = window;
    if !(low.is_finite() && high.is_finite()) || low >= high {
        return Err(ShovelcatError::InvalidSearchSpace {
            message: format!("window ({}, {}) is empty or inverted", low, high),
        });
    }
    Ok(())
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_nan() || tolerance <= 0.0 {
        return Err(ShovelcatError::InvalidSearchSpace {
            message: format!("tolerance must be positive, got {}", tolerance),
        });
    }
    Ok(())
}

pub(crate) fn check_target(target: f64) -> Result<()> {
    if !target.is_finite() || target == 0.0 {
        return Err(ShovelcatError::InvalidSearchSpace {
            message: format!("target must be finite and non-zero, got {}", target),
        });
    }
    Ok(())
}

/// True when `value` lies strictly inside `window`.
pub(crate) fn in_window(value: f64, window: (f64, f64)) -> bool {
    window.0 < value && value < window.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Hit(&'static str, f64);

    impl Ranked for Hit {
        fn rel_error(&self) -> f64 {
            self.1
        }
    }

    #[test]
    fn finish_sorts_stably_and_truncates() {
        let hits = vec![Hit("a", 0.3), Hit("b", 0.1), Hit("c", 0.3), Hit("d", 0.1)];
        let summary = SearchSummary::finish(4, 0, hits, 3);
        assert_eq!(summary.hits, vec![Hit("b", 0.1), Hit("d", 0.1), Hit("a", 0.3)]);
        assert_eq!(summary.best(), Some(&Hit("b", 0.1)));
    }

    #[test]
    fn window_checks() {
        assert!(check_window((0.001, 0.1)).is_ok());
        assert!(check_window((0.1, 0.1)).is_err());
        assert!(check_window((0.2, 0.1)).is_err());
        assert!(in_window(0.05, (0.001, 0.1)));
        assert!(!in_window(0.1, (0.001, 0.1)));
        assert!(!in_window(-0.05, (0.001, 0.1)));
    }

    #[test]
    fn tolerance_and_target_checks() {
        assert!(check_tolerance(0.01).is_ok());
        assert!(check_tolerance(0.0).is_err());
        assert!(check_tolerance(f64::NAN).is_err());
        assert!(check_target(0.0).is_err());
        assert!(check_target(f64::INFINITY).is_err());
    }
}
