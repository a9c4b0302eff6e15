// src/search/significance.rs

//! Look-elsewhere estimate for the product search.
//!
//! A grid of tens of thousands of values will land near almost anything.
//! [`ProductGrid::significance`] measures how often a random target in the
//! window is matched as well as α is.

use super::{check_tolerance, in_window, ProductSpace};
use crate::core::{Result, ShovelcatError};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::Serialize;
use tracing::debug;

/// Sorted, finite in-window values of a product space.
#[derive(Debug, Clone)]
pub struct ProductGrid {
    values: Vec<f64>,
    window: (f64, f64),
}

/// Result of a significance run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Significance {
    /// Random targets drawn.
    pub samples: usize,
    /// Targets with at least one grid value within tolerance.
    pub matched: usize,
    /// `matched / samples`
    pub fraction: f64,
    pub tolerance: f64,
    /// Number of grid values inside the window.
    pub grid_values: usize,
}

impl ProductGrid {
    /// Evaluates every point of `space` once.
    ///
    /// # Errors
    /// Propagates `ProductSpace::validate`.
    pub fn build(space: &ProductSpace) -> Result<Self> {
        space.validate()?;
        let mut values = Vec::with_capacity(space.size());
        space.for_each_point(|_, value| {
            if value.is_finite() && in_window(value, space.window) {
                values.push(value);
            }
        });
        values.sort_by(f64::total_cmp);
        debug!(values = values.len(), "product grid built");
        Ok(Self { values, window: space.window })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of grid values whose relative error against `target` is below
    /// `tolerance`. `target` must be positive.
    pub fn count_within(&self, target: f64, tolerance: f64) -> usize {
        let low = target - tolerance * target;
        let high = target + tolerance * target;
        let start = self.values.partition_point(|&v| v <= low);
        let end = self.values.partition_point(|&v| v < high);
        end.saturating_sub(start)
    }

    /// Draws `samples` targets log-uniformly from the window and counts how
    /// many are matched by some grid value within `tolerance`.
    ///
    /// # Errors
    /// `ShovelcatError::InvalidSearchSpace` for zero samples, a non-positive
    /// tolerance, or a window that is not strictly positive.
    pub fn significance(&self, samples: usize, tolerance: f64, seed: u64) -> Result<Significance> {
        if samples == 0 {
            return Err(ShovelcatError::InvalidSearchSpace {
                message: "samples must be positive".to_string(),
            });
        }
        check_tolerance(tolerance)?;
        let (low, high) = self.window;
        if low <= 0.0 {
            return Err(ShovelcatError::InvalidSearchSpace {
                message: format!("log-uniform sampling needs a positive window, got ({}, {})", low, high),
            });
        }

        let (ln_low, ln_high) = (low.ln(), high.ln());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut matched = 0;
        for _ in 0..samples {
            let u: f64 = rng.random();
            let target = (ln_low + u * (ln_high - ln_low)).exp();
            if self.count_within(target, tolerance) > 0 {
                matched += 1;
            }
        }

        debug!(samples, matched, "significance estimated");
        Ok(Significance {
            samples,
            matched,
            fraction: matched as f64 / samples as f64,
            tolerance,
            grid_values: self.values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALPHA;

    #[test]
    fn count_within_agrees_with_search() -> Result<()> {
        let space = ProductSpace { limit: usize::MAX, ..ProductSpace::default() };
        let grid = ProductGrid::build(&space)?;
        let hits = space.search(ALPHA)?.hits.len();
        assert_eq!(grid.count_within(ALPHA, space.tolerance), hits);
        Ok(())
    }

    #[test]
    fn significance_is_deterministic_for_a_seed() -> Result<()> {
        let grid = ProductGrid::build(&ProductSpace::default())?;
        let first = grid.significance(500, 0.001, 7)?;
        let second = grid.significance(500, 0.001, 7)?;
        assert_eq!(first, second);
        assert!(first.fraction >= 0.0 && first.fraction <= 1.0);
        assert_eq!(first.samples, 500);
        Ok(())
    }

    #[test]
    fn wide_tolerance_matches_everything() -> Result<()> {
        let grid = ProductGrid::build(&ProductSpace::default())?;
        let sig = grid.significance(200, 0.5, 1)?;
        assert_eq!(sig.matched, 200);
        Ok(())
    }

    #[test]
    fn zero_samples_rejected() -> Result<()> {
        let grid = ProductGrid::build(&ProductSpace::default())?;
        assert!(grid.significance(0, 0.01, 1).is_err());
        Ok(())
    }
}
