// src/search/nested.rs

//! Nested exponentials `e^(s × φ^(aπ + b))` over an evenly spaced `(a, b)` grid.

use super::{check_size, check_target, check_tolerance, check_window, grid_size, in_window, Ranked, SearchSummary};
use crate::core::{relative_error, Result, ShovelcatError, E, PHI, PI};
use crate::expressions::Expr;
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NestedSpace {
    /// Sign `s` applied to the inner power.
    pub signs: Vec<i64>,
    /// Inclusive range of the `π` coefficient `a`.
    pub a_range: (f64, f64),
    /// Inclusive range of the offset `b`.
    pub b_range: (f64, f64),
    /// Points per range, endpoints included.
    pub steps: usize,
    pub window: (f64, f64),
    pub tolerance: f64,
    pub limit: usize,
}

impl Default for NestedSpace {
    fn default() -> Self {
        Self {
            signs: vec![1, -1],
            a_range: (-2.0, 2.0),
            b_range: (-2.0, 2.0),
            steps: 41,
            window: (0.001, 0.1),
            tolerance: 0.001,
            limit: 10,
        }
    }
}

/// `steps` evenly spaced values from `low` to `high` inclusive.
pub(crate) fn linspace(low: f64, high: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let span = (high - low) / (steps - 1) as f64;
            (0..steps).map(|i| low + span * i as f64).collect()
        }
    }
}

impl NestedSpace {
    /// Number of grid points, saturating on overflow.
    pub fn size(&self) -> usize {
        grid_size(&[self.signs.len(), self.steps, self.steps])
    }

    /// # Errors
    /// `ShovelcatError::InvalidSearchSpace` for no signs, fewer than two
    /// steps, more than [`MAX_POINTS`](super::MAX_POINTS) points, an inverted
    /// range, a non-positive tolerance, or a bad window.
    pub fn validate(&self) -> Result<()> {
        if self.signs.is_empty() {
            return Err(ShovelcatError::InvalidSearchSpace { message: "axis 'signs' is empty".to_string() });
        }
        if self.steps < 2 {
            return Err(ShovelcatError::InvalidSearchSpace {
                message: format!("steps must be at least 2, got {}", self.steps),
            });
        }
        check_size(self.size())?;
        for (name, (low, high)) in [("a_range", self.a_range), ("b_range", self.b_range)] {
            if !(low.is_finite() && high.is_finite()) || low > high {
                return Err(ShovelcatError::InvalidSearchSpace {
                    message: format!("{} [{}, {}] is inverted", name, low, high),
                });
            }
        }
        check_tolerance(self.tolerance)?;
        check_window(self.window)
    }

    /// Runs the search against `target`.
    ///
    /// # Errors
    /// `ShovelcatError::InvalidSearchSpace` if the space or target is unusable.
    pub fn search(&self, target: f64) -> Result<SearchSummary<NestedHit>> {
        self.validate()?;
        check_target(target)?;
        debug!(points = self.size(), target, "starting nested search");

        let a_values = linspace(self.a_range.0, self.a_range.1, self.steps);
        let b_values = linspace(self.b_range.0, self.b_range.1, self.steps);
        let mut evaluated = 0;
        let mut skipped = 0;
        let mut hits = Vec::new();

        for &sign in &self.signs {
            for &a in &a_values {
                for &b in &b_values {
                    let value = E.powf(sign as f64 * PHI.powf(a * PI + b));
                    if !value.is_finite() {
                        skipped += 1;
                        continue;
                    }
                    evaluated += 1;
                    if !in_window(value, self.window) {
                        continue;
                    }
                    let rel_error = relative_error(value, target);
                    if rel_error < self.tolerance {
                        hits.push(NestedHit { sign, a, b, value, rel_error });
                    }
                }
            }
        }

        debug!(evaluated, skipped, hits = hits.len(), "nested search finished");
        Ok(SearchSummary::finish(evaluated, skipped, hits, self.limit))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NestedHit {
    pub sign: i64,
    pub a: f64,
    pub b: f64,
    pub value: f64,
    pub rel_error: f64,
}

impl NestedHit {
    /// `e^(-φ^(0.250π + 0.300))`
    pub fn formula(&self) -> String {
        let sign = if self.sign < 0 { "-" } else { "" };
        let (op, offset) = if self.b < 0.0 { ('-', -self.b) } else { ('+', self.b) };
        format!("e^({}φ^({:.3}π {} {:.3}))", sign, self.a, op, offset)
    }

    pub fn to_expr(&self) -> Expr {
        let inner = Expr::num(self.a) * Expr::pi() + Expr::num(self.b);
        Expr::e().pow(Expr::num(self.sign as f64) * Expr::phi().pow(inner))
    }
}

impl Ranked for NestedHit {
    fn rel_error(&self) -> f64 {
        self.rel_error
    }
}

impl fmt::Display for NestedHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {:<32} = {:.10} (error: {:.4}%)",
            self.formula(),
            self.value,
            self.rel_error * 100.0
        )
    }
}
