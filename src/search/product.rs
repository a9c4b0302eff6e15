// src/search/product.rs

//! The product search: `a × e^b × φ^c × π^d` with `b` and `c` small
//! rationals whose denominators may themselves be constants.

use super::{check_size, check_target, check_tolerance, check_window, grid_size, in_window, Ranked, SearchSummary};
use crate::core::{relative_error, Constant, Result, ShovelcatError, E, PHI, PI};
use crate::expressions::Expr;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Denominator of a rational exponent: an integer or a named constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Divisor {
    Int(i64),
    Const(Constant),
}

impl Divisor {
    pub fn value(self) -> f64 {
        match self {
            Divisor::Int(n) => n as f64,
            Divisor::Const(c) => c.value(),
        }
    }

    pub fn to_expr(self) -> Expr {
        match self {
            Divisor::Int(n) => Expr::num(n as f64),
            Divisor::Const(c) => Expr::constant(c),
        }
    }

    /// `1, 2, π, e, φ`
    pub fn defaults() -> Vec<Divisor> {
        vec![
            Divisor::Int(1),
            Divisor::Int(2),
            Divisor::Const(Constant::Pi),
            Divisor::Const(Constant::E),
            Divisor::Const(Constant::Phi),
        ]
    }
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Divisor::Int(n) => write!(f, "{}", n),
            Divisor::Const(c) => write!(f, "{}", c.symbol()),
        }
    }
}

impl FromStr for Divisor {
    type Err = ShovelcatError;

    /// Accepts an integer (`"2"`) or a constant name or symbol (`"pi"`, `"φ"`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Divisor::Int(n));
        }
        Constant::lookup(s).map(Divisor::Const).ok_or_else(|| ShovelcatError::Config {
            message: format!("divisor '{}' is neither an integer nor a known constant", s),
        })
    }
}

/// The grid of a product search and its acceptance criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSpace {
    /// Values of the leading factor `a`.
    pub signs: Vec<i64>,
    /// Numerators of the `e` exponent.
    pub b_numerators: Vec<i64>,
    /// Numerators of the `φ` exponent.
    pub c_numerators: Vec<i64>,
    /// Denominators shared by both exponents.
    pub divisors: Vec<Divisor>,
    /// Integer powers of `π`.
    pub d_values: Vec<i64>,
    /// Open interval a value must fall in to be considered.
    pub window: (f64, f64),
    /// Maximum relative error of a hit.
    pub tolerance: f64,
    /// Number of hits to keep.
    pub limit: usize,
}

impl Default for ProductSpace {
    fn default() -> Self {
        Self {
            signs: vec![1, -1],
            b_numerators: (-5..=5).collect(),
            c_numerators: (-20..=4).collect(),
            divisors: Divisor::defaults(),
            d_values: vec![-2, -1, 0, 1, 2],
            window: (0.001, 0.1),
            tolerance: 0.01,
            limit: 20,
        }
    }
}

/// One point of the grid, before evaluation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProductPoint {
    sign: i64,
    b_num: i64,
    b_div: Divisor,
    c_num: i64,
    c_div: Divisor,
    d: i64,
}

impl ProductPoint {
    fn value(&self) -> f64 {
        let b = self.b_num as f64 / self.b_div.value();
        let c = self.c_num as f64 / self.c_div.value();
        // d is a small integer
        self.sign as f64 * E.powf(b) * PHI.powf(c) * PI.powi(self.d as i32)
    }
}

impl ProductSpace {
    /// Number of grid points, saturating on overflow.
    pub fn size(&self) -> usize {
        grid_size(&[
            self.signs.len(),
            self.b_numerators.len(),
            self.divisors.len(),
            self.c_numerators.len(),
            self.divisors.len(),
            self.d_values.len(),
        ])
    }

    /// Rejects spaces that cannot be searched.
    ///
    /// # Errors
    /// `ShovelcatError::InvalidSearchSpace` for an empty axis, more than
    /// [`MAX_POINTS`](super::MAX_POINTS) points, a zero integer divisor, a
    /// non-positive tolerance, or an empty or inverted window.
    pub fn validate(&self) -> Result<()> {
        let axes = [
            ("signs", self.signs.is_empty()),
            ("b_numerators", self.b_numerators.is_empty()),
            ("c_numerators", self.c_numerators.is_empty()),
            ("divisors", self.divisors.is_empty()),
            ("d_values", self.d_values.is_empty()),
        ];
        if let Some((axis, _)) = axes.iter().find(|(_, empty)| *empty) {
            return Err(ShovelcatError::InvalidSearchSpace {
                message: format!("axis '{}' is empty", axis),
            });
        }
        check_size(self.size())?;
        if self.divisors.contains(&Divisor::Int(0)) {
            return Err(ShovelcatError::InvalidSearchSpace {
                message: "divisors must not contain 0".to_string(),
            });
        }
        if self.d_values.iter().any(|d| i32::try_from(*d).is_err()) {
            return Err(ShovelcatError::InvalidSearchSpace {
                message: "d_values out of range".to_string(),
            });
        }
        check_tolerance(self.tolerance)?;
        check_window(self.window)
    }

    /// Visits every grid point in enumeration order with its value.
    pub(crate) fn for_each_point(&self, mut visit: impl FnMut(&ProductPoint, f64)) {
        for &sign in &self.signs {
            for &b_num in &self.b_numerators {
                for &b_div in &self.divisors {
                    for &c_num in &self.c_numerators {
                        for &c_div in &self.divisors {
                            for &d in &self.d_values {
                                let point = ProductPoint { sign, b_num, b_div, c_num, c_div, d };
                                visit(&point, point.value());
                            }
                        }
                    }
                }
            }
        }
    }

    /// Runs the search against `target`.
    ///
    /// # Errors
    /// `ShovelcatError::InvalidSearchSpace` if the space or target is unusable.
    pub fn search(&self, target: f64) -> Result<SearchSummary<ProductHit>> {
        self.validate()?;
        check_target(target)?;
        debug!(points = self.size(), target, "starting product search");

        let mut evaluated = 0;
        let mut skipped = 0;
        let mut hits = Vec::new();
        self.for_each_point(|point, value| {
            if !value.is_finite() {
                skipped += 1;
                return;
            }
            evaluated += 1;
            if !in_window(value, self.window) {
                return;
            }
            let rel_error = relative_error(value, target);
            if rel_error < self.tolerance {
                hits.push(ProductHit::new(point, value, rel_error));
            }
        });

        debug!(evaluated, skipped, hits = hits.len(), "product search finished");
        Ok(SearchSummary::finish(evaluated, skipped, hits, self.limit))
    }
}

/// A grid point whose value came within tolerance of the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductHit {
    pub sign: i64,
    pub b_num: i64,
    pub b_div: Divisor,
    pub c_num: i64,
    pub c_div: Divisor,
    pub d: i64,
    pub value: f64,
    pub rel_error: f64,
}

impl ProductHit {
    fn new(point: &ProductPoint, value: f64, rel_error: f64) -> Self {
        Self {
            sign: point.sign,
            b_num: point.b_num,
            b_div: point.b_div,
            c_num: point.c_num,
            c_div: point.c_div,
            d: point.d,
            value,
            rel_error,
        }
    }

    /// `1 × e^(-5/φ) × φ^(3/π) × π^-2`
    pub fn formula(&self) -> String {
        format!(
            "{} × e^({}/{}) × φ^({}/{}) × π^{}",
            self.sign, self.b_num, self.b_div, self.c_num, self.c_div, self.d
        )
    }

    /// The hit as an evaluable expression.
    pub fn to_expr(&self) -> Expr {
        let b = Expr::num(self.b_num as f64) / self.b_div.to_expr();
        let c = Expr::num(self.c_num as f64) / self.c_div.to_expr();
        Expr::num(self.sign as f64) * Expr::e().pow(b) * Expr::phi().pow(c) * Expr::pi().pow(Expr::num(self.d as f64))
    }
}

impl Ranked for ProductHit {
    fn rel_error(&self) -> f64 {
        self.rel_error
    }
}

impl fmt::Display for ProductHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {:<50} = {:.10} (err: {:.4}%)",
            self.formula(),
            self.value,
            self.rel_error * 100.0
        )
    }
}
