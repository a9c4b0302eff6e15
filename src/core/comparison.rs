// src/core/comparison.rs

use super::error::{Result, ShovelcatError};
use serde::Serialize;
use std::fmt;

/// A computed value held up against a target constant.
///
/// This is the unit every derivation reports: what the formula gives,
/// what was measured, their ratio, and the relative error in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Label of the formula that produced `value`.
    pub name: String,
    /// The computed value.
    pub value: f64,
    /// The value it is compared against.
    pub target: f64,
    /// `value / target`
    pub ratio: f64,
    /// `|value - target| / |target| × 100`
    pub error_pct: f64,
}

impl Comparison {
    /// Compares `value` against `target`.
    ///
    /// # Errors
    /// `ShovelcatError::Domain` if the target is zero or either side is not finite.
    pub fn new(name: impl Into<String>, value: f64, target: f64) -> Result<Self> {
        let name = name.into();
        if !value.is_finite() || !target.is_finite() {
            return Err(ShovelcatError::domain(name, "comparison requires finite values"));
        }
        if target == 0.0 {
            return Err(ShovelcatError::domain(name, "cannot compare against a zero target"));
        }
        Ok(Self {
            ratio: value / target,
            error_pct: relative_error(value, target) * 100.0,
            name,
            value,
            target,
        })
    }

    /// Relative error as a fraction rather than a percentage.
    pub fn rel_error(&self) -> f64 {
        self.error_pct / 100.0
    }

    pub fn rating(&self) -> Rating {
        Rating::from_error_pct(self.error_pct)
    }

    /// True when the relative error (as a fraction) is below `tolerance`.
    pub fn within(&self, tolerance: f64) -> bool {
        self.rel_error() < tolerance
    }
}

/// Star rating of a relative error, from `Exact` (below 0.001%) down to `Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rating {
    Exact,
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl Rating {
    /// Rates an error given in percent.
    pub fn from_error_pct(error_pct: f64) -> Self {
        match error_pct {
            e if e < 0.001 => Rating::Exact,
            e if e < 0.01 => Rating::Excellent,
            e if e < 0.1 => Rating::VeryGood,
            e if e < 1.0 => Rating::Good,
            e if e < 5.0 => Rating::Fair,
            _ => Rating::Poor,
        }
    }

    pub fn stars(self) -> &'static str {
        match self {
            Rating::Exact => "★★★★★",
            Rating::Excellent => "★★★★☆",
            Rating::VeryGood => "★★★☆☆",
            Rating::Good => "★★☆☆☆",
            Rating::Fair => "★☆☆☆☆",
            Rating::Poor => "☆☆☆☆☆",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Rating::Exact => "EXACT",
            Rating::Excellent => "Excellent",
            Rating::VeryGood => "Very Good",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::Poor => "Poor",
        };
        write!(f, "{} {}", self.stars(), word)
    }
}

/// `|value - target| / |target|`. Callers guarantee a non-zero target.
pub fn relative_error(value: f64, target: f64) -> f64 {
    (value - target).abs() / target.abs()
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {:<40} = {:.12}  (ratio: {:.6}, error: {:.4}%)",
            self.name, self.value, self.ratio, self.error_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_ratio_and_error() {
        let cmp = Comparison::new("half", 0.5, 1.0).unwrap();
        assert!((cmp.ratio - 0.5).abs() < 1e-12);
        assert!((cmp.error_pct - 50.0).abs() < 1e-12);
        assert!(cmp.within(0.51));
        assert!(!cmp.within(0.5));
    }

    #[test]
    fn rejects_zero_target() {
        assert!(matches!(Comparison::new("x", 1.0, 0.0), Err(ShovelcatError::Domain { .. })));
    }

    #[test]
    fn rejects_non_finite_value() {
        assert!(Comparison::new("x", f64::NAN, 1.0).is_err());
    }

    #[test]
    fn display_pads_the_label() {
        let cmp = Comparison::new("φ^(-10)", 0.0081, 0.0073).unwrap();
        let line = cmp.to_string();
        assert!(line.starts_with("  φ^(-10)"));
        assert!(line.contains("ratio:"));
        assert!(line.ends_with("%)"));
    }

    #[test]
    fn ratings_follow_error_bands() {
        assert_eq!(Rating::from_error_pct(0.0005), Rating::Exact);
        assert_eq!(Rating::from_error_pct(0.001), Rating::Excellent);
        assert_eq!(Rating::from_error_pct(0.05), Rating::VeryGood);
        assert_eq!(Rating::from_error_pct(1.8), Rating::Fair);
        assert_eq!(Rating::from_error_pct(47.0), Rating::Poor);
        let cmp = Comparison::new("half", 0.5, 1.0).unwrap();
        assert_eq!(cmp.rating().to_string(), "☆☆☆☆☆ Poor");
    }
}
