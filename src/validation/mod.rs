// src/validation/mod.rs

//! Numeric identity checks for the constants everything else is built on.
//!
//! Exact identities (`φ² = φ + 1`, Euler's identity) are checked at
//! floating-point tolerance. Near-identities such as `2π·h_info ≈ 1` carry
//! their own looser tolerance.

use crate::core::{Result, ShovelcatError, FIBONACCI, PHI, PI};
use crate::expressions::gamma;
use crate::models::h_info;
use num_complex::Complex;
use num_traits::{One, Zero};
use serde::Serialize;
use std::fmt;

// Default tolerance for identities that hold exactly in real arithmetic
const DEFAULT_TOLERANCE: f64 = 1e-12;
const FIBONACCI_TOLERANCE: f64 = 1e-4;
const H_INFO_TOLERANCE: f64 = 1e-2;

/// Outcome of comparing two sides of an identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityCheck {
    pub name: String,
    pub lhs: f64,
    pub rhs: f64,
    pub tolerance: f64,
    pub passed: bool,
}

impl IdentityCheck {
    /// Builds a check without failing on a violation.
    pub fn evaluate(name: impl Into<String>, lhs: f64, rhs: f64, tolerance: f64) -> Self {
        Self {
            name: name.into(),
            lhs,
            rhs,
            tolerance,
            passed: (lhs - rhs).abs() <= tolerance,
        }
    }

    /// `|lhs - rhs|`
    pub fn deviation(&self) -> f64 {
        (self.lhs - self.rhs).abs()
    }
}

impl fmt::Display for IdentityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { "ok" } else { "FAILED" };
        write!(
            f,
            "  [{:>6}] {:<28} {:.15} vs {:.15} (|Δ| = {:.3e}, tol {:.0e})",
            mark,
            self.name,
            self.lhs,
            self.rhs,
            self.deviation(),
            self.tolerance
        )
    }
}

/// Checks that `lhs` and `rhs` agree within `tolerance`.
///
/// # Returns
/// * `Ok(IdentityCheck)` with `passed == true` if the identity holds.
/// * `Err(ShovelcatError::IdentityViolation)` if it does not.
pub fn check_identity(name: &str, lhs: f64, rhs: f64, tolerance: f64) -> Result<IdentityCheck> {
    let check = IdentityCheck::evaluate(name, lhs, rhs, tolerance);
    if check.passed {
        Ok(check)
    } else {
        Err(ShovelcatError::IdentityViolation {
            name: name.to_string(),
            lhs,
            rhs,
            tolerance,
        })
    }
}

/// `|e^(iπ) + 1|`, computed in the complex plane.
pub fn euler_identity_residual() -> f64 {
    let i_pi = Complex::new(f64::zero(), PI);
    (i_pi.exp() + Complex::one()).norm()
}

/// Runs every standard identity. Failed checks are included, not dropped.
pub fn standard_checks() -> Vec<IdentityCheck> {
    let f11 = FIBONACCI[11] as f64;
    let f12 = FIBONACCI[12] as f64;
    vec![
        IdentityCheck::evaluate("φ² = φ + 1", PHI * PHI, PHI + 1.0, DEFAULT_TOLERANCE),
        IdentityCheck::evaluate("1/φ = φ - 1", 1.0 / PHI, PHI - 1.0, DEFAULT_TOLERANCE),
        IdentityCheck::evaluate("φ = 2cos(π/5)", PHI, 2.0 * (PI / 5.0).cos(), DEFAULT_TOLERANCE),
        IdentityCheck::evaluate("F₁₂/F₁₁ → φ", f12 / f11, PHI, FIBONACCI_TOLERANCE),
        IdentityCheck::evaluate("|e^(iπ) + 1| = 0", euler_identity_residual(), 0.0, DEFAULT_TOLERANCE),
        IdentityCheck::evaluate("1/3 + 2/3 = 1", 1.0 / 3.0 + 2.0 / 3.0, 1.0, DEFAULT_TOLERANCE),
        IdentityCheck::evaluate("2π·h_info ≈ 1", 2.0 * PI * h_info(), 1.0, H_INFO_TOLERANCE),
        IdentityCheck::evaluate("Γ(1/2) = √π", gamma(0.5), PI.sqrt(), 1e-10),
    ]
}
