// src/search/solve.rs

//! Closed-form inversions of the headline forms.

use crate::core::{Result, ShovelcatError, PHI, PI};

/// Solves `prefactor × φ^x = target` for `x`.
///
/// # Errors
/// `ShovelcatError::Domain` unless `target / prefactor` is finite and positive.
pub fn solve_phi_exponent(target: f64, prefactor: f64) -> Result<f64> {
    let ratio = target / prefactor;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(ShovelcatError::domain(
            format!("{} × φ^x = {}", prefactor, target),
            "target / prefactor must be finite and positive",
        ));
    }
    Ok(ratio.ln() / PHI.ln())
}

/// Solves `e^(-φ^(π + δ)) = target` for `δ`.
///
/// # Errors
/// `ShovelcatError::Domain` unless `0 < target < 1`.
pub fn solve_nested_delta(target: f64) -> Result<f64> {
    if !(target > 0.0 && target < 1.0) {
        return Err(ShovelcatError::domain(
            format!("e^(-φ^(π + δ)) = {}", target),
            "target must lie in (0, 1)",
        ));
    }
    Ok((-target.ln()).ln() / PHI.ln() - PI)
}

/// The factor that turns `value` into `target`.
///
/// # Errors
/// `ShovelcatError::Domain` if `value` is zero or either argument is not finite.
pub fn correction_factor(value: f64, target: f64) -> Result<f64> {
    if !value.is_finite() || !target.is_finite() || value == 0.0 {
        return Err(ShovelcatError::domain(
            format!("{} / {}", target, value),
            "correction factor needs a finite, non-zero value",
        ));
    }
    Ok(target / value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ALPHA, E};

    #[test]
    fn phi_exponent_round_trips() -> Result<()> {
        let x = solve_phi_exponent(ALPHA, PI)?;
        assert!((PI * PHI.powf(x) - ALPHA).abs() < 1e-15);
        // π × φ^(-4π) sits close to α, so x is close to -4π
        assert!((x + 4.0 * PI).abs() < 0.05);
        Ok(())
    }

    #[test]
    fn nested_delta_round_trips() -> Result<()> {
        let delta = solve_nested_delta(ALPHA)?;
        let value = E.powf(-PHI.powf(PI + delta));
        assert!((value - ALPHA).abs() / ALPHA < 1e-12);
        Ok(())
    }

    #[test]
    fn out_of_domain_arguments_are_errors() {
        assert!(solve_phi_exponent(-ALPHA, 1.0).is_err());
        assert!(solve_phi_exponent(ALPHA, 0.0).is_err());
        assert!(solve_nested_delta(1.0).is_err());
        assert!(solve_nested_delta(0.0).is_err());
        assert!(correction_factor(0.0, ALPHA).is_err());
    }

    #[test]
    fn correction_factor_is_the_ratio() -> Result<()> {
        let base = PI * PHI.powf(-4.0 * PI);
        let k = correction_factor(base, ALPHA)?;
        assert!((base * k - ALPHA).abs() < 1e-15);
        Ok(())
    }
}
