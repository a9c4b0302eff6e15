// src/models/universe.rs
use super::h_info;
use crate::core::constants::physical::{planck_time, LIGHT_YEAR, OBSERVED_AGE_S, OBSERVED_RADIUS_M, SECONDS_PER_YEAR};
use crate::core::{relative_error, C, PI};
use serde::Serialize;

/// Age, size and circumference time of the universe predicted from `h_info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniverseDerivation {
    pub h_info: f64,
}

/// Everything [`UniverseDerivation::derive`] computes, next to observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniverseOutcome {
    pub h_info: f64,
    pub log10_age_planck: f64,
    pub age_s: f64,
    pub age_gyr: f64,
    pub age_error_pct: f64,
    pub expansion_factor: f64,
    /// `R_obs / (c × t_obs)`, the expansion factor observation implies.
    pub observed_expansion: f64,
    pub radius_m: f64,
    pub radius_gly: f64,
    pub radius_error_pct: f64,
    pub circumference_time_gyr: f64,
    /// Share of the circumference time already elapsed, in percent.
    pub fraction_complete_pct: f64,
}

impl Default for UniverseDerivation {
    fn default() -> Self {
        Self { h_info: h_info() }
    }
}

impl UniverseDerivation {
    /// `(seconds, log10 of the age in Planck times)` with
    /// `log10 = π²/h − 1 − h/π`.
    pub fn predict_age(&self) -> (f64, f64) {
        let h = self.h_info;
        let log_age = PI * PI / h - 1.0 - h / PI;
        (10f64.powf(log_age) * planck_time(), log_age)
    }

    /// `(metres, expansion factor)`: `R = (π + h) × c × t`.
    pub fn predict_radius(&self, age_s: f64) -> (f64, f64) {
        let expansion = PI + self.h_info;
        (expansion * C * age_s, expansion)
    }

    /// `2π(π + h) × t`
    pub fn circumference_time(&self, age_s: f64) -> f64 {
        2.0 * PI * (PI + self.h_info) * age_s
    }

    /// Predicts the age, then radius and circumference time from the
    /// observed age.
    pub fn derive(&self) -> UniverseOutcome {
        let (age_s, log10_age_planck) = self.predict_age();
        let (radius_m, expansion_factor) = self.predict_radius(OBSERVED_AGE_S);
        let circumference_s = self.circumference_time(OBSERVED_AGE_S);
        let gyr = 1e9 * SECONDS_PER_YEAR;
        UniverseOutcome {
            h_info: self.h_info,
            log10_age_planck,
            age_s,
            age_gyr: age_s / gyr,
            age_error_pct: relative_error(age_s, OBSERVED_AGE_S) * 100.0,
            expansion_factor,
            observed_expansion: OBSERVED_RADIUS_M / (C * OBSERVED_AGE_S),
            radius_m,
            radius_gly: radius_m / LIGHT_YEAR / 1e9,
            radius_error_pct: relative_error(radius_m, OBSERVED_RADIUS_M) * 100.0,
            circumference_time_gyr: circumference_s / gyr,
            fraction_complete_pct: OBSERVED_AGE_S / circumference_s * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicted_age_is_near_observed() {
        let outcome = UniverseDerivation::default().derive();
        assert!((outcome.log10_age_planck - 60.908).abs() < 1e-3);
        assert!((outcome.age_gyr - 13.82).abs() < 0.01);
        assert!(outcome.age_error_pct < 0.2);
    }

    #[test]
    fn radius_uses_pi_plus_h() {
        let model = UniverseDerivation::default();
        let (radius, expansion) = model.predict_radius(OBSERVED_AGE_S);
        assert!((expansion - (PI + h_info())).abs() < 1e-15);
        assert!((radius / (C * OBSERVED_AGE_S) - expansion).abs() < 1e-12);
    }

    #[test]
    fn radius_and_circumference_use_observed_age() {
        let outcome = UniverseDerivation::default().derive();
        assert!((outcome.radius_gly - 45.551).abs() < 1e-3);
        assert!((outcome.radius_error_pct - 2.041).abs() < 1e-3);
        assert!((outcome.circumference_time_gyr - 286.21).abs() < 0.01);
        assert!((outcome.observed_expansion - 3.3697).abs() < 1e-4);
        assert!((outcome.fraction_complete_pct - 4.82).abs() < 0.01);
    }
}
