//! Mathematical and measured constants shared by every derivation.

/// Pure mathematical constants used as formula inputs.
pub mod math {
    /// The golden ratio constant φ (Phi), `(1 + √5) / 2`.
    pub const PHI: f64 = 1.618_033_988_749_895;
    /// Circle constant π.
    pub const PI: f64 = std::f64::consts::PI;
    /// Euler's number e.
    pub const E: f64 = std::f64::consts::E;
    /// Natural logarithm of 2, the "bit angle" factor `π × ln 2`.
    pub const LN2: f64 = std::f64::consts::LN_2;

    /// Fibonacci numbers F₀ through F₁₂.
    pub const FIBONACCI: [u64; 13] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
}

/// Measured physical constants (SI units) and observed cosmology.
pub mod physical {
    /// Inverse fine-structure constant, CODATA 2018.
    pub const INV_ALPHA: f64 = 137.035_999_084;
    /// Fine-structure constant α.
    pub const ALPHA: f64 = 1.0 / INV_ALPHA;
    /// Speed of light in vacuum (m/s).
    pub const C: f64 = 299_792_458.0;
    /// Reduced Planck constant ħ (J·s).
    pub const HBAR: f64 = 1.054_571_817e-34;
    /// Planck constant h (J·s).
    pub const H_PLANCK: f64 = 6.626_070_15e-34;
    /// Newtonian gravitational constant (m³/(kg·s²)).
    pub const G: f64 = 6.674_30e-11;
    /// Boltzmann constant (J/K).
    pub const K_B: f64 = 1.380_649e-23;

    /// Seconds in a Julian year.
    pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;
    /// One light-year in metres (rounded, as used by the derivations).
    pub const LIGHT_YEAR: f64 = 9.461e15;
    /// Observed age of the universe, 13.8 Gyr, in seconds.
    pub const OBSERVED_AGE_S: f64 = 13.8e9 * SECONDS_PER_YEAR;
    /// Observed comoving radius of the observable universe, 46.5 Gly, in metres.
    pub const OBSERVED_RADIUS_M: f64 = 46.5e9 * LIGHT_YEAR;

    /// Planck length `√(ħG/c³)` in metres.
    pub fn planck_length() -> f64 {
        (HBAR * G / C.powi(3)).sqrt()
    }

    /// Planck time `√(ħG/c⁵)` in seconds.
    pub fn planck_time() -> f64 {
        (HBAR * G / C.powi(5)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::math::*;
    use super::physical::*;

    #[test]
    fn phi_matches_closed_form() {
        assert!((PHI - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn fibonacci_table_is_consistent() {
        for n in 2..FIBONACCI.len() {
            assert_eq!(FIBONACCI[n], FIBONACCI[n - 1] + FIBONACCI[n - 2]);
        }
    }

    #[test]
    fn planck_units_have_expected_magnitude() {
        assert!((planck_length() / 1.616e-35 - 1.0).abs() < 1e-3);
        assert!((planck_time() / 5.391e-44 - 1.0).abs() < 1e-3);
    }
}
