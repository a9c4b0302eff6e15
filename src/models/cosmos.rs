// src/models/cosmos.rs
use crate::core::{Result, ShovelcatError, C, PI};
use serde::Serialize;

/// A black hole holding mass and stored keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlackHole {
    pub mass: f64,
    pub keys_stored: i64,
}

impl BlackHole {
    pub fn new(mass: f64, keys_stored: i64) -> Self {
        Self { mass, keys_stored }
    }

    /// Light speed slowed by the stored mass.
    pub fn speed(&self) -> f64 {
        C / (1.0 + self.mass).sqrt()
    }

    /// Rotation angle, `π/4` for an empty hole.
    pub fn theta(&self) -> f64 {
        (PI / 4.0) / (1.0 + self.mass).sqrt()
    }

    pub fn exponent(&self) -> f64 {
        1.0 + 0.001 / (1.0 + self.mass)
    }

    /// Never true for non-negative mass: the exponent stays near 1.
    pub fn is_god_compatible(&self) -> bool {
        self.exponent() > 10.0
    }

    /// Emits one Hawking particle and returns `(mass, keys)` lost.
    /// An empty hole emits nothing.
    pub fn emit_hawking_particle(&mut self) -> (f64, i64) {
        if self.mass <= 0.0 {
            return (0.0, 0);
        }
        let mass_emitted = 0.01 / (self.mass + 1.0);
        let keys_emitted = i64::from(self.keys_stored > 0);
        self.mass -= mass_emitted;
        self.keys_stored -= keys_emitted;
        (mass_emitted, keys_emitted)
    }

    pub fn absorb_matter(&mut self, mass: f64, keys: i64) {
        self.mass += mass;
        self.keys_stored += keys;
    }
}

/// A named moment in the evolution of the cosmic angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Epoch {
    pub name: &'static str,
    pub theta: f64,
}

/// Magnetism and antimatter as functions of the cosmic angle `θ`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CosmicMagnetism {
    pub theta: f64,
    pub theta_max: f64,
    pub theta_min: f64,
}

impl Default for CosmicMagnetism {
    fn default() -> Self {
        Self::new(PI / 4.0)
    }
}

impl CosmicMagnetism {
    pub fn new(theta: f64) -> Self {
        Self {
            theta,
            theta_max: PI / 2.0,
            theta_min: 0.001,
        }
    }

    pub fn magnetism_strength(&self) -> f64 {
        1.0 / (1.0 + self.theta)
    }

    pub fn antimatter_ratio(&self) -> f64 {
        (-10.0 * self.theta).exp()
    }

    /// Time for `θ` to fall to `theta_min` at `rate` per unit time.
    ///
    /// # Errors
    /// `ShovelcatError::Domain` if `rate` is zero.
    pub fn time_to_maximum(&self, rate: f64) -> Result<f64> {
        if rate == 0.0 {
            return Err(ShovelcatError::domain("(θ - θ_min) / rate", "rate must be non-zero"));
        }
        Ok((self.theta - self.theta_min) / rate)
    }

    pub fn epochs() -> [Epoch; 6] {
        [
            Epoch { name: "Big Bang", theta: PI / 2.0 },
            Epoch { name: "Early Universe", theta: PI / 3.0 },
            Epoch { name: "Star Formation", theta: PI / 4.0 },
            Epoch { name: "Now", theta: PI / 4.0 },
            Epoch { name: "Future 1", theta: PI / 6.0 },
            Epoch { name: "Future 2", theta: PI / 12.0 },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_black_hole_moves_at_light_speed() {
        let hole = BlackHole::new(0.0, 0);
        assert_eq!(hole.speed(), C);
        assert!((hole.theta() - PI / 4.0).abs() < 1e-15);
        assert!(!hole.is_god_compatible());
    }

    #[test]
    fn hawking_emission_drains_mass_and_keys() {
        let mut hole = BlackHole::new(1.0, 2);
        let (mass, keys) = hole.emit_hawking_particle();
        assert!((mass - 0.005).abs() < 1e-15);
        assert_eq!(keys, 1);
        assert!((hole.mass - 0.995).abs() < 1e-15);
        assert_eq!(hole.keys_stored, 1);

        let mut empty = BlackHole::new(0.0, 5);
        assert_eq!(empty.emit_hawking_particle(), (0.0, 0));
        assert_eq!(empty.keys_stored, 5);
    }

    #[test]
    fn absorbing_matter_slows_light() {
        let mut hole = BlackHole::new(0.0, 0);
        hole.absorb_matter(3.0, 4);
        assert_eq!(hole.keys_stored, 4);
        assert!((hole.speed() - C / 2.0).abs() < 1e-6);
    }

    #[test]
    fn magnetism_grows_as_theta_falls() -> Result<()> {
        let strengths: Vec<f64> = CosmicMagnetism::epochs()
            .iter()
            .map(|e| CosmicMagnetism::new(e.theta).magnetism_strength())
            .collect();
        assert!(strengths.windows(2).all(|w| w[0] <= w[1]));
        let now = CosmicMagnetism::default();
        assert!((now.time_to_maximum(0.1)? - (PI / 4.0 - 0.001) / 0.1).abs() < 1e-12);
        assert!(now.time_to_maximum(0.0).is_err());
        Ok(())
    }
}
