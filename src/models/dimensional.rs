// src/models/dimensional.rs
use crate::core::{relative_error, ALPHA, PI};
use serde::Serialize;

/// α as the reciprocal of a sum over dimensions: a sphere's worth of volume,
/// a circle's area, a line, and a small negative remainder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionalAlpha {
    pub volume_3d: f64,
    pub area_2d: f64,
    pub length_1d: f64,
    /// `-(π - 3)³ / 9`
    pub dust: f64,
}

impl Default for DimensionalAlpha {
    fn default() -> Self {
        Self {
            volume_3d: 4.0 * PI.powi(3),
            area_2d: PI.powi(2),
            length_1d: PI,
            dust: -(PI - 3.0).powi(3) / 9.0,
        }
    }
}

impl DimensionalAlpha {
    pub fn denominator(&self) -> f64 {
        self.volume_3d + self.area_2d + self.length_1d + self.dust
    }

    pub fn alpha(&self) -> f64 {
        1.0 / self.denominator()
    }

    pub fn alpha_without_dust(&self) -> f64 {
        1.0 / (self.volume_3d + self.area_2d + self.length_1d)
    }

    /// Error of [`alpha`](Self::alpha) against the measured α, in percent.
    pub fn error_pct(&self) -> f64 {
        relative_error(self.alpha(), ALPHA) * 100.0
    }
}
