// src/models/mod.rs

//! Small numeric models built on the same constants as the α studies.
//!
//! None of these enforce anything beyond their formulas; they exist to be
//! evaluated and printed.

mod cosmos;
mod dark;
mod dimensional;
mod universe;

pub use cosmos::{BlackHole, CosmicMagnetism, Epoch};
pub use dark::{DarkLight, DarkMagnetism, IcebergModel, MatterClass};
pub use dimensional::DimensionalAlpha;
pub use universe::{UniverseDerivation, UniverseOutcome};

use crate::core::{PHI, PI};

/// `(√π − √φ)/π`, the resolution gap between π and φ.
pub fn h_info() -> f64 {
    (PI.sqrt() - PHI.sqrt()) / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h_info_value() {
        assert!((h_info() - 0.159_293_153_687).abs() < 1e-11);
    }
}
