// src/models/dark.rs
use serde::Serialize;
use std::fmt;

/// Where a position falls relative to the visible band around the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatterClass {
    BeyondVoid,
    DeepPartial,
    Visible,
    DeepDiffuse,
}

impl fmt::Display for MatterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatterClass::BeyondVoid => "beyond void",
            MatterClass::DeepPartial => "deep partial (dark)",
            MatterClass::Visible => "visible",
            MatterClass::DeepDiffuse => "deep diffuse (dark)",
        };
        f.write_str(name)
    }
}

/// Only a narrow band around the boundary is visible; the rest is dark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IcebergModel {
    pub boundary: f64,
    pub visible_half_width: f64,
}

impl Default for IcebergModel {
    fn default() -> Self {
        Self {
            boundary: 1.0,
            visible_half_width: 0.14,
        }
    }
}

impl IcebergModel {
    pub fn is_visible(&self, x: f64) -> bool {
        if x <= 0.0 {
            return false;
        }
        let w = self.visible_half_width;
        self.boundary - w <= x && x <= self.boundary + w
    }

    /// Fraction of the unit range outside the visible band.
    pub fn dark_ratio(&self) -> f64 {
        1.0 - 2.0 * self.visible_half_width
    }

    pub fn classify(&self, x: f64) -> MatterClass {
        let w = self.visible_half_width;
        if x <= 0.0 {
            MatterClass::BeyondVoid
        } else if x < self.boundary - w {
            MatterClass::DeepPartial
        } else if x <= self.boundary + w {
            MatterClass::Visible
        } else {
            MatterClass::DeepDiffuse
        }
    }
}

/// The sodium D-line pair, in nanometres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DarkLight {
    pub d1_wavelength: f64,
    pub d2_wavelength: f64,
}

impl Default for DarkLight {
    fn default() -> Self {
        Self {
            d1_wavelength: 589.6,
            d2_wavelength: 589.0,
        }
    }
}

impl DarkLight {
    pub fn split(&self) -> f64 {
        self.d1_wavelength - self.d2_wavelength
    }

    pub fn average(&self) -> f64 {
        (self.d1_wavelength + self.d2_wavelength) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DarkMagnetism {
    pub paramagnetic_elements: Vec<String>,
}

impl Default for DarkMagnetism {
    fn default() -> Self {
        Self {
            paramagnetic_elements: ["Ru", "Os", "Al", "Pt", "O2", "Pd"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl DarkMagnetism {
    /// True if `element` is one of the paramagnetic channels.
    pub fn channels(&self, element: &str) -> bool {
        self.paramagnetic_elements.iter().any(|e| e == element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iceberg_classification_bands() {
        let model = IcebergModel::default();
        assert_eq!(model.classify(-1.0), MatterClass::BeyondVoid);
        assert_eq!(model.classify(0.5), MatterClass::DeepPartial);
        assert_eq!(model.classify(0.86), MatterClass::Visible);
        assert_eq!(model.classify(1.14), MatterClass::Visible);
        assert_eq!(model.classify(2.0), MatterClass::DeepDiffuse);
        assert!(model.is_visible(1.0));
        assert!(!model.is_visible(0.0));
        assert!(!model.is_visible(1.5));
        assert!((model.dark_ratio() - 0.72).abs() < 1e-12);
    }

    #[test]
    fn sodium_doublet() {
        let light = DarkLight::default();
        assert!((light.split() - 0.6).abs() < 1e-9);
        assert!((light.average() - 589.3).abs() < 1e-9);
    }

    #[test]
    fn paramagnetic_channels() {
        let magnetism = DarkMagnetism::default();
        assert!(magnetism.channels("Pt"));
        assert!(!magnetism.channels("Fe"));
    }
}
