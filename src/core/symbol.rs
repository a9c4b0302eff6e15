// src/core/symbol.rs

use super::constants::{math, physical};
use super::error::{Result, ShovelcatError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named constant that may appear inside a formula.
///
/// Formulas are assembled from exactly these building blocks plus plain
/// numbers. Each constant carries a display symbol (`π`) and an ASCII name
/// (`pi`) so formulas can be typed on any keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Constant {
    /// π
    Pi,
    /// φ, the golden ratio
    Phi,
    /// e, Euler's number
    E,
    /// ln 2
    Ln2,
    /// α, the measured fine-structure constant
    Alpha,
}

impl Constant {
    /// Every constant, in declaration order.
    pub const ALL: [Constant; 5] = [Constant::Pi, Constant::Phi, Constant::E, Constant::Ln2, Constant::Alpha];

    /// Numeric value of the constant.
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => math::PI,
            Constant::Phi => math::PHI,
            Constant::E => math::E,
            Constant::Ln2 => math::LN2,
            Constant::Alpha => physical::ALPHA,
        }
    }

    /// Symbol used when rendering formulas.
    pub fn symbol(self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::Phi => "φ",
            Constant::E => "e",
            Constant::Ln2 => "ln2",
            Constant::Alpha => "α",
        }
    }

    /// ASCII spelling accepted by the parser and config files.
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::Phi => "phi",
            Constant::E => "e",
            Constant::Ln2 => "ln2",
            Constant::Alpha => "alpha",
        }
    }

    /// Looks a constant up by symbol or ASCII name (ASCII is case-insensitive).
    pub fn lookup(name: &str) -> Option<Constant> {
        Constant::ALL
            .into_iter()
            .find(|c| c.symbol() == name || c.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for Constant {
    type Err = ShovelcatError;

    fn from_str(s: &str) -> Result<Self> {
        Constant::lookup(s.trim()).ok_or_else(|| ShovelcatError::UnknownConstant { name: s.to_string() })
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_symbols_and_names() {
        assert_eq!(Constant::lookup("π"), Some(Constant::Pi));
        assert_eq!(Constant::lookup("PHI"), Some(Constant::Phi));
        assert_eq!(Constant::lookup("α"), Some(Constant::Alpha));
        assert_eq!(Constant::lookup("tau"), None);
    }

    #[test]
    fn from_str_reports_unknown_names() {
        let err = "tau".parse::<Constant>().unwrap_err();
        assert_eq!(err, ShovelcatError::UnknownConstant { name: "tau".to_string() });
    }
}
