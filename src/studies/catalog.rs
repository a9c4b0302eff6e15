// src/studies/catalog.rs

//! The built-in studies.
//!
//! Each entry reproduces the candidate list of one line of inquiry into α:
//! φ-power forms, correction factors for `π × φ^(-4π)`, the dimensional
//! hierarchy, nested exponentials, and the headline summary.

use super::{Study, StudyBuilder, Target};
use crate::core::{Result, ShovelcatError};

/// Names and titles of all built-in studies, in presentation order.
pub const STUDIES: [(&str, &str); 5] = [
    ("alpha-forms", "Deriving α from e, φ and π"),
    ("alpha-corrections", "Correction factors for π × φ^(-4π)"),
    ("alpha-dimensional", "Dimensional hierarchy 4π³ + π² + π"),
    ("alpha-nested", "Refining e^(-φ^(π + δ))"),
    ("alpha-summary", "Best formulas for α"),
];

/// Names of the built-in studies.
pub fn names() -> impl Iterator<Item = &'static str> {
    STUDIES.iter().map(|(name, _)| *name)
}

/// Fetches a built-in study by name.
///
/// # Errors
/// `ShovelcatError::UnknownStudy` if `name` is not in [`STUDIES`].
pub fn get(name: &str) -> Result<Study> {
    match name {
        "alpha-forms" => alpha_forms(),
        "alpha-corrections" => alpha_corrections(),
        "alpha-dimensional" => alpha_dimensional(),
        "alpha-nested" => alpha_nested(),
        "alpha-summary" => alpha_summary(),
        _ => Err(ShovelcatError::UnknownStudy { name: name.to_string() }),
    }
}

fn title_of(name: &str) -> &'static str {
    STUDIES
        .iter()
        .find(|(n, _)| *n == name)
        .map_or("", |(_, title)| *title)
}

fn builder(name: &str) -> StudyBuilder {
    StudyBuilder::new(name, title_of(name), Target::alpha())
}

fn alpha_forms() -> Result<Study> {
    Ok(builder("alpha-forms")
        .section("1. Basic φ-power forms")
        .formula("φ^(-10)", "phi^(-10)")?
        .formula("φ^(-4π)", "phi^(-4*pi)")?
        .formula("π × φ^(-4π)", "pi * phi^(-4*pi)")?
        .formula("φ^(-4π) / π", "phi^(-4*pi) / pi")?
        .section("2. With e included")
        .formula("e × φ^(-4π)", "e * phi^(-4*pi)")?
        .formula("(π/e) × φ^(-4π)", "(pi/e) * phi^(-4*pi)")?
        .formula("(e/π) × φ^(-4π)", "(e/pi) * phi^(-4*pi)")?
        .formula("π × φ^(-4π) / e", "pi * phi^(-4*pi) / e")?
        .formula("π × φ^(-4π) × e", "pi * phi^(-4*pi) * e")?
        .section("3. e^(φ^f(π)) forms")
        .formula("e^(-φ^π)", "e^(-phi^pi)")?
        .formula("e^(-φ^(π+1))", "e^(-phi^(pi+1))")?
        .formula("e^(-φ^(2π))", "e^(-phi^(2*pi))")?
        .formula("e^(-φ × π)", "e^(-phi*pi)")?
        .formula("e^(-e × φ)", "e^(-e*phi)")?
        .section("4. Combined forms")
        .formula("e^(-e) × φ^(-π)", "e^(-e) * phi^(-pi)")?
        .formula("e^(-π) × φ^(-e)", "e^(-pi) * phi^(-e)")?
        .formula("e^(-π) × φ^(-π)", "e^(-pi) * phi^(-pi)")?
        .formula("(e^(-π) × φ^(-π)) / 2", "(e^(-pi) * phi^(-pi)) / 2")?
        .section("5. Euler identity inspired")
        .formula("1/(e^π × φ^π)", "1/(e^pi * phi^pi)")?
        .formula("1/(e^π + φ^π)", "1/(e^pi + phi^pi)")?
        .formula("1/(e^(2π) - 1)", "1/(e^(2*pi) - 1)")?
        .formula("φ / (e^π × φ^π)", "phi / (e^pi * phi^pi)")?
        .formula("1 - cos(1/φ)", "1 - cos(1/phi)")?
        .formula("sin(1/φ)", "sin(1/phi)")?
        .formula("1/(e^π + e^(-π))", "1/(e^pi + e^(-pi))")?
        .formula("(e^π - e^(-π))/(2×e^(2π))", "(e^pi - e^(-pi))/(2*e^(2*pi))")?
        .formula("1/(2×cosh(π))", "1/(2*cosh(pi))")?
        .formula("tanh(π)/(φ×e^π)", "tanh(pi)/(phi*e^pi)")?
        .build())
}

fn alpha_corrections() -> Result<Study> {
    const BASE: &str = "pi * phi^(-4*pi)";
    let corrections = [
        ("e^(-1/π)", "e^(-1/pi)"),
        ("1/√φ", "1/sqrt(phi)"),
        ("φ^(-1/e)", "phi^(-1/e)"),
        ("e^(-1/φ)", "e^(-1/phi)"),
        ("1 - 1/φ^4", "1 - 1/phi^4"),
        ("π/(π+1)", "pi/(pi+1)"),
        ("1 - 1/(2π)", "1 - 1/(2*pi)"),
        ("e/(e+1)", "e/(e+1)"),
        ("φ²/(φ²+1)", "phi^2/(phi^2+1)"),
    ];
    let mut b = builder("alpha-corrections")
        .section("Base")
        .formula("π × φ^(-4π)", BASE)?
        .section("Corrected forms");
    for (label, text) in corrections {
        b = b.formula(format!("π × φ^(-4π) × ({})", label), &format!("({}) * ({})", BASE, text))?;
    }
    Ok(b.build())
}

fn alpha_dimensional() -> Result<Study> {
    Ok(builder("alpha-dimensional")
        .section("Dimensional sums")
        .formula("1/(4π³ + π² + π)", "1/(4*pi^3 + pi^2 + pi)")?
        .formula("1/(4π³ + π² + π - (π-3)³/9)", "1/(4*pi^3 + pi^2 + pi - (pi-3)^3/9)")?
        .formula("1/(F₆π³/F₅ + π² + π)", "1/(8*pi^3/5 + pi^2 + pi)")?
        .section("Loop remainder forms")
        .formula("(π-3)/(2π²)", "(pi-3)/(2*pi^2)")?
        .formula("(8/5)(π-3)/π³", "(8/5)*(pi-3)/pi^3")?
        .formula("(π-3)(5+π)/(16π²)", "(pi-3)*(5+pi)/(16*pi^2)")?
        .formula("(π-3)/(2π²) × (1+(π-3)/8)", "(pi-3)/(2*pi^2) * (1 + (pi-3)/8)")?
        .formula("(π-3)²/(π² × 3)", "(pi-3)^2/(pi^2 * 3)")?
        .build())
}

fn alpha_nested() -> Result<Study> {
    Ok(builder("alpha-nested")
        .section("δ candidates for e^(-φ^(π + δ))")
        .formula("e^(-φ^π)", "e^(-phi^pi)")?
        .formula("e^(-φ^(π + 1/(πφ)))", "e^(-phi^(pi + 1/(pi*phi)))")?
        .formula("e^(-φ^(π + 1/(2π)))", "e^(-phi^(pi + 1/(2*pi)))")?
        .formula("e^(-φ^(π + 1/e²))", "e^(-phi^(pi + 1/e^2))")?
        .section("f(π) candidates for e^(-φ^f(π))")
        .formula("e^(-φ^(π + 0.5))", "e^(-phi^(pi + 0.5))")?
        .formula("e^(-φ^(π + φ/10))", "e^(-phi^(pi + phi/10))")?
        .formula("e^(-φ^(π + 1/e))", "e^(-phi^(pi + 1/e))")?
        .formula("e^(-φ^e)", "e^(-phi^e)")?
        .formula("e^(-φ^(e + 0.5))", "e^(-phi^(e + 0.5))")?
        .formula("e^(-φ^(φ + e))", "e^(-phi^(phi + e))")?
        .formula("e^(-φ^(2π/e))", "e^(-phi^(2*pi/e))")?
        .formula("e^(-φ^(π × ln 2))", "e^(-phi^(pi*ln2))")?
        .build())
}

fn alpha_summary() -> Result<Study> {
    Ok(builder("alpha-summary")
        .formula("φ^(-10)", "phi^(-10)")?
        .formula("π × φ^(-4π)", "pi * phi^(-4*pi)")?
        .formula("e^(-φ^π)", "e^(-phi^pi)")?
        .formula("1/(4π³ + π² + π)", "1/(4*pi^3 + pi^2 + pi)")?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_study_builds() {
        for name in names() {
            let study = get(name).unwrap_or_else(|e| panic!("{} failed to build: {}", name, e));
            assert_eq!(study.name(), name);
            assert!(!study.is_empty(), "{} is empty", name);
            assert!(!study.title().is_empty());
        }
    }

    #[test]
    fn every_candidate_evaluates() {
        for name in names() {
            let study = get(name).unwrap();
            for candidate in study.candidates() {
                assert!(
                    candidate.expr.eval().is_ok(),
                    "{}: '{}' failed to evaluate",
                    name,
                    candidate.label
                );
            }
        }
    }

    #[test]
    fn unknown_study_is_an_error() {
        assert_eq!(
            get("beta-forms").unwrap_err(),
            ShovelcatError::UnknownStudy { name: "beta-forms".to_string() }
        );
    }

    #[test]
    fn corrections_study_has_base_plus_each_factor() {
        let study = get("alpha-corrections").unwrap();
        assert_eq!(study.sections()[0].candidates.len(), 1);
        assert_eq!(study.sections()[1].candidates.len(), 9);
    }
}
