// src/evaluation/mod.rs

//! Runs a [`Study`](crate::studies::Study) against its target.
//! This module contains the `Evaluator` entry point and the `StudyReport`
//! it produces.

mod results;

pub use results::{Outcome, SectionReport, StudyReport};

use crate::core::{Comparison, Result};
use crate::expressions::Expr;
use crate::studies::{Study, Target};
use tracing::{debug, trace};

/// Evaluates candidate formulas and compares them with a target.
#[derive(Debug, Default)]
pub struct Evaluator {}

impl Evaluator {
    /// Creates an evaluator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every candidate of `study`.
    ///
    /// Candidates are independent: one that fails to evaluate is recorded as
    /// [`Outcome::Failed`] and the rest still run.
    pub fn run(&self, study: &Study) -> StudyReport {
        let target = study.target();
        let mut report = StudyReport::new(study.name(), study.title(), target.clone());

        for section in study.sections() {
            report.open_section(&section.title);
            for candidate in &section.candidates {
                let outcome = match self.evaluate(&candidate.label, &candidate.expr, target) {
                    Ok(cmp) => {
                        trace!(label = %candidate.label, value = cmp.value, "candidate evaluated");
                        Outcome::Compared(cmp)
                    }
                    Err(err) => {
                        debug!(label = %candidate.label, error = %err, "candidate skipped");
                        Outcome::Failed {
                            label: candidate.label.clone(),
                            reason: err.to_string(),
                        }
                    }
                };
                report.record(outcome);
            }
        }

        debug!(
            study = study.name(),
            compared = report.comparisons().count(),
            failed = report.failures().count(),
            "study finished"
        );
        report
    }

    /// Evaluates a single formula against `target`.
    ///
    /// # Errors
    /// The evaluation error of `expr`, or a `Domain` error from the comparison.
    pub fn evaluate(&self, label: &str, expr: &Expr, target: &Target) -> Result<Comparison> {
        let value = expr.eval()?;
        Comparison::new(label, value, target.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ShovelcatError, ALPHA};
    use crate::studies::StudyBuilder;

    fn mixed_study() -> Study {
        StudyBuilder::new("mixed", "Mixed", Target::alpha())
            .section("good")
            .candidate("φ^(-10)", Expr::phi().pow(-10))
            .candidate("π × φ^(-4π)", Expr::pi() * Expr::phi().pow(Expr::num(-4.0) * Expr::pi()))
            .section("bad")
            .candidate("(-8)^(1/3)", Expr::num(-8.0).pow(Expr::num(1.0) / 3))
            .candidate("1/(4π³ + π² + π)", (Expr::num(4.0) * Expr::pi().pow(3) + Expr::pi().pow(2) + Expr::pi()).recip())
            .build()
    }

    #[test]
    fn failures_are_reported_not_dropped() {
        let report = Evaluator::new().run(&mixed_study());
        assert_eq!(report.outcomes().count(), 4);
        assert_eq!(report.comparisons().count(), 3);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "(-8)^(1/3)");
        assert_eq!(report.sections()[1].outcomes[0].label(), "(-8)^(1/3)");
    }

    #[test]
    fn ranking_is_ascending_and_best_is_dimensional() {
        let report = Evaluator::new().run(&mixed_study());
        let ranked = report.ranked();
        assert!(ranked.windows(2).all(|w| w[0].error_pct <= w[1].error_pct));
        let best = report.best().unwrap();
        assert_eq!(best.name, "1/(4π³ + π² + π)");
        assert!(best.rel_error() < 1e-5);
    }

    #[test]
    fn ties_keep_study_order() {
        let study = StudyBuilder::new("ties", "Ties", Target::new("one", 1.0))
            .candidate("first", Expr::num(2.0))
            .candidate("second", Expr::num(0.0))
            .candidate("third", Expr::num(2.0))
            .build();
        let report = Evaluator::new().run(&study);
        let names: Vec<_> = report.ranked().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn evaluate_single_formula() -> Result<()> {
        let cmp = Evaluator::new().evaluate("φ^(-10)", &Expr::parse("phi^(-10)")?, &Target::alpha())?;
        assert!((cmp.target - ALPHA).abs() < 1e-15);
        assert!(cmp.error_pct > 10.0 && cmp.error_pct < 12.0);
        Ok(())
    }

    #[test]
    fn evaluate_propagates_domain_errors() {
        let result = Evaluator::new().evaluate("ln 0", &Expr::num(0.0).ln(), &Target::alpha());
        assert!(matches!(result, Err(ShovelcatError::Domain { .. })));
    }

    #[test]
    fn report_serializes_outcome_status() {
        let report = Evaluator::new().run(&mixed_study());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sections"][1]["outcomes"][0]["status"], "failed");
        assert_eq!(json["sections"][0]["outcomes"][0]["status"], "compared");
    }
}
