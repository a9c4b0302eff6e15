// tests/study_tests.rs

use shovelcat::core::{relative_error, Rating, ALPHA};
use shovelcat::studies::catalog;
use shovelcat::{Evaluator, Expr, Outcome, ShovelcatError, StudyBuilder, Target};

// Helper: run a catalog study and return the best comparison's label and error
fn best_of(name: &str) -> Result<(String, f64), ShovelcatError> {
    let report = Evaluator::new().run(&catalog::get(name)?);
    let best = report.best().expect("study has at least one comparison");
    Ok((best.name.clone(), best.rel_error()))
}

#[test]
fn test_every_catalog_study_evaluates_without_failures() -> Result<(), ShovelcatError> {
    for name in catalog::names() {
        let study = catalog::get(name)?;
        let report = Evaluator::new().run(&study);
        assert_eq!(report.outcomes().count(), study.len(), "{}", name);
        assert_eq!(report.failures().count(), 0, "{} had failures", name);
    }
    Ok(())
}

#[test]
fn test_dimensional_study_is_the_sharpest() -> Result<(), ShovelcatError> {
    let (label, error) = best_of("alpha-dimensional")?;
    assert_eq!(label, "1/(4π³ + π² + π - (π-3)³/9)");
    assert!(error < 1e-7, "error {}", error);
    Ok(())
}

#[test]
fn test_summary_study_ranks_dimensional_form_first() -> Result<(), ShovelcatError> {
    let report = Evaluator::new().run(&catalog::get("alpha-summary")?);
    let ranked: Vec<_> = report.ranked().iter().map(|c| c.name.clone()).collect();
    assert_eq!(ranked[0], "1/(4π³ + π² + π)");
    assert_eq!(ranked.last().map(String::as_str), Some("e^(-φ^π)"));
    Ok(())
}

#[test]
fn test_headline_formula_accuracy() -> Result<(), ShovelcatError> {
    let value = Expr::parse("pi * phi^(-4*pi)")?.eval()?;
    let error = relative_error(value, ALPHA);
    assert!(error < 0.02 && error > 0.01, "π × φ^(-4π) error {}", error);
    let dimensional = Expr::parse("1/(4*π^3 + π^2 + π)")?.eval()?;
    assert!(relative_error(dimensional, ALPHA) < 1e-5);
    Ok(())
}

#[test]
fn test_failed_candidates_are_kept_in_order() -> Result<(), ShovelcatError> {
    let study = StudyBuilder::new("edge", "Edge cases", Target::alpha())
        .formula("ln 0", "ln(0)")?
        .formula("α itself", "alpha")?
        .formula("1/0", "1/0")?
        .build();
    let report = Evaluator::new().run(&study);
    let statuses: Vec<bool> = report.outcomes().map(|o| matches!(o, Outcome::Compared(_))).collect();
    assert_eq!(statuses, [false, true, false]);
    let best = report.best().expect("edge study has a comparison");
    assert_eq!(best.error_pct, 0.0);
    Ok(())
}

#[test]
fn test_report_display_lists_sections_and_skips() -> Result<(), ShovelcatError> {
    let study = StudyBuilder::new("display", "Display check", Target::alpha())
        .section("Sound")
        .formula("φ^(-10)", "phi^(-10)")?
        .section("Unsound")
        .formula("√(-1)", "sqrt(-1)")?
        .build();
    let text = Evaluator::new().run(&study).to_string();
    assert!(text.contains("Display check"));
    assert!(text.contains("Sound"));
    assert!(text.contains("skipped"));
    assert!(text.contains("Best: φ^(-10)"));
    Ok(())
}

#[test]
fn test_summary_ranking_carries_ratings() -> Result<(), ShovelcatError> {
    let report = Evaluator::new().run(&catalog::get("alpha-summary")?);
    let ratings: Vec<Rating> = report.ranked().iter().map(|c| c.rating()).collect();
    assert_eq!(ratings.first(), Some(&Rating::Exact));
    assert_eq!(ratings.last(), Some(&Rating::Poor));

    let text = report.to_string();
    assert!(text.contains("Ranking"));
    assert!(text.contains("★★★★★ EXACT"));
    assert!(text.contains("☆☆☆☆☆ Poor"));
    Ok(())
}

#[test]
fn test_unknown_study() {
    assert!(matches!(catalog::get("omega"), Err(ShovelcatError::UnknownStudy { .. })));
}
