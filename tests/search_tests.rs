// tests/search_tests.rs

use shovelcat::core::{Constant, ALPHA, E, PHI, PI};
use shovelcat::search::{
    correction_factor, solve_nested_delta, solve_phi_exponent, Divisor, NestedSpace, ProductGrid, ProductSpace, MAX_POINTS,
};
use shovelcat::ShovelcatError;

const TOLERANCE: f64 = 1e-12;

#[test]
fn test_default_product_search_contract() -> Result<(), ShovelcatError> {
    let space = ProductSpace::default();
    let summary = space.search(ALPHA)?;

    assert!(summary.hits.len() <= 20);
    assert_eq!(summary.skipped, 0, "every default combination is finite");
    assert_eq!(summary.evaluated, 68_750);
    for pair in summary.hits.windows(2) {
        assert!(pair[0].rel_error <= pair[1].rel_error);
    }
    for hit in &summary.hits {
        assert!(hit.rel_error < 0.01);
        assert!(hit.value > 0.001 && hit.value < 0.1);
        assert_eq!(hit.sign, 1, "negative products never enter the window");
        let recomputed = hit.to_expr().eval()?;
        assert!((recomputed - hit.value).abs() / hit.value < TOLERANCE, "{}", hit.formula());
    }
    Ok(())
}

#[test]
fn test_narrow_space_reproduces_by_hand() -> Result<(), ShovelcatError> {
    // Only π × φ^(c/1) with c ∈ [-13, -12] is allowed
    let space = ProductSpace {
        signs: vec![1],
        b_numerators: vec![0],
        c_numerators: vec![-13, -12],
        divisors: vec![Divisor::Int(1)],
        d_values: vec![1],
        window: (0.001, 0.1),
        tolerance: 0.5,
        limit: 10,
    };
    let summary = space.search(ALPHA)?;
    assert_eq!(summary.evaluated, 2);
    assert_eq!(summary.hits.len(), 2);
    let best = &summary.hits[0];
    assert_eq!(best.c_num, -13);
    assert!((best.value - PI * PHI.powi(-13)).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn test_non_finite_combinations_are_counted_as_skipped() -> Result<(), ShovelcatError> {
    let space = ProductSpace {
        signs: vec![1],
        b_numerators: vec![1000, 0],
        c_numerators: vec![0],
        divisors: vec![Divisor::Int(1)],
        d_values: vec![0],
        ..ProductSpace::default()
    };
    let summary = space.search(ALPHA)?;
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.evaluated, 1);
    assert!(summary.hits.is_empty());
    Ok(())
}

#[test]
fn test_nested_hits_respect_tolerance() -> Result<(), ShovelcatError> {
    for tolerance in [0.001, 0.01, 0.05] {
        let space = NestedSpace { tolerance, ..NestedSpace::default() };
        let summary = space.search(ALPHA)?;
        assert!(summary.hits.len() <= space.limit);
        for hit in &summary.hits {
            assert!(hit.rel_error < tolerance);
            assert!(hit.value > 0.001 && hit.value < 0.1);
        }
    }
    Ok(())
}

#[test]
fn test_solvers_round_trip() -> Result<(), ShovelcatError> {
    let x = solve_phi_exponent(ALPHA, 1.0)?;
    assert!((PHI.powf(x) - ALPHA).abs() / ALPHA < TOLERANCE);

    let delta = solve_nested_delta(ALPHA)?;
    let nested = E.powf(-PHI.powf(PI + delta));
    assert!((nested - ALPHA).abs() / ALPHA < TOLERANCE);
    assert!(delta > 0.0 && delta < 1.0);

    let base = PI * PHI.powf(-4.0 * PI);
    let k = correction_factor(base, ALPHA)?;
    assert!((k * base - ALPHA).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn test_one_percent_matches_any_target_in_window() -> Result<(), ShovelcatError> {
    // The default grid is dense enough that a 1% match is guaranteed.
    let grid = ProductGrid::build(&ProductSpace::default())?;
    let significance = grid.significance(1_000, 0.01, 2024)?;
    assert_eq!(significance.matched, significance.samples);
    assert_eq!(significance.fraction, 1.0);

    let strict = grid.significance(1_000, 1e-5, 2024)?;
    assert!(strict.fraction < 1.0);
    Ok(())
}

#[test]
fn test_constant_divisor_space_is_valid() {
    let space = ProductSpace {
        divisors: vec![Divisor::Const(Constant::Pi), Divisor::Const(Constant::Ln2)],
        ..ProductSpace::default()
    };
    assert!(space.validate().is_ok());
    assert_eq!(space.size(), 2 * 11 * 2 * 25 * 2 * 5);
}

#[test]
fn test_oversized_product_space_is_rejected() {
    let space = ProductSpace {
        b_numerators: (-500..500).collect(),
        c_numerators: (-500..500).collect(),
        ..ProductSpace::default()
    };
    assert!(space.size() > MAX_POINTS);
    assert!(matches!(space.validate(), Err(ShovelcatError::InvalidSearchSpace { .. })));
    assert!(ProductGrid::build(&space).is_err());
}
