//! Runs the classic α derivation end to end: the headline study, the
//! product search, and the look-elsewhere estimate that puts its hits in
//! perspective.

use shovelcat::core::ALPHA;
use shovelcat::search::{solve_nested_delta, ProductGrid, ProductSpace};
use shovelcat::studies::catalog;
use shovelcat::{Evaluator, ShovelcatError};

fn main() -> Result<(), ShovelcatError> {
    println!("--- shovelcat Example: searching for α ---");

    // --- Headline formulas ---
    let study = catalog::get("alpha-summary")?;
    let report = Evaluator::new().run(&study);
    println!("\n{}", report);

    // --- Systematic search ---
    let space = ProductSpace::default();
    let summary = space.search(ALPHA)?;
    println!("Searched {} combinations ({} skipped):", summary.evaluated, summary.skipped);
    for hit in summary.hits.iter().take(5) {
        println!("{}", hit);
    }

    // --- Refining e^(-φ^(π + δ)) ---
    let delta = solve_nested_delta(ALPHA)?;
    println!("\nExact δ for e^(-φ^(π + δ)) = α: {:.10}", delta);

    // --- How surprising is any of this? ---
    let grid = ProductGrid::build(&space)?;
    for tolerance in [0.01, 0.001, 0.0002] {
        let significance = grid.significance(5_000, tolerance, 7)?;
        println!(
            "Random targets matched within {:>6.3}%: {:>6.2}%",
            tolerance * 100.0,
            significance.fraction * 100.0
        );
    }
    Ok(())
}
