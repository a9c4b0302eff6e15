// src/lib.rs

//! `shovelcat` - A library for deriving physical constants from π, φ and e
//!
//! Candidate formulas are expression trees evaluated against a measured
//! target (α by default). Formulas are grouped into studies, run by an
//! evaluator into reports, or discovered by brute-force searches whose
//! look-elsewhere effect can be measured.

pub mod cli;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod expressions;
pub mod logging;
pub mod models;
pub mod search;
pub mod studies;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{Comparison, Constant, Rating, Result, ShovelcatError};
pub use evaluation::{Evaluator, Outcome, StudyReport};
pub use expressions::{Expr, Function};
pub use search::{NestedSpace, ProductGrid, ProductSpace, SearchSummary};
pub use studies::{Study, StudyBuilder, Target};
pub use validation::{check_identity, standard_checks, IdentityCheck};

// Example 1: Evaluating a study
// Builds a two-candidate study from formula text and reports the closer one.
/// ```
/// use shovelcat::{Evaluator, StudyBuilder, Target, ShovelcatError};
///
/// let study = StudyBuilder::new("headline", "Two routes to α", Target::alpha())
///     .formula("π × φ^(-4π)", "pi * phi^(-4*pi)")?
///     .formula("1/(4π³ + π² + π)", "1/(4*pi^3 + pi^2 + pi)")?
///     .build();
///
/// let report = Evaluator::new().run(&study);
/// println!("{}", report);
///
/// let best = report.best().expect("both candidates evaluate");
/// assert_eq!(best.name, "1/(4π³ + π² + π)");
/// assert!(best.rel_error() < 1e-5);
/// # Ok::<(), ShovelcatError>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Searching products of powers
// Narrows the classic grid to φ-only divisors and checks the ranking.
/// ```
/// use shovelcat::core::{Constant, ALPHA};
/// use shovelcat::search::{Divisor, ProductSpace};
///
/// let space = ProductSpace {
///     divisors: vec![Divisor::Int(1), Divisor::Const(Constant::Phi)],
///     ..ProductSpace::default()
/// };
/// let summary = space.search(ALPHA)?;
///
/// assert!(summary.hits.len() <= space.limit);
/// for hit in &summary.hits {
///     assert!(hit.rel_error < space.tolerance);
///     println!("{}", hit);
/// }
/// # Ok::<(), shovelcat::ShovelcatError>(())
/// ```
#[doc(hidden)]
const _: () = ();
