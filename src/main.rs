// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use shovelcat::cli::{Cli, Command};
use shovelcat::config::{SearchConfig, Validate};
use shovelcat::core::{Constant, ALPHA, PHI, PI};
use shovelcat::evaluation::Evaluator;
use shovelcat::expressions::Expr;
use shovelcat::models::{
    BlackHole, CosmicMagnetism, DarkLight, DarkMagnetism, DimensionalAlpha, IcebergModel, UniverseDerivation,
};
use shovelcat::search::{correction_factor, solve_nested_delta, solve_phi_exponent, ProductGrid};
use shovelcat::studies::{catalog, Target};
use shovelcat::{logging, validation};
use std::path::Path;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!("CLI arguments: {:?}", cli);

    let json = cli.json;
    match cli.command {
        Command::Studies => {
            for (name, title) in catalog::STUDIES {
                println!("  {:<20} {}", name, title);
            }
        }
        Command::Study { name } => {
            let study = catalog::get(&name)?;
            tracing::info!("Running study '{}' ({} candidates)", study.name(), study.len());
            let report = Evaluator::new().run(&study);
            emit(json, &report, |r| print!("{}", r))?;
        }
        Command::Eval { formula, target, value } => {
            let expr = Expr::parse(&formula).with_context(|| format!("cannot parse '{}'", formula))?;
            let target = match value {
                Some(v) => Target::new("value", v),
                None => match target.parse::<Constant>()? {
                    Constant::Alpha => Target::alpha(),
                    c => Target::new(c.symbol(), c.value()),
                },
            };
            let cmp = Evaluator::new().evaluate(&expr.to_string(), &expr, &target)?;
            emit(json, &cmp, |c| println!("{}", c))?;
        }
        Command::Search { config, tolerance, limit } => {
            let config = load_config(config.as_deref())?;
            let mut space = config.product_space()?;
            if let Some(tolerance) = tolerance {
                space.tolerance = tolerance;
            }
            if let Some(limit) = limit {
                space.limit = limit;
            }
            let target = config.target()?;
            tracing::info!("Searching {} combinations for {}", space.size(), target);
            let summary = space.search(target.value)?;
            emit(json, &summary, |s| {
                println!("SYSTEMATIC SEARCH: {} = a × e^b × φ^c × π^d", target.name);
                println!(
                    "{} evaluated, {} skipped, {} shown (< {}% error)",
                    s.evaluated,
                    s.skipped,
                    s.hits.len(),
                    space.tolerance * 100.0
                );
                for hit in &s.hits {
                    println!("{}", hit);
                }
            })?;
        }
        Command::Nested { config } => {
            let config = load_config(config.as_deref())?;
            let space = config.nested_space();
            let target = config.target()?;
            tracing::info!("Searching {} nested forms for {}", space.size(), target);
            let summary = space.search(target.value)?;
            emit(json, &summary, |s| {
                println!("NESTED EXPONENTIAL SEARCH: e^(±φ^(aπ + b))");
                println!("{} evaluated, {} skipped", s.evaluated, s.skipped);
                if s.hits.is_empty() {
                    println!("  no form within {}%", space.tolerance * 100.0);
                }
                for hit in &s.hits {
                    println!("{}", hit);
                }
            })?;
        }
        Command::Solve => run_solve()?,
        Command::Check => {
            let checks = validation::standard_checks();
            let failed = checks.iter().filter(|c| !c.passed).count();
            emit(json, &checks, |checks| {
                for check in checks {
                    println!("{}", check);
                }
            })?;
            if failed > 0 {
                tracing::error!("{} identity check(s) failed", failed);
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Models => run_models(),
        Command::Universe => {
            let outcome = UniverseDerivation::default().derive();
            emit(json, &outcome, |u| {
                println!("h_info = (√π − √φ)/π = {:.12}", u.h_info);
                println!();
                println!("log₁₀(t/t_P) = π²/h − 1 − h/π = {:.6}", u.log10_age_planck);
                println!("Age:    {:.4} Gyr (error {:.3}%)", u.age_gyr, u.age_error_pct);
                println!("Expansion factor π + h = {:.6} (observed {:.6})", u.expansion_factor, u.observed_expansion);
                println!("Radius: {:.3} Gly (error {:.3}%)", u.radius_gly, u.radius_error_pct);
                println!(
                    "Circumference time 2π(π + h)t: {:.2} Gyr ({:.1}% complete)",
                    u.circumference_time_gyr, u.fraction_complete_pct
                );
            })?;
        }
        Command::Significance { config, samples, seed, tolerance } => {
            let config = load_config(config.as_deref())?;
            let space = config.product_space()?;
            let tolerance = tolerance.unwrap_or(space.tolerance);
            let grid = ProductGrid::build(&space)?;
            tracing::info!("Sampling {} targets against {} grid values", samples, grid.len());
            let significance = grid.significance(samples, tolerance, seed)?;
            emit(json, &significance, |s| {
                println!(
                    "{} of {} random targets matched within {}% ({:.2}%)",
                    s.matched,
                    s.samples,
                    s.tolerance * 100.0,
                    s.fraction * 100.0
                );
            })?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_file(path).with_context(|| format!("loading config {}", path.display())),
        None => {
            let config = SearchConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

/// Prints `value` as pretty JSON, or through `render` otherwise.
fn emit<T: Serialize>(json: bool, value: &T, render: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        render(value);
    }
    Ok(())
}

fn run_solve() -> Result<()> {
    println!("Exponent x with prefactor × φ^x = α:");
    for (label, prefactor) in [("1", 1.0), ("π", PI), ("e", std::f64::consts::E)] {
        let x = solve_phi_exponent(ALPHA, prefactor)?;
        println!("  {:<4} x = {:.10}  (x/π = {:.10})", label, x, x / PI);
    }

    let delta = solve_nested_delta(ALPHA)?;
    println!("δ with e^(-φ^(π + δ)) = α:");
    println!("  δ = {:.10}  (1/δ = {:.6})", delta, 1.0 / delta);

    println!("Correction factors k with value × k = α:");
    let forms = [
        ("π × φ^(-4π)", PI * PHI.powf(-4.0 * PI)),
        ("e^(-φ^π)", (-PHI.powf(PI)).exp()),
        ("1/(4π³ + π² + π)", DimensionalAlpha::default().alpha_without_dust()),
    ];
    for (label, value) in forms {
        println!("  {:<20} k = {:.10}", label, correction_factor(value, ALPHA)?);
    }
    Ok(())
}

fn run_models() {
    println!("Black hole");
    let mut hole = BlackHole::new(10.0, 3);
    println!("  speed = {:.3} m/s, θ = {:.6}, exponent = {:.6}", hole.speed(), hole.theta(), hole.exponent());
    let (mass, keys) = hole.emit_hawking_particle();
    println!("  Hawking emission: mass {:.6}, keys {} (left: {:.6}, {})", mass, keys, hole.mass, hole.keys_stored);

    println!("Iceberg");
    let iceberg = IcebergModel::default();
    println!("  dark ratio = {:.2}", iceberg.dark_ratio());
    for x in [-0.5, 0.5, 1.0, 1.5] {
        println!("  x = {:>4}: {}", x, iceberg.classify(x));
    }

    println!("Cosmic magnetism");
    for epoch in CosmicMagnetism::epochs() {
        let m = CosmicMagnetism::new(epoch.theta);
        println!(
            "  {:<16} θ = {:.4}  strength = {:.4}  antimatter = {:.2e}",
            epoch.name,
            epoch.theta,
            m.magnetism_strength(),
            m.antimatter_ratio()
        );
    }

    let light = DarkLight::default();
    println!("Sodium D lines: split {:.1} nm, average {:.1} nm", light.split(), light.average());
    let magnetism = DarkMagnetism::default();
    println!("Paramagnetic channels: {}", magnetism.paramagnetic_elements.join(", "));

    let dimensional = DimensionalAlpha::default();
    println!("Dimensional α");
    println!("  1/(4π³ + π² + π)       = {:.12}", dimensional.alpha_without_dust());
    println!("  with dust −(π−3)³/9    = {:.12} (error {:.6}%)", dimensional.alpha(), dimensional.error_pct());
}
