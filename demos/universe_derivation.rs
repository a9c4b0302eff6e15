//! Predicts the age, radius and circumference time of the universe from
//! `h_info = (√π − √φ)/π` and compares them with observation.

use shovelcat::models::{h_info, UniverseDerivation};
use shovelcat::validation::check_identity;
use shovelcat::ShovelcatError;
use std::f64::consts::PI;

fn main() -> Result<(), ShovelcatError> {
    println!("--- shovelcat Example: universe from h_info ---");

    let h = h_info();
    println!("h_info = {:.12}", h);

    // 2π·h_info is close to, but not exactly, one
    let near_unity = check_identity("2π·h_info ≈ 1", 2.0 * PI * h, 1.0, 1e-2)?;
    println!("2π·h_info = {:.6} (|Δ| = {:.2e})", near_unity.lhs, near_unity.deviation());

    let outcome = UniverseDerivation::default().derive();
    println!("\nlog₁₀(age / t_P) = {:.6}", outcome.log10_age_planck);
    println!("Age:       {:>8.3} Gyr  (observed 13.8, error {:.3}%)", outcome.age_gyr, outcome.age_error_pct);
    println!("Radius:    {:>8.3} Gly  (observed 46.5, error {:.3}%)", outcome.radius_gly, outcome.radius_error_pct);
    println!(
        "Expansion: {:>8.6}      (π + h_info, observed {:.6})",
        outcome.expansion_factor, outcome.observed_expansion
    );
    println!(
        "Circumference time: {:.2} Gyr, {:.1}% elapsed",
        outcome.circumference_time_gyr, outcome.fraction_complete_pct
    );
    Ok(())
}
