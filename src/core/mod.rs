// src/core/mod.rs

//! Core data structures and types

pub mod comparison;
pub mod constants;
pub mod error;
pub mod symbol;

// Re-export public types for convenient access via `shovelcat::core::TypeName`
pub use comparison::{relative_error, Comparison, Rating};
pub use constants::math::{E, FIBONACCI, LN2, PHI, PI};
pub use constants::physical::{ALPHA, C, INV_ALPHA};
pub use error::{Result, ShovelcatError};
pub use symbol::Constant;
