// src/config/mod.rs

//! Search configuration loaded from TOML.
//!
//! Every table and key is optional; anything missing falls back to the
//! defaults of [`ProductSpace`] and [`NestedSpace`], and the target defaults
//! to α.
//!
//! ```toml
//! [target]
//! name = "alpha"
//!
//! [product]
//! b_numerators = [-5, 5]
//! divisors = ["1", "2", "pi", "e", "phi"]
//! tolerance = 0.01
//!
//! [nested]
//! steps = 41
//! ```

use crate::core::{Constant, Result, ShovelcatError};
use crate::search::{Divisor, NestedSpace, ProductSpace, MAX_POINTS};
use crate::studies::Target;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Types whose contents can be checked after loading.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    pub target: Option<TargetConfig>,
    pub product: Option<ProductConfig>,
    pub nested: Option<NestedConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// `"alpha"` or any constant name.
    pub name: Option<String>,
    /// Overrides the value looked up from `name`.
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductConfig {
    pub signs: Option<Vec<i64>>,
    /// Inclusive `[low, high]`.
    pub b_numerators: Option<[i64; 2]>,
    /// Inclusive `[low, high]`.
    pub c_numerators: Option<[i64; 2]>,
    pub divisors: Option<Vec<String>>,
    pub d_values: Option<Vec<i64>>,
    pub window: Option<[f64; 2]>,
    pub tolerance: Option<f64>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NestedConfig {
    pub tolerance: Option<f64>,
    pub limit: Option<usize>,
    pub steps: Option<usize>,
    pub window: Option<[f64; 2]>,
}

fn config_error(message: impl Into<String>) -> ShovelcatError {
    ShovelcatError::Config {
        message: message.into(),
    }
}

fn inclusive_range(field: &str, range: [i64; 2]) -> Result<Vec<i64>> {
    let [low, high] = range;
    if low > high {
        return Err(config_error(format!("{} range [{}, {}] is inverted", field, low, high)));
    }
    if i128::from(high) - i128::from(low) >= MAX_POINTS as i128 {
        return Err(ShovelcatError::InvalidSearchSpace {
            message: format!("{} range [{}, {}] has more than {} values", field, low, high, MAX_POINTS),
        });
    }
    Ok((low..=high).collect())
}

impl SearchConfig {
    /// Loads and validates a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SearchConfig =
            toml::from_str(content).map_err(|e| config_error(format!("TOML parsing error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// The configured target, α unless stated otherwise.
    pub fn target(&self) -> Result<Target> {
        let Some(target) = &self.target else {
            return Ok(Target::alpha());
        };
        let name = target.name.as_deref().unwrap_or("alpha");
        match (target.value, name.parse::<Constant>()) {
            (Some(value), Ok(constant)) => Ok(Target::new(constant.symbol(), value)),
            (Some(value), Err(_)) => Ok(Target::new(name, value)),
            (None, Ok(Constant::Alpha)) => Ok(Target::alpha()),
            (None, Ok(constant)) => Ok(Target::new(constant.symbol(), constant.value())),
            (None, Err(_)) => Err(config_error(format!(
                "target '{}' is not a known constant; give a value",
                name
            ))),
        }
    }

    /// The product search space with config overrides applied.
    pub fn product_space(&self) -> Result<ProductSpace> {
        let mut space = ProductSpace::default();
        let Some(product) = &self.product else {
            return Ok(space);
        };
        if let Some(signs) = &product.signs {
            space.signs = signs.clone();
        }
        if let Some(range) = product.b_numerators {
            space.b_numerators = inclusive_range("b_numerators", range)?;
        }
        if let Some(range) = product.c_numerators {
            space.c_numerators = inclusive_range("c_numerators", range)?;
        }
        if let Some(divisors) = &product.divisors {
            space.divisors = divisors
                .iter()
                .map(|d| d.parse::<Divisor>())
                .collect::<Result<Vec<_>>>()?;
        }
        if let Some(d_values) = &product.d_values {
            space.d_values = d_values.clone();
        }
        if let Some([low, high]) = product.window {
            space.window = (low, high);
        }
        if let Some(tolerance) = product.tolerance {
            space.tolerance = tolerance;
        }
        if let Some(limit) = product.limit {
            space.limit = limit;
        }
        Ok(space)
    }

    /// The nested search space with config overrides applied.
    pub fn nested_space(&self) -> NestedSpace {
        let mut space = NestedSpace::default();
        if let Some(nested) = &self.nested {
            if let Some(tolerance) = nested.tolerance {
                space.tolerance = tolerance;
            }
            if let Some(limit) = nested.limit {
                space.limit = limit;
            }
            if let Some(steps) = nested.steps {
                space.steps = steps;
            }
            if let Some([low, high]) = nested.window {
                space.window = (low, high);
            }
        }
        space
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        self.target()?;
        self.product_space()?.validate()?;
        self.nested_space().validate()
    }
}
