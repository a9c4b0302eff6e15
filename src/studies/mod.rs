// src/studies/mod.rs

//! Defines structures for representing and building ordered collections of
//! candidate formulas aimed at a single target constant.
//!
//! A [`Study`] is what one derivation script amounts to once the prose is
//! stripped away: a target (usually α), and a sequence of titled sections,
//! each listing labelled candidate formulas in the order they are tried.

pub mod catalog;

use crate::core::{Result, ALPHA};
use crate::expressions::Expr;
use serde::Serialize;
use std::fmt;

/// The measured value a study tries to reproduce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    /// Display name, e.g. `"α"`.
    pub name: String,
    /// Measured value.
    pub value: f64,
}

impl Target {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The fine-structure constant, CODATA 2018.
    pub fn alpha() -> Self {
        Self::new("α", ALPHA)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:.12}", self.name, self.value)
    }
}

/// A labelled formula tried against the study's target.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Human-readable label, usually the formula as the author wrote it.
    pub label: String,
    /// The formula itself.
    pub expr: Expr,
}

/// A titled group of candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub candidates: Vec<Candidate>,
}

/// An ordered, sectioned list of candidate formulas for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct Study {
    name: String,
    title: String,
    target: Target,
    sections: Vec<Section>,
}

impl Study {
    /// Creates an empty study.
    pub fn new(name: impl Into<String>, title: impl Into<String>, target: Target) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            target,
            sections: Vec::new(),
        }
    }

    /// Short identifier used on the command line.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All candidates across sections, in study order.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.sections.iter().flat_map(|s| s.candidates.iter())
    }

    /// Total number of candidates.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.candidates.len()).sum()
    }

    /// Returns `true` if the study contains no candidates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starts a new section; later candidates are added to it.
    pub fn add_section(&mut self, title: impl Into<String>) {
        self.sections.push(Section {
            title: title.into(),
            candidates: Vec::new(),
        });
    }

    /// Appends a candidate to the current section, opening an untitled one if
    /// none exists yet.
    pub fn add_candidate(&mut self, label: impl Into<String>, expr: Expr) {
        if self.sections.is_empty() {
            self.add_section("");
        }
        if let Some(section) = self.sections.last_mut() {
            section.candidates.push(Candidate {
                label: label.into(),
                expr,
            });
        }
    }
}

//-------------------------------------------------------------------------
// Study Builder
//-------------------------------------------------------------------------

/// A helper for constructing [`Study`] instances with method chaining.
///
/// ```
/// use shovelcat::studies::{StudyBuilder, Target};
/// use shovelcat::expressions::Expr;
///
/// let study = StudyBuilder::new("demo", "Two φ-power forms", Target::alpha())
///     .section("φ powers")
///     .candidate("φ^(-10)", Expr::phi().pow(-10))
///     .formula("π × φ^(-4π)", "pi * phi^(-4*pi)")
///     .unwrap()
///     .build();
///
/// assert_eq!(study.len(), 2);
/// ```
pub struct StudyBuilder {
    study: Study,
}

impl StudyBuilder {
    /// Creates a builder for an empty study.
    pub fn new(name: impl Into<String>, title: impl Into<String>, target: Target) -> Self {
        Self {
            study: Study::new(name, title, target),
        }
    }

    /// Opens a new section.
    pub fn section(mut self, title: impl Into<String>) -> Self {
        self.study.add_section(title);
        self
    }

    /// Adds a candidate built in code.
    pub fn candidate(mut self, label: impl Into<String>, expr: Expr) -> Self {
        self.study.add_candidate(label, expr);
        self
    }

    /// Adds a candidate parsed from formula text.
    ///
    /// # Errors
    /// Propagates the parse error for `text`.
    pub fn formula(mut self, label: impl Into<String>, text: &str) -> Result<Self> {
        let expr = Expr::parse(text)?;
        self.study.add_candidate(label, expr);
        Ok(self)
    }

    /// Finalizes the construction process and returns the built `Study`.
    pub fn build(self) -> Study {
        self.study
    }
}

impl fmt::Display for Study {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}] target {}", self.title, self.name, self.target)?;
        for section in &self.sections {
            if !section.title.is_empty() {
                writeln!(f, "  {}", section.title)?;
            }
            for candidate in &section.candidates {
                writeln!(f, "    {:<32} := {}", candidate.label, candidate.expr)?;
            }
        }
        Ok(())
    }
}
