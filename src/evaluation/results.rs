// src/evaluation/results.rs
use crate::core::Comparison;
use crate::studies::Target;
use serde::Serialize;
use std::fmt;

/// What happened to one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// The candidate evaluated and was compared against the target.
    Compared(Comparison),
    /// The candidate could not be evaluated.
    Failed { label: String, reason: String },
}

impl Outcome {
    /// The candidate label, whichever way it went.
    pub fn label(&self) -> &str {
        match self {
            Outcome::Compared(cmp) => &cmp.name,
            Outcome::Failed { label, .. } => label,
        }
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        match self {
            Outcome::Compared(cmp) => Some(cmp),
            Outcome::Failed { .. } => None,
        }
    }
}

/// Outcomes of one section, in candidate order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub title: String,
    pub outcomes: Vec<Outcome>,
}

/// Holds the results of running a study.
/// Every candidate appears exactly once, in study order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyReport {
    name: String,
    title: String,
    target: Target,
    sections: Vec<SectionReport>,
}

impl StudyReport {
    /// Creates an empty report. (Internal visibility)
    pub(crate) fn new(name: &str, title: &str, target: Target) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            target,
            sections: Vec::new(),
        }
    }

    /// Opens a section; later outcomes are recorded into it. (Internal visibility)
    pub(crate) fn open_section(&mut self, title: &str) {
        self.sections.push(SectionReport {
            title: title.to_string(),
            outcomes: Vec::new(),
        });
    }

    /// Records an outcome in the current section. (Internal visibility)
    pub(crate) fn record(&mut self, outcome: Outcome) {
        if self.sections.is_empty() {
            self.open_section("");
        }
        if let Some(section) = self.sections.last_mut() {
            section.outcomes.push(outcome);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn sections(&self) -> &[SectionReport] {
        &self.sections
    }

    /// All outcomes in study order.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.sections.iter().flat_map(|s| s.outcomes.iter())
    }

    /// The successful comparisons, in study order.
    pub fn comparisons(&self) -> impl Iterator<Item = &Comparison> {
        self.outcomes().filter_map(Outcome::comparison)
    }

    /// `(label, reason)` for each candidate that failed to evaluate.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes().filter_map(|o| match o {
            Outcome::Failed { label, reason } => Some((label.as_str(), reason.as_str())),
            Outcome::Compared(_) => None,
        })
    }

    /// Comparisons sorted by ascending error. Ties keep study order.
    pub fn ranked(&self) -> Vec<&Comparison> {
        let mut ranked: Vec<&Comparison> = self.comparisons().collect();
        ranked.sort_by(|a, b| a.error_pct.total_cmp(&b.error_pct));
        ranked
    }

    /// The comparison with the smallest error; the earliest one on ties.
    pub fn best(&self) -> Option<&Comparison> {
        self.ranked().into_iter().next()
    }
}

impl fmt::Display for StudyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Target: {}", self.target)?;
        for section in &self.sections {
            writeln!(f)?;
            if !section.title.is_empty() {
                writeln!(f, "{}", section.title)?;
            }
            for outcome in &section.outcomes {
                match outcome {
                    Outcome::Compared(cmp) => writeln!(f, "{}", cmp)?,
                    Outcome::Failed { label, reason } => {
                        writeln!(f, "  {:<40}   skipped: {}", label, reason)?
                    }
                }
            }
        }
        let ranked = self.ranked();
        if !ranked.is_empty() {
            writeln!(f)?;
            writeln!(f, "Ranking")?;
            for (rank, cmp) in ranked.iter().enumerate() {
                writeln!(f, "  {:>2}. {:<40} {:>12.6}%  {}", rank + 1, cmp.name, cmp.error_pct, cmp.rating())?;
            }
        }
        if let Some(best) = self.best() {
            writeln!(f)?;
            writeln!(f, "Best: {} (error: {:.4}%)", best.name, best.error_pct)?;
        }
        Ok(())
    }
}
