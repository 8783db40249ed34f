//! Report model and evaluation.
//!
//! A [`Report`] is built completely before anything is rendered, so one
//! evaluation can feed any [`output`] format and tests can inspect results
//! without capturing a stream.
//!
//! - [`reporter`] - runs a profile's checks against a runtime
//! - [`output`] - HTML, JSON and terminal renderers

pub mod output;
pub mod reporter;

pub use reporter::EnvironmentReporter;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Verdict of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Requirement met.
    Pass,
    /// Requirement not met.
    Fail,
    /// Printed without judgement.
    Info,
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// What was checked: an extension, directive, constant or `connection`.
    pub name: String,
    /// Verdict.
    pub outcome: Outcome,
    /// Human-readable line, without icon.
    pub detail: String,
    /// Raw value read from the runtime, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl CheckResult {
    /// A passing result.
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Outcome::Pass, detail)
    }

    /// A failing result.
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Outcome::Fail, detail)
    }

    /// An informational result.
    pub fn info(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Outcome::Info, detail)
    }

    fn new(name: impl Into<String>, outcome: Outcome, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome,
            detail: detail.into(),
            value: None,
        }
    }

    /// Attach the raw value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// What a section checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Extension,
    Flag,
    Settings,
    Connection,
}

/// A numbered group of results under one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// 1-based position in the report.
    pub number: usize,
    /// Heading without the number, e.g. `Intl Extension`.
    pub title: String,
    /// What the section checks.
    pub kind: SectionKind,
    /// Lines in order.
    pub results: Vec<CheckResult>,
}

impl Section {
    /// Heading with its number, e.g. `3. Intl Extension`.
    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }
}

/// Pass/fail tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Checks that passed.
    pub passed: usize,
    /// Checks that failed.
    pub failed: usize,
    /// Informational lines, which are never judged.
    pub info: usize,
}

/// The complete, ordered outcome of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Report title.
    pub title: String,
    /// When the checks ran.
    pub generated_at: DateTime<Utc>,
    /// Version of the inspected runtime, if it answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_version: Option<String>,
    /// Sections in check order.
    pub sections: Vec<Section>,
    /// Trailing environment dump; `None` when disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_dump: Option<String>,
}

impl Report {
    /// Tally all results.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for result in self.results() {
            match result.outcome {
                Outcome::Pass => summary.passed += 1,
                Outcome::Fail => summary.failed += 1,
                Outcome::Info => summary.info += 1,
            }
        }
        summary
    }

    /// Whether any check failed.
    pub fn has_failures(&self) -> bool {
        self.results().any(|r| r.outcome == Outcome::Fail)
    }

    /// Every result in report order.
    pub fn results(&self) -> impl Iterator<Item = &CheckResult> {
        self.sections.iter().flat_map(|s| s.results.iter())
    }

    /// Find a section by its unnumbered title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}
