//! Environment reporter.
//!
//! Runs every check of a [`CheckProfile`] against a [`PhpRuntime`], in a
//! fixed order, and collects the results into a [`Report`]:
//!
//! 1. one section per extension
//! 2. one section per flag
//! 3. the informational settings
//! 4. the connectivity probe
//! 5. the environment dump
//!
//! Checks are independent: nothing a check observes stops the ones after
//! it, and the dump is attempted whatever the probe's outcome.

use chrono::Utc;

use crate::config::{
    CheckProfile, ConnectionTarget, DumpMode, Expect, ExtensionCheck, FlagCheck, SettingCheck,
};
use crate::runtime::{php_truthy, PhpRuntime};

use super::{CheckResult, Report, Section, SectionKind};

/// Evaluates a profile into a report.
#[derive(Debug, Clone)]
pub struct EnvironmentReporter {
    profile: CheckProfile,
}

impl EnvironmentReporter {
    /// Create a reporter for `profile`.
    pub fn new(profile: CheckProfile) -> Self {
        Self { profile }
    }

    /// The profile being evaluated.
    pub fn profile(&self) -> &CheckProfile {
        &self.profile
    }

    /// Run every check once and build the report.
    pub fn evaluate(&self, runtime: &dyn PhpRuntime) -> Report {
        let mut sections = Vec::new();

        for ext in &self.profile.extensions {
            let section = check_extension(sections.len() + 1, ext, runtime);
            sections.push(section);
        }

        for flag in &self.profile.flags {
            let section = check_flag(sections.len() + 1, flag, runtime);
            sections.push(section);
        }

        if !self.profile.settings.is_empty() {
            let section = check_settings(sections.len() + 1, &self.profile.settings, runtime);
            sections.push(section);
        }

        if let Some(target) = &self.profile.connection {
            let section = check_connection(sections.len() + 1, target, runtime);
            sections.push(section);
        }

        let environment_dump = match self.profile.dump {
            DumpMode::Full => Some(environment_dump(runtime)),
            DumpMode::None => None,
        };

        let report = Report {
            title: self.profile.title.clone(),
            generated_at: Utc::now(),
            php_version: runtime.version(),
            sections,
            environment_dump,
        };

        let summary = report.summary();
        tracing::info!(
            passed = summary.passed,
            failed = summary.failed,
            "report evaluated"
        );
        report
    }
}

fn check_extension(number: usize, ext: &ExtensionCheck, runtime: &dyn PhpRuntime) -> Section {
    let loaded = runtime.extension_loaded(&ext.name);
    tracing::debug!(extension = %ext.name, loaded, "extension check");

    let mut results = Vec::with_capacity(1 + ext.details.len());
    if loaded {
        results.push(CheckResult::pass(
            &ext.name,
            format!("{} extension is loaded", ext.label),
        ));
        for detail in &ext.details {
            let value = runtime.constant(&detail.constant).unwrap_or_default();
            results.push(
                CheckResult::info(&detail.constant, format!("{}: {}", detail.label, value))
                    .with_value(value),
            );
        }
    } else {
        results.push(CheckResult::fail(
            &ext.name,
            format!("{} extension is NOT loaded", ext.label),
        ));
    }

    Section {
        number,
        title: format!("{} Extension", ext.label),
        kind: SectionKind::Extension,
        results,
    }
}

fn check_flag(number: usize, flag: &FlagCheck, runtime: &dyn PhpRuntime) -> Section {
    let raw = runtime.ini_get(&flag.key).unwrap_or_default();
    let actual = if php_truthy(&raw) {
        Expect::On
    } else {
        Expect::Off
    };
    tracing::debug!(key = %flag.key, value = %raw, expected = flag.expect.word(), "flag check");

    let result = if actual == flag.expect {
        CheckResult::pass(&flag.key, format!("{} is {}", flag.key, actual.word()))
    } else {
        CheckResult::fail(
            &flag.key,
            format!(
                "{} is {} (should be {})",
                flag.key,
                actual.word(),
                flag.expect.word()
            ),
        )
    };

    Section {
        number,
        title: format!("{} Setting", flag.key),
        kind: SectionKind::Flag,
        results: vec![result.with_value(raw)],
    }
}

fn check_settings(number: usize, settings: &[SettingCheck], runtime: &dyn PhpRuntime) -> Section {
    let results = settings
        .iter()
        .map(|setting| {
            let value = runtime.ini_get(&setting.key).unwrap_or_default();
            CheckResult::info(&setting.key, format!("{}: {}", setting.label, value))
                .with_value(value)
        })
        .collect();

    Section {
        number,
        title: "Other PHP Settings".to_string(),
        kind: SectionKind::Settings,
        results,
    }
}

fn check_connection(number: usize, target: &ConnectionTarget, runtime: &dyn PhpRuntime) -> Section {
    let result = match runtime.connect(target) {
        Ok(()) => {
            tracing::info!(dsn = %target.dsn(), "database connection succeeded");
            CheckResult::pass("connection", "Database connection successful")
        }
        Err(e) => {
            tracing::info!(dsn = %target.dsn(), error = %e, "database connection failed");
            CheckResult::fail("connection", format!("Database connection failed: {}", e))
        }
    };

    Section {
        number,
        title: "Database Connection Test".to_string(),
        kind: SectionKind::Connection,
        results: vec![result],
    }
}

fn environment_dump(runtime: &dyn PhpRuntime) -> String {
    match runtime.info_dump() {
        Ok(dump) => dump,
        Err(e) => {
            tracing::warn!(error = %e, "environment dump unavailable");
            format!("Environment dump unavailable: {}", e)
        }
    }
}
