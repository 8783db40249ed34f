//! Terminal text formatter.
//!
//! Formats a report for terminal display with optional color support.

use super::ReportFormatter;
use crate::report::{Outcome, Report};
use crate::ui::Theme;
use std::io::Write;

/// Formats a report for human consumption in a terminal.
pub struct TextFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl TextFormatter {
    /// Create a new text formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn theme(&self) -> Theme {
        if self.use_color {
            Theme::new()
        } else {
            Theme::plain()
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let theme = self.theme();

        writeln!(writer, "{}", theme.title.apply_to(&report.title))?;
        if let Some(version) = &report.php_version {
            writeln!(writer, "{}", theme.dim.apply_to(format!("PHP {}", version)))?;
        }

        for section in &report.sections {
            writeln!(writer)?;
            writeln!(writer, "{}", theme.header.apply_to(section.heading()))?;
            for result in &section.results {
                let line = match result.outcome {
                    Outcome::Pass => theme.format_success(&result.detail),
                    Outcome::Fail => theme.format_error(&result.detail),
                    Outcome::Info => theme.format_info(&result.detail),
                };
                writeln!(writer, "{}", line)?;
            }
        }

        // Summary
        let summary = report.summary();
        writeln!(writer)?;
        let counts = format!(
            "{} passed, {} failed, {} informational",
            summary.passed, summary.failed, summary.info
        );
        if summary.failed > 0 {
            writeln!(writer, "{}", theme.fail.apply_to(counts))?;
        } else {
            writeln!(writer, "{}", theme.pass.apply_to(counts))?;
        }

        if let Some(dump) = &report.environment_dump {
            writeln!(writer)?;
            write!(writer, "{}", dump)?;
            if !dump.ends_with('\n') {
                writeln!(writer)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CheckProfile, DumpMode};
    use crate::report::EnvironmentReporter;
    use crate::runtime::MockRuntime;

    fn render(runtime: &MockRuntime) -> String {
        let report = EnvironmentReporter::new(CheckProfile::prestashop()).evaluate(runtime);
        let mut buf = Vec::new();
        TextFormatter::new(false).format(&report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_sections_with_icons() {
        let runtime = MockRuntime::new()
            .with_extension("intl")
            .with_constant("INTL_ICU_VERSION", "74.1")
            .with_ini("memory_limit", "256M");

        let out = render(&runtime);

        assert!(out.starts_with("PrestaShop PHP Configuration Test\n"));
        assert!(out.contains("1. PDO MySQL Extension\n✗ PDO MySQL extension is NOT loaded\n"));
        assert!(out.contains("3. Intl Extension\n✓ Intl extension is loaded\n  ICU Version: 74.1\n"));
        assert!(out.contains("  Memory Limit: 256M\n"));
        assert!(out.contains("✓ short_open_tag is OFF\n"));
    }

    #[test]
    fn prints_summary_line() {
        let out = render(&MockRuntime::new().with_extension("intl"));
        assert!(out.contains("3 passed, 2 failed, 7 informational"));
    }

    #[test]
    fn shows_version_when_known() {
        let out = render(&MockRuntime::new().with_version("8.2.12"));
        assert!(out.contains("PHP 8.2.12\n"));
    }

    #[test]
    fn appends_dump_with_trailing_newline() {
        let out = render(&MockRuntime::new().with_dump("phpinfo()\nPHP Version => 8.2"));
        assert!(out.ends_with("\nphpinfo()\nPHP Version => 8.2\n"));
    }

    #[test]
    fn omits_dump_when_disabled() {
        let profile = CheckProfile {
            dump: DumpMode::None,
            ..CheckProfile::prestashop()
        };
        let report = EnvironmentReporter::new(profile).evaluate(&MockRuntime::new());
        let mut buf = Vec::new();
        TextFormatter::new(false).format(&report, &mut buf).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert!(out.ends_with("informational\n"));
    }

    #[test]
    fn failed_dump_is_reported_inline() {
        let out = render(&MockRuntime::new().without_dump());
        assert!(out.contains("Environment dump unavailable: "));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let out = render(&MockRuntime::new());
        assert!(!out.contains('\u{1b}'));
    }
}
