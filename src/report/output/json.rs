//! JSON output formatter.
//!
//! Formats a report as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::report::{Report, Summary};
use serde::Serialize;
use std::io::Write;

/// Formats a report as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a Report,
    summary: Summary,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            report,
            summary: report.summary(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckProfile;
    use crate::report::EnvironmentReporter;
    use crate::runtime::MockRuntime;

    fn render_value(runtime: &MockRuntime) -> serde_json::Value {
        let report = EnvironmentReporter::new(CheckProfile::prestashop()).evaluate(runtime);
        let mut buf = Vec::new();
        JsonFormatter::new().format(&report, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let value = render_value(&MockRuntime::new());
        assert_eq!(value["title"], "PrestaShop PHP Configuration Test");
        assert_eq!(value["sections"].as_array().unwrap().len(), 6);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn includes_summary() {
        let runtime = MockRuntime::new().with_extension("intl");
        let value = render_value(&runtime);

        // intl + short_open_tag pass; pdo_mysql, mysqli fail; connection passes
        assert_eq!(value["summary"]["passed"], 3);
        assert_eq!(value["summary"]["failed"], 2);
        // two ICU lines + five settings
        assert_eq!(value["summary"]["info"], 7);
    }

    #[test]
    fn results_carry_outcome_and_value() {
        let runtime = MockRuntime::new().with_ini("memory_limit", "-1");
        let value = render_value(&runtime);

        let settings = &value["sections"][4];
        assert_eq!(settings["kind"], "settings");
        assert_eq!(settings["number"], 5);
        assert_eq!(settings["results"][0]["name"], "memory_limit");
        assert_eq!(settings["results"][0]["outcome"], "info");
        assert_eq!(settings["results"][0]["value"], "-1");
    }

    #[test]
    fn connection_error_is_verbatim() {
        let runtime = MockRuntime::new().with_connect_error("Access denied for user 'prestashop'");
        let value = render_value(&runtime);

        let conn = &value["sections"][5]["results"][0];
        assert_eq!(conn["outcome"], "fail");
        assert_eq!(
            conn["detail"],
            "Database connection failed: Access denied for user 'prestashop'"
        );
    }

    #[test]
    fn version_omitted_when_unknown() {
        let value = render_value(&MockRuntime::new());
        assert!(value.get("php_version").is_none());

        let value = render_value(&MockRuntime::new().with_version("8.3.0"));
        assert_eq!(value["php_version"], "8.3.0");
    }
}
