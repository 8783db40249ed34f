//! HTML output formatter.
//!
//! Produces the same headings and lines as the PrestaShop configuration
//! test page: an `<h2>` title, an `<h3>` per section, one `<br>`-terminated
//! line per result with `✅`/`❌` for judged checks, then the environment
//! dump.

use super::ReportFormatter;
use crate::report::{Outcome, Report};
use html_escape::encode_text;
use std::io::Write;

/// Formats a report as HTML.
pub struct HtmlFormatter {
    /// Wrap the fragment in a full document with a UTF-8 charset.
    pub standalone: bool,
}

impl HtmlFormatter {
    /// Create a new HTML formatter.
    pub fn new(standalone: bool) -> Self {
        Self { standalone }
    }

    fn icon(outcome: Outcome) -> Option<&'static str> {
        match outcome {
            Outcome::Pass => Some("✅"),
            Outcome::Fail => Some("❌"),
            Outcome::Info => None,
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        if self.standalone {
            writeln!(writer, "<!DOCTYPE html>")?;
            writeln!(writer, "<html>")?;
            writeln!(writer, "<head>")?;
            writeln!(writer, "<meta charset=\"utf-8\">")?;
            writeln!(writer, "<title>{}</title>", encode_text(&report.title))?;
            writeln!(writer, "</head>")?;
            writeln!(writer, "<body>")?;
        }

        writeln!(writer, "<h2>{}</h2>", encode_text(&report.title))?;

        for section in &report.sections {
            writeln!(writer, "<h3>{}</h3>", encode_text(&section.heading()))?;
            for result in &section.results {
                match Self::icon(result.outcome) {
                    Some(icon) => writeln!(writer, "{} {}<br>", icon, encode_text(&result.detail))?,
                    None => writeln!(writer, "{}<br>", encode_text(&result.detail))?,
                }
            }
        }

        if let Some(dump) = &report.environment_dump {
            writeln!(writer, "<pre>{}</pre>", encode_text(dump))?;
        }

        if self.standalone {
            writeln!(writer, "</body>")?;
            writeln!(writer, "</html>")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckProfile;
    use crate::report::EnvironmentReporter;
    use crate::runtime::MockRuntime;

    fn render(report: &Report, standalone: bool) -> String {
        let mut buf = Vec::new();
        HtmlFormatter::new(standalone)
            .format(report, &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn bare_runtime_report() -> Report {
        let runtime = MockRuntime::new()
            .with_extension("pdo_mysql")
            .with_ini("short_open_tag", "1")
            .with_ini("memory_limit", "128M")
            .with_ini("max_execution_time", "30")
            .with_connect_error("SQLSTATE[HY000] [2002] Connection refused")
            .with_dump("phpinfo()");
        EnvironmentReporter::new(CheckProfile::prestashop()).evaluate(&runtime)
    }

    #[test]
    fn renders_prestashop_fragment() {
        let html = render(&bare_runtime_report(), false);

        insta::assert_snapshot!(html.trim_end(), @r"
        <h2>PrestaShop PHP Configuration Test</h2>
        <h3>1. PDO MySQL Extension</h3>
        ✅ PDO MySQL extension is loaded<br>
        <h3>2. MySQLi Extension</h3>
        ❌ MySQLi extension is NOT loaded<br>
        <h3>3. Intl Extension</h3>
        ❌ Intl extension is NOT loaded<br>
        <h3>4. short_open_tag Setting</h3>
        ❌ short_open_tag is ON (should be OFF)<br>
        <h3>5. Other PHP Settings</h3>
        Memory Limit: 128M<br>
        Upload Max Filesize: <br>
        Post Max Size: <br>
        Max Execution Time: 30<br>
        Max Input Vars: <br>
        <h3>6. Database Connection Test</h3>
        ❌ Database connection failed: SQLSTATE[HY000] [2002] Connection refused<br>
        <pre>phpinfo()</pre>
        ");
    }

    #[test]
    fn dump_follows_failed_connection_immediately() {
        let html = render(&bare_runtime_report(), false);
        assert!(html.contains(
            "❌ Database connection failed: SQLSTATE[HY000] [2002] Connection refused<br>\n<pre>"
        ));
    }

    #[test]
    fn standalone_wraps_document() {
        let html = render(&bare_runtime_report(), true);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("<title>PrestaShop PHP Configuration Test</title>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn escapes_dynamic_text() {
        let runtime = MockRuntime::new().with_connect_error("host '<db>' & more");
        let report = EnvironmentReporter::new(CheckProfile::prestashop()).evaluate(&runtime);

        let html = render(&report, false);

        assert!(html.contains("Database connection failed: host '&lt;db&gt;' &amp; more<br>"));
    }

    #[test]
    fn no_dump_no_pre() {
        let mut report = bare_runtime_report();
        report.environment_dump = None;
        assert!(!render(&report, false).contains("<pre>"));
    }

    #[test]
    fn dump_paths_are_not_mangled() {
        let mut report = bare_runtime_report();
        report.environment_dump =
            Some("Loaded Configuration File => /usr/local/etc/php/php.ini\n<br />".to_string());

        let html = render(&report, false);

        assert!(html.contains(
            "<pre>Loaded Configuration File =&gt; /usr/local/etc/php/php.ini\n&lt;br /&gt;</pre>"
        ));
    }
}
