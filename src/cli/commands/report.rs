//! Report command implementation.
//!
//! The `php-envcheck report` command inspects the PHP runtime and prints
//! the readiness report.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::ReportArgs;
use crate::config::{load_profile, validate, DumpMode};
use crate::error::{EnvCheckError, Result};
use crate::report::output::{
    HtmlFormatter, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter,
};
use crate::report::{EnvironmentReporter, Report};
use crate::runtime::{PhpCli, DEFAULT_PHP_BINARY};
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The report command implementation.
pub struct ReportCommand {
    working_dir: PathBuf,
    config: Option<PathBuf>,
    php_binary: String,
    color: bool,
    args: ReportArgs,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(working_dir: &Path, args: ReportArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config: None,
            php_binary: DEFAULT_PHP_BINARY.to_string(),
            color: true,
            args,
        }
    }

    /// Use an explicit profile file.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    /// Inspect a specific PHP binary.
    pub fn with_php_binary(mut self, binary: &str) -> Self {
        self.php_binary = binary.to_string();
        self
    }

    /// Allow colors in text output when the terminal supports them.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn render(&self, report: &Report) -> Result<String> {
        let mut buf = Vec::new();

        match self.args.format {
            OutputFormat::Html => HtmlFormatter::new(!self.args.fragment).format(report, &mut buf)?,
            OutputFormat::Json => JsonFormatter::new().format(report, &mut buf)?,
            OutputFormat::Text => {
                let use_color = self.color && self.args.output.is_none() && should_use_colors();
                TextFormatter::new(use_color).format(report, &mut buf)?
            }
        }

        String::from_utf8(buf).map_err(|e| EnvCheckError::Other(e.into()))
    }

    fn reporter(&self) -> Result<EnvironmentReporter> {
        let explicit = self.config.as_ref().map(|p| self.working_dir.join(p));
        let (mut profile, source) = load_profile(explicit.as_deref(), &self.working_dir)?;
        validate(&profile)?;
        tracing::info!(source = %source, "profile loaded");

        if self.args.no_dump {
            profile.dump = DumpMode::None;
        }
        Ok(EnvironmentReporter::new(profile))
    }
}

fn cgi_header(content_type: &str) -> String {
    format!("Content-Type: {}\r\n\r\n", content_type)
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reporter = match self.reporter() {
            Ok(reporter) => reporter,
            Err(e) => {
                // A CGI response still needs its header when nothing was checked.
                if self.args.cgi && self.args.output.is_none() {
                    ui.write_raw(&cgi_header(OutputFormat::Text.content_type()));
                    ui.write_raw(&format!("{}\n", e));
                }
                if let EnvCheckError::ConfigNotFound { path } = &e {
                    ui.error(&format!("Profile not found: {}", path.display()));
                    return Ok(CommandResult::failure(2));
                }
                return Err(e);
            }
        };

        let runtime = PhpCli::probe(&self.php_binary, reporter.profile());
        if let Some(reason) = runtime.snapshot_error() {
            ui.warning(&format!(
                "PHP runtime unavailable ({}); extensions and settings read as missing",
                reason
            ));
        }

        let report = reporter.evaluate(&runtime);
        let rendered = self.render(&report)?;

        match &self.args.output {
            Some(path) => {
                let path = self.working_dir.join(path);
                fs::write(&path, rendered)?;
                ui.success(&format!("Report written to {}", path.display()));
            }
            None => {
                if self.args.cgi {
                    ui.write_raw(&cgi_header(self.args.format.content_type()));
                }
                ui.write_raw(&rendered);
            }
        }

        if self.args.strict && report.has_failures() {
            let failed = report.summary().failed;
            tracing::debug!(failed, "strict mode: failing checks present");
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}
