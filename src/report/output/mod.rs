//! Report renderers.
//!
//! This module provides formatters for writing a [`Report`] in different
//! formats (HTML, JSON, terminal text).

pub mod html;
pub mod json;
pub mod text;

use crate::report::Report;
use std::io::Write;
use std::str::FromStr;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML headings and lines, followed by the environment dump.
    #[default]
    Html,
    /// Machine-readable JSON.
    Json,
    /// Terminal text.
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

impl OutputFormat {
    /// MIME type of the rendered output.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Html => "text/html; charset=utf-8",
            Self::Json => "application/json",
            Self::Text => "text/plain; charset=utf-8",
        }
    }
}

/// Trait for rendering a report.
pub trait ReportFormatter {
    /// Write the report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
