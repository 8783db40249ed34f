//! Visual theme and styling.

use console::Style;

/// Terminal styles for reports and status messages.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for passed checks and success messages (green).
    pub pass: Style,
    /// Style for failed checks and errors (red bold).
    pub fail: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for informational lines (dim).
    pub info: Style,
    /// Style for section headings (bold magenta).
    pub header: Style,
    /// Style for the report title (bold).
    pub title: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            pass: Style::new().green(),
            fail: Style::new().red().bold(),
            warning: Style::new().color256(208),
            info: Style::new().dim(),
            header: Style::new().bold().magenta(),
            title: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            pass: Style::new(),
            fail: Style::new(),
            warning: Style::new(),
            info: Style::new(),
            header: Style::new(),
            title: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.pass.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.fail.apply_to(format!("✗ {}", msg)))
    }

    /// Format an informational line (indented, dim).
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("  {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
