//! Terminal UI.
//!
//! Report content goes to stdout untouched so it can be piped or served;
//! status lines go to stderr.

use console::Term;
use std::io::Write;

use super::{Theme, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    status: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, with colors unless disabled or not a TTY.
    pub fn new(no_color: bool) -> Self {
        let theme = if no_color {
            Theme::plain()
        } else {
            Theme::detect()
        };

        Self {
            out: Term::stdout(),
            status: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn write_raw(&mut self, content: &str) {
        self.out.write_all(content.as_bytes()).ok();
        self.out.flush().ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.status, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.status, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.status, "{}", self.theme.format_error(msg)).ok();
    }
}
