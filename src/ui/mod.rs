//! Terminal output for commands.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing reports to stdout and status to stderr
//! - [`MockUI`] capturing everything for tests
//! - [`Theme`] terminal styles
//!
//! # Example
//!
//! ```
//! use php_envcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.write_raw("<h2>Report</h2>\n");
//! ui.success("Report written");
//! assert_eq!(ui.raw_output(), "<h2>Report</h2>\n");
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message line on standard output.
    fn message(&mut self, msg: &str);

    /// Write content to standard output exactly as given.
    fn write_raw(&mut self, content: &str);

    /// Display a success status.
    fn success(&mut self, msg: &str);

    /// Display a warning status.
    fn warning(&mut self, msg: &str);

    /// Display an error status.
    fn error(&mut self, msg: &str);
}
