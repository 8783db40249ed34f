//! php-envcheck - PHP runtime readiness report.
//!
//! Inspects a PHP runtime and reports whether it can host a PrestaShop
//! style web application: required extensions, ICU versions, the
//! `short_open_tag` flag, a handful of informational settings, a database
//! connectivity probe, and finally the full environment dump.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Check profiles: loading, overrides, and validation
//! - [`error`] - Error types and result aliases
//! - [`process`] - External command execution
//! - [`report`] - Report evaluation and rendering
//! - [`runtime`] - Access to the inspected PHP runtime
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use php_envcheck::config::CheckProfile;
//! use php_envcheck::report::EnvironmentReporter;
//! use php_envcheck::runtime::MockRuntime;
//!
//! let runtime = MockRuntime::new().with_extension("intl");
//! let report = EnvironmentReporter::new(CheckProfile::prestashop()).evaluate(&runtime);
//!
//! let intl = report.section("Intl Extension").unwrap();
//! assert_eq!(intl.results[0].detail, "Intl extension is loaded");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod process;
pub mod report;
pub mod runtime;
pub mod ui;

pub use error::{EnvCheckError, Result};
