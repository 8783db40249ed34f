//! PHP runtime introspection.
//!
//! Every check in a report is a read through the [`PhpRuntime`] trait, so
//! the reporter never cares whether facts come from a real `php` binary
//! ([`PhpCli`]) or from memory ([`MockRuntime`]).
//!
//! Reads are infallible by contract: an unknown directive is `None`, an
//! unloaded extension is `false`. The only recoverable failure a check can
//! observe is a [`ConnectError`] from the connectivity probe.

pub mod mock;
pub mod php_cli;
pub mod snapshot;

pub use mock::MockRuntime;
pub use php_cli::{PhpCli, DEFAULT_PHP_BINARY};
pub use snapshot::RuntimeSnapshot;

use crate::config::ConnectionTarget;
use crate::error::Result;
use thiserror::Error;

/// A failed connectivity probe, carrying the driver's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConnectError {
    /// Driver-supplied error text.
    pub message: String,
}

impl ConnectError {
    /// Create a connection error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Read access to a PHP runtime's configuration.
pub trait PhpRuntime {
    /// Whether the named extension is loaded (case-insensitive).
    fn extension_loaded(&self, name: &str) -> bool;

    /// Value of an ini directive; `None` if the directive is unknown.
    fn ini_get(&self, key: &str) -> Option<String>;

    /// Value of a constant; `None` if undefined.
    fn constant(&self, name: &str) -> Option<String>;

    /// Runtime version string, if known.
    fn version(&self) -> Option<String>;

    /// Attempt one database connection.
    ///
    /// Blocks until the driver answers. No timeout or retry is added.
    fn connect(&self, target: &ConnectionTarget) -> std::result::Result<(), ConnectError>;

    /// The runtime's complete configuration report (`phpinfo()`).
    fn info_dump(&self) -> Result<String>;
}

/// PHP string-to-boolean conversion.
///
/// Only the empty string and `"0"` are falsy; `"off"` is truthy just as it
/// is in PHP. Directives reported by `ini_get` normalize booleans to `"1"`
/// and `""`.
pub fn php_truthy(value: &str) -> bool {
    !(value.is_empty() || value == "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_zero_are_falsy() {
        assert!(!php_truthy(""));
        assert!(!php_truthy("0"));
    }

    #[test]
    fn everything_else_is_truthy() {
        assert!(php_truthy("1"));
        assert!(php_truthy("On"));
        assert!(php_truthy("off"));
        assert!(php_truthy("0.0"));
        assert!(php_truthy(" "));
        assert!(php_truthy("00"));
    }

    #[test]
    fn connect_error_displays_message_verbatim() {
        let err = ConnectError::new("SQLSTATE[HY000] [2002] Connection refused");
        assert_eq!(err.to_string(), "SQLSTATE[HY000] [2002] Connection refused");
    }
}
