//! In-memory runtime for tests.
//!
//! # Example
//!
//! ```
//! use php_envcheck::runtime::{MockRuntime, PhpRuntime};
//!
//! let runtime = MockRuntime::new()
//!     .with_extension("pdo_mysql")
//!     .with_ini("short_open_tag", "")
//!     .with_connect_error("SQLSTATE[HY000] [2002] Connection refused");
//!
//! assert!(runtime.extension_loaded("PDO_MYSQL"));
//! assert_eq!(runtime.ini_get("short_open_tag").as_deref(), Some(""));
//! ```

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};

use crate::config::ConnectionTarget;
use crate::error::{EnvCheckError, Result};

use super::{ConnectError, PhpRuntime};

/// Runtime whose facts are set up front.
#[derive(Debug, Default)]
pub struct MockRuntime {
    version: Option<String>,
    extensions: BTreeSet<String>,
    ini: BTreeMap<String, String>,
    constants: BTreeMap<String, String>,
    connect_error: Option<String>,
    dump: Option<String>,
    connect_calls: Cell<usize>,
    dump_calls: Cell<usize>,
}

impl MockRuntime {
    /// A runtime with nothing loaded, a working database and an empty dump.
    pub fn new() -> Self {
        Self {
            dump: Some(String::new()),
            ..Default::default()
        }
    }

    /// Set the runtime version.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Mark an extension as loaded.
    pub fn with_extension(mut self, name: &str) -> Self {
        self.extensions.insert(name.to_ascii_lowercase());
        self
    }

    /// Set an ini directive.
    pub fn with_ini(mut self, key: &str, value: &str) -> Self {
        self.ini.insert(key.to_string(), value.to_string());
        self
    }

    /// Define a constant.
    pub fn with_constant(mut self, name: &str, value: &str) -> Self {
        self.constants.insert(name.to_string(), value.to_string());
        self
    }

    /// Make every connection attempt fail with `message`.
    pub fn with_connect_error(mut self, message: &str) -> Self {
        self.connect_error = Some(message.to_string());
        self
    }

    /// Set the environment dump.
    pub fn with_dump(mut self, dump: &str) -> Self {
        self.dump = Some(dump.to_string());
        self
    }

    /// Make the environment dump fail.
    pub fn without_dump(mut self) -> Self {
        self.dump = None;
        self
    }

    /// Number of connection attempts made.
    pub fn connect_calls(&self) -> usize {
        self.connect_calls.get()
    }

    /// Number of dumps requested.
    pub fn dump_calls(&self) -> usize {
        self.dump_calls.get()
    }
}

impl PhpRuntime for MockRuntime {
    fn extension_loaded(&self, name: &str) -> bool {
        self.extensions.contains(&name.to_ascii_lowercase())
    }

    fn ini_get(&self, key: &str) -> Option<String> {
        self.ini.get(key).cloned()
    }

    fn constant(&self, name: &str) -> Option<String> {
        self.constants.get(name).cloned()
    }

    fn version(&self) -> Option<String> {
        self.version.clone()
    }

    fn connect(&self, _target: &ConnectionTarget) -> std::result::Result<(), ConnectError> {
        self.connect_calls.set(self.connect_calls.get() + 1);
        match &self.connect_error {
            Some(message) => Err(ConnectError::new(message.clone())),
            None => Ok(()),
        }
    }

    fn info_dump(&self) -> Result<String> {
        self.dump_calls.set(self.dump_calls.get() + 1);
        self.dump
            .clone()
            .ok_or_else(|| EnvCheckError::RuntimeProbeFailed {
                probe: "phpinfo".to_string(),
                message: "dump disabled in mock".to_string(),
            })
    }
}
