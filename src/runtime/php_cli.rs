//! Runtime backed by the `php` command-line binary.
//!
//! Three kinds of invocation are made, each exactly once per report:
//! - a snapshot script (`php -r`) reading extensions, ini values and constants
//! - a PDO connection script (`php -r`), run only for the connectivity probe
//! - `php -i` for the environment dump
//!
//! Inputs travel through environment variables so that neither profile
//! values nor credentials appear in PHP source or on the command line.

use crate::config::{CheckProfile, ConnectionTarget};
use crate::error::{EnvCheckError, Result};
use crate::process::{execute, CommandOptions};
use crate::runtime::snapshot::{
    last_json_line, RuntimeSnapshot, SnapshotRequest, KEYS_ENV, SNAPSHOT_SCRIPT,
};
use crate::runtime::{ConnectError, PhpRuntime};
use serde::Deserialize;

/// Binary used when none is configured.
pub const DEFAULT_PHP_BINARY: &str = "php";

const DSN_ENV: &str = "PHP_ENVCHECK_PROBE_DSN";
const USER_ENV: &str = "PHP_ENVCHECK_PROBE_USER";
const PASSWORD_ENV: &str = "PHP_ENVCHECK_PROBE_PASSWORD";

/// PHP source attempting one PDO connection and printing `{ok, message}`.
const CONNECT_SCRIPT: &str = r#"
try {
    new PDO(
        (string) getenv('PHP_ENVCHECK_PROBE_DSN'),
        (string) getenv('PHP_ENVCHECK_PROBE_USER'),
        (string) getenv('PHP_ENVCHECK_PROBE_PASSWORD')
    );
    $result = ['ok' => true, 'message' => null];
} catch (Throwable $e) {
    $result = ['ok' => false, 'message' => $e->getMessage()];
}
echo "\n", json_encode($result, JSON_INVALID_UTF8_SUBSTITUTE), "\n";
"#;

#[derive(Debug, Deserialize)]
struct ConnectOutcome {
    ok: bool,
    message: Option<String>,
}

/// A PHP runtime reached through its CLI binary.
#[derive(Debug, Clone)]
pub struct PhpCli {
    binary: String,
    snapshot: RuntimeSnapshot,
    snapshot_error: Option<String>,
}

impl PhpCli {
    /// Take a snapshot of everything `profile` reads.
    ///
    /// Never fails: if the binary is missing or answers garbage, the reason
    /// is kept in [`snapshot_error`](Self::snapshot_error) and every read
    /// falls back to "not loaded" / empty.
    pub fn probe(binary: &str, profile: &CheckProfile) -> Self {
        let request = SnapshotRequest {
            ini: profile.ini_keys(),
            constants: profile.constants(),
        };

        match Self::take_snapshot(binary, &request) {
            Ok(snapshot) => {
                tracing::debug!(
                    version = snapshot.version.as_deref().unwrap_or("unknown"),
                    extensions = snapshot.extensions.len(),
                    "runtime snapshot taken"
                );
                Self::with_snapshot(binary, snapshot)
            }
            Err(e) => {
                tracing::debug!(error = %e, "runtime snapshot failed");
                let mut runtime = Self::with_snapshot(binary, RuntimeSnapshot::default());
                runtime.snapshot_error = Some(e.to_string());
                runtime
            }
        }
    }

    /// Wrap an existing snapshot.
    pub fn with_snapshot(binary: &str, snapshot: RuntimeSnapshot) -> Self {
        Self {
            binary: binary.to_string(),
            snapshot,
            snapshot_error: None,
        }
    }

    /// The binary this runtime invokes.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// The facts read at probe time.
    pub fn snapshot(&self) -> &RuntimeSnapshot {
        &self.snapshot
    }

    /// Why the snapshot could not be taken, when it failed.
    pub fn snapshot_error(&self) -> Option<&str> {
        self.snapshot_error.as_deref()
    }

    fn take_snapshot(binary: &str, request: &SnapshotRequest) -> Result<RuntimeSnapshot> {
        let keys = serde_json::to_string(request).map_err(|e| EnvCheckError::Other(e.into()))?;
        let options = CommandOptions::default().with_env(KEYS_ENV, keys);

        let result = execute(binary, &["-r", SNAPSHOT_SCRIPT], &options)?;
        if !result.success {
            return Err(EnvCheckError::RuntimeProbeFailed {
                probe: "snapshot".to_string(),
                message: result.diagnostic(),
            });
        }

        RuntimeSnapshot::parse(&result.stdout).map_err(|message| {
            EnvCheckError::RuntimeProbeFailed {
                probe: "snapshot".to_string(),
                message,
            }
        })
    }
}

impl PhpRuntime for PhpCli {
    fn extension_loaded(&self, name: &str) -> bool {
        self.snapshot.has_extension(name)
    }

    fn ini_get(&self, key: &str) -> Option<String> {
        self.snapshot.ini(key)
    }

    fn constant(&self, name: &str) -> Option<String> {
        self.snapshot.constant(name)
    }

    fn version(&self) -> Option<String> {
        self.snapshot.version.clone()
    }

    fn connect(&self, target: &ConnectionTarget) -> std::result::Result<(), ConnectError> {
        let options = CommandOptions::default()
            .with_env(DSN_ENV, target.dsn())
            .with_env(USER_ENV, target.user.clone())
            .with_env(PASSWORD_ENV, target.password.clone());

        tracing::debug!(dsn = %target.dsn(), user = %target.user, "connecting");

        let result = execute(&self.binary, &["-r", CONNECT_SCRIPT], &options)
            .map_err(|e| ConnectError::new(e.to_string()))?;

        let outcome = last_json_line(&result.stdout)
            .and_then(|line| serde_json::from_str::<ConnectOutcome>(line).ok())
            .ok_or_else(|| ConnectError::new(result.diagnostic()))?;

        if outcome.ok {
            Ok(())
        } else {
            Err(ConnectError::new(outcome.message.unwrap_or_default()))
        }
    }

    fn info_dump(&self) -> Result<String> {
        let result = execute(&self.binary, &["-i"], &CommandOptions::default())?;
        if result.success {
            Ok(result.stdout)
        } else {
            Err(EnvCheckError::RuntimeProbeFailed {
                probe: "phpinfo".to_string(),
                message: result.diagnostic(),
            })
        }
    }
}
