//! Point-in-time view of a runtime's loaded extensions, ini values and
//! constants, as reported by one `php -r` invocation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// PHP source that prints a snapshot as a single JSON line.
///
/// The requested ini keys and constants arrive as JSON in
/// `PHP_ENVCHECK_KEYS`: `{"ini": [...], "constants": [...]}`.
///
/// The CLI SAPI forces some directives (`max_execution_time=0` among them)
/// regardless of php.ini. For those, the php.ini value from `get_cfg_var`
/// is reported when one is configured, so the report shows the limit a web
/// SAPI loading the same php.ini would apply.
pub const SNAPSHOT_SCRIPT: &str = r#"
$keys = json_decode((string) getenv('PHP_ENVCHECK_KEYS'), true) ?: [];
$cliForced = ['max_execution_time', 'max_input_time', 'output_buffering',
    'html_errors', 'implicit_flush', 'register_argc_argv'];
$ini = [];
foreach ($keys['ini'] ?? [] as $key) {
    $value = ini_get($key);
    if (PHP_SAPI === 'cli' && in_array($key, $cliForced, true)) {
        $configured = get_cfg_var($key);
        if ($configured !== false && is_scalar($configured)) {
            $value = $configured;
        }
    }
    $ini[$key] = $value === false ? null : (string) $value;
}
$constants = [];
foreach ($keys['constants'] ?? [] as $name) {
    $constants[$name] = defined($name) ? (string) constant($name) : null;
}
echo "\n", json_encode([
    'version' => PHP_VERSION,
    'extensions' => array_map('strtolower', get_loaded_extensions()),
    'ini' => (object) $ini,
    'constants' => (object) $constants,
], JSON_INVALID_UTF8_SUBSTITUTE), "\n";
"#;

/// Environment variable carrying the requested keys.
pub const KEYS_ENV: &str = "PHP_ENVCHECK_KEYS";

/// Keys requested from the runtime.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SnapshotRequest {
    /// Ini directives.
    pub ini: Vec<String>,
    /// Constant names.
    pub constants: Vec<String>,
}

/// Facts read from a runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSnapshot {
    /// `PHP_VERSION`.
    pub version: Option<String>,
    /// Loaded extension names, lowercase.
    pub extensions: Vec<String>,
    /// Requested ini values; `None` for unknown directives.
    pub ini: BTreeMap<String, Option<String>>,
    /// Requested constants; `None` when undefined.
    pub constants: BTreeMap<String, Option<String>>,
}

impl RuntimeSnapshot {
    /// Parse snapshot output.
    ///
    /// The CLI may print startup warnings before the payload, so the last
    /// line that looks like a JSON object is used.
    pub fn parse(stdout: &str) -> Result<Self, String> {
        let line = last_json_line(stdout).ok_or_else(|| "no JSON payload in output".to_string())?;
        serde_json::from_str(line).map_err(|e| e.to_string())
    }

    /// Whether an extension is loaded, compared case-insensitively.
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(name))
    }

    /// An ini value; `None` when unknown or not requested.
    pub fn ini(&self, key: &str) -> Option<String> {
        self.ini.get(key).cloned().flatten()
    }

    /// A constant value; `None` when undefined or not requested.
    pub fn constant(&self, name: &str) -> Option<String> {
        self.constants.get(name).cloned().flatten()
    }
}

/// Find the last line of `output` that starts with `{`.
pub(crate) fn last_json_line(output: &str) -> Option<&str> {
    output
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| line.starts_with('{'))
}
