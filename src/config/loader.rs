//! Profile discovery and loading.
//!
//! Resolution order:
//! 1. An explicit `--config` path (must exist)
//! 2. `php-envcheck.yml` in the working directory
//! 3. The built-in PrestaShop profile
//!
//! Connection fields are then overridden from `PHP_ENVCHECK_DB_*`
//! environment variables, so credentials can stay out of the file.

use crate::config::schema::{CheckProfile, ConnectionTarget};
use crate::error::{EnvCheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const PROFILE_FILE_NAME: &str = "php-envcheck.yml";

/// Environment variable overriding the database host.
pub const ENV_DB_HOST: &str = "PHP_ENVCHECK_DB_HOST";
/// Environment variable overriding the database port.
pub const ENV_DB_PORT: &str = "PHP_ENVCHECK_DB_PORT";
/// Environment variable overriding the database name.
pub const ENV_DB_NAME: &str = "PHP_ENVCHECK_DB_NAME";
/// Environment variable overriding the database user.
pub const ENV_DB_USER: &str = "PHP_ENVCHECK_DB_USER";
/// Environment variable overriding the database password.
pub const ENV_DB_PASSWORD: &str = "PHP_ENVCHECK_DB_PASSWORD";

/// Where the resolved profile came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// A profile file.
    File(PathBuf),
    /// The built-in profile.
    Builtin,
}

impl std::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileSource::File(path) => write!(f, "{}", path.display()),
            ProfileSource::Builtin => write!(f, "built-in PrestaShop profile"),
        }
    }
}

/// Find the profile file to use, if any.
pub fn discover_profile(explicit: Option<&Path>, cwd: &Path) -> Result<ProfileSource> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(EnvCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(ProfileSource::File(path.to_path_buf()));
    }

    let local = cwd.join(PROFILE_FILE_NAME);
    if local.is_file() {
        Ok(ProfileSource::File(local))
    } else {
        Ok(ProfileSource::Builtin)
    }
}

/// Load a single profile file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_profile_file(path: &Path) -> Result<CheckProfile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvCheckError::Io(e)
        }
    })?;

    parse_profile(&content, path)
}

/// Parse YAML content into a profile.
///
/// An empty document yields the built-in profile.
pub fn parse_profile(content: &str, source_path: &Path) -> Result<CheckProfile> {
    if content.trim().is_empty() {
        return Ok(CheckProfile::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply `PHP_ENVCHECK_DB_*` overrides using a custom env var lookup.
///
/// A profile without a connection gains one (built-in defaults plus the
/// overrides) as soon as any override is present.
pub fn apply_env_overrides<F>(profile: &mut CheckProfile, env_fn: F) -> Result<()>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let host = env_fn(ENV_DB_HOST).ok();
    let port = env_fn(ENV_DB_PORT).ok();
    let database = env_fn(ENV_DB_NAME).ok();
    let user = env_fn(ENV_DB_USER).ok();
    let password = env_fn(ENV_DB_PASSWORD).ok();

    if host.is_none() && port.is_none() && database.is_none() && user.is_none() && password.is_none()
    {
        return Ok(());
    }

    let conn = profile
        .connection
        .get_or_insert_with(ConnectionTarget::default);

    if let Some(host) = host {
        conn.host = host;
    }
    if let Some(port) = port {
        let parsed = port
            .trim()
            .parse::<u16>()
            .map_err(|_| EnvCheckError::ConfigValidationError {
                message: format!("{} must be a port number, got '{}'", ENV_DB_PORT, port),
            })?;
        conn.port = Some(parsed);
    }
    if let Some(database) = database {
        conn.database = database;
    }
    if let Some(user) = user {
        conn.user = user;
    }
    if let Some(password) = password {
        conn.password = password;
    }

    tracing::debug!(dsn = %conn.dsn(), "connection overridden from environment");
    Ok(())
}

/// Resolve, load, and apply environment overrides to the profile.
pub fn load_profile(explicit: Option<&Path>, cwd: &Path) -> Result<(CheckProfile, ProfileSource)> {
    let source = discover_profile(explicit, cwd)?;
    let mut profile = match &source {
        ProfileSource::File(path) => load_profile_file(path)?,
        ProfileSource::Builtin => CheckProfile::default(),
    };
    tracing::debug!(source = %source, "profile resolved");

    apply_env_overrides(&mut profile, |key: &str| std::env::var(key))?;
    Ok((profile, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env::VarError;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> std::result::Result<String, VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn discover_uses_builtin_without_file() {
        let temp = TempDir::new().unwrap();
        let source = discover_profile(None, temp.path()).unwrap();
        assert_eq!(source, ProfileSource::Builtin);
    }

    #[test]
    fn discover_finds_local_profile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROFILE_FILE_NAME), "title: Local").unwrap();

        let source = discover_profile(None, temp.path()).unwrap();

        assert_eq!(source, ProfileSource::File(temp.path().join(PROFILE_FILE_NAME)));
    }

    #[test]
    fn discover_explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let err = discover_profile(Some(&missing), temp.path()).unwrap_err();

        assert!(matches!(err, EnvCheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_path_wins_over_local_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROFILE_FILE_NAME), "title: Local").unwrap();
        let explicit = temp.path().join("other.yml");
        fs::write(&explicit, "title: Other").unwrap();

        let (profile, source) = load_profile(Some(&explicit), temp.path()).unwrap();

        assert_eq!(profile.title, "Other");
        assert_eq!(source, ProfileSource::File(explicit));
    }

    #[test]
    fn load_profile_file_returns_not_found_error() {
        let err = load_profile_file(Path::new("/nonexistent/php-envcheck.yml")).unwrap_err();
        assert!(matches!(err, EnvCheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn parse_profile_returns_parse_error_for_invalid_yaml() {
        let err = parse_profile("extensions: [unclosed", Path::new("bad.yml")).unwrap_err();
        assert!(matches!(err, EnvCheckError::ConfigParseError { .. }));
        assert!(err.to_string().contains("bad.yml"));
    }

    #[test]
    fn parse_profile_handles_empty_file() {
        let profile = parse_profile("", Path::new("empty.yml")).unwrap();
        assert_eq!(profile, CheckProfile::prestashop());
    }

    #[test]
    fn parse_profile_reads_custom_checks() {
        let yaml = r#"
title: Magento readiness
extensions:
  - name: sodium
    label: Sodium
settings:
  - key: realpath_cache_size
    label: Realpath Cache Size
connection:
  host: db.internal
  port: 3306
  database: magento
  user: magento
  password: secret
dump: none
"#;
        let profile = parse_profile(yaml, Path::new("magento.yml")).unwrap();

        assert_eq!(profile.title, "Magento readiness");
        assert_eq!(profile.extensions.len(), 1);
        assert_eq!(profile.settings[0].key, "realpath_cache_size");
        let conn = profile.connection.unwrap();
        assert_eq!(conn.driver, "mysql");
        assert_eq!(conn.dsn(), "mysql:host=db.internal;port=3306;dbname=magento");
        assert_eq!(profile.dump, crate::config::DumpMode::None);
    }

    #[test]
    fn env_overrides_replace_connection_fields() {
        let mut profile = CheckProfile::prestashop();
        let env = env_from(&[
            (ENV_DB_HOST, "127.0.0.1"),
            (ENV_DB_PORT, "3307"),
            (ENV_DB_PASSWORD, "hunter2"),
        ]);

        apply_env_overrides(&mut profile, env).unwrap();

        let conn = profile.connection.unwrap();
        assert_eq!(conn.host, "127.0.0.1");
        assert_eq!(conn.port, Some(3307));
        assert_eq!(conn.password, "hunter2");
        // Untouched fields keep profile values
        assert_eq!(conn.user, "prestashop");
        assert_eq!(conn.database, "prestashop");
    }

    #[test]
    fn env_overrides_without_vars_leave_profile_alone() {
        let mut profile = CheckProfile::prestashop();
        profile.connection = None;

        apply_env_overrides(&mut profile, env_from(&[])).unwrap();

        assert!(profile.connection.is_none());
    }

    #[test]
    fn env_override_creates_missing_connection() {
        let mut profile = CheckProfile::prestashop();
        profile.connection = None;

        apply_env_overrides(&mut profile, env_from(&[(ENV_DB_NAME, "shop")])).unwrap();

        assert_eq!(profile.connection.unwrap().database, "shop");
    }

    #[test]
    fn env_override_rejects_bad_port() {
        let mut profile = CheckProfile::prestashop();

        let err = apply_env_overrides(&mut profile, env_from(&[(ENV_DB_PORT, "mysql")]))
            .unwrap_err();

        assert!(matches!(err, EnvCheckError::ConfigValidationError { .. }));
        assert!(err.to_string().contains(ENV_DB_PORT));
    }

    #[test]
    fn profile_source_display() {
        assert_eq!(
            ProfileSource::Builtin.to_string(),
            "built-in PrestaShop profile"
        );
        assert_eq!(
            ProfileSource::File(PathBuf::from("/srv/php-envcheck.yml")).to_string(),
            "/srv/php-envcheck.yml"
        );
    }
}
