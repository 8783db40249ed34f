//! Check profile loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and environment overrides in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use php_envcheck::config::{load_profile, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("php-envcheck.yml"), "title: Shop check").unwrap();
//!
//! let (profile, _source) = load_profile(None, temp.path()).unwrap();
//! validate(&profile).unwrap();
//! assert_eq!(profile.title, "Shop check");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use schema::{
    CheckProfile, ConnectionTarget, ConstantDetail, DumpMode, Expect, ExtensionCheck, FlagCheck,
    SettingCheck,
};

pub use loader::{
    apply_env_overrides, discover_profile, load_profile, load_profile_file, parse_profile,
    ProfileSource, PROFILE_FILE_NAME,
};

pub use validator::{validate, validate_profile, ValidationError};

/// JSON Schema describing the profile file format.
pub fn profile_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(CheckProfile);
    serde_json::to_value(&schema).unwrap_or_default()
}
