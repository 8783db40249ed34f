//! Check profile definitions.
//!
//! A [`CheckProfile`] is the data that drives a report: which extensions
//! must be loaded, which boolean ini flags are judged, which settings are
//! printed, and which database to probe. The built-in profile reproduces
//! the PrestaShop readiness checks.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root structure of a `php-envcheck.yml` profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CheckProfile {
    /// Report title.
    pub title: String,

    /// Extensions that must be loaded, in report order.
    pub extensions: Vec<ExtensionCheck>,

    /// Boolean ini flags with an expected polarity.
    pub flags: Vec<FlagCheck>,

    /// Ini settings printed without judgement.
    pub settings: Vec<SettingCheck>,

    /// Database to probe; no connection section when absent.
    pub connection: Option<ConnectionTarget>,

    /// Whether the full runtime environment dump closes the report.
    pub dump: DumpMode,
}

impl Default for CheckProfile {
    fn default() -> Self {
        Self::prestashop()
    }
}

impl CheckProfile {
    /// The built-in PrestaShop readiness profile.
    pub fn prestashop() -> Self {
        Self {
            title: "PrestaShop PHP Configuration Test".to_string(),
            extensions: vec![
                ExtensionCheck::new("pdo_mysql", "PDO MySQL"),
                ExtensionCheck::new("mysqli", "MySQLi"),
                ExtensionCheck::new("intl", "Intl")
                    .with_detail("INTL_ICU_VERSION", "ICU Version")
                    .with_detail("INTL_ICU_DATA_VERSION", "ICU Data Version"),
            ],
            flags: vec![FlagCheck {
                key: "short_open_tag".to_string(),
                expect: Expect::Off,
            }],
            settings: vec![
                SettingCheck::new("memory_limit", "Memory Limit"),
                SettingCheck::new("upload_max_filesize", "Upload Max Filesize"),
                SettingCheck::new("post_max_size", "Post Max Size"),
                SettingCheck::new("max_execution_time", "Max Execution Time"),
                SettingCheck::new("max_input_vars", "Max Input Vars"),
            ],
            connection: Some(ConnectionTarget::default()),
            dump: DumpMode::Full,
        }
    }

    /// Every ini directive the profile reads.
    pub fn ini_keys(&self) -> Vec<String> {
        self.flags
            .iter()
            .map(|f| f.key.clone())
            .chain(self.settings.iter().map(|s| s.key.clone()))
            .collect()
    }

    /// Every constant the profile reads.
    pub fn constants(&self) -> Vec<String> {
        self.extensions
            .iter()
            .flat_map(|e| e.details.iter().map(|d| d.constant.clone()))
            .collect()
    }
}

/// A runtime extension that must be loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExtensionCheck {
    /// Extension name as known to `extension_loaded()`.
    pub name: String,

    /// Display label.
    pub label: String,

    /// Constants shown when the extension is loaded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ConstantDetail>,
}

impl ExtensionCheck {
    /// Create an extension check without detail lines.
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            details: Vec::new(),
        }
    }

    /// Add a constant shown when the extension is loaded.
    pub fn with_detail(mut self, constant: &str, label: &str) -> Self {
        self.details.push(ConstantDetail {
            constant: constant.to_string(),
            label: label.to_string(),
        });
        self
    }
}

/// A runtime constant surfaced as an informational line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConstantDetail {
    /// Constant name, e.g. `INTL_ICU_VERSION`.
    pub constant: String,

    /// Display label.
    pub label: String,
}

/// A boolean ini flag judged against an expected state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlagCheck {
    /// Ini directive name.
    pub key: String,

    /// Required state.
    #[serde(default)]
    pub expect: Expect,
}

/// Required state of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Expect {
    /// Passes when the flag is falsy.
    #[default]
    Off,
    /// Passes when the flag is truthy.
    On,
}

impl Expect {
    /// Display word for this state.
    pub fn word(self) -> &'static str {
        match self {
            Expect::Off => "OFF",
            Expect::On => "ON",
        }
    }
}

/// An ini setting printed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SettingCheck {
    /// Ini directive name.
    pub key: String,

    /// Display label.
    pub label: String,
}

impl SettingCheck {
    /// Create a setting check.
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Database connection descriptor for the connectivity probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ConnectionTarget {
    /// PDO driver name.
    pub driver: String,

    /// Database host.
    pub host: String,

    /// Port; the driver default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Database name.
    pub database: String,

    /// User name.
    pub user: String,

    /// Password.
    pub password: String,
}

impl Default for ConnectionTarget {
    fn default() -> Self {
        Self {
            driver: "mysql".to_string(),
            host: "mysql".to_string(),
            port: None,
            database: "prestashop".to_string(),
            user: "prestashop".to_string(),
            password: "prestashop".to_string(),
        }
    }
}

impl ConnectionTarget {
    /// PDO data source name, e.g. `mysql:host=mysql;dbname=prestashop`.
    pub fn dsn(&self) -> String {
        match self.port {
            Some(port) => format!(
                "{}:host={};port={};dbname={}",
                self.driver, self.host, port, self.database
            ),
            None => format!("{}:host={};dbname={}", self.driver, self.host, self.database),
        }
    }
}

/// How much of the runtime environment to append to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DumpMode {
    /// The complete `phpinfo()` output, verbatim.
    #[default]
    Full,
    /// No dump.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_prestashop() {
        let profile = CheckProfile::default();
        assert_eq!(profile.title, "PrestaShop PHP Configuration Test");
        let names: Vec<_> = profile.extensions.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["pdo_mysql", "mysqli", "intl"]);
        assert_eq!(profile.flags[0].key, "short_open_tag");
        assert_eq!(profile.flags[0].expect, Expect::Off);
        assert_eq!(profile.settings.len(), 5);
        assert_eq!(profile.dump, DumpMode::Full);
    }

    #[test]
    fn only_intl_has_details() {
        let profile = CheckProfile::prestashop();
        for ext in &profile.extensions {
            if ext.name == "intl" {
                assert_eq!(ext.details.len(), 2);
            } else {
                assert!(ext.details.is_empty());
            }
        }
    }

    #[test]
    fn default_dsn_matches_prestashop_container() {
        let target = ConnectionTarget::default();
        assert_eq!(target.dsn(), "mysql:host=mysql;dbname=prestashop");
        assert_eq!(target.user, "prestashop");
        assert_eq!(target.password, "prestashop");
    }

    #[test]
    fn dsn_includes_port_when_set() {
        let target = ConnectionTarget {
            port: Some(3307),
            ..Default::default()
        };
        assert_eq!(target.dsn(), "mysql:host=mysql;port=3307;dbname=prestashop");
    }

    #[test]
    fn ini_keys_lists_flags_then_settings() {
        let keys = CheckProfile::prestashop().ini_keys();
        assert_eq!(keys[0], "short_open_tag");
        assert_eq!(keys[1], "memory_limit");
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn constants_lists_icu_versions() {
        let constants = CheckProfile::prestashop().constants();
        assert_eq!(constants, ["INTL_ICU_VERSION", "INTL_ICU_DATA_VERSION"]);
    }

    #[test]
    fn partial_yaml_takes_defaults() {
        let yaml = "title: Shop check\nflags:\n  - key: display_errors\n    expect: on\n";
        let profile: CheckProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.title, "Shop check");
        assert_eq!(profile.flags.len(), 1);
        assert_eq!(profile.flags[0].expect, Expect::On);
        // Fields not mentioned keep the built-in values
        assert_eq!(profile.extensions.len(), 3);
        assert!(profile.connection.is_some());
    }

    #[test]
    fn null_connection_disables_probe() {
        let profile: CheckProfile = serde_yaml::from_str("connection: null").unwrap();
        assert!(profile.connection.is_none());
    }

    #[test]
    fn flag_expect_defaults_to_off() {
        let flag: FlagCheck = serde_yaml::from_str("key: allow_url_include").unwrap();
        assert_eq!(flag.expect, Expect::Off);
    }

    #[test]
    fn expect_words() {
        assert_eq!(Expect::Off.word(), "OFF");
        assert_eq!(Expect::On.word(), "ON");
    }

    #[test]
    fn profile_round_trips_through_yaml() {
        let profile = CheckProfile::prestashop();
        let yaml = serde_yaml::to_string(&profile).unwrap();
        let parsed: CheckProfile = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, profile);
    }
}
