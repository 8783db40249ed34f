//! Config command implementation.
//!
//! The `php-envcheck config` command shows the resolved profile, with
//! environment overrides applied, or the profile JSON Schema.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_profile, profile_schema, validate};
use crate::error::{EnvCheckError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    working_dir: PathBuf,
    config: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(working_dir: &Path, config: Option<PathBuf>, args: ConfigArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let schema = serde_json::to_string_pretty(&profile_schema())
                .map_err(|e| EnvCheckError::Other(e.into()))?;
            ui.message(&schema);
            return Ok(CommandResult::success());
        }

        let explicit = self.config.as_ref().map(|p| self.working_dir.join(p));
        let (profile, source) = match load_profile(explicit.as_deref(), &self.working_dir) {
            Ok(loaded) => loaded,
            Err(EnvCheckError::ConfigNotFound { path }) => {
                ui.error(&format!("Profile not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        validate(&profile)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&profile)
                .map_err(|e| EnvCheckError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.message(&format!("# {}", source));
            let yaml =
                serde_yaml::to_string(&profile).map_err(|e| EnvCheckError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
