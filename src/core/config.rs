use crate::error::{CliError, Result};
use config::builder::DefaultState;
use config::{Config as RawConfig, ConfigBuilder, Environment, File};
use serde::Deserialize;

pub const DEFAULT_COMMIT_MESSAGE: &str =
    "Add data folders (analysis, prompts, reference - excluding large files)";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub commit_message: String,
    /// Remote named in the push reminder.
    pub remote: String,
    pub branch: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl Config {
    pub fn push_command(&self) -> String {
        format!("git push {} {}", self.remote, self.branch)
    }
}

/// Loads `<config_dir>/finalpush/config.toml` (if present) and then
/// `FINALPUSH_*` environment variables on top.
pub fn load() -> Result<Config> {
    let mut builder = RawConfig::builder();

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("finalpush").join("config.toml");
        tracing::debug!("looking for user config at {}", path.display());
        builder = builder.add_source(File::from(path).required(false));
    }

    finish(builder.add_source(
        Environment::with_prefix("FINALPUSH")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    ))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config> {
    builder
        .build()
        .map_err(CliError::Config)?
        .try_deserialize()
        .map_err(CliError::Config)
}
