use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub family: FamilySettings,
    pub table: TableSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String { "warn".to_string() }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilySettings {
    /// Snapshot file loaded before any command runs
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_max_degree")]
    pub max_degree: u32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self { max_degree: default_max_degree() }
    }
}

fn default_max_degree() -> u32 { kinship::DEFAULT_MAX_DEGREE }

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Default values in the structs
    /// 2. `config/default.toml` and `config/local.toml`, or `path` when given
    /// 3. Environment variables prefixed with KINSHIP
    ///    (e.g. KINSHIP__TABLE__MAX_DEGREE -> table.max_degree)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let builder = match path {
            Some(path) => Config::builder().add_source(File::from(path)),
            None => Config::builder()
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config/local").required(false)),
        };

        builder
            .add_source(
                Environment::with_prefix("KINSHIP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
