//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `VETFORM_*` environment variables (`__` separates sections, e.g.
//!    `VETFORM_OUTPUT__FORMAT=json`)
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`] if it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use vetform_core::domain::Locale;

use crate::cli::OutputFormat;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language of validation messages.
    pub locale: Locale,
    /// Output settings.
    pub output: OutputConfig,
    /// Clock settings.
    pub clock: ClockConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// One of `auto`, `human`, `plain`, `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Freeze "now" for every run; unset means the system clock.
    pub fixed_now: Option<String>,
}

const ENV_PREFIX: &str = "VETFORM";

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let config: Self = Config::builder()
            .set_default("locale", defaults.locale.as_str())?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration values")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if OutputFormat::from_config(&self.output.format).is_none() {
            bail!(
                "output.format must be one of auto, human, plain, json (got '{}')",
                self.output.format
            );
        }
        Ok(())
    }

    /// `output.format` as a value enum. Validated on load.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_config(&self.output.format).unwrap_or_default()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vetform.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("co", "vetform", "vetform")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vetform.toml"))
    }
}
