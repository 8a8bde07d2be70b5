//! Configuration file location and persisted user settings

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::verb::VerbBuilder;

/// Auxiliary used for continuous tenses when none is configured.
pub const DEFAULT_AUX: &str = "жату";

/// Settings keys accepted by `config set`.
pub const CONFIG_KEYS: [&str; 4] = ["force_exceptional", "color", "show_parts", "default_aux"];

/// Get the configuration directory for kazakh-morph
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("kazakh-morph"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => bail!("Invalid value {:?} for {}: expected true or false", value, key),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Conjugate with the exceptional reading by default
    pub force_exceptional: Option<bool>,
    /// Colored output
    pub color: Option<bool>,
    /// Print forms split into their parts
    pub show_parts: Option<bool>,
    /// Auxiliary verb for continuous tenses
    pub default_aux: Option<String>,
}

impl PersistentConfig {
    /// Load configuration from the default or a custom path.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default or a custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        force_exceptional: Option<bool>,
        show_parts: Option<bool>,
        default_aux: Option<String>,
    ) -> Self {
        Self {
            force_exceptional: force_exceptional.or(self.force_exceptional),
            color: self.color,
            show_parts: show_parts.or(self.show_parts),
            default_aux: default_aux.or_else(|| self.default_aux.clone()),
        }
    }

    /// Update one setting from its textual form.
    ///
    /// `default_aux` must be a valid verb dictionary form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "force_exceptional" => self.force_exceptional = Some(parse_bool(key, value)?),
            "color" => self.color = Some(parse_bool(key, value)?),
            "show_parts" => self.show_parts = Some(parse_bool(key, value)?),
            "default_aux" => {
                VerbBuilder::new(value)
                    .with_context(|| format!("Invalid auxiliary verb {:?}", value))?;
                self.default_aux = Some(value.to_owned());
            }
            _ => bail!(
                "Unknown config key {:?}; expected one of: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Effective exceptional-reading flag
    pub fn force_exceptional(&self) -> bool {
        self.force_exceptional.unwrap_or(false)
    }

    /// Effective color setting
    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    /// Effective parts setting
    pub fn show_parts(&self) -> bool {
        self.show_parts.unwrap_or(false)
    }

    /// Effective continuous auxiliary
    pub fn default_aux(&self) -> &str {
        self.default_aux.as_deref().unwrap_or(DEFAULT_AUX)
    }
}
