use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{Access, AccessLevels};

pub const CONFIG_FILE_NAME: &str = ".docpostrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Access levels to publish.
    #[serde(default)]
    pub access: AccessLevels,
    /// Regex marking unset-access names as private (e.g. `"^_"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infer_private: Option<String>,
    #[serde(default = "default_infer_properties")]
    pub infer_properties: bool,
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_infer_properties() -> bool {
    true
}

fn default_source_root() -> String {
    "./".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access: AccessLevels::default(),
            infer_private: None,
            infer_properties: default_infer_properties(),
            source_root: default_source_root(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `inferPrivate` is not a valid regex or no access
    /// level is allowed.
    pub fn validate(&self) -> Result<()> {
        self.infer_private_regex()?;

        if self.access.is_empty() {
            let levels: Vec<_> = Access::value_variants().iter().map(Access::as_str).collect();
            anyhow::bail!(
                "'access' must list at least one level ({})",
                levels.join(", ")
            );
        }

        Ok(())
    }

    /// Compiled `inferPrivate` pattern.
    pub fn infer_private_regex(&self) -> Result<Option<Regex>> {
        self.infer_private
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).with_context(|| {
                    format!("Invalid regex in 'inferPrivate': \"{}\"", pattern)
                })
            })
            .transpose()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
