// Configuration loading
//
// A missing file at the default location means defaults. An explicit path
// that does not exist is an error.

use crate::models::{TaskPriority, TaskStatus};
use eyre::{Context, Result, eyre};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR: &str = "taskboard";
const CONFIG_FILE: &str = "taskboard.yml";

/// Board configuration, read from YAML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start the session with the example tasks
    pub seed_examples: bool,
    /// Colorize terminal output
    pub color: bool,
    /// Initial values for the add-task form
    pub defaults: FormDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_examples: true,
            color: true,
            defaults: FormDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Days from today for the default due date
    pub due_in_days: i64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_in_days: 1,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location if `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(eyre!("Config file not found: {}", path.display()));
                }
                Self::from_file(path)
            }
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                Some(path) => {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Ok(Self::default())
                }
                None => {
                    debug!("No config directory, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&content).with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content).context("Failed to parse YAML")?;
        if config.defaults.due_in_days < 0 {
            return Err(eyre!(
                "defaults.due_in_days must not be negative (got {})",
                config.defaults.due_in_days
            ));
        }
        Ok(config)
    }
}

/// `<config dir>/taskboard/taskboard.yml`, if the platform has a config dir
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
