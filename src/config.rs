//! Runtime settings from the environment.
//!
//! A `.env` file in the working directory is loaded first, if present.

use crate::output::DEFAULT_TREE_FILE;
use std::path::PathBuf;

pub const ENV_LOG_CONFIG: &str = "SUBNET_TREE_LOG_CONFIG";
pub const ENV_EXPORT_FILE: &str = "SUBNET_TREE_EXPORT_FILE";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// log4rs YAML configuration file.
    pub log_config: PathBuf,
    /// Where `--export` writes the tree; `-` means a timestamped name.
    pub export_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            export_file: PathBuf::from(DEFAULT_TREE_FILE),
        }
    }
}

impl Settings {
    /// Load `.env` and read settings, falling back to defaults.
    pub fn from_env() -> Settings {
        dotenv::dotenv().ok();
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Settings {
            log_config: non_empty(ENV_LOG_CONFIG)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_config),
            export_file: non_empty(ENV_EXPORT_FILE)
                .map(PathBuf::from)
                .unwrap_or(defaults.export_file),
        }
    }

    /// True when the export file should get a generated, timestamped name.
    pub fn timestamped_export(&self) -> bool {
        self.export_file.as_os_str() == "-"
    }
}
