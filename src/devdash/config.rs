//! # Configuration
//!
//! devdash reads `config.json` from its data directory. A missing file means
//! all defaults; missing keys inside the file take their default too.
//!
//! | Key                 | Default | Description |
//! |---------------------|---------|-------------|
//! | `seed-on-first-run` | `true`  | Show bundled starter data until a collection is saved |
//! | `activity-per-kind` | `3`     | Trailing records taken from each collection for the feed |
//! | `activity-limit`    | `5`     | Maximum number of feed items |
//!
//! ## Data Directory
//!
//! Resolved in priority order:
//! 1. `--data-dir <path>` on the command line.
//! 2. `DEVDASH_DIR` environment variable.
//! 3. The platform data directory (via the `directories` crate).

use crate::activity::{FeedOptions, DEFAULT_LIMIT, DEFAULT_PER_KIND};
use crate::error::{DashError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DATA_DIR_ENV: &str = "DEVDASH_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DevDashConfig {
    #[serde(default = "default_seed")]
    pub seed_on_first_run: bool,

    #[serde(default = "default_per_kind")]
    pub activity_per_kind: usize,

    #[serde(default = "default_limit")]
    pub activity_limit: usize,
}

fn default_seed() -> bool {
    true
}

fn default_per_kind() -> usize {
    DEFAULT_PER_KIND
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for DevDashConfig {
    fn default() -> Self {
        Self {
            seed_on_first_run: default_seed(),
            activity_per_kind: default_per_kind(),
            activity_limit: default_limit(),
        }
    }
}

pub const CONFIG_KEYS: &[&str] = &["seed-on-first-run", "activity-per-kind", "activity-limit"];

impl DevDashConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DashError::Io)?;
        let config: DevDashConfig =
            serde_json::from_str(&content).map_err(DashError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DashError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DashError::Serialization)?;
        fs::write(config_path, content).map_err(DashError::Io)?;
        Ok(())
    }

    pub fn feed_options(&self) -> FeedOptions {
        FeedOptions {
            per_kind: self.activity_per_kind,
            limit: self.activity_limit,
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "seed-on-first-run" => Ok(self.seed_on_first_run.to_string()),
            "activity-per-kind" => Ok(self.activity_per_kind.to_string()),
            "activity-limit" => Ok(self.activity_limit.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "seed-on-first-run" => self.seed_on_first_run = parse_value(key, value)?,
            "activity-per-kind" => self.activity_per_kind = parse_value(key, value)?,
            "activity-limit" => self.activity_limit = parse_value(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All settings as `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("seed-on-first-run", self.seed_on_first_run.to_string()),
            ("activity-per-kind", self.activity_per_kind.to_string()),
            ("activity-limit", self.activity_limit.to_string()),
        ]
    }
}

fn unknown_key(key: &str) -> DashError {
    DashError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| DashError::Config(format!("Invalid value for {}: {}", key, value)))
}

/// Pick the data directory: explicit path, then `DEVDASH_DIR`, then the
/// platform default.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("dev", "devdash", "devdash")
        .ok_or_else(|| DashError::Config("Could not determine data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}
