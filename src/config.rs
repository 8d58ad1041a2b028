//! Runtime settings for the `toolshed` binary.
//!
//! Settings are layered: built-in defaults, then an optional JSON file, then
//! `TOOLSHED_*` environment variables. Environment access goes through a
//! lookup function so callers and tests control where values come from.

use crate::logging::DEFAULT_LOG_LEVEL;
use crate::tool_groups::domain::{GroupCapacity, ToolGroupDomainError};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Overrides the active group capacity.
pub const CAPACITY_ENV: &str = "TOOLSHED_CAPACITY";
/// Overrides the initial groups, comma-separated.
pub const INITIAL_GROUPS_ENV: &str = "TOOLSHED_INITIAL_GROUPS";
/// Overrides the log filter directive.
pub const LOG_LEVEL_ENV: &str = "TOOLSHED_LOG_LEVEL";

/// Groups activated at start-up when nothing else is configured.
pub const DEFAULT_INITIAL_GROUPS: &[&str] = &["projects", "infrastructure"];

/// Errors raised while assembling settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        /// File path.
        path: Utf8PathBuf,
        /// I/O failure.
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid settings JSON.
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        /// File path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// An environment variable holds an unusable value.
    #[error("invalid value '{value}' for {variable}")]
    InvalidEnv {
        /// Variable name.
        variable: &'static str,
        /// Raw value.
        value: String,
    },

    /// The configured capacity is not allowed.
    #[error(transparent)]
    Capacity(#[from] ToolGroupDomainError),
}

/// Settings consumed at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolshedSettings {
    /// Maximum number of simultaneously active groups.
    pub capacity: GroupCapacity,
    /// Groups loaded, in order, before any query is handled.
    pub initial_groups: Vec<String>,
    /// Filter directive passed to the tracing subscriber.
    pub log_level: String,
}

impl Default for ToolshedSettings {
    fn default() -> Self {
        Self {
            capacity: GroupCapacity::default(),
            initial_groups: DEFAULT_INITIAL_GROUPS
                .iter()
                .map(|&group| group.to_owned())
                .collect(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ToolshedSettings {
    /// Resolves settings from defaults, an optional file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the file cannot be read or parsed, or an
    /// environment override is invalid.
    pub fn load<F>(path: Option<&Utf8Path>, lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match path {
            Some(file) => Self::from_json_file(file)?,
            None => Self::default(),
        };
        base.with_env_overrides(lookup)
    }

    /// Reads settings from a JSON file; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] or [`SettingsError::Parse`].
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, SettingsError> {
        let contents = read_settings_file(path).map_err(|source| SettingsError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Applies `TOOLSHED_*` overrides found through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEnv`] for a non-numeric capacity or a
    /// blank log level, and [`SettingsError::Capacity`] for a zero capacity.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(CAPACITY_ENV) {
            let value = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| SettingsError::InvalidEnv {
                    variable: CAPACITY_ENV,
                    value: raw.clone(),
                })?;
            self.capacity = GroupCapacity::new(value)?;
        }
        if let Some(raw) = lookup(INITIAL_GROUPS_ENV) {
            self.initial_groups = split_group_list(&raw);
        }
        if let Some(raw) = lookup(LOG_LEVEL_ENV) {
            let level = raw.trim();
            if level.is_empty() {
                return Err(SettingsError::InvalidEnv {
                    variable: LOG_LEVEL_ENV,
                    value: raw,
                });
            }
            self.log_level = level.to_owned();
        }
        Ok(self)
    }
}

fn split_group_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn read_settings_file(path: &Utf8Path) -> io::Result<String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
