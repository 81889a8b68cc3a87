//! calgrid configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CalGridError, CalGridResult};
use crate::month::WeekStart;
use crate::store::Regrouping;

/// Clock style for event rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
}

/// Configuration at ~/.config/calgrid/config.toml
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalgridConfig {
    pub week_start: WeekStart,
    pub regrouping: Regrouping,
    pub time_format: TimeFormat,
}

impl CalgridConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> CalGridResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            CalGridError::Config(format!("Could not parse {}: {e}", path.display()))
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalGridResult<()> {
        let contents = "\
# calgrid configuration

# First column of the month grid: \"monday\" or \"sunday\"
# week_start = \"monday\"

# What editing an event's date does to the day it is listed under:
#   \"follow-date\"  the event moves to its new day
#   \"pinned\"       the event stays listed under the day it was created on
# regrouping = \"follow-date\"

# Clock style for event rows: \"24h\" or \"12h\"
# time_format = \"24h\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
