//! Rule configuration.
//!
//! Every field has a default matching the workflow the rules were written
//! for, so an absent or empty configuration file is valid:
//!
//! ```toml
//! [reset_week]
//! boards = ["Operations Tasks", "Website Tasks", "Marketing Team Tasks"]
//! this_week_group = "This Week"
//! completed_group = "Completed"
//! future_group = "Future"
//! status_column = "Status"
//! done_label = "Done"
//! timeline_column = "Timeline"
//! lookahead_days = 7
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading rule configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but a value is unusable, e.g. an empty group title.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the reset-week rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResetWeekRule {
    /// Names of the boards the rule applies to.
    pub boards: Vec<String>,
    /// Group holding the current week's cards.
    pub this_week_group: String,
    /// Group finished cards are moved to.
    pub completed_group: String,
    /// Group holding cards scheduled for later.
    pub future_group: String,
    /// Colour column holding each card's status.
    pub status_column: String,
    /// Status label that marks a card as finished.
    pub done_label: String,
    /// Timeline column holding each card's date range.
    pub timeline_column: String,
    /// Cards starting within this many days of today are pulled into this week.
    pub lookahead_days: u32,
}

impl Default for ResetWeekRule {
    fn default() -> Self {
        Self {
            boards: vec![
                "Operations Tasks".to_string(),
                "Website Tasks".to_string(),
                "Marketing Team Tasks".to_string(),
            ],
            this_week_group: "This Week".to_string(),
            completed_group: "Completed".to_string(),
            future_group: "Future".to_string(),
            status_column: "Status".to_string(),
            done_label: "Done".to_string(),
            timeline_column: "Timeline".to_string(),
            lookahead_days: 7,
        }
    }
}

impl ResetWeekRule {
    fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("this_week_group", &self.this_week_group),
            ("completed_group", &self.completed_group),
            ("future_group", &self.future_group),
            ("status_column", &self.status_column),
            ("done_label", &self.done_label),
            ("timeline_column", &self.timeline_column),
        ];
        if let Some((field, _)) = named.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("reset_week.{field} must not be empty")));
        }
        if self.boards.iter().any(|b| b.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "reset_week.boards must not contain empty names".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for all automation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutomationConfig {
    pub reset_week: ResetWeekRule,
}

impl AutomationConfig {
    /// Parses and validates configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reset_week.validate()
    }
}
