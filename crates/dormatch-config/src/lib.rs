//! Roster configuration for dormatch.
//!
//! A roster file describes the inbound seed of an editing session: the
//! occupants of each group, in the pairing order the external matching
//! computation produced, plus the target room count per group. Load it
//! from TOML or YAML and hand it to `dormatch_session::seed`.
//!
//! # Examples
//!
//! Load a roster from a TOML string:
//!
//! ```
//! use dormatch_config::RosterConfig;
//! use dormatch_core::Group;
//!
//! let config = RosterConfig::from_toml_str(r#"
//!     [[groups]]
//!     group = "A"
//!     room_count = 2
//!
//!     [[groups.occupants]]
//!     id = "20240001"
//!     name = "Ana"
//!     score = 81
//!
//!     [[groups.occupants]]
//!     id = "20240002"
//!     name = "Bea"
//!     score = 40
//! "#).unwrap();
//!
//! config.validate().unwrap();
//! assert_eq!(config.roster(Group::A).unwrap().room_count, 2);
//! ```
//!
//! Use an empty roster when the file is missing:
//!
//! ```
//! use dormatch_config::RosterConfig;
//!
//! let config = RosterConfig::load("roster.toml").unwrap_or_default();
//! assert!(config.groups.is_empty());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dormatch_core::Group;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid roster: {0}")]
    Invalid(String),
}

/// One occupant as seeded from the matching backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OccupantEntry {
    /// Unique id within the group (the original uses student numbers
    /// like `20240001`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Individual compatibility score.
    pub score: i64,
}

/// The roster for one group value.
///
/// Occupant order is meaningful: consecutive entries are roommates in
/// the seeded assignment, exactly as the matching computation paired
/// them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupRoster {
    /// Which partition this roster seeds.
    pub group: Group,
    /// Number of rooms to materialize.
    pub room_count: usize,
    /// Occupants in pairing order.
    #[serde(default)]
    pub occupants: Vec<OccupantEntry>,
    /// Optional explicit per-room scores. When absent, each room's
    /// score is the floor mean of its seeded occupants' scores.
    #[serde(default)]
    pub room_scores: Option<Vec<i64>>,
}

/// Main roster configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    /// One roster per group; a missing group seeds an empty partition.
    #[serde(default)]
    pub groups: Vec<GroupRoster>,
}

impl RosterConfig {
    /// Creates an empty roster configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a roster file, dispatching on its extension
    /// (`.yaml`/`.yml` parse as YAML, everything else as TOML).
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads a roster from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a roster from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a roster from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a roster from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Returns the roster for the given group, if the file carries one.
    pub fn roster(&self, group: Group) -> Option<&GroupRoster> {
        self.groups.iter().find(|r| r.group == group)
    }

    /// Checks the roster for structural problems before seeding.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a group appears twice, a
    /// group's occupants exceed its capacity, an occupant id repeats
    /// within a group, or `room_scores` does not match `room_count`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for group in [Group::A, Group::B] {
            if self.groups.iter().filter(|r| r.group == group).count() > 1 {
                return Err(ConfigError::Invalid(format!(
                    "group {group} listed more than once"
                )));
            }
        }
        for roster in &self.groups {
            let capacity = roster.room_count * 2;
            if roster.occupants.len() > capacity {
                return Err(ConfigError::Invalid(format!(
                    "group {} has {} occupants but only {} slots",
                    roster.group,
                    roster.occupants.len(),
                    capacity
                )));
            }
            let mut seen = std::collections::HashSet::new();
            for entry in &roster.occupants {
                if !seen.insert(entry.id.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "occupant id {} repeats in group {}",
                        entry.id, roster.group
                    )));
                }
            }
            if let Some(scores) = &roster.room_scores {
                if scores.len() != roster.room_count {
                    return Err(ConfigError::Invalid(format!(
                        "group {} declares {} room scores for {} rooms",
                        roster.group,
                        scores.len(),
                        roster.room_count
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
