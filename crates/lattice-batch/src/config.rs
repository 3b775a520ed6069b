//! TOML-backed defaults for view policies and animations.
//!
//! Reload handlers are closures and cannot be expressed in a file; set them
//! programmatically after applying a configuration.
//!
//! # Example
//!
//! ```
//! use lattice_batch::config::BatchConfig;
//! use lattice_batch::model::{MoveMode, PolicyStore};
//!
//! let config = BatchConfig::from_toml_str(r#"
//!     move_mode = "move"
//!     move_reload = "reload"
//!     reload_mode = "reload"
//!     row_animation = "left"
//! "#).unwrap();
//!
//! let mut policy: PolicyStore<(), ()> = PolicyStore::new();
//! config.apply_to_policy(&mut policy);
//! assert!(matches!(policy.move_mode(), MoveMode::Move(_)));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{MoveMode, MoveReload, PolicyStore, ReloadPolicy, ViewRecord};
use crate::widget::{ListViewAdapter, ListViewBackend, RowAnimation};

/// Result type alias for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a [`BatchConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML was malformed or named an unknown setting.
    #[error("Invalid batch configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file could not be read.
    #[error("Failed to read batch configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How moved items are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveModeSetting {
    /// `"delete_insert"`: a delete at the old position and an insert at the new one.
    #[default]
    DeleteInsert,
    /// `"move"`: a native move, refreshed per `move_reload`.
    Move,
}

/// How moved items are refreshed, when moves are native.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveReloadSetting {
    /// `"standard"`: follow `reload_mode`.
    #[default]
    Standard,
    /// `"none"`: leave moved items alone.
    None,
    /// `"reload"`: reload moved items at their old position.
    Reload,
}

/// How updated items are refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadModeSetting {
    /// `"none"`: leave updated items alone.
    #[default]
    None,
    /// `"reload"`: reload updated items in place.
    Reload,
}

/// Batch settings for one view. Every field is optional in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// How moved items are applied. Defaults to `delete_insert`.
    pub move_mode: MoveModeSetting,
    /// How natively moved items are refreshed. Ignored unless `move_mode` is `move`.
    pub move_reload: MoveReloadSetting,
    /// How updated items are refreshed. Defaults to `none`.
    pub reload_mode: ReloadModeSetting,
    /// Animation for row edits. List views only.
    pub row_animation: RowAnimation,
    /// Animation for section edits. List views only.
    pub section_animation: RowAnimation,
}

impl BatchConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The configured move mode.
    pub fn move_mode<C, T>(&self) -> MoveMode<C, T> {
        match self.move_mode {
            MoveModeSetting::DeleteInsert => MoveMode::DeleteInsert,
            MoveModeSetting::Move => MoveMode::Move(match self.move_reload {
                MoveReloadSetting::Standard => MoveReload::Standard,
                MoveReloadSetting::None => MoveReload::Specific(ReloadPolicy::None),
                MoveReloadSetting::Reload => MoveReload::Specific(ReloadPolicy::Reload),
            }),
        }
    }

    /// The configured reload policy.
    pub fn reload_mode<C, T>(&self) -> ReloadPolicy<C, T> {
        match self.reload_mode {
            ReloadModeSetting::None => ReloadPolicy::None,
            ReloadModeSetting::Reload => ReloadPolicy::Reload,
        }
    }

    /// Writes both policies into `policy`, replacing what was there.
    pub fn apply_to_policy<C, T>(&self, policy: &mut PolicyStore<C, T>) {
        policy.set_move_mode(self.move_mode());
        policy.set_reload_mode(self.reload_mode());
    }

    /// Writes both policies into a view's record.
    pub fn apply_to_record<C, T>(&self, record: &mut ViewRecord<C, T>) {
        self.apply_to_policy(record.policy_mut());
    }

    /// Sets the list view's row and section animations.
    pub fn apply_to_list<B: ListViewBackend>(&self, list: &mut ListViewAdapter<B>) {
        list.set_row_animation(self.row_animation);
        list.set_section_animation(self.section_animation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = BatchConfig::from_toml_str("").unwrap();
        assert_eq!(config, BatchConfig::default());
        assert!(matches!(config.move_mode::<(), ()>(), MoveMode::DeleteInsert));
        assert!(config.reload_mode::<(), ()>().is_none());
        assert_eq!(config.row_animation, RowAnimation::Fade);
    }

    #[test]
    fn test_full_config() {
        let config = BatchConfig::from_toml_str(
            r#"
            move_mode = "move"
            move_reload = "none"
            reload_mode = "reload"
            row_animation = "automatic"
            section_animation = "none"
            "#,
        )
        .unwrap();

        assert_eq!(config.move_mode, MoveModeSetting::Move);
        assert_eq!(config.section_animation, RowAnimation::None);
        assert!(matches!(
            config.move_mode::<(), ()>(),
            MoveMode::Move(MoveReload::Specific(ReloadPolicy::None))
        ));

        let mut policy: PolicyStore<(), ()> = PolicyStore::new();
        config.apply_to_policy(&mut policy);
        assert!(matches!(policy.reload_mode(), ReloadPolicy::Reload));
    }

    #[test]
    fn test_move_reload_ignored_without_native_moves() {
        let config = BatchConfig::from_toml_str(r#"move_reload = "reload""#).unwrap();
        assert!(matches!(config.move_mode::<(), ()>(), MoveMode::DeleteInsert));
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let err = BatchConfig::from_toml_str(r#"move_mode = "teleport""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = BatchConfig::from_toml_str("animate = true").unwrap_err();
        assert!(err.to_string().starts_with("Invalid batch configuration"));
    }

    #[test]
    fn test_missing_file() {
        let err = BatchConfig::from_path("/nonexistent/lattice-batch.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/lattice-batch.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
