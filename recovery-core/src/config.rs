use crate::namespace::{Namespace, DEFAULT_PREFIX};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Where record books live between page loads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    /// In memory, starting from the seed lists. Gone on reload.
    Session,
    /// Browser local storage, starting empty. Survives reloads.
    #[default]
    Local,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A blank prefix would put every stored key inside the namespace.
    #[error("storage_prefix must not be blank")]
    BlankPrefix,
}

/// Runtime configuration. Every field has a default, so `{}` is valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageMode,
    pub storage_prefix: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageMode::default(),
            storage_prefix: DEFAULT_PREFIX.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validated()
    }

    /// Rejects settings that deserialize fine but cannot be used.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.storage_prefix.trim().is_empty() {
            return Err(ConfigError::BlankPrefix);
        }
        Ok(self)
    }

    /// Key namespace for the books. A blank prefix is replaced by
    /// [`DEFAULT_PREFIX`] so "reset all" never reaches foreign keys.
    pub fn namespace(&self) -> Namespace {
        if self.storage_prefix.trim().is_empty() {
            log::warn!("blank storage_prefix, using `{DEFAULT_PREFIX}`");
            return Namespace::default();
        }
        Namespace::new(self.storage_prefix.clone())
    }

    /// Parsed `log_level`; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }

    /// Level to install the console logger at; `None` when logging is off.
    pub fn log_level(&self) -> Option<log::Level> {
        self.level_filter().to_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Resource;
    use crate::store::{KeyValueStore, MemoryStore};
    use crate::Entity;

    #[test]
    fn empty_object_is_default() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage, StorageMode::Local);
        assert_eq!(config.namespace(), Namespace::new("bpr_"));
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = AppConfig::from_json(r#"{"storage":"session","log_level":"debug"}"#).unwrap();
        assert_eq!(config.storage, StorageMode::Session);
        assert_eq!(config.storage_prefix, "bpr_");
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.log_level(), Some(log::Level::Debug));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn off_disables_the_logger() {
        let config = AppConfig::from_json(r#"{"log_level":"off"}"#).unwrap();
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn rejects_unknown_storage_mode() {
        assert!(matches!(
            AppConfig::from_json(r#"{"storage":"cloud"}"#),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_blank_prefix() {
        for raw in [r#"{"storage_prefix":""}"#, r#"{"storage_prefix":"  "}"#] {
            assert!(matches!(AppConfig::from_json(raw), Err(ConfigError::BlankPrefix)));
        }
    }

    #[test]
    fn blank_prefix_built_by_hand_keeps_reset_scoped() {
        let config = AppConfig {
            storage_prefix: String::new(),
            ..AppConfig::default()
        };
        let store = MemoryStore::new();
        let ns = config.namespace();
        ns.save(&store, &Resource::seed()).unwrap();
        store.set("theme", "dark").unwrap();

        assert_eq!(ns.reset_all(&store).unwrap(), 1);
        assert_eq!(store.keys().unwrap(), vec!["theme".to_string()]);
    }
}
