//! Prefixed storage keys for the record books.
//!
//! Each book is stored as a JSON array under `<prefix><slug>`, e.g.
//! `bpr_incidents`. "Reset all" removes every key carrying the prefix,
//! including ones this version of the dashboard does not know about.

use crate::entity::{Entity, EntityKind};
use crate::error::{Result, StoreError};
use crate::store::KeyValueStore;

pub const DEFAULT_PREFIX: &str = "bpr_";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    prefix: String,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Namespace {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn key(&self, kind: EntityKind) -> String {
        format!("{}{}", self.prefix, kind.slug())
    }

    pub fn owns(&self, key: &str) -> bool {
        key.starts_with(&self.prefix)
    }

    /// Stored records of `E`, or `None` when nothing was ever saved.
    pub fn load<E: Entity>(&self, store: &dyn KeyValueStore) -> Result<Option<Vec<E>>> {
        let key = self.key(E::KIND);
        let Some(raw) = store.get(&key)? else {
            return Ok(None);
        };

        let records: Vec<E> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt { key: key.clone(), source })?;
        log::debug!("loaded {} record(s) from `{key}`", records.len());
        Ok(Some(records))
    }

    /// Like [`Namespace::load`], but any failure degrades to an empty list.
    pub fn load_or_empty<E: Entity>(&self, store: &dyn KeyValueStore) -> Vec<E> {
        match self.load(store) {
            Ok(records) => records.unwrap_or_default(),
            Err(err) => {
                log::warn!("ignoring stored {}: {err}", E::KIND.slug());
                Vec::new()
            }
        }
    }

    pub fn save<E: Entity>(&self, store: &dyn KeyValueStore, records: &[E]) -> Result<()> {
        let key = self.key(E::KIND);
        let json = serde_json::to_string(records)
            .map_err(|source| StoreError::Serialize { key: key.clone(), source })?;
        store.set(&key, &json)?;
        log::debug!("saved {} record(s) to `{key}`", records.len());
        Ok(())
    }

    /// Number of records stored for `kind`, without decoding them.
    pub fn count(&self, store: &dyn KeyValueStore, kind: EntityKind) -> Result<usize> {
        let key = self.key(kind);
        let Some(raw) = store.get(&key)? else {
            return Ok(0);
        };
        let values: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt { key, source })?;
        Ok(values.len())
    }

    /// Removes every key carrying the prefix and returns how many were removed.
    pub fn reset_all(&self, store: &dyn KeyValueStore) -> Result<usize> {
        let owned: Vec<String> = store
            .keys()?
            .into_iter()
            .filter(|key| self.owns(key))
            .collect();
        for key in &owned {
            store.remove(key)?;
        }
        log::info!("reset removed {} `{}*` key(s)", owned.len(), self.prefix);
        Ok(owned.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Incident, Resource};
    use crate::store::MemoryStore;

    #[test]
    fn keys_use_prefix_and_slug() {
        let ns = Namespace::default();
        assert_eq!(ns.key(EntityKind::Resources), "bpr_resources");
        assert_eq!(ns.key(EntityKind::Incidents), "bpr_incidents");
        assert!(ns.owns("bpr_anything"));
        assert!(!ns.owns("theme"));
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        let ns = Namespace::default();
        let seed = Resource::seed();
        ns.save(&store, &seed).unwrap();

        let loaded: Option<Vec<Resource>> = ns.load(&store).unwrap();
        assert_eq!(loaded, Some(seed));
        assert_eq!(ns.count(&store, EntityKind::Resources).unwrap(), 4);
    }

    #[test]
    fn unsaved_book_loads_as_none() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<Incident>> = Namespace::default().load(&store).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_data_is_reported_and_degrades_to_empty() {
        let store = MemoryStore::new();
        store.set("bpr_incidents", "{not json").unwrap();
        let ns = Namespace::default();

        let err = ns.load::<Incident>(&store).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "bpr_incidents"));
        assert!(ns.load_or_empty::<Incident>(&store).is_empty());
    }

    #[test]
    fn reset_only_touches_prefixed_keys() {
        let store = MemoryStore::new();
        store.set("bpr_sites", "[]").unwrap();
        store.set("bpr_legacy", "1").unwrap();
        store.set("theme", "dark").unwrap();

        let removed = Namespace::default().reset_all(&store).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.keys().unwrap(), vec!["theme".to_string()]);
    }
}
