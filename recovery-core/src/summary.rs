use crate::entity::EntityKind;
use crate::error::Result;
use crate::namespace::Namespace;
use crate::store::KeyValueStore;
use std::collections::BTreeMap;

/// Record counts per collection, as shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    counts: BTreeMap<EntityKind, usize>,
}

/// One dashboard stat tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub kind: EntityKind,
    pub title: &'static str,
    pub value: usize,
    pub caption: &'static str,
}

impl Summary {
    pub fn with(mut self, kind: EntityKind, count: usize) -> Self {
        self.counts.insert(kind, count);
        self
    }

    /// Counts what is persisted under `namespace`; unsaved books read zero.
    pub fn from_store(namespace: &Namespace, store: &dyn KeyValueStore) -> Result<Self> {
        EntityKind::ALL.into_iter().try_fold(Self::default(), |summary, kind| {
            Ok(summary.with(kind, namespace.count(store, kind)?))
        })
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        EntityKind::ALL
            .into_iter()
            .map(|kind| StatTile {
                kind,
                title: kind.title(),
                value: self.count(kind),
                caption: kind.caption(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_follow_kind_order_and_default_to_zero() {
        let summary = Summary::default()
            .with(EntityKind::Incidents, 3)
            .with(EntityKind::Resources, 24);
        let tiles = summary.tiles();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0].title, "Resources");
        assert_eq!(tiles[0].value, 24);
        assert_eq!(tiles[2].value, 0);
        assert_eq!(tiles[5].caption, "Recorded incidents");
        assert_eq!(summary.total(), 27);
    }
}
