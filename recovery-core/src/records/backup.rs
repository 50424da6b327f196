use super::seed_id;
use crate::choices::{BackupType, Choice};
use crate::entity::{self, Entity, EntityKind};
use chrono::{DateTime, Utc};
use field_registry::{FieldErrors, FieldSpec, FormData};
use serde::{Deserialize, Serialize};

/// Layout of [`Backup::last_run`].
pub const LAST_RUN_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BackupType,
    pub location: String,
    pub size: String,
    /// Stamped with the submit time, never entered by the user.
    pub last_run: String,
}

impl Entity for Backup {
    const KIND: EntityKind = EntityKind::Backups;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::select("type", "Backup Type", BackupType::LABELS).required(),
        FieldSpec::text("location", "Storage Location")
            .required()
            .max_len(100)
            .placeholder("e.g. AWS S3"),
        FieldSpec::text("size", "Size")
            .required()
            .max_len(50)
            .placeholder("e.g. 2.4 TB"),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        self.kind.label()
    }

    fn seed() -> Vec<Self> {
        [
            (BackupType::Full, "AWS S3", "2.4 TB", "2024-01-15 02:00"),
            (BackupType::Incremental, "Azure Blob", "156 GB", "2024-01-15 14:00"),
            (BackupType::Full, "On-premise NAS", "2.3 TB", "2024-01-14 02:00"),
            (BackupType::Differential, "Google Cloud", "342 GB", "2024-01-15 08:00"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (kind, location, size, last_run))| Backup {
            id: seed_id(i),
            kind,
            location: location.into(),
            size: size.into(),
            last_run: last_run.into(),
        })
        .collect()
    }

    fn build(id: String, form: &FormData, now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Backup {
            id,
            kind: entity::choice(form, "type")?,
            location: entity::text(form, "location"),
            size: entity::text(form, "size"),
            last_run: now.format(LAST_RUN_FORMAT).to_string(),
        })
    }
}
