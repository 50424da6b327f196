use crate::choices::Choice;
use chrono::{DateTime, Utc};
use field_registry::{FieldErrors, FieldSpec, FormData};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The six record collections the dashboard tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Resources,
    Processes,
    Sites,
    Backups,
    Plans,
    Incidents,
}

impl EntityKind {
    /// Display order of pages, sidebar entries and stat tiles.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Resources,
        EntityKind::Processes,
        EntityKind::Sites,
        EntityKind::Backups,
        EntityKind::Plans,
        EntityKind::Incidents,
    ];

    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Resources => "Resources",
            EntityKind::Processes => "Business Processes",
            EntityKind::Sites => "Recovery Sites",
            EntityKind::Backups => "Data Backups",
            EntityKind::Plans => "Recovery Plans",
            EntityKind::Incidents => "Incidents",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Resources => "Resource",
            EntityKind::Processes => "Process",
            EntityKind::Sites => "Site",
            EntityKind::Backups => "Backup",
            EntityKind::Plans => "Plan",
            EntityKind::Incidents => "Incident",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EntityKind::Resources => "Manage system resources and inventory",
            EntityKind::Processes => "Critical business operations and priority levels",
            EntityKind::Sites => "Physical and cloud recovery locations",
            EntityKind::Backups => "Backup instances and storage locations",
            EntityKind::Plans => "Disaster recovery and business continuity plans",
            EntityKind::Incidents => "Track and manage system incidents",
        }
    }

    /// Label of the button that opens the creation dialog.
    pub fn add_label(self) -> &'static str {
        match self {
            EntityKind::Resources => "Add Resource",
            EntityKind::Processes => "Add Process",
            EntityKind::Sites => "Add Site",
            EntityKind::Backups => "Create Backup",
            EntityKind::Plans => "Create Plan",
            EntityKind::Incidents => "Report Incident",
        }
    }

    /// Caption under the dashboard stat tile.
    pub fn caption(self) -> &'static str {
        match self {
            EntityKind::Resources => "Active resources tracked",
            EntityKind::Processes => "Critical processes",
            EntityKind::Sites => "Operational sites",
            EntityKind::Backups => "Backup instances",
            EntityKind::Plans => "Active plans",
            EntityKind::Incidents => "Recorded incidents",
        }
    }

    /// Route path and storage key suffix share this slug.
    pub fn slug(self) -> &'static str {
        match self {
            EntityKind::Resources => "resources",
            EntityKind::Processes => "processes",
            EntityKind::Sites => "sites",
            EntityKind::Backups => "backups",
            EntityKind::Plans => "plans",
            EntityKind::Incidents => "incidents",
        }
    }

    pub fn success_message(self) -> String {
        format!("{} created successfully", self.singular())
    }
}

/// A record type managed by the generic record workflow.
///
/// `FIELDS` is both the form layout and the validation schema. `build` is
/// only called with forms that already passed
/// [`validate`](field_registry::validate) against `FIELDS`, but it still
/// reports parse failures instead of panicking.
pub trait Entity: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static {
    const KIND: EntityKind;
    const FIELDS: &'static [FieldSpec];

    fn id(&self) -> &str;

    /// Headline shown on the record's card.
    fn title(&self) -> &str;

    /// Records shown before any user action in a session-scoped book.
    fn seed() -> Vec<Self>;

    fn build(id: String, form: &FormData, now: DateTime<Utc>) -> Result<Self, FieldErrors>;
}

pub(crate) fn text(form: &FormData, field: &str) -> String {
    form.value(field).to_string()
}

pub(crate) fn choice<C: Choice>(form: &FormData, field: &str) -> Result<C, FieldErrors> {
    C::from_label(form.value(field))
        .ok_or_else(|| FieldErrors::single(field, format!("unknown option for {field}")))
}

pub(crate) fn count(form: &FormData, field: &str) -> Result<u32, FieldErrors> {
    form.number(field)
        .ok_or_else(|| FieldErrors::single(field, format!("{field} is not a whole number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_have_distinct_slugs() {
        let mut slugs: Vec<_> = EntityKind::ALL.iter().map(|k| k.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), EntityKind::ALL.len());
    }

    #[test]
    fn success_message_uses_singular_name() {
        assert_eq!(
            EntityKind::Processes.success_message(),
            "Process created successfully"
        );
    }
}
