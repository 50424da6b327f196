use super::seed_id;
use crate::choices::{Choice, IncidentStatus, Severity};
use crate::entity::{self, Entity, EntityKind};
use chrono::{DateTime, Utc};
use field_registry::{FieldErrors, FieldSpec, FormData};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// `YYYY-MM-DD`, as picked in the form.
    pub date: String,
    pub impact: Severity,
    pub status: IncidentStatus,
}

impl Entity for Incident {
    const KIND: EntityKind = EntityKind::Incidents;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("type", "Incident Type")
            .required()
            .max_len(100)
            .placeholder("e.g. Network Failure"),
        FieldSpec::date("date", "Date").required(),
        FieldSpec::select("impact", "Impact Level", Severity::LABELS).required(),
        FieldSpec::select("status", "Status", IncidentStatus::LABELS).required(),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.kind
    }

    fn seed() -> Vec<Self> {
        [
            ("Server Outage", "2024-01-15", Severity::High, IncidentStatus::Resolved),
            ("Network Failure", "2024-01-10", Severity::Critical, IncidentStatus::Investigating),
            ("Data Corruption", "2024-01-08", Severity::Medium, IncidentStatus::Resolved),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (kind, date, impact, status))| Incident {
            id: seed_id(i),
            kind: kind.into(),
            date: date.into(),
            impact,
            status,
        })
        .collect()
    }

    fn build(id: String, form: &FormData, _now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Incident {
            id,
            kind: entity::text(form, "type"),
            date: entity::text(form, "date"),
            impact: entity::choice(form, "impact")?,
            status: entity::choice(form, "status")?,
        })
    }
}
