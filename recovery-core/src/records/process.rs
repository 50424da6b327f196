use super::seed_id;
use crate::choices::{Choice, Severity};
use crate::entity::{self, Entity, EntityKind};
use chrono::{DateTime, Utc};
use field_registry::{FieldErrors, FieldSpec, FormData};
use serde::{Deserialize, Serialize};

/// A business process and its recovery time objective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    pub name: String,
    pub priority: Severity,
    /// Free text, e.g. "4 hours".
    pub rto: String,
}

impl Entity for Process {
    const KIND: EntityKind = EntityKind::Processes;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Process Name")
            .required()
            .max_len(100)
            .placeholder("e.g. Customer Transaction Processing"),
        FieldSpec::select("priority", "Priority", Severity::LABELS).required(),
        FieldSpec::text("rto", "Recovery Time Objective")
            .required()
            .max_len(50)
            .placeholder("e.g. 4 hours"),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn seed() -> Vec<Self> {
        [
            ("Customer Transaction Processing", Severity::Critical, "2 hours"),
            ("Inventory Management", Severity::High, "4 hours"),
            ("Email Services", Severity::Medium, "8 hours"),
            ("Analytics Processing", Severity::Low, "24 hours"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, priority, rto))| Process {
            id: seed_id(i),
            name: name.into(),
            priority,
            rto: rto.into(),
        })
        .collect()
    }

    fn build(id: String, form: &FormData, _now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Process {
            id,
            name: entity::text(form, "name"),
            priority: entity::choice(form, "priority")?,
            rto: entity::text(form, "rto"),
        })
    }
}
