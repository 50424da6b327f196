use super::seed_id;
use crate::choices::{Choice, PlanStatus};
use crate::entity::{self, Entity, EntityKind};
use chrono::{DateTime, Utc};
use field_registry::{FieldErrors, FieldSpec, FormData};
use serde::{Deserialize, Serialize};

/// A recovery plan. `processes` and `sites` are plain counts; they do not
/// reference records in the other books.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub processes: u32,
    pub sites: u32,
    pub status: PlanStatus,
}

impl Entity for Plan {
    const KIND: EntityKind = EntityKind::Plans;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("type", "Plan Type")
            .required()
            .max_len(100)
            .placeholder("e.g. Emergency Failover"),
        FieldSpec::number("processes", "Processes Covered").required(),
        FieldSpec::number("sites", "Sites Included").required(),
        FieldSpec::select("status", "Status", PlanStatus::LABELS).required(),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.kind
    }

    fn seed() -> Vec<Self> {
        [
            ("Full Recovery", 5, 2, PlanStatus::Active),
            ("Partial Recovery", 3, 1, PlanStatus::Active),
            ("Emergency Failover", 8, 3, PlanStatus::Standby),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (kind, processes, sites, status))| Plan {
            id: seed_id(i),
            kind: kind.into(),
            processes,
            sites,
            status,
        })
        .collect()
    }

    fn build(id: String, form: &FormData, _now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Plan {
            id,
            kind: entity::text(form, "type"),
            processes: entity::count(form, "processes")?,
            sites: entity::count(form, "sites")?,
            status: entity::choice(form, "status")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_counts() {
        let form: FormData = [
            ("type", "Cold Standby"),
            ("processes", "0"),
            ("sites", " 4"),
            ("status", "Draft"),
        ]
        .into_iter()
        .collect();
        let plan = Plan::build("9".into(), &form, Utc::now()).expect("build");
        assert_eq!((plan.processes, plan.sites), (0, 4));
        assert_eq!(plan.status, PlanStatus::Draft);
    }

    #[test]
    fn build_reports_unparsed_count() {
        let form: FormData = [("type", "x"), ("processes", "many"), ("sites", "1"), ("status", "Draft")]
            .into_iter()
            .collect();
        let errors = Plan::build("9".into(), &form, Utc::now()).unwrap_err();
        assert!(errors.get("processes").is_some());
    }
}
