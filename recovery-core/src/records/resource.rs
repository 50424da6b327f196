use super::seed_id;
use crate::choices::{Choice, ResourceStatus, ResourceType};
use crate::entity::{self, Entity, EntityKind};
use chrono::{DateTime, Utc};
use field_registry::{FieldErrors, FieldSpec, FormData};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub status: ResourceStatus,
}

impl Entity for Resource {
    const KIND: EntityKind = EntityKind::Resources;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Resource Name")
            .required()
            .max_len(100)
            .placeholder("e.g. Server Cluster A"),
        FieldSpec::select("type", "Type", ResourceType::LABELS).required(),
        FieldSpec::select("status", "Status", ResourceStatus::LABELS).required(),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn seed() -> Vec<Self> {
        [
            ("Server Cluster A", ResourceType::Hardware, ResourceStatus::Active),
            ("Database Instance 1", ResourceType::Software, ResourceStatus::Active),
            ("Network Equipment", ResourceType::Hardware, ResourceStatus::Standby),
            ("Storage Array", ResourceType::Hardware, ResourceStatus::Active),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, kind, status))| Resource {
            id: seed_id(i),
            name: name.into(),
            kind,
            status,
        })
        .collect()
    }

    fn build(id: String, form: &FormData, _now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Resource {
            id,
            name: entity::text(form, "name"),
            kind: entity::choice(form, "type")?,
            status: entity::choice(form, "status")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_form() {
        let form: FormData = [("name", " Server X "), ("type", "Hardware"), ("status", "Active")]
            .into_iter()
            .collect();
        let resource = Resource::build("42".into(), &form, Utc::now()).expect("build");
        assert_eq!(resource.name, "Server X");
        assert_eq!(resource.kind, ResourceType::Hardware);
        assert_eq!(resource.status, ResourceStatus::Active);
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(&Resource::seed()[2]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "3",
                "name": "Network Equipment",
                "type": "Hardware",
                "status": "Standby"
            })
        );
    }
}
