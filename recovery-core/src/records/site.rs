use super::seed_id;
use crate::entity::{self, Entity, EntityKind};
use chrono::{DateTime, Utc};
use field_registry::{FieldErrors, FieldSpec, FormData};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    pub location: String,
    pub capacity: String,
}

impl Entity for Site {
    const KIND: EntityKind = EntityKind::Sites;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Site Name")
            .required()
            .max_len(100)
            .placeholder("e.g. Secondary Recovery Site"),
        FieldSpec::text("location", "Location")
            .required()
            .max_len(100)
            .placeholder("e.g. Chicago, IL"),
        FieldSpec::text("capacity", "Capacity")
            .required()
            .max_len(50)
            .placeholder("e.g. 500 servers"),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn seed() -> Vec<Self> {
        [
            ("Primary Data Center", "New York, NY", "1000 servers"),
            ("Secondary Recovery Site", "Chicago, IL", "500 servers"),
            ("Cloud Backup Site", "AWS us-east-1", "Unlimited"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, location, capacity))| Site {
            id: seed_id(i),
            name: name.into(),
            location: location.into(),
            capacity: capacity.into(),
        })
        .collect()
    }

    fn build(id: String, form: &FormData, _now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Site {
            id,
            name: entity::text(form, "name"),
            location: entity::text(form, "location"),
            capacity: entity::text(form, "capacity"),
        })
    }
}
