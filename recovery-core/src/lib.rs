//! Domain layer of the disaster-recovery bookkeeping dashboard.
//!
//! Six flat record types (resources, business processes, recovery sites,
//! data backups, recovery plans, incidents) share one append-only workflow:
//! a form is validated against the record's field schema, a record is built
//! with a fresh id, and it is appended to a [`RecordBook`]. Books can be
//! mirrored into any [`KeyValueStore`] under a key [`Namespace`].
//!
//! Nothing in this crate touches the browser; the UI crate supplies the
//! storage backend and the clock.

pub mod book;
pub mod choices;
pub mod config;
pub mod entity;
pub mod error;
pub mod nav;
pub mod namespace;
pub mod records;
pub mod store;
pub mod style;
pub mod summary;

pub use book::{next_id, RecordBook};
pub use choices::{BackupType, Choice, IncidentStatus, PlanStatus, ResourceStatus, ResourceType, Severity};
pub use config::{AppConfig, ConfigError, StorageMode};
pub use entity::{Entity, EntityKind};
pub use error::{Result, StoreError};
pub use field_registry::{FieldErrors, FieldKind, FieldSpec, FormData};
pub use nav::Page;
pub use namespace::Namespace;
pub use records::{Backup, Incident, Plan, Process, Resource, Site};
pub use store::{KeyValueStore, MemoryStore};
pub use summary::{StatTile, Summary};
