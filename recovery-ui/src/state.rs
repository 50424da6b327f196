use crate::bridge::BrowserStore;
use leptos::*;
use recovery_core::{
    AppConfig, Backup, Entity, EntityKind, Incident, KeyValueStore, MemoryStore, Namespace, Plan,
    Process, RecordBook, Resource, Site, StorageMode, Summary,
};
use std::rc::Rc;
use std::time::Duration;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Backing store for the record books.
#[derive(Clone)]
pub struct Storage {
    namespace: Namespace,
    store: Rc<dyn KeyValueStore>,
    persistent: bool,
}

impl Storage {
    pub fn open(config: &AppConfig) -> Self {
        let namespace = config.namespace();
        match config.storage {
            StorageMode::Session => Self::in_memory(namespace),
            StorageMode::Local => match BrowserStore::local() {
                Ok(store) => Self::with_store(namespace, Rc::new(store), true),
                Err(err) => {
                    log::warn!("falling back to session storage: {err}");
                    Self::in_memory(namespace)
                }
            },
        }
    }

    /// `persistent` books load from and save to `store`; the others start
    /// from the seeds and are never written.
    pub fn with_store(namespace: Namespace, store: Rc<dyn KeyValueStore>, persistent: bool) -> Self {
        Self {
            namespace,
            store,
            persistent,
        }
    }

    fn in_memory(namespace: Namespace) -> Self {
        Self::with_store(namespace, Rc::new(MemoryStore::new()), false)
    }

    /// Stored records in persistent mode, the seed list otherwise.
    pub fn book<E: Entity>(&self) -> RecordBook<E> {
        if self.persistent {
            RecordBook::from_records(self.namespace.load_or_empty(&*self.store))
        } else {
            RecordBook::seeded()
        }
    }

    pub fn persist<E: Entity>(&self, book: &RecordBook<E>) -> recovery_core::Result<()> {
        if !self.persistent {
            return Ok(());
        }
        self.namespace.save(&*self.store, book.records())
    }

    pub fn reset_all(&self) -> recovery_core::Result<usize> {
        self.namespace.reset_all(&*self.store)
    }
}

/// One signal per record book. Each signal is also provided as its own
/// context so generic components can look a book up by record type.
#[derive(Clone, Copy)]
pub struct Books {
    pub resources: RwSignal<RecordBook<Resource>>,
    pub processes: RwSignal<RecordBook<Process>>,
    pub sites: RwSignal<RecordBook<Site>>,
    pub backups: RwSignal<RecordBook<Backup>>,
    pub plans: RwSignal<RecordBook<Plan>>,
    pub incidents: RwSignal<RecordBook<Incident>>,
}

impl Books {
    pub fn open(storage: &Storage) -> Self {
        Self {
            resources: create_rw_signal(storage.book()),
            processes: create_rw_signal(storage.book()),
            sites: create_rw_signal(storage.book()),
            backups: create_rw_signal(storage.book()),
            plans: create_rw_signal(storage.book()),
            incidents: create_rw_signal(storage.book()),
        }
    }

    pub fn provide(self) {
        provide_context(self.resources);
        provide_context(self.processes);
        provide_context(self.sites);
        provide_context(self.backups);
        provide_context(self.plans);
        provide_context(self.incidents);
        provide_context(self);
    }

    /// Live counts; reading this subscribes to every book.
    pub fn summary(&self) -> Summary {
        Summary::default()
            .with(EntityKind::Resources, self.resources.with(|b| b.len()))
            .with(EntityKind::Processes, self.processes.with(|b| b.len()))
            .with(EntityKind::Sites, self.sites.with(|b| b.len()))
            .with(EntityKind::Backups, self.backups.with(|b| b.len()))
            .with(EntityKind::Plans, self.plans.with(|b| b.len()))
            .with(EntityKind::Incidents, self.incidents.with(|b| b.len()))
    }
}

pub fn use_book<E: Entity>() -> RwSignal<RecordBook<E>> {
    expect_context::<RwSignal<RecordBook<E>>>()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: &'static str,
    pub message: String,
    pub error: bool,
}

/// Transient notifications, each dismissed after [`TOAST_LIFETIME`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn list(&self) -> Vec<Toast> {
        self.items.get()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push("Success", message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push("Error", message.into(), true);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }

    fn push(&self, title: &'static str, message: String, error: bool) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                title,
                message,
                error,
            })
        });

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recovery_core::FormData;

    fn resource_form() -> FormData {
        [("name", "Server X"), ("type", "Hardware"), ("status", "Active")]
            .into_iter()
            .collect()
    }

    fn persistent(store: &MemoryStore) -> Storage {
        Storage::with_store(Namespace::default(), Rc::new(store.clone()), true)
    }

    #[test]
    fn persistent_storage_keeps_appended_records() {
        let store = MemoryStore::new();
        let storage = persistent(&store);

        let mut book = storage.book::<Resource>();
        assert!(book.is_empty());
        book.submit(&resource_form(), chrono::Utc::now()).expect("submit");
        storage.persist(&book).expect("persist");

        assert_eq!(storage.book::<Resource>(), book);
        assert_eq!(persistent(&store).book::<Resource>().len(), 1);
        assert!(store.get("bpr_resources").unwrap().is_some());
    }

    #[test]
    fn reset_all_empties_persistent_books() {
        let store = MemoryStore::new();
        let storage = persistent(&store);
        let mut book = storage.book::<Incident>();
        let form: FormData = [
            ("type", "Power Outage"),
            ("date", "2024-03-09"),
            ("impact", "Critical"),
            ("status", "Open"),
        ]
        .into_iter()
        .collect();
        book.submit(&form, chrono::Utc::now()).expect("submit");
        storage.persist(&book).expect("persist");
        store.set("theme", "dark").unwrap();

        assert_eq!(storage.reset_all().expect("reset"), 1);
        assert!(storage.book::<Incident>().is_empty());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn session_storage_serves_seeds_and_never_persists() {
        let config = AppConfig {
            storage: StorageMode::Session,
            ..AppConfig::default()
        };
        let storage = Storage::open(&config);

        let mut book = storage.book::<Resource>();
        assert_eq!(book.records(), Resource::seed().as_slice());

        book.submit(&resource_form(), chrono::Utc::now()).expect("submit");
        storage.persist(&book).expect("no-op persist");

        assert_eq!(storage.book::<Resource>().len(), 4);
        assert_eq!(storage.reset_all().expect("reset"), 0);
    }
}
