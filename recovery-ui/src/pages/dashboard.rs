use crate::bridge;
use crate::state::{Books, Storage, Toasts};
use leptos::*;
use recovery_core::{EntityKind, StatTile};

/// Relationships between the tracked collections. Informational only;
/// records never reference each other.
const RELATIONSHIPS: [(EntityKind, &str, EntityKind); 6] = [
    (EntityKind::Resources, "required by", EntityKind::Processes),
    (EntityKind::Resources, "moved to", EntityKind::Sites),
    (EntityKind::Sites, "hold", EntityKind::Backups),
    (EntityKind::Processes, "covered by", EntityKind::Plans),
    (EntityKind::Sites, "included in", EntityKind::Plans),
    (EntityKind::Plans, "triggered by", EntityKind::Incidents),
];

const REQUIREMENTS: [&str; 6] = [
    "Maintain business process details with priority levels",
    "Track resource inventory and movements to recovery sites",
    "Store recovery site details (location, site name)",
    "Maintain data backup records with type and location",
    "Define recovery plans linked to business processes",
    "Record incidents with type, date, impact level, and triggered plans",
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let books = expect_context::<Books>();
    let storage = store_value(expect_context::<Storage>());
    let toasts = expect_context::<Toasts>();

    let reset = move |_| {
        if !bridge::confirm("Reset all data? Every stored record will be deleted.") {
            return;
        }
        match storage.with_value(Storage::reset_all) {
            Ok(_) => {
                if let Err(err) = bridge::reload() {
                    log::error!("{err}");
                }
            }
            Err(err) => {
                log::error!("reset failed: {err}");
                toasts.error(format!("Reset failed: {err}"));
            }
        }
    };

    view! {
        <section class="dashboard">
            <header class="page-header">
                <div>
                    <h1>"Business Process Recovery System"</h1>
                    <p class="muted">"Disaster Recovery & Business Continuity Management Platform"</p>
                    <p class="muted">{move || format!("{} records tracked", books.summary().total())}</p>
                </div>
                <button class="danger" on:click=reset>"Reset All Data"</button>
            </header>

            <div class="card-grid">
                <For
                    each=move || books.summary().tiles()
                    key=|tile| (tile.kind, tile.value)
                    children=|tile| view! { <StatTileCard tile=tile/> }
                />
            </div>

            <article class="card">
                <h2>"Entity Relationships"</h2>
                <p class="muted">"Business Process Recovery & Data Backup System"</p>
                <ul class="relations">
                    {RELATIONSHIPS
                        .into_iter()
                        .map(|(from, verb, to)| view! {
                            <li>
                                <b>{from.title()}</b> " " {verb} " " <b>{to.title()}</b>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </article>

            <article class="card">
                <h2>"Project Abstract"</h2>
                <h4>"Title"</h4>
                <p class="muted">"Business Process Recovery Site & Data Backup System"</p>
                <h4>"Technology Stack"</h4>
                <p class="muted">"Rust, Leptos, WebAssembly; browser local storage"</p>
                <h4>"Functional Requirements"</h4>
                <ul>
                    {REQUIREMENTS.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            </article>
        </section>
    }
}

#[component]
fn StatTileCard(tile: StatTile) -> impl IntoView {
    view! {
        <article class="card stat">
            <h3 class="muted">{tile.title}</h3>
            <div class="stat-value">{tile.value}</div>
            <p class="muted">{tile.caption}</p>
        </article>
    }
}
