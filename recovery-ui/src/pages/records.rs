use crate::components::record_manager;
use leptos::*;
use recovery_core::{Backup, Incident, Plan, Process, Resource, Site};

#[component]
pub fn ResourcesPage() -> impl IntoView {
    record_manager::<Resource>()
}

#[component]
pub fn ProcessesPage() -> impl IntoView {
    record_manager::<Process>()
}

#[component]
pub fn SitesPage() -> impl IntoView {
    record_manager::<Site>()
}

#[component]
pub fn BackupsPage() -> impl IntoView {
    record_manager::<Backup>()
}

#[component]
pub fn PlansPage() -> impl IntoView {
    record_manager::<Plan>()
}

#[component]
pub fn IncidentsPage() -> impl IntoView {
    record_manager::<Incident>()
}
