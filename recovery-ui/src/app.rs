use crate::components::{Sidebar, ToastHost};
use crate::pages::{
    BackupsPage, DashboardPage, IncidentsPage, NotFound, PlansPage, ProcessesPage, ResourcesPage,
    SitesPage,
};
use crate::state::{Books, Storage, Toasts};
use leptos::*;
use leptos_router::{Route, Router, Routes};
use recovery_core::AppConfig;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage = Storage::open(&config);
    Books::open(&storage).provide();
    provide_context(storage);
    provide_context(Toasts::new());

    view! {
        <Router>
            <div class="shell">
                <Sidebar/>
                <main class="content">
                    <Routes>
                        <Route path="/" view=DashboardPage/>
                        <Route path="/resources" view=ResourcesPage/>
                        <Route path="/processes" view=ProcessesPage/>
                        <Route path="/sites" view=SitesPage/>
                        <Route path="/backups" view=BackupsPage/>
                        <Route path="/plans" view=PlansPage/>
                        <Route path="/incidents" view=IncidentsPage/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
                <ToastHost/>
            </div>
        </Router>
    }
}
