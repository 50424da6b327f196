mod dashboard;
mod not_found;
mod records;

pub use dashboard::DashboardPage;
pub use not_found::NotFound;
pub use records::{BackupsPage, IncidentsPage, PlansPage, ProcessesPage, ResourcesPage, SitesPage};
