//! The six record types and their form schemas.

mod backup;
mod incident;
mod plan;
mod process;
mod resource;
mod site;

pub use backup::{Backup, LAST_RUN_FORMAT};
pub use incident::Incident;
pub use plan::Plan;
pub use process::Process;
pub use resource::Resource;
pub use site::Site;

/// Ids `"1"`, `"2"`, … for hard-coded seed lists.
fn seed_id(index: usize) -> String {
    (index + 1).to_string()
}
