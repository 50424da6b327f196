pub mod record_manager;
pub mod sidebar;
pub mod toast;

pub use record_manager::record_manager;
pub use sidebar::Sidebar;
pub use toast::ToastHost;
