use crate::entity::EntityKind;

/// A page reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Records(EntityKind),
}

impl Page {
    /// Sidebar entries, top to bottom.
    pub const NAVIGATION: [Page; 7] = [
        Page::Dashboard,
        Page::Records(EntityKind::Resources),
        Page::Records(EntityKind::Processes),
        Page::Records(EntityKind::Sites),
        Page::Records(EntityKind::Backups),
        Page::Records(EntityKind::Plans),
        Page::Records(EntityKind::Incidents),
    ];

    pub fn path(self) -> String {
        match self {
            Page::Dashboard => "/".to_string(),
            Page::Records(kind) => format!("/{}", kind.slug()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Records(kind) => kind.title(),
        }
    }

    /// Resolves a location path; unknown paths are `None` (not found).
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Page::Dashboard);
        }
        Self::NAVIGATION
            .into_iter()
            .find(|page| page.path() == trimmed)
    }

    pub fn is_active(self, current_path: &str) -> bool {
        Page::from_path(current_path) == Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_order_and_paths() {
        let paths: Vec<String> = Page::NAVIGATION.iter().map(|p| p.path()).collect();
        assert_eq!(
            paths,
            vec!["/", "/resources", "/processes", "/sites", "/backups", "/plans", "/incidents"]
        );
        assert_eq!(Page::NAVIGATION[2].label(), "Business Processes");
    }

    #[test]
    fn resolves_paths() {
        assert_eq!(Page::from_path("/"), Some(Page::Dashboard));
        assert_eq!(Page::from_path("/plans/"), Some(Page::Records(EntityKind::Plans)));
        assert_eq!(Page::from_path("/nowhere"), None);
        assert!(Page::Records(EntityKind::Sites).is_active("/sites"));
        assert!(!Page::Dashboard.is_active("/sites"));
    }
}
