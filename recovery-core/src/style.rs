//! CSS classes for badges on record cards.

use crate::choices::{Choice, Severity};

/// Badge class for a process priority or an incident impact level.
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "badge critical",
        Severity::High => "badge high",
        Severity::Medium => "badge medium",
        Severity::Low => "badge low",
    }
}

/// Pill class for any status-like choice, e.g. `status in-progress`.
pub fn status_class<C: Choice>(status: C) -> String {
    let slug = status.label().to_ascii_lowercase().replace(' ', "-");
    format!("status {slug}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::{BackupType, IncidentStatus, ResourceStatus};

    #[test]
    fn critical_impact_gets_critical_class() {
        assert_eq!(severity_class(Severity::Critical), "badge critical");
        assert_eq!(severity_class(Severity::Low), "badge low");
    }

    #[test]
    fn status_class_is_slugged() {
        assert_eq!(status_class(ResourceStatus::Standby), "status standby");
        assert_eq!(status_class(IncidentStatus::Investigating), "status investigating");
        assert_eq!(status_class(BackupType::Full), "status full-backup");
    }
}
