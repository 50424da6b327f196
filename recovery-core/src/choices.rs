//! Closed value sets offered by select fields.
//!
//! Every variant serializes as its display label, which is also the option
//! value submitted by the form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of labelled values backing a select field.
pub trait Choice: Copy + Sized + 'static {
    /// Labels in the order the form offers them.
    const LABELS: &'static [&'static str];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self>;
}

macro_rules! choice {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Choice for $name {
            const LABELS: &'static [&'static str] = &[$($label),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice! {
    /// Kind of tracked resource.
    ResourceType {
        Hardware => "Hardware",
        Software => "Software",
        Network => "Network",
        Facility => "Facility",
    }
}

choice! {
    ResourceStatus {
        Active => "Active",
        Standby => "Standby",
        Maintenance => "Maintenance",
        Inactive => "Inactive",
    }
}

choice! {
    /// Priority of a business process and impact level of an incident.
    /// Listed from most to least severe.
    Severity {
        Critical => "Critical",
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

choice! {
    BackupType {
        Full => "Full Backup",
        Incremental => "Incremental",
        Differential => "Differential",
    }
}

choice! {
    PlanStatus {
        Active => "Active",
        Standby => "Standby",
        Draft => "Draft",
    }
}

choice! {
    IncidentStatus {
        Open => "Open",
        Investigating => "Investigating",
        Resolved => "Resolved",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for label in BackupType::LABELS {
            let value = BackupType::from_label(label).expect("known label");
            assert_eq!(value.label(), *label);
        }
        assert_eq!(Severity::from_label("critical"), None);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&BackupType::Full).unwrap();
        assert_eq!(json, "\"Full Backup\"");
        let back: IncidentStatus = serde_json::from_str("\"Investigating\"").unwrap();
        assert_eq!(back, IncidentStatus::Investigating);
    }

    #[test]
    fn severity_is_offered_most_severe_first() {
        assert_eq!(Severity::LABELS, &["Critical", "High", "Medium", "Low"]);
        assert_eq!(Severity::Critical.to_string(), "Critical");
    }
}
