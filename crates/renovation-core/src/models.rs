//! Tracker Models
//!
//! Records held in memory for the lifetime of the page. They are built once
//! by the generator and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{TrackerError, TrackerResult};

/// Base class shared by every status badge
pub(crate) const BADGE_BASE: &str = "status-badge";

/// Progress of a single renovation item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenovationStatus {
    NotStarted,
    InProgress,
    Done,
    Overdue,
}

impl RenovationStatus {
    /// All statuses, in generation order
    pub const ALL: [RenovationStatus; 4] = [
        RenovationStatus::NotStarted,
        RenovationStatus::InProgress,
        RenovationStatus::Done,
        RenovationStatus::Overdue,
    ];

    /// Wire value (`not-started`, `in-progress`, `done`, `overdue`)
    pub fn as_str(&self) -> &'static str {
        match self {
            RenovationStatus::NotStarted => "not-started",
            RenovationStatus::InProgress => "in-progress",
            RenovationStatus::Done => "done",
            RenovationStatus::Overdue => "overdue",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            RenovationStatus::NotStarted => "Not Started",
            RenovationStatus::InProgress => "In Progress",
            RenovationStatus::Done => "Completed",
            RenovationStatus::Overdue => "Overdue",
        }
    }

    /// Badge classes: the shared base plus a per-status color class
    pub fn badge_class(&self) -> &'static str {
        match self {
            RenovationStatus::NotStarted => "status-badge status-not-started",
            RenovationStatus::InProgress => "status-badge status-in-progress",
            RenovationStatus::Done => "status-badge status-done",
            RenovationStatus::Overdue => "status-badge status-overdue",
        }
    }

    /// Class of the active filter chip for this status
    pub fn filter_class(&self) -> &'static str {
        match self {
            RenovationStatus::NotStarted => "filter-not-started",
            RenovationStatus::InProgress => "filter-in-progress",
            RenovationStatus::Done => "filter-done",
            RenovationStatus::Overdue => "filter-overdue",
        }
    }
}

impl fmt::Display for RenovationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenovationStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> TrackerResult<Self> {
        RenovationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TrackerError::InvalidInput(format!("unknown status '{}'", s)))
    }
}

/// A property in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Image URL shown in the sidebar, header and notes dialog
    pub image: String,
}

impl Entity for Property {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: String,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

impl Entity for Contractor {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A dated progress note left by a contractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub date: NaiveDate,
    pub content: String,
    pub author: String,
    /// Attached photo URLs (empty when the note has none)
    #[serde(default)]
    pub images: Vec<String>,
}

impl Entity for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Note {
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// One unit of renovation work on a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenovationItem {
    pub id: String,
    /// References `Property::id`
    pub property_id: String,
    pub name: String,
    pub description: String,
    /// Embedded copy of the assigned contractor
    pub contractor: Contractor,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RenovationStatus,
    pub notes: Vec<Note>,
}

impl Entity for RenovationItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RenovationItem {
    /// Planned duration in days
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_all_values() {
        for status in RenovationStatus::ALL {
            assert_eq!(status.as_str().parse::<RenovationStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_parse_unknown() {
        let err = "paused".parse::<RenovationStatus>().unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(_)));
        assert!(err.to_string().contains("paused"));
    }

    #[test]
    fn test_status_labels_and_badges_non_empty() {
        for status in RenovationStatus::ALL {
            assert!(!status.label().is_empty());
            assert!(status.badge_class().starts_with(BADGE_BASE));
        }
        assert_eq!(RenovationStatus::Done.label(), "Completed");
    }

    #[test]
    fn test_filter_class_per_status() {
        assert_eq!(RenovationStatus::NotStarted.filter_class(), "filter-not-started");
        assert_eq!(RenovationStatus::InProgress.filter_class(), "filter-in-progress");
        assert_eq!(RenovationStatus::Done.filter_class(), "filter-done");
        assert_eq!(RenovationStatus::Overdue.filter_class(), "filter-overdue");
    }

    #[test]
    fn test_status_serde_kebab_case() {
        let json = serde_json::to_string(&RenovationStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not-started\"");
        let parsed: RenovationStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, RenovationStatus::InProgress);
    }

    #[test]
    fn test_note_images_default_to_empty() {
        let note: Note = serde_json::from_str(
            r#"{"id":"note-1-0-0","date":"2025-04-02","content":"Done","author":"Mike Chen"}"#,
        )
        .unwrap();
        assert!(!note.has_images());
    }
}
