//! Item Filtering
//!
//! Derives the visible item set for a property and status filter.

use std::fmt;
use std::str::FromStr;

use crate::error::TrackerResult;
use crate::models::{RenovationItem, RenovationStatus};

/// Status filter selected on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RenovationStatus),
}

impl StatusFilter {
    /// Filter options in display order
    pub const ALL_OPTIONS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(RenovationStatus::InProgress),
        StatusFilter::Only(RenovationStatus::NotStarted),
        StatusFilter::Only(RenovationStatus::Done),
        StatusFilter::Only(RenovationStatus::Overdue),
    ];

    pub fn matches(&self, status: RenovationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = crate::error::TrackerError;

    fn from_str(s: &str) -> TrackerResult<Self> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Items of `property_id` passing `filter`, in generation order
pub fn filter_items<'a>(
    items: &'a [RenovationItem],
    property_id: &str,
    filter: StatusFilter,
) -> Vec<&'a RenovationItem> {
    items
        .iter()
        .filter(|item| item.property_id == property_id && filter.matches(item.status))
        .collect()
}

/// Per-status item counts for one property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub not_started: usize,
    pub in_progress: usize,
    pub done: usize,
    pub overdue: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.not_started + self.in_progress + self.done + self.overdue
    }

    pub fn get(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total(),
            StatusFilter::Only(RenovationStatus::NotStarted) => self.not_started,
            StatusFilter::Only(RenovationStatus::InProgress) => self.in_progress,
            StatusFilter::Only(RenovationStatus::Done) => self.done,
            StatusFilter::Only(RenovationStatus::Overdue) => self.overdue,
        }
    }
}

pub fn count_by_status(items: &[RenovationItem], property_id: &str) -> StatusCounts {
    items
        .iter()
        .filter(|item| item.property_id == property_id)
        .fold(StatusCounts::default(), |mut counts, item| {
            match item.status {
                RenovationStatus::NotStarted => counts.not_started += 1,
                RenovationStatus::InProgress => counts.in_progress += 1,
                RenovationStatus::Done => counts.done += 1,
                RenovationStatus::Overdue => counts.overdue += 1,
            }
            counts
        })
}
