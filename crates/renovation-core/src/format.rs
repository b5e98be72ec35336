//! Formatting Helpers
//!
//! Pure display helpers for statuses, dates and the countdown text.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{RenovationItem, RenovationStatus, BADGE_BASE};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Format an ISO date (`2025-03-05` or a full timestamp) as `Mar 5, 2025`.
/// Unparsable input is returned unchanged.
pub fn format_date(iso: &str) -> String {
    let date_part = iso.split_once('T').map_or(iso, |(date, _)| date);
    match NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d") {
        Ok(date) => format_naive_date(date),
        Err(_) => iso.to_string(),
    }
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Badge classes for a raw status value; unknown values get the base class
pub fn status_badge_class(status: &str) -> &'static str {
    status
        .parse::<RenovationStatus>()
        .map_or(BADGE_BASE, |status| status.badge_class())
}

/// Label for a raw status value; unknown values are shown as-is
pub fn status_label(status: &str) -> Cow<'_, str> {
    match status.parse::<RenovationStatus>() {
        Ok(status) => Cow::Borrowed(status.label()),
        Err(_) => Cow::Borrowed(status),
    }
}

/// Whole days from `now` until the start of `end`, rounded up
pub fn days_until(end: NaiveDate, now: NaiveDateTime) -> i64 {
    let millis = (end.and_time(NaiveTime::MIN) - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Countdown text shown on an item card
pub fn days_remaining(item: &RenovationItem, now: NaiveDateTime) -> String {
    if item.status == RenovationStatus::Done {
        return "Completed".to_string();
    }

    let days = days_until(item.end_date, now);
    match days {
        d if d > 0 => format!("{} days remaining", d),
        0 => "Due today".to_string(),
        d => format!("{} days overdue", d.abs()),
    }
}

/// How urgently the countdown text should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    Done,
    Normal,
}

impl Urgency {
    pub fn of(status: RenovationStatus) -> Self {
        match status {
            RenovationStatus::Overdue => Urgency::Overdue,
            RenovationStatus::Done => Urgency::Done,
            RenovationStatus::NotStarted | RenovationStatus::InProgress => Urgency::Normal,
        }
    }
}

pub fn urgency_class(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Overdue => "countdown countdown-warning",
        Urgency::Done => "countdown countdown-success",
        Urgency::Normal => "countdown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::contractors;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(date: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
        date.and_hms_opt(h, min, 0).unwrap()
    }

    fn item(status: RenovationStatus, end: NaiveDate) -> RenovationItem {
        RenovationItem {
            id: "item-1-0".to_string(),
            property_id: "1".to_string(),
            name: "Roof Replacement".to_string(),
            description: "Complete replacement of roof shingles and underlayment".to_string(),
            contractor: contractors()[0].clone(),
            start_date: end - chrono::Duration::days(10),
            end_date: end,
            status,
            notes: Vec::new(),
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-05"), "Mar 5, 2025");
        assert_eq!(format_date("2024-12-25"), "Dec 25, 2024");
        assert_eq!(format_date("2025-03-05T10:00:00.000Z"), "Mar 5, 2025");
    }

    #[test]
    fn test_format_date_invalid_passthrough() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date("2025-13-40"), "2025-13-40");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_status_helpers_total() {
        for status in RenovationStatus::ALL {
            assert!(!status_label(status.as_str()).is_empty());
            assert!(!status_badge_class(status.as_str()).is_empty());
        }
        assert_eq!(status_label("in-progress"), "In Progress");
        assert_eq!(status_badge_class("overdue"), "status-badge status-overdue");
    }

    #[test]
    fn test_status_helpers_fallback() {
        assert_eq!(status_label("on-hold"), "on-hold");
        assert_eq!(status_badge_class("on-hold"), BADGE_BASE);
        assert_eq!(status_badge_class(""), BADGE_BASE);
    }

    #[test]
    fn test_days_until_rounds_up() {
        let today = date(2025, 6, 15);
        assert_eq!(days_until(today, at(today, 0, 0)), 0);
        assert_eq!(days_until(today, at(today, 18, 30)), 0);
        assert_eq!(days_until(date(2025, 6, 16), at(today, 9, 0)), 1);
        assert_eq!(days_until(date(2025, 6, 14), at(today, 9, 0)), -1);
        assert_eq!(days_until(date(2025, 7, 15), at(today, 23, 59)), 30);
    }

    #[test]
    fn test_days_remaining_completed_only_for_done() {
        let today = date(2025, 6, 15);
        let now = at(today, 12, 0);
        for status in RenovationStatus::ALL {
            for end in [date(2025, 6, 1), today, date(2025, 7, 1)] {
                let text = days_remaining(&item(status, end), now);
                assert_eq!(text == "Completed", status == RenovationStatus::Done);
            }
        }
    }

    #[test]
    fn test_days_remaining_boundaries() {
        let today = date(2025, 6, 15);
        let now = at(today, 8, 45);
        for status in [RenovationStatus::NotStarted, RenovationStatus::InProgress, RenovationStatus::Overdue] {
            assert_eq!(days_remaining(&item(status, today), now), "Due today");
            assert_eq!(days_remaining(&item(status, date(2025, 6, 16)), now), "1 days remaining");
            assert_eq!(days_remaining(&item(status, date(2025, 6, 14)), now), "1 days overdue");
        }
        assert_eq!(
            days_remaining(&item(RenovationStatus::InProgress, date(2025, 6, 5)), now),
            "10 days overdue"
        );
    }

    #[test]
    fn test_urgency_classes() {
        assert_eq!(urgency_class(Urgency::of(RenovationStatus::Overdue)), "countdown countdown-warning");
        assert_eq!(urgency_class(Urgency::of(RenovationStatus::Done)), "countdown countdown-success");
        assert_eq!(Urgency::of(RenovationStatus::InProgress), Urgency::Normal);
    }
}
