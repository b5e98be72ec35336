//! Local Clock
//!
//! Reference time for countdowns. The wall clock is polled every minute and
//! the signal only changes once the calendar date does, since countdowns
//! are whole days.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_secs(60);

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Whether `current` falls on a later (or earlier) day than `shown`
pub fn crossed_midnight(shown: NaiveDateTime, current: NaiveDateTime) -> bool {
    shown.date() != current.date()
}

/// Local time signal that follows date changes while the page stays open.
/// The poll stops when the owning component is disposed.
pub fn use_local_clock() -> ReadSignal<NaiveDateTime> {
    let (now, set_now) = signal(local_now());

    let poll = set_interval_with_handle(
        move || {
            let current = local_now();
            if crossed_midnight(now.get_untracked(), current) {
                log::info!("Date changed to {}, refreshing countdowns", current.date());
                set_now.set(current);
            }
        },
        POLL_INTERVAL,
    );
    match poll {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::warn!("Countdown clock unavailable, keeping page-load time: {:?}", err),
    }

    now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_same_day_is_not_a_change() {
        assert!(!crossed_midnight(at(10, 0, 0), at(10, 23, 59)));
    }

    #[test]
    fn test_midnight_is_a_change() {
        assert!(crossed_midnight(at(10, 23, 59), at(11, 0, 0)));
        assert!(crossed_midnight(at(10, 9, 0), at(12, 9, 0)));
    }

    #[test]
    fn test_countdown_moves_after_midnight() {
        use renovation_core::days_until;
        let end = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let before = at(10, 23, 59);
        let after = at(11, 0, 1);
        assert!(crossed_midnight(before, after));
        assert_eq!(days_until(end, before), 4);
        assert_eq!(days_until(end, after), 3);
    }
}
