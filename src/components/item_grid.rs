//! Item Grid
//!
//! Grid of item cards, or an empty-state message when nothing matches.

use chrono::NaiveDateTime;
use leptos::prelude::*;
use renovation_core::RenovationItem;

use crate::components::RenovationItemCard;

const EMPTY_TITLE: &str = "No renovation items match the current filter";
const EMPTY_HINT: &str = "Try selecting a different status filter or property";

/// What the grid area shows for a set of visible items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridState {
    Cards,
    Empty,
}

pub fn grid_state<T>(items: &[T]) -> GridState {
    if items.is_empty() {
        GridState::Empty
    } else {
        GridState::Cards
    }
}

#[component]
pub fn ItemGrid(items: Memo<Vec<RenovationItem>>, now: ReadSignal<NaiveDateTime>) -> impl IntoView {
    view! {
        <Show
            when=move || items.with(|items| grid_state(items) == GridState::Cards)
            fallback=|| view! { <EmptyState /> }
        >
            <div class="item-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <RenovationItemCard item=item now=now /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state-title">{EMPTY_TITLE}</p>
            <p class="empty-state-hint">{EMPTY_HINT}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use renovation_core::{filter_items, GeneratorConfig, RenovationStatus, SampleData, StatusFilter};

    fn sample() -> SampleData {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        SampleData::generate(today, &GeneratorConfig::default())
    }

    #[test]
    fn test_empty_selection_shows_empty_state() {
        let none: [RenovationItem; 0] = [];
        assert_eq!(grid_state(&none), GridState::Empty);

        let data = sample();
        let unknown = filter_items(&data.items, "99", StatusFilter::All);
        assert_eq!(grid_state(&unknown), GridState::Empty);
    }

    #[test]
    fn test_no_overdue_items_for_property_shows_empty_state() {
        let mut data = sample();
        for item in data.items.iter_mut().filter(|i| i.property_id == "1") {
            item.status = RenovationStatus::Done;
        }
        let overdue = filter_items(&data.items, "1", StatusFilter::Only(RenovationStatus::Overdue));
        assert_eq!(grid_state(&overdue), GridState::Empty);

        let done = filter_items(&data.items, "1", StatusFilter::Only(RenovationStatus::Done));
        assert_eq!(grid_state(&done), GridState::Cards);
    }
}
