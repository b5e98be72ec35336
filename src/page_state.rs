//! Page State
//!
//! Selection state owned by a single page instance: the selected property
//! and the status filter, plus the item set derived from them.

use leptos::prelude::*;
use renovation_core::{count_by_status, filter_items, Property, RenovationItem, StatusCounts, StatusFilter};

use crate::store::{TrackerStateStoreFields, TrackerStore};

#[derive(Clone, Copy)]
pub struct PageState {
    /// Selected property (the first property by default)
    pub selected_property: ReadSignal<Option<Property>>,
    set_selected_property: WriteSignal<Option<Property>>,
    /// Active status filter (`All` by default)
    pub status_filter: ReadSignal<StatusFilter>,
    set_status_filter: WriteSignal<StatusFilter>,
    /// Items of the selected property passing the filter
    pub visible_items: Memo<Vec<RenovationItem>>,
    /// Per-status counts for the selected property
    pub status_counts: Memo<StatusCounts>,
}

impl PageState {
    pub fn new(store: TrackerStore) -> Self {
        let first = store.properties().read_untracked().first().cloned();
        let (selected_property, set_selected_property) = signal(first);
        let (status_filter, set_status_filter) = signal(StatusFilter::All);

        let visible_items = Memo::new(move |_| {
            let Some(property) = selected_property.get() else {
                return Vec::new();
            };
            let filter = status_filter.get();
            filter_items(&store.items().read(), &property.id, filter)
                .into_iter()
                .cloned()
                .collect()
        });

        let status_counts = Memo::new(move |_| {
            selected_property
                .get()
                .map(|property| count_by_status(&store.items().read(), &property.id))
                .unwrap_or_default()
        });

        Self {
            selected_property,
            set_selected_property,
            status_filter,
            set_status_filter,
            visible_items,
            status_counts,
        }
    }

    pub fn select_property(&self, property: Property) {
        log::debug!("selected property {} ({})", property.id, property.name);
        self.set_selected_property.set(Some(property));
    }

    pub fn set_filter(&self, filter: StatusFilter) {
        log::debug!("status filter -> {}", filter);
        self.set_status_filter.set(filter);
    }
}
