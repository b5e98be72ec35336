//! Tracker Data Store
//!
//! The generated dataset, held in a `reactive_stores` store and provided to
//! the whole component tree. It is written once at startup and only read
//! afterwards.

use leptos::prelude::*;
use reactive_stores::Store;
use renovation_core::{find_by_id, Property, RenovationItem, SampleData};

/// In-memory dataset with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TrackerState {
    /// Property portfolio, in sidebar order
    pub properties: Vec<Property>,
    /// Renovation items across all properties
    pub items: Vec<RenovationItem>,
}

impl From<SampleData> for TrackerState {
    fn from(data: SampleData) -> Self {
        Self {
            properties: data.properties,
            items: data.items,
        }
    }
}

/// Type alias for the store
pub type TrackerStore = Store<TrackerState>;

/// Get the tracker store from context
pub fn use_tracker_store() -> TrackerStore {
    expect_context::<TrackerStore>()
}

/// Resolve a property by id; `None` when the reference does not resolve
pub fn store_find_property(store: &TrackerStore, property_id: &str) -> Option<Property> {
    find_by_id(store.properties().read_untracked().as_slice(), property_id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use renovation_core::GeneratorConfig;

    #[test]
    fn test_state_keeps_properties_and_items() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let data = SampleData::generate(today, &GeneratorConfig::default());
        let item_count = data.items.len();

        let state = TrackerState::from(data);
        assert_eq!(state.properties.len(), 3);
        assert_eq!(state.items.len(), item_count);
        // Contractor details travel inside each item
        assert!(state.items.iter().all(|i| !i.contractor.name.is_empty()));
    }
}
