//! Responsive Tracker Page
//!
//! Same content as the dashboard, but below the 768px breakpoint the
//! sidebar is hidden and tapping the header opens the property list in a
//! right-docked dialog.

use leptos::prelude::*;

use crate::clock::use_local_clock;
use crate::components::{Dialog, DialogPosition, ItemsPanel, PageHeader, Sidebar};
use crate::page_state::PageState;
use crate::store::{use_tracker_store, TrackerStateStoreFields};

#[component]
pub fn ResponsiveTrackerPage() -> impl IntoView {
    let store = use_tracker_store();
    let state = PageState::new(store);
    let now = use_local_clock();
    let properties = store.properties().get_untracked();
    let (picker_open, set_picker_open) = signal(false);
    let picker_properties = properties.clone();

    view! {
        <div class="tracker-layout responsive">
            <Sidebar
                properties=properties
                selected=state.selected_property
                on_select=Callback::new(move |property| state.select_property(property))
                class="desktop-only"
            />

            <div class="tracker-main">
                <PageHeader
                    title="Renovation Tracker"
                    selected=state.selected_property
                    on_property_tap=Callback::new(move |_| {
                        log::debug!("opening property picker");
                        set_picker_open.set(true);
                    })
                />
                <div class="tracker-content">
                    <ItemsPanel state=state now=now />
                </div>
            </div>

            <Dialog
                is_open=picker_open
                on_close=Callback::new(move |_| set_picker_open.set(false))
                title="Properties"
                position=DialogPosition::Right
            >
                <Sidebar
                    properties=picker_properties.clone()
                    selected=state.selected_property
                    on_select=Callback::new(move |property| {
                        state.select_property(property);
                        set_picker_open.set(false);
                    })
                    class="sidebar-in-dialog"
                />
            </Dialog>
        </div>
    }
}
