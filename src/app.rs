//! Renovation Tracker App
//!
//! Generates the dataset once, provides it as a store and routes between
//! the dashboard and the responsive tracker page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;
use renovation_core::SampleData;

use crate::clock::{local_now, use_local_clock};
use crate::components::{ItemsPanel, PageHeader, Sidebar};
use crate::config::load_generator_config;
use crate::mobile::ResponsiveTrackerPage;
use crate::page_state::PageState;
use crate::store::{use_tracker_store, TrackerState, TrackerStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = load_generator_config();
    let data = SampleData::generate(local_now().date(), &config);
    log::info!(
        "Loaded {} renovation items for {} properties",
        data.items.len(),
        data.properties.len()
    );

    provide_context(Store::new(TrackerState::from(data)));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/renovation-tracker") view=ResponsiveTrackerPage />
            </Routes>
        </Router>
    }
}

/// Sidebar + header + filtered item grid
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_tracker_store();
    let state = PageState::new(store);
    let now = use_local_clock();
    let properties = store.properties().get_untracked();

    view! {
        <div class="tracker-layout">
            <Sidebar
                properties=properties
                selected=state.selected_property
                on_select=Callback::new(move |property| state.select_property(property))
            />

            <div class="tracker-main">
                <PageHeader
                    title="Real Estate Renovation Tracker"
                    selected=state.selected_property
                />
                <div class="tracker-content">
                    <ItemsPanel state=state now=now />
                </div>
            </div>
        </div>
    }
}
