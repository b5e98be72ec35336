//! Items Panel
//!
//! Main content of a tracker page: item count, status filter and grid.

use chrono::NaiveDateTime;
use leptos::prelude::*;

use crate::components::{ItemGrid, StatusFilterBar};
use crate::page_state::PageState;

#[component]
pub fn ItemsPanel(state: PageState, now: ReadSignal<NaiveDateTime>) -> impl IntoView {
    let item_count = move || state.visible_items.with(|items| format!("{} items", items.len()));

    view! {
        <section class="items-panel">
            <div class="items-summary">
                <h2 class="items-title">"Renovation Items"</h2>
                <span class="items-count">{item_count}</span>
            </div>

            <StatusFilterBar
                current=state.status_filter
                counts=state.status_counts
                on_change=Callback::new(move |filter| state.set_filter(filter))
            />

            <ItemGrid items=state.visible_items now=now />
        </section>
    }
}
