//! Status Filter Bar
//!
//! One chip per filter value, each with the item count it would show.

use leptos::prelude::*;
use renovation_core::{StatusCounts, StatusFilter};

fn chip_class(filter: StatusFilter, active: bool) -> String {
    if !active {
        return "filter-chip".to_string();
    }
    let color = match filter {
        StatusFilter::All => "filter-all",
        StatusFilter::Only(status) => status.filter_class(),
    };
    format!("filter-chip active {}", color)
}

#[component]
pub fn StatusFilterBar(
    current: ReadSignal<StatusFilter>,
    counts: Memo<StatusCounts>,
    on_change: Callback<StatusFilter>,
) -> impl IntoView {
    view! {
        <div class="filter-bar" role="group" aria-label="Filter by status">
            {StatusFilter::ALL_OPTIONS.into_iter().map(|option| {
                view! {
                    <button
                        type="button"
                        class=move || chip_class(option, current.get() == option)
                        aria-pressed=move || (current.get() == option).to_string()
                        on:click=move |_| on_change.run(option)
                    >
                        {option.label()}
                        <span class="chip-count">{move || counts.get().get(option)}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
