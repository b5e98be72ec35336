//! Renovation Item Card
//!
//! Summary card for one item, with a dialog holding the full details.

use chrono::NaiveDateTime;
use leptos::prelude::*;
use renovation_core::{days_remaining, format_naive_date, urgency_class, RenovationItem, Urgency};

use crate::components::{Button, ButtonVariant, Dialog, NotesPanel};
use crate::store::{store_find_property, use_tracker_store};

#[component]
pub fn RenovationItemCard(item: RenovationItem, now: ReadSignal<NaiveDateTime>) -> impl IntoView {
    let store = use_tracker_store();
    let property = store_find_property(&store, &item.property_id);
    let (show_notes, set_show_notes) = signal(false);

    let status = item.status;
    let countdown = {
        let item = item.clone();
        move || days_remaining(&item, now.get())
    };
    let timeline = format!(
        "{} - {}",
        format_naive_date(item.start_date),
        format_naive_date(item.end_date)
    );
    let contractor = format!("{}, {}", item.contractor.name, item.contractor.company);
    let notes_label = format!("View Notes ({})", item.notes.len());
    let dialog_title = format!("Notes for {}", item.name);
    let name = item.name.clone();
    let description = item.description.clone();

    view! {
        <div class="item-card">
            <div class="item-card-header">
                <div>
                    <h3 class="item-name">{name}</h3>
                    <p class="item-description">{description}</p>
                </div>
                <span class=status.badge_class()>{status.label()}</span>
            </div>

            <div class="item-card-body">
                <div class="item-field">
                    <span class="item-field-label">"Contractor:"</span>
                    <span class="item-field-value">{contractor}</span>
                </div>
                <div class="item-field">
                    <span class="item-field-label">"Timeline:"</span>
                    <span class="item-field-value">{timeline}</span>
                </div>
                <div class="item-field">
                    <span class="item-field-label">"Status:"</span>
                    <span class=urgency_class(Urgency::of(status))>{countdown}</span>
                </div>
            </div>

            <div class="item-card-footer">
                <Button
                    variant=ButtonVariant::Outline
                    class="full-width"
                    on_click=Callback::new(move |_| set_show_notes.set(true))
                >
                    {notes_label}
                </Button>
            </div>
        </div>

        <Dialog
            is_open=show_notes
            on_close=Callback::new(move |_| set_show_notes.set(false))
            title=dialog_title
        >
            <NotesPanel item=item.clone() property=property.clone() />
        </Dialog>
    }
}
