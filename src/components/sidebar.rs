//! Property Sidebar
//!
//! Clickable property list. Holds no state: the selection comes in as a
//! signal and clicks go out through `on_select`.

use leptos::prelude::*;
use renovation_core::Property;

use crate::components::{ImageFit, RemoteImage};

#[component]
pub fn Sidebar(
    properties: Vec<Property>,
    selected: ReadSignal<Option<Property>>,
    on_select: Callback<Property>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <nav class=format!("sidebar {}", class)>
            <div class="sidebar-header">
                <h2>"Properties"</h2>
            </div>
            <div class="sidebar-list">
                <For
                    each=move || properties.clone()
                    key=|property| property.id.clone()
                    children=move |property| {
                        let id = property.id.clone();
                        let is_selected = move || {
                            selected.with(|s| s.as_ref().is_some_and(|s| s.id == id))
                        };
                        let clicked = property.clone();

                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() { "sidebar-item active" } else { "sidebar-item" }
                                on:click=move |_| on_select.run(clicked.clone())
                            >
                                <RemoteImage
                                    src=property.image.clone()
                                    alt=property.name.clone()
                                    fit=ImageFit::Cover
                                    class="sidebar-thumb"
                                />
                                <div class="sidebar-item-text">
                                    <p class="sidebar-item-name">{property.name.clone()}</p>
                                    <p class="sidebar-item-address">{property.address.clone()}</p>
                                </div>
                            </button>
                        }
                    }
                />
            </div>
        </nav>
    }
}
