//! Page Header
//!
//! App title plus the selected property's name, address and photo. With
//! `on_property_tap` set, the property block becomes a button (used on
//! narrow screens to open the property picker).

use leptos::prelude::*;
use renovation_core::Property;

use crate::components::{ImageFit, RemoteImage};

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    selected: ReadSignal<Option<Property>>,
    #[prop(optional)] on_property_tap: Option<Callback<()>>,
) -> impl IntoView {
    let summary = move || {
        selected.get().map(|property| {
            view! {
                <div class="header-property-text">
                    <p class="header-property-name">{property.name.clone()}</p>
                    <p class="header-property-address">{property.address}</p>
                </div>
                <RemoteImage
                    src=property.image
                    alt=property.name
                    fit=ImageFit::Cover
                    class="header-avatar"
                />
            }
        })
    };

    let property_block = match on_property_tap {
        Some(on_tap) => view! {
            <button
                type="button"
                class="header-property property-switcher"
                aria-label="Choose property"
                on:click=move |_| on_tap.run(())
            >
                {summary}
                <span class="switcher-caret mobile-only">"▾"</span>
            </button>
        }
        .into_any(),
        None => view! { <div class="header-property">{summary}</div> }.into_any(),
    };

    view! {
        <header class="page-header">
            <h1 class="page-title">{title}</h1>
            {property_block}
        </header>
    }
}
