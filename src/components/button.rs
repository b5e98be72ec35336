//! Button Component
//!
//! Generic button with a visual variant and size.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

/// Full class string for a button
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if !extra.trim().is_empty() {
        class.push(' ');
        class.push_str(extra.trim());
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] aria_label: Option<String>,
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, size, &class)
            aria-label=aria_label
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button_class() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), ""),
            "btn btn-default btn-md"
        );
    }

    #[test]
    fn test_button_class_with_extra() {
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Default, " full-width "),
            "btn btn-outline btn-md full-width"
        );
    }

    #[test]
    fn test_icon_ghost_button_class() {
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Icon, "dialog-close"),
            "btn btn-ghost btn-icon dialog-close"
        );
    }
}
