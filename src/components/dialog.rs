//! Dialog Component
//!
//! Modal overlay, either centered or docked to the right edge. Nothing is
//! rendered while closed. The backdrop, the close button and (optionally)
//! Escape dismiss it; clicks inside the panel stay inside the panel.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogPosition {
    #[default]
    Center,
    Right,
}

impl DialogPosition {
    fn backdrop_class(&self) -> &'static str {
        match self {
            DialogPosition::Center => "dialog-backdrop dialog-backdrop-center",
            DialogPosition::Right => "dialog-backdrop dialog-backdrop-right",
        }
    }

    fn panel_class(&self) -> &'static str {
        match self {
            DialogPosition::Center => "dialog-panel dialog-panel-center",
            DialogPosition::Right => "dialog-panel dialog-panel-right",
        }
    }
}

/// Classes of the backdrop and panel an open dialog renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogFrame {
    pub backdrop_class: &'static str,
    pub panel_class: &'static str,
}

/// The frame to render, or `None` while closed
pub fn dialog_frame(is_open: bool, position: DialogPosition) -> Option<DialogFrame> {
    is_open.then(|| DialogFrame {
        backdrop_class: position.backdrop_class(),
        panel_class: position.panel_class(),
    })
}

/// User interactions that may close an open dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissEvent<'a> {
    Backdrop,
    CloseButton,
    PanelClick,
    Key(&'a str),
}

pub fn should_dismiss(event: DismissEvent<'_>, close_on_escape: bool) -> bool {
    match event {
        DismissEvent::Backdrop | DismissEvent::CloseButton => true,
        DismissEvent::PanelClick => false,
        DismissEvent::Key(key) => close_on_escape && key == "Escape",
    }
}

/// Run `on_close` once if `event` dismisses the dialog
fn dismiss(event: DismissEvent<'_>, close_on_escape: bool, on_close: impl FnOnce()) {
    if should_dismiss(event, close_on_escape) {
        on_close();
    }
}

#[component]
pub fn Dialog(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional)] position: DialogPosition,
    #[prop(default = true)] close_on_escape: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if is_open.get_untracked() {
            dismiss(DismissEvent::Key(&ev.key()), close_on_escape, || on_close.run(()));
        }
    });
    on_cleanup(move || keydown.remove());

    move || {
        dialog_frame(is_open.get(), position).map(|frame| {
            view! {
                <div
                    class=frame.backdrop_class
                    on:click=move |_| dismiss(DismissEvent::Backdrop, close_on_escape, || on_close.run(()))
                >
                    <div
                        class=frame.panel_class
                        role="dialog"
                        aria-modal="true"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dismiss(DismissEvent::PanelClick, close_on_escape, || on_close.run(()));
                        }
                    >
                        <div class="dialog-header">
                            <h2 class="dialog-title">{title.clone()}</h2>
                            // The click still bubbles to the panel, which stops it there.
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                class="dialog-close"
                                aria_label="Close"
                                on_click=Callback::new(move |_| {
                                    dismiss(DismissEvent::CloseButton, close_on_escape, || on_close.run(()))
                                })
                            >
                                "✕"
                            </Button>
                        </div>
                        <div class="dialog-body">
                            {children.with_value(|children| children())}
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_closed_dialog_renders_nothing() {
        assert_eq!(dialog_frame(false, DialogPosition::Center), None);
        assert_eq!(dialog_frame(false, DialogPosition::Right), None);
    }

    #[test]
    fn test_open_dialog_frame_follows_position() {
        let center = dialog_frame(true, DialogPosition::Center).unwrap();
        assert_eq!(center.backdrop_class, "dialog-backdrop dialog-backdrop-center");
        assert_eq!(center.panel_class, "dialog-panel dialog-panel-center");

        let right = dialog_frame(true, DialogPosition::Right).unwrap();
        assert_eq!(right.panel_class, "dialog-panel dialog-panel-right");
    }

    #[test]
    fn test_backdrop_and_close_button_dismiss() {
        assert!(should_dismiss(DismissEvent::Backdrop, false));
        assert!(should_dismiss(DismissEvent::CloseButton, true));
    }

    #[test]
    fn test_panel_click_does_not_dismiss() {
        assert!(!should_dismiss(DismissEvent::PanelClick, true));
    }

    #[test]
    fn test_escape_respects_flag() {
        assert!(should_dismiss(DismissEvent::Key("Escape"), true));
        assert!(!should_dismiss(DismissEvent::Key("Escape"), false));
        assert!(!should_dismiss(DismissEvent::Key("Enter"), true));
    }

    #[test]
    fn test_close_called_once_per_interaction() {
        let calls = Cell::new(0);
        let close = || calls.set(calls.get() + 1);

        dismiss(DismissEvent::Backdrop, true, close);
        assert_eq!(calls.get(), 1);
        dismiss(DismissEvent::Key("Escape"), true, close);
        assert_eq!(calls.get(), 2);
        dismiss(DismissEvent::PanelClick, true, close);
        dismiss(DismissEvent::Key("a"), true, close);
        assert_eq!(calls.get(), 2);
    }
}
