//! Image Component
//!
//! Remote image inside a sized frame. Loading is left to the browser.

use leptos::prelude::*;

/// How the image fills its frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
}

impl ImageFit {
    pub fn class(&self) -> &'static str {
        match self {
            ImageFit::Cover => "image-fill image-cover",
            ImageFit::Contain => "image-fill image-contain",
        }
    }
}

#[component]
pub fn RemoteImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] fit: ImageFit,
    /// Classes for the frame, which sets the rendered size
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <div class=format!("image-frame {}", class)>
            <img src=src alt=alt class=fit.class() loading="lazy" />
        </div>
    }
}
