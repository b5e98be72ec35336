//! Notes Panel
//!
//! Detail content of the item dialog: property photo, contractor contact
//! details, dates, status and the contractor's notes with photos.

use leptos::prelude::*;
use renovation_core::{format_naive_date, Note, Property, RenovationItem};

use crate::components::{ImageFit, RemoteImage};

#[component]
pub fn NotesPanel(item: RenovationItem, property: Option<Property>) -> impl IntoView {
    let contractor = item.contractor.clone();
    let details = [
        ("Contractor:", contractor.name),
        ("Company:", contractor.company),
        ("Contact:", contractor.phone),
        ("Email:", contractor.email),
        ("Start Date:", format_naive_date(item.start_date)),
        ("End Date:", format_naive_date(item.end_date)),
        ("Status:", item.status.label().to_string()),
    ];
    let notes = item.notes;

    view! {
        <div class="notes-panel">
            {property.map(|property| view! {
                <RemoteImage
                    src=property.image
                    alt=property.name
                    fit=ImageFit::Contain
                    class="notes-property-image"
                />
            })}

            <div class="project-details">
                <p class="project-details-title">"Project Details"</p>
                <div class="project-details-grid">
                    {details.into_iter().map(|(label, value)| view! {
                        <div class="detail-label">{label}</div>
                        <div class="detail-value">{value}</div>
                    }).collect_view()}
                </div>
            </div>

            <div class="notes-section">
                <h3 class="notes-title">"Contractor Notes"</h3>
                {if notes.is_empty() {
                    view! { <p class="notes-empty">"No notes available"</p> }.into_any()
                } else {
                    view! {
                        <div class="notes-list">
                            {notes.into_iter().map(|note| view! { <NoteEntry note=note /> }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

/// Alt text for the `index`-th photo on a note (1-based in the text)
fn photo_alt(index: usize, author: &str) -> String {
    format!("Photo {} from {}", index + 1, author)
}

#[component]
fn NoteEntry(note: Note) -> impl IntoView {
    let images = note.images;
    let author = note.author;

    view! {
        <div class="note">
            <div class="note-meta">
                <span class="note-author">{author.clone()}</span>
                <span class="note-date">{format_naive_date(note.date)}</span>
            </div>
            <p class="note-content">{note.content}</p>
            {(!images.is_empty()).then(|| view! {
                <div class="note-images">
                    {images.into_iter().enumerate().map(|(i, src)| {
                        let href = src.clone();
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer">
                                <RemoteImage
                                    src=src
                                    alt=photo_alt(i, &author)
                                    fit=ImageFit::Cover
                                    class="note-photo"
                                />
                            </a>
                        }
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}
