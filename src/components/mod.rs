//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod dialog;
mod image;
mod item_card;
mod item_grid;
mod items_panel;
mod notes_panel;
mod page_header;
mod sidebar;
mod status_filter_bar;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use dialog::{Dialog, DialogPosition};
pub use image::{ImageFit, RemoteImage};
pub use item_card::RenovationItemCard;
pub use item_grid::ItemGrid;
pub use items_panel::ItemsPanel;
pub use notes_panel::NotesPanel;
pub use page_header::PageHeader;
pub use sidebar::Sidebar;
pub use status_filter_bar::StatusFilterBar;
