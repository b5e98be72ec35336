//! Renovation Tracker Core
//!
//! Target-independent logic behind the dashboard: the data model, the
//! sample-data generator, status/date formatting and item filtering.
//! Nothing in here touches the DOM, so it builds and tests natively.

mod config;
mod entity;
mod error;
mod filter;
mod format;
mod generator;
mod models;

pub use config::GeneratorConfig;
pub use entity::{find_by_id, Entity};
pub use error::{TrackerError, TrackerResult};
pub use filter::{count_by_status, filter_items, StatusCounts, StatusFilter};
pub use format::{
    days_remaining, days_until, format_date, format_naive_date, status_badge_class, status_label,
    urgency_class, Urgency,
};
pub use generator::{
    contractors, generate_renovation_items, properties, SampleData, NOTE_TEMPLATES, PHOTO_POOL,
    RENOVATION_TYPES,
};
pub use models::{Contractor, Note, Property, RenovationItem, RenovationStatus};
