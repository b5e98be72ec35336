//! Sample Data Generator
//!
//! Fixed properties and contractors plus randomly generated renovation items.
//! A fresh dataset is produced on every page load; the RNG is injected so
//! tests can seed it.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::entity::find_by_id;
use crate::models::{Contractor, Note, Property, RenovationItem, RenovationStatus};

/// Start dates fall within `today + START_OFFSET_DAYS`
const START_OFFSET_DAYS: std::ops::Range<i64> = -15..15;
/// Item durations in days
const DURATION_DAYS: std::ops::Range<i64> = 5..35;

/// Renovation templates: (name, description)
pub const RENOVATION_TYPES: &[(&str, &str)] = &[
    ("Plaster Repair", "Repair damaged plaster on walls and ceilings"),
    ("Heating System", "Install new high-efficiency heating system"),
    ("Roof Replacement", "Complete replacement of roof shingles and underlayment"),
    ("Kitchen Remodel", "Full kitchen renovation including cabinets and appliances"),
    ("Bathroom Renovation", "Update bathroom fixtures and tiles"),
    ("Flooring Installation", "Install hardwood flooring throughout the property"),
    ("Window Replacement", "Replace old windows with energy-efficient models"),
    ("Exterior Painting", "Paint all exterior surfaces"),
    ("Interior Painting", "Paint interior walls and trim"),
    ("Deck Construction", "Build new outdoor deck"),
    ("Fence Installation", "Install perimeter fence"),
    ("Landscaping", "Complete landscape design and installation"),
    ("Electrical Wiring", "Update electrical system to code"),
    ("Plumbing Upgrade", "Replace old pipes and fixtures"),
    ("Insulation", "Add insulation to attic and walls"),
    ("Drywall Installation", "Install new drywall in renovated areas"),
    ("Concrete Foundation Repair", "Fix cracks and issues in foundation"),
    ("Cabinet Installation", "Install new cabinets in kitchen and bathrooms"),
    ("Countertop Installation", "Install granite or quartz countertops"),
    ("Appliance Installation", "Install and connect new appliances"),
    ("HVAC System", "Install new heating, ventilation, and air conditioning system"),
    ("Gutter Installation", "Install new gutters and downspouts"),
    ("Siding Replacement", "Replace damaged or outdated siding"),
    ("Staircase Renovation", "Rebuild or refinish staircase"),
    ("Lighting Fixtures", "Update all lighting fixtures"),
    ("Shower Installation", "Install new shower systems"),
    ("Tile Work", "Install tile flooring and backsplashes"),
    ("Carpet Installation", "Install new carpeting in bedrooms"),
    ("Smart Home System", "Install smart home automation system"),
    ("Security System", "Install comprehensive security system"),
];

pub const NOTE_TEMPLATES: &[&str] = &[
    "Materials have been delivered. We're ready to start work tomorrow.",
    "Hit a snag with the supplier. Materials will be delayed by 3 days.",
    "Found some unexpected issues behind the wall. Will need additional budget approval.",
    "Work is proceeding ahead of schedule. Might finish early if weather holds.",
    "Quality of initial work wasn't up to standard. Had to redo a section.",
    "Inspection passed successfully. Moving to the next phase now.",
    "Client requested a change to the original plan. Need to adjust timeline.",
    "Local permit office is backlogged. Waiting on final approval before continuing.",
    "Subcontractor did an excellent job. Work quality exceeds expectations.",
    "Weather delays have pushed us back a bit, but we're still aiming to finish on time.",
];

/// Progress photos attached to notes
pub const PHOTO_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1503387762-592deb58ef4e?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1504307651254-35680f356dfd?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1581578731548-c64695cc6952?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1556912173-3bb406ef7e77?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1523413651479-597eb2da0ad6?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1621905252507-b35492cc74b4?q=80&w=800&auto=format&fit=crop",
];

/// The fixed property portfolio
pub fn properties() -> Vec<Property> {
    [
        (
            "1",
            "Riverside Cottage",
            "123 River Road, Riverdale, NY 10471",
            "https://images.unsplash.com/photo-1518780664697-55e3ad937233?q=80&w=800&auto=format&fit=crop",
        ),
        (
            "2",
            "Downtown Loft",
            "456 Main Street, New York, NY 10001",
            "https://images.unsplash.com/photo-1493809842364-78817add7ffb?q=80&w=800&auto=format&fit=crop",
        ),
        (
            "3",
            "Suburban Manor",
            "789 Oak Drive, White Plains, NY 10601",
            "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?q=80&w=800&auto=format&fit=crop",
        ),
    ]
    .into_iter()
    .map(|(id, name, address, image)| Property {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        image: image.to_string(),
    })
    .collect()
}

/// The fixed contractor roster
pub fn contractors() -> Vec<Contractor> {
    [
        ("1", "John Smith", "Smith Construction", "(555) 123-4567", "john@smithconstruction.com"),
        ("2", "Sarah Johnson", "Elite Renovations", "(555) 987-6543", "sarah@eliterenovations.com"),
        ("3", "Mike Chen", "Chen Electrical", "(555) 456-7890", "mike@chenelectrical.com"),
        ("4", "Diana Rodriguez", "Clean Cut Carpentry", "(555) 789-0123", "diana@cleancutcarpentry.com"),
        ("5", "Robert Williams", "Williams Plumbing", "(555) 234-5678", "robert@williamsplumbing.com"),
    ]
    .into_iter()
    .map(|(id, name, company, phone, email)| Contractor {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    })
    .collect()
}

/// Generate `config.items_per_property` items for every property.
///
/// Each item gets a random template, contractor and status, a start date
/// within -15..+15 days of `today`, a 5..35 day duration, and 1..=`max_notes`
/// notes dated inside its span. Notes carry photos with probability
/// `photo_probability`, drawn without replacement from [`PHOTO_POOL`].
///
/// `config` must have passed [`GeneratorConfig::validate`].
pub fn generate_renovation_items<R: Rng + ?Sized>(
    rng: &mut R,
    properties: &[Property],
    contractors: &[Contractor],
    today: NaiveDate,
    config: &GeneratorConfig,
) -> Vec<RenovationItem> {
    let mut items = Vec::new();
    if contractors.is_empty() {
        return items;
    }

    for property in properties {
        for i in 0..config.items_per_property {
            let (name, description) = RENOVATION_TYPES[rng.gen_range(0..RENOVATION_TYPES.len())];
            let contractor = &contractors[rng.gen_range(0..contractors.len())];
            let status = RenovationStatus::ALL[rng.gen_range(0..RenovationStatus::ALL.len())];

            let start_date = today + Duration::days(rng.gen_range(START_OFFSET_DAYS));
            let duration_days = rng.gen_range(DURATION_DAYS);
            let end_date = start_date + Duration::days(duration_days);

            let note_count = rng.gen_range(1..=config.max_notes);
            let notes = (0..note_count)
                .map(|j| Note {
                    id: format!("note-{}-{}-{}", property.id, i, j),
                    date: start_date + Duration::days(rng.gen_range(0..duration_days)),
                    content: NOTE_TEMPLATES[rng.gen_range(0..NOTE_TEMPLATES.len())].to_string(),
                    author: contractor.name.clone(),
                    images: pick_photos(rng, config),
                })
                .collect();

            items.push(RenovationItem {
                id: format!("item-{}-{}", property.id, i),
                property_id: property.id.clone(),
                name: name.to_string(),
                description: description.to_string(),
                contractor: contractor.clone(),
                start_date,
                end_date,
                status,
                notes,
            });
        }
    }

    items
}

fn pick_photos<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Vec<String> {
    if !rng.gen_bool(config.photo_probability) {
        return Vec::new();
    }
    let count = rng.gen_range(1..=config.max_photos_per_note);
    PHOTO_POOL
        .choose_multiple(rng, count)
        .map(|url| url.to_string())
        .collect()
}

/// The full in-memory dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleData {
    pub properties: Vec<Property>,
    pub contractors: Vec<Contractor>,
    pub items: Vec<RenovationItem>,
}

impl SampleData {
    /// Generate a fresh, non-deterministic dataset
    pub fn generate(today: NaiveDate, config: &GeneratorConfig) -> Self {
        Self::generate_with(&mut rand::thread_rng(), today, config)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        today: NaiveDate,
        config: &GeneratorConfig,
    ) -> Self {
        let properties = properties();
        let contractors = contractors();
        let items = generate_renovation_items(rng, &properties, &contractors, today, config);
        log::debug!(
            "generated {} items for {} properties (today = {})",
            items.len(),
            properties.len(),
            today
        );
        Self { properties, contractors, items }
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        find_by_id(&self.properties, id)
    }
}
