//! Generator Configuration
//!
//! Tunables for the sample-data generator. Every field has a default, so an
//! empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::generator::{NOTE_TEMPLATES, PHOTO_POOL};

/// Upper bound for `items_per_property`
pub const MAX_ITEMS_PER_PROPERTY: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Items generated for every property
    pub items_per_property: usize,
    /// Chance that a single note carries photos
    pub photo_probability: f64,
    /// Upper bound of notes per item (at least one note is always generated)
    pub max_notes: usize,
    /// Upper bound of photos on a note that has any
    pub max_photos_per_note: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            items_per_property: 10,
            photo_probability: 0.7,
            max_notes: 5,
            max_photos_per_note: 3,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a JSON configuration block
    pub fn from_json(raw: &str) -> TrackerResult<Self> {
        let config: GeneratorConfig =
            serde_json::from_str(raw).map_err(|e| TrackerError::Config(e.to_string()))?;
        config.validate()
    }

    pub fn validate(self) -> TrackerResult<Self> {
        if !(1..=MAX_ITEMS_PER_PROPERTY).contains(&self.items_per_property) {
            return Err(TrackerError::Config(format!(
                "itemsPerProperty must be within 1..={}, got {}",
                MAX_ITEMS_PER_PROPERTY, self.items_per_property
            )));
        }
        if !(0.0..=1.0).contains(&self.photo_probability) {
            return Err(TrackerError::Config(format!(
                "photoProbability must be within 0..=1, got {}",
                self.photo_probability
            )));
        }
        if !(1..=NOTE_TEMPLATES.len()).contains(&self.max_notes) {
            return Err(TrackerError::Config(format!(
                "maxNotes must be within 1..={}, got {}",
                NOTE_TEMPLATES.len(),
                self.max_notes
            )));
        }
        if self.max_photos_per_note == 0 || self.max_photos_per_note > PHOTO_POOL.len() {
            return Err(TrackerError::Config(format!(
                "maxPhotosPerNote must be within 1..={}, got {}",
                PHOTO_POOL.len(),
                self.max_photos_per_note
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = GeneratorConfig::from_json(r#"{"itemsPerProperty": 4, "photoProbability": 0}"#).unwrap();
        assert_eq!(config.items_per_property, 4);
        assert_eq!(config.photo_probability, 0.0);
        assert_eq!(config.max_notes, 5);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = GeneratorConfig::from_json("{itemsPerProperty:").unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(GeneratorConfig::from_json(r#"{"seed": 7}"#).is_err());
    }

    #[test]
    fn test_oversized_counts_rejected() {
        assert!(GeneratorConfig::from_json(r#"{"itemsPerProperty": 18446744073709551615}"#).is_err());
        assert!(GeneratorConfig::from_json(r#"{"itemsPerProperty": 10000000}"#).is_err());
        assert!(GeneratorConfig::from_json(r#"{"maxNotes": 1000}"#).is_err());

        let at_cap = format!(
            r#"{{"itemsPerProperty": {}, "maxNotes": {}}}"#,
            MAX_ITEMS_PER_PROPERTY,
            NOTE_TEMPLATES.len()
        );
        assert!(GeneratorConfig::from_json(&at_cap).is_ok());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(GeneratorConfig::from_json(r#"{"itemsPerProperty": 0}"#).is_err());
        assert!(GeneratorConfig::from_json(r#"{"photoProbability": 1.5}"#).is_err());
        assert!(GeneratorConfig::from_json(r#"{"maxNotes": 0}"#).is_err());
        assert!(GeneratorConfig::from_json(r#"{"maxPhotosPerNote": 0}"#).is_err());
        let too_many = format!(r#"{{"maxPhotosPerNote": {}}}"#, PHOTO_POOL.len() + 1);
        assert!(GeneratorConfig::from_json(&too_many).is_err());
    }
}
