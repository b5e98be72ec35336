//! Entity Trait
//!
//! Every record in the dataset carries a string id; references between
//! records (an item's `property_id`) are resolved through it.

/// Core trait for all tracker records
pub trait Entity {
    /// Returns the record's unique identifier
    fn id(&self) -> &str;
}

/// Find a record by id. Unresolved references yield `None`.
pub fn find_by_id<'a, T: Entity>(entities: &'a [T], id: &str) -> Option<&'a T> {
    entities.iter().find(|entity| entity.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::properties;

    #[test]
    fn test_find_by_id_resolves_existing() {
        let props = properties();
        let found = find_by_id(&props, "2").map(|p| p.name.as_str());
        assert_eq!(found, Some("Downtown Loft"));
    }

    #[test]
    fn test_find_by_id_unresolved() {
        let props = properties();
        assert!(find_by_id(&props, "42").is_none());
        assert!(find_by_id(&props, "").is_none());
    }
}
