//! Amenity — a feature a place can offer (wifi, pool, …).

use serde::{Deserialize, Serialize};

use crate::id::AmenityId;
use crate::time::{self, Timestamp};

/// A named amenity, linkable to any number of places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Amenity {
    /// Construct an amenity with a fresh id and timestamps.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let ts = time::now();
        Self {
            id: AmenityId::new(),
            name: name.into(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Record a mutation by bumping `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = time::now();
    }

    /// Apply a partial update.
    pub fn apply(&mut self, patch: AmenityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.touch();
    }
}

/// Updatable fields of an [`Amenity`].
#[derive(Debug, Default, Deserialize)]
pub struct AmenityPatch {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assign_id_and_timestamps_on_construction() {
        let amenity = Amenity::new("wifi");
        assert_eq!(amenity.name, "wifi");
        assert_eq!(amenity.created_at, amenity.updated_at);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let amenity = Amenity::new("pool");
        let json = serde_json::to_string(&amenity).unwrap();
        let parsed: Amenity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, amenity.id);
        assert_eq!(parsed.name, amenity.name);
    }
}
