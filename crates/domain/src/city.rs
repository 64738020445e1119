//! City — belongs to exactly one state, parent of places.

use serde::{Deserialize, Serialize};

use crate::id::{CityId, StateId};
use crate::time::{self, Timestamp};

/// A city within a state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    /// Owning state. Resolved before construction, immutable afterwards.
    pub state_id: StateId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl City {
    /// Construct a city with a fresh id and timestamps.
    #[must_use]
    pub fn new(name: impl Into<String>, state_id: StateId) -> Self {
        let ts = time::now();
        Self {
            id: CityId::new(),
            state_id,
            name: name.into(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Record a mutation by bumping `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = time::now();
    }

    /// Apply a partial update. `state_id` is not part of the allow-list.
    pub fn apply(&mut self, patch: CityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.touch();
    }
}

/// Updatable fields of a [`City`].
#[derive(Debug, Default, Deserialize)]
pub struct CityPatch {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_state_id_through_patch() {
        let state_id = StateId::new();
        let mut city = City::new("San Francisco", state_id);

        city.apply(CityPatch {
            name: Some("Oakland".to_string()),
        });

        assert_eq!(city.name, "Oakland");
        assert_eq!(city.state_id, state_id);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let city = City::new("Fresno", StateId::new());
        let json = serde_json::to_string(&city).unwrap();
        let parsed: City = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, city.id);
        assert_eq!(parsed.state_id, city.state_id);
        assert_eq!(parsed.name, city.name);
    }

    #[test]
    fn should_drop_state_id_key_when_deserializing_patch() {
        let patch: CityPatch = serde_json::from_value(serde_json::json!({
            "name": "San Jose",
            "state_id": "someone-elses-state",
        }))
        .unwrap();
        assert_eq!(patch.name.as_deref(), Some("San Jose"));
    }
}
