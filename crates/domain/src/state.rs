//! State — top-level geographic region that groups cities.

use serde::{Deserialize, Serialize};

use crate::id::StateId;
use crate::time::{self, Timestamp};

/// A geographic state, parent of zero or more cities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl State {
    /// Construct a state with a fresh id and timestamps.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let ts = time::now();
        Self {
            id: StateId::new(),
            name: name.into(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Record a mutation by bumping `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = time::now();
    }

    /// Apply a partial update. Only allow-listed fields change;
    /// `id` and `created_at` never do.
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.touch();
    }
}

/// Updatable fields of a [`State`]. Anything not listed here is
/// immutable through the API; unknown payload keys are dropped during
/// deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct StatePatch {
    pub name: Option<String>,
}
