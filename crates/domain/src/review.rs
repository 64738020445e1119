//! Review — text left by a user about a place.

use serde::{Deserialize, Serialize};

use crate::id::{PlaceId, ReviewId, UserId};
use crate::time::{self, Timestamp};

/// A review of a place by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// Reviewed place. Resolved from the URL path, immutable afterwards.
    pub place_id: PlaceId,
    /// Authoring user. Resolved at creation, immutable afterwards.
    pub user_id: UserId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Review {
    /// Construct a review with a fresh id and timestamps.
    #[must_use]
    pub fn new(place_id: PlaceId, user_id: UserId, text: impl Into<String>) -> Self {
        let ts = time::now();
        Self {
            id: ReviewId::new(),
            place_id,
            user_id,
            text: text.into(),
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Record a mutation by bumping `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = time::now();
    }

    /// Apply a partial update. Parent references are not part of the
    /// allow-list.
    pub fn apply(&mut self, patch: ReviewPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        self.touch();
    }
}

/// Updatable fields of a [`Review`].
#[derive(Debug, Default, Deserialize)]
pub struct ReviewPatch {
    pub text: Option<String>,
}
