//! User — account that owns places and writes reviews.

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::time::{self, Timestamp};

/// A registered user. `email` is immutable after creation; the update
/// allow-list ([`UserPatch`]) simply has no email field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Record a mutation by bumping `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = time::now();
    }

    /// Apply a partial update. `email` never changes here.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = Some(last_name);
        }
        self.touch();
    }
}

/// Client-supplied fields for creating a [`User`].
#[derive(Debug, Deserialize)]
pub struct UserDraft {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl From<UserDraft> for User {
    fn from(draft: UserDraft) -> Self {
        let ts = time::now();
        Self {
            id: UserId::new(),
            email: draft.email,
            password: draft.password,
            first_name: draft.first_name,
            last_name: draft.last_name,
            created_at: ts,
            updated_at: ts,
        }
    }
}

/// Updatable fields of a [`User`].
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
