//! User - Account with username and email
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use super::record::{Record, RecordId};
use crate::domain::value_objects::FieldPatch;

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
}

/// Fields for a new User
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Partial update for a User
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub username: FieldPatch<String>,
    #[serde(default)]
    pub email: FieldPatch<String>,
}

impl User {
    /// Records every User repository starts with
    pub fn seed_data() -> Vec<User> {
        (1..=2)
            .map(|n| User {
                id: n,
                username: format!("user{n}"),
                email: format!("user{n}@example.com"),
            })
            .collect()
    }
}

impl Record for User {
    type Draft = NewUser;
    type Patch = UserPatch;

    const KIND: &'static str = "User";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewUser) -> Self {
        Self {
            id,
            username: draft.username,
            email: draft.email,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        patch.username.apply_to(&mut self.username);
        patch.email.apply_to(&mut self.email);
    }
}
