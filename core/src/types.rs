//! Domain DTOs for the users API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. `User::id` is
//! optional because a value only gains an id once the server has assigned one,
//! and a user that never round-tripped through the server cannot be targeted
//! for update or delete.

use serde::{Deserialize, Serialize};

/// A user as known to the backend.
///
/// `id` is the server-assigned identity. It is omitted from JSON while absent
/// and tolerated as missing in server payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
}

/// Pending form contents for creating or updating a user.
///
/// Not an entity: it carries no id. Create and update both send this same
/// full `{name, email}` body; PUT is a whole-value write, not a patch.
/// `Default` is the cleared form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    /// Whether the form is ready to submit: both fields non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
