//! User entity - an account that can post animals and chat

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User entity
///
/// The password hash is owned by the repository and never travels on the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with a fresh ID
    pub fn new(name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email: normalize_email(&email),
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}

/// Emails are compared case-insensitively and without surrounding whitespace
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
