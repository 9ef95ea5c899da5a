//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Animal, ChatMessage, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    ///
    /// Returns `DomainError::EmailAlreadyExists` when the email is taken.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
}

// ============================================================================
// Animal Repository
// ============================================================================

/// Filters for listing animals available to a user
///
/// A `None` filter places no constraint on that attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalQuery {
    /// The requesting user; their own animals are excluded
    pub user_id: Uuid,
    /// Exact match, case-insensitive
    pub gender: Option<String>,
    /// Exact match, case-insensitive
    pub animal_type: Option<String>,
    /// Substring match, case-insensitive
    pub name: Option<String>,
}

impl AnimalQuery {
    /// Create a query without attribute filters
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    /// Create a query from raw filter input; blank filters are dropped
    pub fn filtered(
        user_id: Uuid,
        gender: Option<String>,
        animal_type: Option<String>,
        name: Option<String>,
    ) -> Self {
        let clean = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            user_id,
            gender: clean(gender),
            animal_type: clean(animal_type),
            name: clean(name),
        }
    }

    /// Reference semantics of the query, for adapters that filter in memory
    pub fn matches(&self, animal: &Animal) -> bool {
        if !animal.available || animal.is_owned_by(self.user_id) {
            return false;
        }

        // Unicode lowercasing, like LOWER() in the database
        let exact = |filter: &Option<String>, value: &str| {
            filter
                .as_deref()
                .map_or(true, |wanted| wanted.to_lowercase() == value.to_lowercase())
        };

        let name_ok = self.name.as_deref().map_or(true, |wanted| {
            animal.name.to_lowercase().contains(&wanted.to_lowercase())
        });

        exact(&self.gender, &animal.gender)
            && exact(&self.animal_type, &animal.animal_type)
            && name_ok
    }
}

#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// List animals that are available for adoption and not owned by `query.user_id`,
    /// each with its images in insertion order
    async fn find_all_available_not_from_user(&self, query: &AnimalQuery)
        -> RepoResult<Vec<Animal>>;
}

// ============================================================================
// Chat Message Repository
// ============================================================================

/// Conversation lookup between two users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationQuery {
    pub user_id: Uuid,
    pub other_user_id: Uuid,
    pub limit: i64,
}

#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    /// Persist a new message and return the stored row
    ///
    /// Returns `DomainError::UserNotFound` when the receiver does not exist.
    async fn create(&self, message: &ChatMessage) -> RepoResult<ChatMessage>;

    /// Latest `limit` messages exchanged between two users, oldest first
    async fn find_conversation(&self, query: &ConversationQuery) -> RepoResult<Vec<ChatMessage>>;
}
