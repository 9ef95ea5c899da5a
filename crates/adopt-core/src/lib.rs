//! # adopt-core
//!
//! Domain layer containing entities, the service result envelope, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod outcome;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{normalize_email, Animal, AnimalImage, ChatMessage, User, MAX_CONTENT_LENGTH};
pub use error::DomainError;
pub use outcome::{DomainFailure, Either, Outcome};
pub use traits::{
    AnimalQuery, AnimalRepository, ChatMessageRepository, ConversationQuery, RepoResult,
    UserRepository,
};
