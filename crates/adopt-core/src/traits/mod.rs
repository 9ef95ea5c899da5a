//! Ports implemented by infrastructure adapters

mod repositories;

pub use repositories::{
    AnimalQuery, AnimalRepository, ChatMessageRepository, ConversationQuery, RepoResult,
    UserRepository,
};
