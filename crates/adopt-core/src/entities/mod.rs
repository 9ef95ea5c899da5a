//! Domain entities - core business objects

mod animal;
mod chat_message;
mod user;

pub use animal::{Animal, AnimalImage};
pub use chat_message::{ChatMessage, MAX_CONTENT_LENGTH};
pub use user::{normalize_email, User};
