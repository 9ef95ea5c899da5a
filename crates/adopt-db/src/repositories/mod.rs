//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in adopt-core.

mod animal;
mod chat_message;
mod error;
mod user;

pub use animal::PgAnimalRepository;
pub use chat_message::PgChatMessageRepository;
pub use user::PgUserRepository;
