//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and exposes a single `execute`.

pub mod animal;
pub mod animal_images;
pub mod auth;
pub mod chat;
pub mod context;
pub mod error;
pub mod user;
mod validation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use animal::{GetAvailableAnimalsParams, GetAvailableAnimalsService};
pub use animal_images::format_animal_images;
pub use auth::AuthenticateUserService;
pub use chat::{
    CreateUserChatMessageParams, CreateUserChatMessageService, GetUserChatMessagesParams,
    GetUserChatMessagesService,
};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user::RegisterUserService;
