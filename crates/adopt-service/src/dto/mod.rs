//! Data transfer objects for API requests and responses
//!
//! JSON field names are camelCase for the web client.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateChatMessageRequest, LoginRequest, RegisterUserRequest};
pub use responses::{
    AnimalResponse, AvailableAnimals, ChatMessageResponse, ChatMessages, LoginResponse,
    UserResponse,
};
