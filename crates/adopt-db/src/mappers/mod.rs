//! Entity <-> Model mappers
//!
//! Conversions between database rows and domain entities.

mod animal;
mod chat_message;
mod user;

pub use animal::attach_images;
