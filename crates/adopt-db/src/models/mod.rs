//! Database models
//!
//! Row structs mapping 1:1 to the tables created by the migrations.

mod animal;
mod chat_message;
mod user;

pub use animal::{AnimalImageModel, AnimalModel};
pub use chat_message::ChatMessageModel;
pub use user::UserModel;
