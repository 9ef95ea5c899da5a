//! Route handlers
//!
//! Each handler runs one service and renders its outcome.

pub mod animals;
pub mod auth;
pub mod chat;
pub mod health;
pub mod users;
