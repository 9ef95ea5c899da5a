//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{animals, auth, chat, health, users};
use crate::state::AppState;

/// Create the API router with all routes except health
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .merge(animal_routes())
        .merge(chat_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Registration and login
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::register))
        .route("/login", post(auth::login))
}

/// Animal routes
fn animal_routes() -> Router<AppState> {
    Router::new().route("/animals/available", get(animals::get_available))
}

/// Chat routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/messages", post(chat::create_message))
        .route("/chat/:user_id/messages", get(chat::get_messages))
}
