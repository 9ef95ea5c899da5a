//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// User Responses
// ============================================================================

/// Public view of a user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Successful login: a session token and the user it belongs to
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

// ============================================================================
// Animal Responses
// ============================================================================

/// Animal with its images as standard Base64 strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub animal_type: String,
    pub gender: String,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub images: Vec<String>,
}

/// Success payload of the available-animals listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableAnimals {
    pub animals: Vec<AnimalResponse>,
}

// ============================================================================
// Chat Responses
// ============================================================================

/// A persisted chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Success payload of a conversation lookup, oldest message first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessages {
    pub messages: Vec<ChatMessageResponse>,
}
