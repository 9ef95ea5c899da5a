//! Request DTOs for API endpoints
//!
//! Missing fields deserialize to empty strings so that the services, not the
//! JSON extractor, report them as domain failures.

use serde::Deserialize;
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// ============================================================================
// User Requests
// ============================================================================

/// User registration request
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterUserRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl std::fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Login request
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

// ============================================================================
// Chat Requests
// ============================================================================

/// Direct message request; the sender is the authenticated user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateChatMessageRequest {
    #[validate(custom(function = "uuid_string"))]
    pub receiver_id: String,

    #[validate(
        custom(function = "message_content"),
        length(max = 2000, message = "Message content must be at most 2000 characters")
    )]
    pub content: String,
}

// ============================================================================
// Field validators
// ============================================================================

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("blank", "Must not be empty"));
    }
    Ok(())
}

fn message_content(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("blank", "Message content must not be empty"));
    }
    Ok(())
}

fn uuid_string(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(failure("blank", "Receiver is required"));
    }
    if Uuid::parse_str(value).is_err() {
        return Err(failure("uuid", "Receiver must be a valid user ID"));
    }
    Ok(())
}
