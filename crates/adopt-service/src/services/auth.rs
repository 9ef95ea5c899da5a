//! Authentication service
//!
//! Exchanges email and password for a session token.

use adopt_common::SessionPayload;
use adopt_core::{normalize_email, DomainFailure, Either, Outcome};
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login service
pub struct AuthenticateUserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthenticateUserService<'a> {
    /// Create a new AuthenticateUserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify credentials and issue a session token for the user
    ///
    /// Unknown emails and wrong passwords produce the same failure.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn execute(&self, request: LoginRequest) -> ServiceResult<Outcome<LoginResponse>> {
        let email = normalize_email(&request.email);
        if email.is_empty() || request.password.is_empty() {
            return Ok(invalid_credentials());
        }

        let Some(user) = self.ctx.user_repo().find_by_email(&email).await? else {
            warn!("Login failed: unknown email");
            return Ok(invalid_credentials());
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "Login failed: no password hash");
            return Ok(invalid_credentials());
        };

        let is_valid = self
            .ctx
            .password_service()
            .verify(request.password, password_hash)
            .await?;
        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Ok(invalid_credentials());
        }

        let token = self
            .ctx
            .authenticator()
            .generate_token(&SessionPayload::new(user.id))?;

        info!(user_id = %user.id, "User logged in");

        Ok(Either::success(LoginResponse {
            token,
            user: UserResponse::from(user),
        }))
    }
}

fn invalid_credentials() -> Outcome<LoginResponse> {
    Either::failure(DomainFailure::new(INVALID_CREDENTIALS))
}
