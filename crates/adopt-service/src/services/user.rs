//! User service
//!
//! Handles account registration.

use adopt_core::entities::User;
use adopt_core::{normalize_email, DomainError, DomainFailure, Either, Outcome};
use tracing::{info, instrument, warn};

use crate::dto::{RegisterUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::validation::validate_input;

const EMAIL_TAKEN: &str = "Email already registered";

/// Registration service
pub struct RegisterUserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegisterUserService<'a> {
    /// Create a new RegisterUserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account; name and email are normalized before validation
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> ServiceResult<Outcome<UserResponse>> {
        let request = RegisterUserRequest {
            name: request.name.trim().to_string(),
            email: normalize_email(&request.email),
            ..request
        };
        if let Err(failure) = validate_input(&request) {
            return Ok(Either::failure(failure));
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            warn!("Registration with an existing email");
            return Ok(Either::failure(DomainFailure::new(EMAIL_TAKEN)));
        }

        let password_hash = self.ctx.password_service().hash(request.password).await?;
        let user = User::new(request.name, request.email);

        match self.ctx.user_repo().create(&user, &password_hash).await {
            Ok(()) => {}
            // Lost a race with a concurrent registration
            Err(DomainError::EmailAlreadyExists) => {
                return Ok(Either::failure(DomainFailure::new(EMAIL_TAKEN)));
            }
            Err(e) => return Err(e.into()),
        }

        info!(user_id = %user.id, "User registered");

        Ok(Either::success(UserResponse::from(user)))
    }
}
