//! Service context - dependency container for services
//!
//! Holds the repositories and the auth primitives needed by services.

use std::sync::Arc;

use adopt_common::{Authenticator, PasswordService};
use adopt_core::traits::{AnimalRepository, ChatMessageRepository, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are trait objects, so tests can build a context from mocks
/// without a database.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    animal_repo: Arc<dyn AnimalRepository>,
    chat_message_repo: Arc<dyn ChatMessageRepository>,

    // Auth
    authenticator: Arc<Authenticator>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        animal_repo: Arc<dyn AnimalRepository>,
        chat_message_repo: Arc<dyn ChatMessageRepository>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            user_repo,
            animal_repo,
            chat_message_repo,
            authenticator,
            password_service: PasswordService::new(),
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the animal repository
    pub fn animal_repo(&self) -> &dyn AnimalRepository {
        self.animal_repo.as_ref()
    }

    /// Get the chat message repository
    pub fn chat_message_repo(&self) -> &dyn ChatMessageRepository {
        self.chat_message_repo.as_ref()
    }

    // === Auth ===

    /// Get the session token authenticator
    pub fn authenticator(&self) -> &Authenticator {
        self.authenticator.as_ref()
    }

    /// Get the password hasher
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("authenticator", &self.authenticator)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    animal_repo: Option<Arc<dyn AnimalRepository>>,
    chat_message_repo: Option<Arc<dyn ChatMessageRepository>>,
    authenticator: Option<Arc<Authenticator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn animal_repo(mut self, repo: Arc<dyn AnimalRepository>) -> Self {
        self.animal_repo = Some(repo);
        self
    }

    pub fn chat_message_repo(mut self, repo: Arc<dyn ChatMessageRepository>) -> Self {
        self.chat_message_repo = Some(repo);
        self
    }

    pub fn authenticator(mut self, authenticator: Arc<Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` naming the first missing dependency
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::internal(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.animal_repo.ok_or_else(|| missing("animal_repo"))?,
            self.chat_message_repo.ok_or_else(|| missing("chat_message_repo"))?,
            self.authenticator.ok_or_else(|| missing("authenticator"))?,
        ))
    }
}
