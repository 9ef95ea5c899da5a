//! Test doubles for the repository ports

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use adopt_common::Authenticator;
use adopt_core::entities::{Animal, ChatMessage, User};
use adopt_core::traits::{
    AnimalQuery, AnimalRepository, ChatMessageRepository, ConversationQuery, RepoResult,
    UserRepository,
};

use super::context::ServiceContext;

pub const TEST_SECRET: &str = "test-secret-key-that-is-long-enough";

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;
        async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;
        async fn email_exists(&self, email: &str) -> RepoResult<bool>;
        async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;
        async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
    }
}

mock! {
    pub AnimalRepo {}

    #[async_trait]
    impl AnimalRepository for AnimalRepo {
        async fn find_all_available_not_from_user(
            &self,
            query: &AnimalQuery,
        ) -> RepoResult<Vec<Animal>>;
    }
}

mock! {
    pub ChatRepo {}

    #[async_trait]
    impl ChatMessageRepository for ChatRepo {
        async fn create(&self, message: &ChatMessage) -> RepoResult<ChatMessage>;
        async fn find_conversation(
            &self,
            query: &ConversationQuery,
        ) -> RepoResult<Vec<ChatMessage>>;
    }
}

/// Animal store that filters with [`AnimalQuery::matches`]
#[derive(Default)]
pub struct InMemoryAnimalRepository {
    pub animals: Vec<Animal>,
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn find_all_available_not_from_user(
        &self,
        query: &AnimalQuery,
    ) -> RepoResult<Vec<Animal>> {
        Ok(self
            .animals
            .iter()
            .filter(|animal| query.matches(animal))
            .cloned()
            .collect())
    }
}

/// Context whose unused ports are strict mocks without expectations
pub struct TestContext {
    pub users: MockUserRepo,
    pub animals: Option<Arc<dyn AnimalRepository>>,
    pub chat: MockChatRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            users: MockUserRepo::new(),
            animals: None,
            chat: MockChatRepo::new(),
        }
    }

    pub fn build(self) -> ServiceContext {
        ServiceContext::new(
            Arc::new(self.users),
            self.animals
                .unwrap_or_else(|| Arc::new(InMemoryAnimalRepository::default())),
            Arc::new(self.chat),
            Arc::new(Authenticator::new(TEST_SECRET)),
        )
    }
}
