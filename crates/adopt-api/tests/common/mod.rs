//! Shared test harness: in-memory repositories and a request helper

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use adopt_api::{create_app, AppState};
use adopt_common::{
    AppConfig, AppSettings, Authenticator, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, SessionPayload,
};
use adopt_core::{
    Animal, AnimalQuery, AnimalRepository, ChatMessage, ChatMessageRepository, ConversationQuery,
    DomainError, RepoResult, User, UserRepository,
};
use adopt_service::ServiceContext;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "api-test-secret";

// ============================================================================
// In-memory repositories
// ============================================================================

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<(User, String)>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|(u, _)| u.email == email).map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        rows.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|(u, _)| u.id == id).map(|(_, h)| h.clone()))
    }
}

#[derive(Default)]
pub struct InMemoryAnimals {
    pub animals: Mutex<Vec<Animal>>,
}

#[async_trait]
impl AnimalRepository for InMemoryAnimals {
    async fn find_all_available_not_from_user(
        &self,
        query: &AnimalQuery,
    ) -> RepoResult<Vec<Animal>> {
        let animals = self.animals.lock().unwrap();
        Ok(animals.iter().filter(|a| query.matches(a)).cloned().collect())
    }
}

/// Chat store that knows which users exist, like the foreign key does
pub struct InMemoryChat {
    users: Arc<InMemoryUsers>,
    messages: Mutex<Vec<ChatMessage>>,
}

#[async_trait]
impl ChatMessageRepository for InMemoryChat {
    async fn create(&self, message: &ChatMessage) -> RepoResult<ChatMessage> {
        if self.users.find_by_id(message.receiver_id).await?.is_none() {
            return Err(DomainError::UserNotFound(message.receiver_id));
        }
        self.messages.lock().unwrap().push(message.clone());
        Ok(message.clone())
    }

    async fn find_conversation(&self, query: &ConversationQuery) -> RepoResult<Vec<ChatMessage>> {
        let messages = self.messages.lock().unwrap();
        let mut found: Vec<ChatMessage> = messages
            .iter()
            .filter(|m| m.is_between(query.user_id, query.other_user_id))
            .cloned()
            .collect();
        let skip = found.len().saturating_sub(usize::try_from(query.limit).unwrap_or(0));
        Ok(found.split_off(skip))
    }
}

/// Animal store whose every call fails like a lost connection
pub struct BrokenAnimals;

#[async_trait]
impl AnimalRepository for BrokenAnimals {
    async fn find_all_available_not_from_user(&self, _: &AnimalQuery) -> RepoResult<Vec<Animal>> {
        Err(DomainError::DatabaseError(
            "connection to 10.0.0.7:5432 refused".to_string(),
        ))
    }
}

// ============================================================================
// Application under test
// ============================================================================

pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "pet-adoption-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
        },
        jwt: JwtConfig::from_secret(Some(TEST_SECRET.to_string())),
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUsers>,
    pub animals: Arc<InMemoryAnimals>,
    authenticator: Authenticator,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_animal_repo(None)
    }

    /// Replace the animal store, e.g. with [`BrokenAnimals`]
    pub fn with_animal_repo(animal_repo: Option<Arc<dyn AnimalRepository>>) -> Self {
        let users = Arc::new(InMemoryUsers::default());
        let animals = Arc::new(InMemoryAnimals::default());
        let chat = Arc::new(InMemoryChat {
            users: users.clone(),
            messages: Mutex::new(Vec::new()),
        });

        let animal_repo: Arc<dyn AnimalRepository> = match animal_repo {
            Some(repo) => repo,
            None => animals.clone(),
        };

        let context = ServiceContext::new(
            users.clone(),
            animal_repo,
            chat,
            Arc::new(Authenticator::new(TEST_SECRET)),
        );

        Self {
            router: create_app(AppState::new(context, test_config())),
            users,
            animals,
            authenticator: Authenticator::new(TEST_SECRET),
        }
    }

    /// Insert a user directly and return it with a valid token
    pub async fn seed_user(&self, name: &str) -> (User, String) {
        let user = User::new(name.to_string(), format!("{}@example.com", name.to_lowercase()));
        self.users.create(&user, "not-a-real-hash").await.unwrap();
        let token = self
            .authenticator
            .generate_token(&SessionPayload::new(user.id))
            .unwrap();
        (user, token)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::get(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: &Value) -> (StatusCode, Value) {
        let mut request = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}
