//! HTTP tests for the API router
//!
//! Requests go through the full middleware stack against in-memory
//! repositories, so no database is needed.
//!
//! Run with: cargo test -p adopt-api --test api_tests

mod common;

use std::sync::Arc;

use adopt_core::Animal;
use axum::http::StatusCode;
use common::{BrokenAnimals, TestApp};
use serde_json::json;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/users",
            None,
            &json!({"name": "Ana", "email": " Ana@Example.com ", "password": "hunter2hunter2"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/users",
            None,
            &json!({"name": "Ana", "email": "ana@example.com", "password": "short"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Password must be at least 8 characters"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    let request = json!({"name": "Ana", "email": "ana@example.com", "password": "hunter2hunter2"});

    let (status, _) = app.post("/users", None, &request).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post("/users", None, &request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn test_register_malformed_json() {
    let app = TestApp::new();
    let (status, body) = app.post("/users", None, &json!("not an object")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let register = json!({"name": "Ana", "email": "ana@example.com", "password": "hunter2hunter2"});
    app.post("/users", None, &register).await;

    let (status, body) = app
        .post(
            "/login",
            None,
            &json!({"email": "ANA@example.com", "password": "hunter2hunter2"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "ana@example.com");

    // The issued token authenticates later requests
    let token = body["token"].as_str().unwrap().to_string();
    let (status, _) = app.get("/animals/available", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    let register = json!({"name": "Ana", "email": "ana@example.com", "password": "hunter2hunter2"});
    app.post("/users", None, &register).await;

    for credentials in [
        json!({"email": "ana@example.com", "password": "wrong-password"}),
        json!({"email": "nobody@example.com", "password": "hunter2hunter2"}),
    ] {
        let (status, body) = app.post("/login", None, &credentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid email or password");
    }
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_missing_authorization() {
    let app = TestApp::new();
    let (status, body) = app.get("/animals/available", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_invalid_token() {
    let app = TestApp::new();
    let (status, body) = app.get("/animals/available", Some("not.a.token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_AUTHORIZATION_FORMAT");
}

// ============================================================================
// Animal Tests
// ============================================================================

#[tokio::test]
async fn test_available_animals() {
    let app = TestApp::new();
    let (me, token) = app.seed_user("Ana").await;
    let (owner, _) = app.seed_user("Bea").await;

    let mut rex = Animal::new(owner.id, "Rex".to_string(), "dog".to_string(), "male".to_string());
    rex.add_image(b"hello".to_vec());
    let mine = Animal::new(me.id, "Tom".to_string(), "cat".to_string(), "male".to_string());
    let mut adopted = Animal::new(
        owner.id,
        "Old".to_string(),
        "dog".to_string(),
        "male".to_string(),
    );
    adopted.available = false;
    app.animals
        .animals
        .lock()
        .unwrap()
        .extend([rex.clone(), mine, adopted]);

    let (status, body) = app.get("/animals/available", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let animals = body["animals"].as_array().unwrap();
    assert_eq!(animals.len(), 1);
    assert_eq!(animals[0]["id"], rex.id.to_string());
    assert_eq!(animals[0]["type"], "dog");
    assert_eq!(animals[0]["images"], json!(["aGVsbG8="]));
}

#[tokio::test]
async fn test_available_animals_filters() {
    let app = TestApp::new();
    let (_, token) = app.seed_user("Ana").await;
    let (owner, _) = app.seed_user("Bea").await;

    app.animals.animals.lock().unwrap().extend([
        Animal::new(owner.id, "Mia".to_string(), "cat".to_string(), "female".to_string()),
        Animal::new(owner.id, "Milo".to_string(), "dog".to_string(), "male".to_string()),
        Animal::new(owner.id, "Tom".to_string(), "cat".to_string(), "male".to_string()),
    ]);

    let (status, body) = app
        .get("/animals/available?type=CAT&gender=&name=mi", Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body["animals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mia"]);
}

#[tokio::test]
async fn test_repository_failure_is_generic_500() {
    let app = TestApp::with_animal_repo(Some(Arc::new(BrokenAnimals)));
    let (_, token) = app.seed_user("Ana").await;

    let (status, body) = app.get("/animals/available", Some(&token)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "Internal server error");
    assert!(!body.to_string().contains("10.0.0.7"));
}

// ============================================================================
// Chat Tests
// ============================================================================

#[tokio::test]
async fn test_create_chat_message() {
    let app = TestApp::new();
    let (ana, token) = app.seed_user("Ana").await;
    let (bea, _) = app.seed_user("Bea").await;

    let (status, body) = app
        .post(
            "/chat/messages",
            Some(&token),
            &json!({"receiverId": bea.id, "content": "Is Rex still available?"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["senderId"], ana.id.to_string());
    assert_eq!(body["receiverId"], bea.id.to_string());
    assert_eq!(body["content"], "Is Rex still available?");
}

#[tokio::test]
async fn test_create_chat_message_empty_content() {
    let app = TestApp::new();
    let (_, token) = app.seed_user("Ana").await;
    let (bea, _) = app.seed_user("Bea").await;

    let (status, body) = app
        .post(
            "/chat/messages",
            Some(&token),
            &json!({"receiverId": bea.id, "content": "   "}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Message content must not be empty"));
}

#[tokio::test]
async fn test_create_chat_message_unknown_receiver() {
    let app = TestApp::new();
    let (_, token) = app.seed_user("Ana").await;

    let (status, body) = app
        .post(
            "/chat/messages",
            Some(&token),
            &json!({"receiverId": Uuid::new_v4(), "content": "hello?"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "receiverId: Receiver does not exist");
}

#[tokio::test]
async fn test_conversation() {
    let app = TestApp::new();
    let (ana, ana_token) = app.seed_user("Ana").await;
    let (bea, bea_token) = app.seed_user("Bea").await;

    for (token, receiver, content) in [
        (&ana_token, bea.id, "first"),
        (&bea_token, ana.id, "second"),
        (&ana_token, bea.id, "third"),
    ] {
        let (status, _) = app
            .post(
                "/chat/messages",
                Some(token),
                &json!({"receiverId": receiver, "content": content}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app
        .get(&format!("/chat/{}/messages?limit=2", ana.id), Some(&bea_token))
        .await;
    assert_eq!(status, StatusCode::OK);

    let contents: Vec<&str> = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["second", "third"]);
}

#[tokio::test]
async fn test_conversation_invalid_user_id() {
    let app = TestApp::new();
    let (_, token) = app.seed_user("Ana").await;

    let (status, body) = app.get("/chat/not-a-uuid/messages", Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "userId: Must be a valid user ID");
}

#[tokio::test]
async fn test_conversation_excludes_other_pairs() {
    let app = TestApp::new();
    let (_, ana_token) = app.seed_user("Ana").await;
    let (bea, _) = app.seed_user("Bea").await;
    let (_, cal_token) = app.seed_user("Cal").await;

    app.post(
        "/chat/messages",
        Some(&cal_token),
        &json!({"receiverId": bea.id, "content": "not for Ana"}),
    )
    .await;

    let (status, body) = app
        .get(&format!("/chat/{}/messages", bea.id), Some(&ana_token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["messages"], json!([]));
}
