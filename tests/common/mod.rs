#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use http_body_util::BodyExt;
use rand::Rng;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use forkful::auth::{NewUser, User};
use forkful::config::{AppConfig, JwtConfig};
use forkful::recipes::{NewRecipe, RecipeDraft};
use forkful::{app, state::AppState};

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: String::new(), // pool is injected, never dialed from here
        jwt: JwtConfig {
            secret: "test-secret".into(),
            issuer: "test-issuer".into(),
            audience: "test-aud".into(),
            ttl_minutes: 5,
            refresh_ttl_minutes: 60,
        },
    }
}

/// Router wired to a `#[sqlx::test]` pool.
pub fn build_app(db: PgPool) -> Router {
    app::build_app(AppState::from_parts(db, Arc::new(test_config())))
}

/// Insert a user the model way: draft, hashing mutator, commit.
pub async fn seed_user(db: &PgPool, username: &str) -> User {
    let mut draft = NewUser::new(username);
    draft.set_password("securepassword").expect("hash password");
    User::insert(db, &draft).await.expect("insert user")
}

/// A generated recipe draft for `user_id`, in the style of the seeded data
/// the index endpoint is exercised with.
pub fn fake_recipe(user_id: Uuid) -> NewRecipe {
    let title: String = Sentence(1..5).fake();
    let instructions: String = Paragraph(8..9).fake();
    let minutes = rand::thread_rng().gen_range(15..=90);
    RecipeDraft::default()
        .title(title)
        .instructions(instructions)
        .minutes_to_complete(minutes)
        .user_id(user_id)
        .build()
        .expect("generated draft has a title")
}

/// The database-side error category buried in a repo error, if any.
pub fn constraint_kind(err: &anyhow::Error) -> Option<sqlx::error::ErrorKind> {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|db| db.kind())
}

pub async fn body_json(res: Response<Body>) -> serde_json::Value {
    let bytes = res.into_body().collect().await.expect("read body").to_bytes();
    serde_json::from_slice(&bytes).expect("body is json")
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("encode body")))
        .expect("build request")
}

pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("build request")
}

/// Register over HTTP and hand back (user id, access token).
pub async fn register_user(app: &Router, username: &str) -> (Uuid, String) {
    let bio: String = Paragraph(3..4).fake();
    let body = serde_json::json!({
        "username": username,
        "password": "securepassword",
        "image_url": format!("https://example.com/{username}.jpg"),
        "bio": bio,
    });
    let res = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/auth/register", &body))
        .await
        .expect("register request");
    assert!(res.status().is_success(), "register failed: {}", res.status());

    let json = body_json(res).await;
    let id = json["user"]["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("user id in response");
    let token = json["access_token"].as_str().expect("access token").to_string();
    (id, token)
}
