#![allow(dead_code)]

//! Test infrastructure for tn-server API tests

use tn_auth::{
    CredentialVerifier, NoteQuota, PasswordSettings, SessionSubject, TokenCodec, TokenSettings,
};
use tn_core::{Note, Role, Tenant, User};
use tn_db::{NoteRepository, TenantRepository, UserRepository, create_in_memory_pool};
use tn_server::{AppState, build_router};

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";
pub const TEST_PASSWORD: &str = "password";

/// AppState over an in-memory database with cheap Argon2 parameters
pub async fn create_test_app_state() -> AppState {
    let pool = create_in_memory_pool()
        .await
        .expect("Failed to create test database");

    let codec = TokenCodec::new(&TokenSettings::with_secret(TEST_SECRET))
        .expect("Failed to create token codec");
    let credentials = CredentialVerifier::new(PasswordSettings {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Failed to create credential verifier");

    AppState::new(
        pool,
        codec,
        credentials,
        NoteQuota::default(),
        Duration::from_secs(2),
    )
}

pub async fn create_test_tenant(state: &AppState, slug: &str) -> Tenant {
    let tenant = Tenant::new(slug.to_uppercase(), slug.to_string());
    TenantRepository::new(state.pool.clone())
        .create(&tenant)
        .await
        .expect("Failed to create test tenant");
    tenant
}

/// User with password `TEST_PASSWORD`
pub async fn create_test_user(state: &AppState, tenant: &Tenant, email: &str, role: Role) -> User {
    let hash = state
        .credentials
        .hash(TEST_PASSWORD)
        .expect("Failed to hash password");
    let user = User::new(email.to_string(), hash, role, tenant.id);
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

pub async fn create_test_note(state: &AppState, author: &User, title: &str) -> Note {
    let note = Note::new(
        author.tenant_id,
        author.id,
        title.to_string(),
        "content".to_string(),
    );
    NoteRepository::new(state.pool.clone())
        .create(&note)
        .await
        .expect("Failed to create test note");
    note
}

pub fn token_for(state: &AppState, user: &User) -> String {
    state
        .codec
        .issue_default(&SessionSubject {
            subject_id: user.id,
            tenant_id: user.tenant_id,
            role: user.role,
        })
        .expect("Failed to issue token")
}

/// Token for a tenant that has no row in storage
pub fn token_for_missing_tenant(state: &AppState, role: Role) -> String {
    state
        .codec
        .issue_default(&SessionSubject {
            subject_id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            role,
        })
        .expect("Failed to issue token")
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send through a fresh router; empty bodies come back as `Value::Null`
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&body).into_owned(),
        ))
    };
    (status, json)
}
