use crate::tests::{gate_with, in_memory_plans, subject};
use crate::{Authenticated, AuthorizationGate};

use tn_core::{Plan, Role};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn counting_router(gate: Arc<AuthorizationGate>, calls: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/protected",
            get(move |Authenticated(ctx): Authenticated| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    ctx.subject_id().to_string()
                }
            }),
        )
        .with_state(gate)
}

fn request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/protected");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn given_garbage_bearer_when_requesting_then_401_and_handler_not_invoked() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = counting_router(Arc::new(gate_with(in_memory_plans())), calls.clone());

    let response = app.oneshot(request(Some("Bearer garbage"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIAL");
}

#[tokio::test]
async fn given_missing_header_when_requesting_then_401_missing_credential() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = counting_router(Arc::new(gate_with(in_memory_plans())), calls.clone());

    let response = app.oneshot(request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "MISSING_CREDENTIAL");
}

#[tokio::test]
async fn given_valid_token_when_requesting_then_handler_runs_once_with_identity() {
    let calls = Arc::new(AtomicUsize::new(0));
    let plans = in_memory_plans();
    let gate = Arc::new(gate_with(plans.clone()));
    let subject = subject(Role::Member);
    plans.set_plan(subject.tenant_id, Plan::Free).await;
    let token = gate.codec().issue_default(&subject).unwrap();
    let app = counting_router(gate, calls.clone());

    let response = app
        .oneshot(request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body.as_ref(), subject.subject_id.to_string().as_bytes());
}
