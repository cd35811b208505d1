//! Integration tests for the HTTP auth adapter.
//!
//! These tests run `HttpAuthApi` against a local mock backend and verify:
//! 1. Every call POSTs, and request bodies, bearer headers, and request
//!    ids reach the wire as the backend expects them
//! 2. Rejection bodies are mined for their `message` field
//! 3. The 401 recovery dance: one refresh, one retry, and the original
//!    rejection when the refresh fails
//! 4. The refresh call rides on the cookie set at login

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orgboard_session::adapters::auth::{HttpApiConfig, HttpAuthApi};
use orgboard_session::adapters::storage::InMemoryTokenStore;
use orgboard_session::domain::{ApiError, LoginCredentials, NewOrganization, OrgId, Registration, Role};
use orgboard_session::ports::AuthApi;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn api_for(server: &MockServer) -> HttpAuthApi {
    HttpAuthApi::new(HttpApiConfig::new(server.uri()))
}

fn credentials() -> LoginCredentials {
    LoginCredentials::new("user@example.com", "hunter2", OrgId::from(1))
}

// =============================================================================
// Anonymous Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_login_posts_credentials_and_parses_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header_exists("x-request-id"))
        .and(body_json(json!({
            "email": "user@example.com",
            "password": "hunter2",
            "org_id": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "token-abc",
            "role": "manager"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let issued = api_for(&server).login(&credentials()).await.unwrap();

    assert_eq!(issued.access_token, "token-abc");
    assert_eq!(issued.role, Some(Role::Manager));
}

#[tokio::test]
async fn test_login_rejection_carries_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let error = api_for(&server).login(&credentials()).await.unwrap_err();

    assert!(error.is_auth_rejection());
    match error {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message.as_deref(), Some("Invalid credentials"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_rejection_is_never_refreshed() {
    // Credential failures on anonymous endpoints must propagate verbatim;
    // the refresh endpoint must not be touched.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "nope"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "x"})))
        .expect(0)
        .mount(&server)
        .await;

    let error = api_for(&server).login(&credentials()).await.unwrap_err();

    assert!(error.is_auth_rejection());
}

#[tokio::test]
async fn test_rejection_without_body_keeps_status_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = api_for(&server).login(&credentials()).await.unwrap_err();

    match error {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, None);
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let error = api_for(&server).login(&credentials()).await.unwrap_err();

    assert!(matches!(error, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on the discard port.
    let api = HttpAuthApi::new(HttpApiConfig::new("http://127.0.0.1:9"));

    let error = api.login(&credentials()).await.unwrap_err();

    assert!(matches!(error, ApiError::Network(_)));
}

#[tokio::test]
async fn test_register_posts_role_and_parses_acknowledgement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter2",
            "org_id": 1,
            "role": "employee"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "u-7",
            "message": "User registered"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registration = Registration::new("Ada", "ada@example.com", "hunter2", OrgId::from(1));
    let registered = api_for(&server).register(&registration).await.unwrap();

    assert_eq!(registered.message.as_deref(), Some("User registered"));
    assert_eq!(registered.id.as_ref().map(|id| id.as_str()), Some("u-7"));
}

#[tokio::test]
async fn test_create_organization_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/org/create"))
        .and(body_json(json!({
            "orgName": "Acme",
            "adminName": "Ada",
            "email": "ada@acme.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "org_id": 7,
            "org_name": "Acme",
            "message": "Organization created"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let organization = NewOrganization::new("Acme", "Ada", "ada@acme.com", "hunter2");
    let created = api_for(&server)
        .create_organization(&organization)
        .await
        .unwrap();

    assert_eq!(created.org_id, Some(OrgId::from(7)));
    assert_eq!(created.org_name.as_deref(), Some("Acme"));
}

// =============================================================================
// Bearer Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_profile_fetch_posts_empty_body_with_bearer() {
    // The profile read goes through POST like every other endpoint, with
    // an empty JSON object for a body.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/me"))
        .and(body_json(json!({})))
        .and(header("authorization", "Bearer token-1"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u-1",
            "name": "Ada",
            "role": "admin",
            "org_id": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profile = api_for(&server).fetch_profile("token-1").await.unwrap();

    assert_eq!(profile.id.as_str(), "u-1");
    assert_eq!(profile.name.as_deref(), Some("Ada"));
    assert_eq!(profile.role, Some(Role::Admin));
}

#[tokio::test]
async fn test_expired_bearer_refreshes_and_retries_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/me"))
        .and(header("authorization", "Bearer stale-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"accessToken": "fresh-token"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    // The retry carries the same empty body as the first attempt.
    Mock::given(method("POST"))
        .and(path("/api/users/me"))
        .and(body_json(json!({})))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let api = api_for(&server).with_token_store(store.clone());

    let profile = api.fetch_profile("stale-token").await.unwrap();

    assert_eq!(profile.id.as_str(), "u-1");
    // The refreshed token is persisted so the next start can use it.
    assert_eq!(store.stored(), Some("fresh-token".to_string()));
}

#[tokio::test]
async fn test_failed_refresh_surfaces_original_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "refresh cookie missing"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = api_for(&server)
        .fetch_profile("stale-token")
        .await
        .unwrap_err();

    // The original profile rejection, not the refresh endpoint's.
    match error {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message.as_deref(), Some("jwt expired"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_second_rejection_after_refresh_propagates() {
    // The retry runs once; a 401 on the fresh token is surfaced, not
    // re-refreshed.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"accessToken": "fresh-token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = api_for(&server)
        .fetch_profile("stale-token")
        .await
        .unwrap_err();

    assert!(error.is_auth_rejection());
}

#[tokio::test]
async fn test_refresh_rides_on_cookie_set_at_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"accessToken": "stale-token"}))
                .insert_header("set-cookie", "refresh=r-1; Path=/; HttpOnly"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/me"))
        .and(header("authorization", "Bearer stale-token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(header("cookie", "refresh=r-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"accessToken": "fresh-token"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/me"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.login(&credentials()).await.unwrap();
    let profile = api.fetch_profile("stale-token").await.unwrap();

    assert_eq!(profile.id.as_str(), "u-1");
}

#[tokio::test]
async fn test_logout_with_bearer_propagates_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("authorization", "Bearer token-1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "session close failed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = api_for(&server).logout(Some("token-1")).await.unwrap_err();

    match error {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message.as_deref(), Some("session close failed"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_logout_without_session_posts_anonymously() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server).logout(None).await.unwrap();
}
