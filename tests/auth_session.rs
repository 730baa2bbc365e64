mod common;

use build2rise::api::{ApiClient, ApiError};
use build2rise::containers::AuthContainer;
use build2rise::lifecycle::{LoadState, TriggerOutcome};
use build2rise::models::{RegisterRequest, UserType};
use build2rise::session::{SecureString, Session, SessionStore};
use common::mock_backend::{MockBackend, MockResponse};
use common::{config_for, TestApp};
use tempfile::TempDir;

const AUTH_OK: &str = r#"{"token":"tok-1","userId":"u-42","userType":"INVESTOR","email":"a@b.c"}"#;

#[tokio::test]
async fn test_login_persists_session() {
    let t = TestApp::signed_out().await;
    t.backend.enqueue_json(AUTH_OK).await;

    let outcome = t.app.auth.login(" a@b.c ", "hunter2").await;

    assert_eq!(outcome, TriggerOutcome::Succeeded);
    assert!(t.app.auth.is_logged_in());
    assert_eq!(t.session.auth_token().unwrap().expose(), "tok-1");
    assert_eq!(t.session.user_id().as_deref(), Some("u-42"));
    assert_eq!(t.session.user_type(), Some(UserType::Investor));

    let requests = t.backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/auth/login");
    assert!(requests[0].header("authorization").is_none());
    let body = requests[0].json();
    assert_eq!(body["email"], "a@b.c");
    assert_eq!(body["password"], "hunter2");
}

#[tokio::test]
async fn test_failed_login_keeps_session_empty() {
    let t = TestApp::signed_out().await;
    t.backend
        .enqueue_response(MockResponse::error(401, "bad credentials"))
        .await;

    let outcome = t.app.auth.login("a@b.c", "wrong").await;

    assert_eq!(outcome, TriggerOutcome::Failed);
    assert_eq!(
        t.app.auth.state().state(),
        LoadState::Error("Login failed. Check your email and password.".to_string())
    );
    assert!(!t.app.auth.is_logged_in());
}

#[tokio::test]
async fn test_register_surfaces_server_message() {
    let t = TestApp::signed_out().await;
    t.backend
        .enqueue_response(MockResponse::error(409, "Email already registered"))
        .await;

    let request = RegisterRequest {
        email: "a@b.c".to_string(),
        password: SecureString::new("pw"),
        full_name: "Ada".to_string(),
        user_type: UserType::Founder,
    };
    t.app.auth.register(request).await;

    assert_eq!(
        t.app.auth.state().state().error_message(),
        Some("Email already registered")
    );
    let body = t.backend.captured_requests().await[0].json();
    assert_eq!(body["fullName"], "Ada");
    assert_eq!(body["userType"], "FOUNDER");
}

#[tokio::test]
async fn test_register_signs_in() {
    let t = TestApp::signed_out().await;
    t.backend
        .enqueue_json(r#"{"token":"tok-2","userId":"u-1","userType":"FOUNDER"}"#)
        .await;

    let request = RegisterRequest {
        email: "f@b.c".to_string(),
        password: SecureString::new("pw"),
        full_name: "Fay".to_string(),
        user_type: UserType::Founder,
    };
    assert!(t.app.auth.register(request).await.is_success());
    assert_eq!(t.session.user_type(), Some(UserType::Founder));
    assert_eq!(t.backend.captured_requests().await[0].path, "/api/auth/register");
}

#[tokio::test]
async fn test_logout_makes_authenticated_calls_fail_locally() {
    let t = TestApp::start(common::signed_in(UserType::Founder)).await;

    t.app.auth.logout().await.unwrap();
    assert!(!t.app.auth.is_logged_in());
    assert!(t.app.auth.state().state().is_idle());

    t.app.posts.load_feed().await;
    assert_eq!(
        t.app.posts.feed().state(),
        LoadState::Error("Not authenticated".to_string())
    );
    assert!(t.backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn test_watch_session_sees_login_and_logout() {
    let t = TestApp::signed_out().await;
    let mut rx = t.app.auth.watch_session();
    assert!(!rx.borrow_and_update().is_authenticated());

    t.backend.enqueue_json(AUTH_OK).await;
    t.app.auth.login("a@b.c", "pw").await;
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().user_id.as_deref(), Some("u-42"));

    t.app.auth.logout().await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), Session::default());
}

#[tokio::test]
async fn test_file_session_survives_restart() {
    let backend = MockBackend::start().await;
    backend.enqueue_json(AUTH_OK).await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.toml");
    let config = config_for(&backend.base_url());

    {
        let session = SessionStore::open_file(&path).unwrap();
        let auth = AuthContainer::new(ApiClient::new(&config, session).unwrap());
        assert!(auth.login("a@b.c", "pw").await.is_success());
    }

    let reopened = SessionStore::open_file(&path).unwrap();
    assert!(reopened.is_logged_in());
    assert_eq!(reopened.user_id().as_deref(), Some("u-42"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("tok-1"));
}

#[tokio::test]
async fn test_health_reports_backend_text() {
    let t = TestApp::signed_out().await;
    t.backend.enqueue_response(MockResponse::text("OK")).await;

    t.app.auth.check_health().await;

    assert_eq!(t.app.auth.health().state(), LoadState::Success("OK".to_string()));
    assert_eq!(t.backend.captured_requests().await[0].path, "/api/auth/health");
}

#[tokio::test]
async fn test_health_without_backend_is_network_failure() {
    let config = config_for(&format!("http://127.0.0.1:{}/api/", common::free_port()));
    let api = ApiClient::new(&config, SessionStore::in_memory()).unwrap();

    let err = api.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert!(!err.to_string().is_empty());
}
