//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use build2rise::api::ApiClient;
use build2rise::config::Config;
use build2rise::containers::Containers;
use build2rise::models::UserType;
use build2rise::session::{SecureString, Session, SessionStore};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

use mock_backend::MockBackend;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_seconds = Some(5);
    config
}

pub fn signed_in(user_type: UserType) -> Session {
    Session {
        auth_token: Some(SecureString::new("test-token")),
        user_id: Some("me".to_string()),
        user_type: Some(user_type),
    }
}

/// Containers wired to a mock backend over an in-memory session.
pub struct TestApp {
    pub backend: MockBackend,
    pub session: SessionStore,
    pub api: ApiClient,
    pub app: Containers,
}

impl TestApp {
    pub async fn start(session: Session) -> Self {
        Self::start_with(session, |_| {}).await
    }

    pub async fn signed_out() -> Self {
        Self::start(Session::default()).await
    }

    pub async fn start_with(session: Session, tweak: impl FnOnce(&mut Config)) -> Self {
        let backend = MockBackend::start().await;
        let mut config = config_for(&backend.base_url());
        tweak(&mut config);
        let session = SessionStore::with_session(session);
        let api = ApiClient::new(&config, session.clone()).expect("client");
        let app = Containers::new(api.clone(), &config);
        Self {
            backend,
            session,
            api,
            app,
        }
    }
}

pub fn post_json(id: &str, text: &str, liked: bool, likes: u64) -> String {
    format!(
        r#"{{"id":"{id}","author":{{"id":"me","name":"Me"}},"postDescription":"{text}","likesCount":{likes},"commentsCount":0,"sharesCount":0,"likedByCurrentUser":{liked}}}"#
    )
}
