use tokio::sync::watch;

use crate::api::{ApiClient, ApiError};
use crate::lifecycle::{Lifecycle, TriggerOutcome};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::session::{SecureString, Session, SessionError, SessionStore};

/// Sign-up, sign-in and sign-out.
#[derive(Clone)]
pub struct AuthContainer {
    api: ApiClient,
    auth: Lifecycle<AuthResponse>,
    health: Lifecycle<String>,
}

impl AuthContainer {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            auth: Lifecycle::new("auth"),
            health: Lifecycle::new("health"),
        }
    }

    pub fn state(&self) -> &Lifecycle<AuthResponse> {
        &self.auth
    }

    pub fn health(&self) -> &Lifecycle<String> {
        &self.health
    }

    pub fn session(&self) -> &SessionStore {
        self.api.session()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_logged_in()
    }

    /// Session changes, starting with the current one.
    pub fn watch_session(&self) -> watch::Receiver<Session> {
        self.session().subscribe()
    }

    /// Register and, on success, persist the issued session.
    pub async fn register(&self, request: RegisterRequest) -> TriggerOutcome {
        let api = &self.api;
        self.auth
            .trigger(async move {
                let response = api.register(&request).await?;
                api.session().save(session_for(&response)).await?;
                Ok::<_, ApiError>(response)
            })
            .await
    }

    /// Sign in and, on success, persist the issued session.
    pub async fn login(&self, email: &str, password: &str) -> TriggerOutcome {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: SecureString::new(password),
        };
        let api = &self.api;
        self.auth
            .trigger(async move {
                let response = api.login(&request).await?;
                api.session().save(session_for(&response)).await?;
                Ok::<_, ApiError>(response)
            })
            .await
    }

    /// Clear token, user id and user type, and return to Idle.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.session().clear().await?;
        self.auth.reset();
        Ok(())
    }

    pub async fn check_health(&self) -> TriggerOutcome {
        let api = &self.api;
        self.health.trigger(api.health()).await
    }
}

fn session_for(response: &AuthResponse) -> Session {
    Session {
        auth_token: Some(response.token.clone()),
        user_id: Some(response.user_id.clone()),
        user_type: Some(response.user_type),
    }
}
