use reqwest::Method;

use super::client::ApiClient;
use super::error::{ApiError, OnFailure};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

impl ApiClient {
    /// `POST auth/register`. Rejections surface the server's own message.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let builder = self
            .public(Method::POST, &["auth", "register"])?
            .json(request);
        self.execute_json(builder, OnFailure::ServerBody("Registration failed"))
            .await
    }

    /// `POST auth/login`.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let builder = self.public(Method::POST, &["auth", "login"])?.json(request);
        self.execute_json(builder, OnFailure::Fixed("Login failed. Check your email and password."))
            .await
    }

    /// `GET auth/health`, returned as plain text.
    pub async fn health(&self) -> Result<String, ApiError> {
        let builder = self.public(Method::GET, &["auth", "health"])?;
        let body = self
            .execute(builder, OnFailure::Fixed("Service unavailable"))
            .await?;
        Ok(String::from_utf8_lossy(&body).trim().to_string())
    }
}
