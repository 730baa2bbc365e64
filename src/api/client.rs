use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::{ApiError, OnFailure};
use crate::config::Config;
use crate::session::SessionStore;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Typed client for the Build2Rise REST API.
///
/// Cheap to clone; clones share the connection pool and the session store.
/// Authenticated calls read the bearer token from the session store at
/// request time and fail with [`ApiError::AuthenticationMissing`] before
/// touching the network when there is none.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionStore,
    max_upload_bytes: u64,
}

impl ApiClient {
    pub fn new(config: &Config, session: SessionStore) -> Result<Self, ApiError> {
        let mut base = config.api.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| ApiError::Configuration(format!("base URL '{}': {}", base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Configuration(format!(
                "base URL '{}' cannot carry paths",
                base
            )));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.api.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(u64::from(secs)));
        }
        if let Some(secs) = config.api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(u64::from(secs)));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            session,
            max_upload_bytes: config.uploads.max_upload_bytes,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Configuration("base URL cannot carry paths".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Request that needs no token (register, login, health).
    pub(crate) fn public(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.request(method, self.endpoint(segments)?))
    }

    /// Request carrying `Authorization: Bearer <token>`.
    pub(crate) fn authorized(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ApiError> {
        let token = self
            .session
            .auth_token()
            .ok_or(ApiError::AuthenticationMissing)?;
        Ok(self
            .public(method, segments)?
            .header(AUTHORIZATION, format!("Bearer {}", token.expose())))
    }

    /// Send and return the raw body of a 2xx response.
    pub(crate) async fn execute(
        &self,
        builder: RequestBuilder,
        on_failure: OnFailure,
    ) -> Result<Vec<u8>, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        let request = builder
            .header(REQUEST_ID_HEADER, &request_id)
            .build()
            .map_err(|e| ApiError::network(&e))?;

        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(%method, %path, %request_id, "Sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!(%method, %path, %request_id, error = %e, "Transport failure");
            ApiError::network(&e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ApiError::network(&e))?;

        if !status.is_success() {
            tracing::warn!(
                %method,
                %path,
                %request_id,
                status = status.as_u16(),
                "Request rejected"
            );
            return Err(on_failure.into_error(status.as_u16(), &body));
        }

        tracing::debug!(%method, %path, %request_id, status = status.as_u16(), "Request completed");
        Ok(body.to_vec())
    }

    /// Send and decode a JSON body.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        on_failure: OnFailure,
    ) -> Result<T, ApiError> {
        let body = self.execute(builder, on_failure).await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SecureString, Session};

    fn client(base: &str, session: SessionStore) -> ApiClient {
        let mut config = Config::default();
        config.api.base_url = base.to_string();
        ApiClient::new(&config, session).unwrap()
    }

    #[test]
    fn endpoint_joins_and_encodes_segments() {
        let api = client("http://localhost:8080/api", SessionStore::in_memory());
        let url = api.endpoint(&["posts", "a b/c", "comments"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/posts/a%20b%2Fc/comments");
    }

    #[test]
    fn endpoint_with_trailing_slash_base() {
        let api = client("http://localhost:8080/api/", SessionStore::in_memory());
        let url = api.endpoint(&["auth", "login"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/auth/login");
    }

    #[test]
    fn authorized_without_token_fails_fast() {
        let api = client("http://localhost:8080/", SessionStore::in_memory());
        let err = api.authorized(Method::GET, &["posts"]).unwrap_err();
        assert!(matches!(err, ApiError::AuthenticationMissing));
    }

    #[test]
    fn authorized_attaches_bearer_header() {
        let session = SessionStore::with_session(Session {
            auth_token: Some(SecureString::new("tok-9")),
            ..Session::default()
        });
        let api = client("http://localhost:8080/", session);
        let request = api
            .authorized(Method::GET, &["posts"])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer tok-9"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let mut config = Config::default();
        config.api.base_url = "mailto:someone@example.com".to_string();
        assert!(matches!(
            ApiClient::new(&config, SessionStore::in_memory()),
            Err(ApiError::Configuration(_))
        ));
    }
}
