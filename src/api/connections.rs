use reqwest::Method;

use super::client::ApiClient;
use super::error::{ApiError, OnFailure};
use crate::models::{Connection, ConnectionRequest, ConnectionStatus, ConnectionUpdate};

impl ApiClient {
    /// `POST connections/request`.
    pub async fn request_connection(&self, receiver_id: &str) -> Result<Connection, ApiError> {
        let body = ConnectionRequest {
            receiver_id: receiver_id.to_string(),
        };
        let builder = self
            .authorized(Method::POST, &["connections", "request"])?
            .json(&body);
        self.execute_json(builder, OnFailure::Fixed("Failed to send connection request"))
            .await
    }

    /// `GET connections?status=`.
    pub async fn connections(&self, status: ConnectionStatus) -> Result<Vec<Connection>, ApiError> {
        let builder = self
            .authorized(Method::GET, &["connections"])?
            .query(&[("status", status.as_str())]);
        self.execute_json(builder, OnFailure::Fixed("Failed to load connections"))
            .await
    }

    /// `PUT connections/{id}`: accept or reject a pending request.
    pub async fn update_connection(
        &self,
        connection_id: &str,
        status: ConnectionStatus,
    ) -> Result<Connection, ApiError> {
        let builder = self
            .authorized(Method::PUT, &["connections", connection_id])?
            .json(&ConnectionUpdate { status });
        self.execute_json(builder, OnFailure::Fixed("Failed to update connection"))
            .await
    }
}
