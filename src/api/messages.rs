use reqwest::Method;

use super::client::ApiClient;
use super::error::{ApiError, OnFailure};
use crate::models::{ConversationSummary, Message, SendMessageRequest};

impl ApiClient {
    /// `POST messages/send`.
    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<Message, ApiError> {
        let builder = self
            .authorized(Method::POST, &["messages", "send"])?
            .json(request);
        self.execute_json(builder, OnFailure::Fixed("Failed to send message"))
            .await
    }

    /// `GET messages/conversations`.
    pub async fn conversations(&self) -> Result<Vec<ConversationSummary>, ApiError> {
        let builder = self.authorized(Method::GET, &["messages", "conversations"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load conversations"))
            .await
    }

    /// `GET messages/conversation/{id}`: the thread with one peer.
    pub async fn conversation(&self, peer_id: &str) -> Result<Vec<Message>, ApiError> {
        let builder = self.authorized(Method::GET, &["messages", "conversation", peer_id])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load messages"))
            .await
    }
}
