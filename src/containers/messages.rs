use crate::api::{ApiClient, ApiError};
use crate::lifecycle::{Lifecycle, TriggerOutcome, TriggerPolicy};
use crate::models::{ConversationSummary, Message, SendMessageRequest, UserSummary};

/// Inbox, one conversation thread, sending, and recipient search.
#[derive(Clone)]
pub struct MessagesContainer {
    api: ApiClient,
    conversations: Lifecycle<Vec<ConversationSummary>>,
    thread: Lifecycle<Vec<Message>>,
    send: Lifecycle<Message>,
    share_targets: Lifecycle<Vec<UserSummary>>,
}

impl MessagesContainer {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            conversations: Lifecycle::new("messages.conversations"),
            thread: Lifecycle::new("messages.thread"),
            send: Lifecycle::new("messages.send"),
            // Keyed by the query: the latest keystroke wins.
            share_targets: Lifecycle::with_policy(
                "messages.share_targets",
                TriggerPolicy::Supersede,
            ),
        }
    }

    pub fn conversations(&self) -> &Lifecycle<Vec<ConversationSummary>> {
        &self.conversations
    }

    pub fn thread(&self) -> &Lifecycle<Vec<Message>> {
        &self.thread
    }

    pub fn send(&self) -> &Lifecycle<Message> {
        &self.send
    }

    pub fn share_targets(&self) -> &Lifecycle<Vec<UserSummary>> {
        &self.share_targets
    }

    pub async fn load_conversations(&self) -> TriggerOutcome {
        self.conversations.trigger(self.api.conversations()).await
    }

    pub async fn load_thread(&self, peer_id: &str) -> TriggerOutcome {
        self.thread.trigger(self.api.conversation(peer_id)).await
    }

    /// Send `content` to `peer_id`, optionally sharing a post, then refresh
    /// the thread and the inbox.
    ///
    /// Empty content is allowed only when a post is being shared.
    pub async fn send_message(
        &self,
        peer_id: &str,
        content: &str,
        shared_post_id: Option<&str>,
    ) -> TriggerOutcome {
        let request = SendMessageRequest {
            receiver_id: peer_id.to_string(),
            content: content.trim().to_string(),
            shared_post_id: shared_post_id.map(str::to_string),
        };
        let api = &self.api;
        let outcome = self
            .send
            .trigger(async move {
                if request.content.is_empty() && request.shared_post_id.is_none() {
                    return Err(ApiError::InvalidInput(
                        "Message cannot be empty".to_string(),
                    ));
                }
                api.send_message(&request).await
            })
            .await;
        if outcome.is_success() {
            self.thread.refresh(self.api.conversation(peer_id)).await;
            self.conversations.refresh(self.api.conversations()).await;
        }
        outcome
    }

    /// Search users to message or share with. A blank query clears the results.
    pub async fn search_share_targets(&self, query: &str) -> Option<TriggerOutcome> {
        let query = query.trim();
        if query.is_empty() {
            self.share_targets.reset();
            return None;
        }
        Some(
            self.share_targets
                .trigger(self.api.search_message_recipients(query))
                .await,
        )
    }

    pub fn reset(&self) {
        self.conversations.reset();
        self.thread.reset();
        self.send.reset();
        self.share_targets.reset();
    }
}
