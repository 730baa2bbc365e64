use crate::api::ApiClient;
use crate::lifecycle::{Lifecycle, TriggerOutcome};
use crate::models::{Connection, ConnectionStatus};

/// Accepted connections, pending requests, and the actions between them.
#[derive(Clone)]
pub struct ConnectionsContainer {
    api: ApiClient,
    accepted: Lifecycle<Vec<Connection>>,
    pending: Lifecycle<Vec<Connection>>,
    action: Lifecycle<Connection>,
}

impl ConnectionsContainer {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            accepted: Lifecycle::new("connections.accepted"),
            pending: Lifecycle::new("connections.pending"),
            action: Lifecycle::new("connections.action"),
        }
    }

    pub fn accepted(&self) -> &Lifecycle<Vec<Connection>> {
        &self.accepted
    }

    pub fn pending(&self) -> &Lifecycle<Vec<Connection>> {
        &self.pending
    }

    pub fn action(&self) -> &Lifecycle<Connection> {
        &self.action
    }

    pub async fn load_accepted(&self) -> TriggerOutcome {
        self.accepted
            .trigger(self.api.connections(ConnectionStatus::Accepted))
            .await
    }

    pub async fn load_pending(&self) -> TriggerOutcome {
        self.pending
            .trigger(self.api.connections(ConnectionStatus::Pending))
            .await
    }

    pub async fn request(&self, user_id: &str) -> TriggerOutcome {
        self.action
            .trigger(self.api.request_connection(user_id))
            .await
    }

    /// Accept a pending request and refresh both lists.
    pub async fn accept(&self, connection_id: &str) -> TriggerOutcome {
        self.respond(connection_id, ConnectionStatus::Accepted).await
    }

    /// Reject a pending request and refresh both lists.
    pub async fn reject(&self, connection_id: &str) -> TriggerOutcome {
        self.respond(connection_id, ConnectionStatus::Rejected).await
    }

    async fn respond(&self, connection_id: &str, status: ConnectionStatus) -> TriggerOutcome {
        let outcome = self
            .action
            .trigger(self.api.update_connection(connection_id, status))
            .await;
        if outcome.is_success() {
            self.pending
                .refresh(self.api.connections(ConnectionStatus::Pending))
                .await;
            self.accepted
                .refresh(self.api.connections(ConnectionStatus::Accepted))
                .await;
        }
        outcome
    }

    pub fn reset(&self) {
        self.accepted.reset();
        self.pending.reset();
        self.action.reset();
    }
}
