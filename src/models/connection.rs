use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub requester: UserRef,
    pub receiver: UserRef,
    pub status: ConnectionStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Connection {
    /// The side of the connection that is not `user_id`.
    pub fn peer_of(&self, user_id: &str) -> &UserRef {
        if self.requester.id == user_id {
            &self.receiver
        } else {
            &self.requester
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    pub receiver_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionUpdate {
    pub status: ConnectionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserRef {
        UserRef {
            id: id.to_string(),
            name: id.to_uppercase(),
            user_type: None,
        }
    }

    #[test]
    fn peer_of_picks_other_side() {
        let conn = Connection {
            id: "c1".to_string(),
            requester: user("a"),
            receiver: user("b"),
            status: ConnectionStatus::Pending,
            created_at: None,
        };
        assert_eq!(conn.peer_of("a").id, "b");
        assert_eq!(conn.peer_of("b").id, "a");
    }

    #[test]
    fn update_serializes_uppercase_status() {
        let json = serde_json::to_value(ConnectionUpdate {
            status: ConnectionStatus::Accepted,
        })
        .unwrap();
        assert_eq!(json["status"], "ACCEPTED");
    }
}
