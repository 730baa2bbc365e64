use serde::{Deserialize, Serialize};

use super::user::UserType;
use crate::session::SecureString;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: SecureString,
    pub full_name: String,
    pub user_type: UserType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecureString,
}

/// Issued by register and login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: SecureString,
    pub user_id: String,
    pub user_type: UserType,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_does_not_leak_password_in_debug() {
        let req = LoginRequest {
            email: "a@b.c".to_string(),
            password: SecureString::new("hunter2"),
        };
        assert!(!format!("{:?}", req).contains("hunter2"));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["password"], "hunter2");
    }

    #[test]
    fn decodes_auth_response() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{"token":"t-1","userId":"u-1","userType":"FOUNDER"}"#,
        )
        .unwrap();
        assert_eq!(resp.token.expose(), "t-1");
        assert_eq!(resp.user_id, "u-1");
        assert_eq!(resp.user_type, UserType::Founder);
        assert!(resp.email.is_none());
    }
}
