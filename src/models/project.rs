use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::user::UserRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            other => Err(format!("unknown project status '{}'", other)),
        }
    }
}

/// An investor backing a founder's startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub founder: UserRef,
    pub investor: UserRef,
    #[serde(default)]
    pub startup_name: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequest {
    pub founder_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStatusUpdate {
    pub status: ProjectStatus,
}

/// Whether the current investor already supports a founder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportCheck {
    pub supported: bool,
    #[serde(default)]
    pub project_id: Option<String>,
}
