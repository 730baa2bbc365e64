use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Local ceiling for media uploads (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub matches: MatchConfig,
}

/// Remote backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto (e.g. "https://api.build2rise.app/api/").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds. Transport default when unset.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u32>,
    /// Whole-request timeout in seconds. Transport default when unset.
    #[serde(default)]
    pub timeout_seconds: Option<u32>,
}

/// Media upload limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Files larger than this are rejected before any request is made.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

/// Where the persisted session lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Explicit session file. Defaults to `<data dir>/build2rise/session.toml`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Smart-match listing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// How many matches to ask for when the caller gives no limit.
    #[serde(default = "default_match_limit")]
    pub default_limit: u32,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080/api/".to_string()
}

fn default_max_upload_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_match_limit() -> u32 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: None,
            timeout_seconds: None,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_match_limit(),
        }
    }
}
