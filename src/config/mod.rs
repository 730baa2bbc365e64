//! Client configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, MatchConfig, SessionConfig, UploadConfig, DEFAULT_MAX_UPLOAD_BYTES};
