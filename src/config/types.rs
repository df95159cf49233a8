// Configuration types module
// Runtime and logging settings; routes are never part of configuration

use serde::Deserialize;

/// Top-level settings
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Server runtime settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Listen address used by the bundled binary (`host:port` or `:port`)
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Tokio worker threads, CPU count when unset
    #[serde(default)]
    pub workers: Option<usize>,
    /// Largest request body buffered before dispatch, in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            workers: None,
            max_body_size: default_max_body_size(),
        }
    }
}

/// Logging settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    #[serde(default = "default_access_log")]
    pub access_log: bool,
    /// Access log format (common, combined or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            access_log: default_access_log(),
            access_log_format: default_access_log_format(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
pub(super) fn default_addr() -> String {
    "127.0.0.1:9999".to_string()
}

#[allow(clippy::missing_const_for_fn)]
pub(super) fn default_max_body_size() -> u64 {
    10_485_760 // 10MB
}

#[allow(clippy::missing_const_for_fn)]
pub(super) fn default_access_log() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
pub(super) fn default_access_log_format() -> String {
    "common".to_string()
}
