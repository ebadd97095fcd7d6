use serde::{Deserialize, Serialize};

/// Configuration for reaching the parking service's notification API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the server hosting the `/api/notifications/*` endpoints.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Configuration for the background unread-count synchronization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Seconds between unread-count polls.
    pub poll_interval_secs: u64,
    /// Maximum number of notifications fetched for the dropdown panel.
    pub recent_limit: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 30,
            recent_limit: 10,
        }
    }
}

/// Configuration for toast presentation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToastConfig {
    /// Seconds a toast stays on screen before auto-dismissal.
    pub duration_secs: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration_secs: 5 }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Server endpoint configuration.
    pub api: ApiConfig,
    /// Badge polling configuration.
    pub sync: SyncConfig,
    /// Toast presentation configuration.
    pub toast: ToastConfig,
}
