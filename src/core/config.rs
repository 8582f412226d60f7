//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

use crate::core::auth::AuthSettings;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive
    /// Example: brewdesk=debug,tower_http=info
    pub log_filter: Option<String>,

    /// Simulated login round trip in milliseconds
    pub login_delay_ms: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("RUST_LOG").ok(),
            login_delay_ms: std::env::var("LOGIN_DELAY_MS")
                .ok()
                .and_then(|value| value.trim().parse().ok()),
        }
    }

    /// Check if a log filter is configured
    pub fn has_log_filter(&self) -> bool {
        self.log_filter.is_some()
    }

    /// Log filter, falling back to [`DEFAULT_LOG_FILTER`]
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Auth service settings derived from this config
    pub fn auth_settings(&self) -> AuthSettings {
        match self.login_delay_ms {
            Some(ms) => AuthSettings {
                login_delay: Duration::from_millis(ms),
            },
            None => AuthSettings::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
