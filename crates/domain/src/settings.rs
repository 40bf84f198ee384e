//! HTTP client settings
//!
//! Defines the tunables of clients built by the TLS-aware factory.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeouts, pool and redirect limits for built HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClientSettings {
    /// TCP connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Socket read timeout in milliseconds.
    #[serde(default = "default_socket_timeout_ms")]
    pub socket_timeout_ms: u64,

    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Connection pool cap.
    #[serde(default = "default_max_total_connections")]
    pub max_total_connections: usize,

    /// Keep-alive used when the server sends no `Keep-Alive` timeout, in milliseconds.
    #[serde(default = "default_keep_alive_ms")]
    pub default_keep_alive_ms: u64,

    /// Redirect hops followed when redirects are enabled.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

const fn default_connect_timeout_ms() -> u64 {
    10_000
}

const fn default_socket_timeout_ms() -> u64 {
    30_000
}

const fn default_request_timeout_ms() -> u64 {
    60_000
}

const fn default_max_total_connections() -> usize {
    50
}

const fn default_keep_alive_ms() -> u64 {
    30_000
}

const fn default_max_redirects() -> usize {
    10
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout_ms(),
            socket_timeout_ms: default_socket_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            max_total_connections: default_max_total_connections(),
            default_keep_alive_ms: default_keep_alive_ms(),
            max_redirects: default_max_redirects(),
        }
    }
}

impl ClientSettings {
    /// TCP connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Socket read timeout.
    #[must_use]
    pub const fn socket_timeout(&self) -> Duration {
        Duration::from_millis(self.socket_timeout_ms)
    }

    /// Whole-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Fallback keep-alive duration.
    #[must_use]
    pub const fn default_keep_alive(&self) -> Duration {
        Duration::from_millis(self.default_keep_alive_ms)
    }
}
