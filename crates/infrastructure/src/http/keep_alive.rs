//! Keep-alive duration from `Keep-Alive` response headers

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

const KEEP_ALIVE: &str = "keep-alive";

/// Honors `Keep-Alive: timeout=N` and falls back to a configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepAliveStrategy {
    default: Duration,
}

impl KeepAliveStrategy {
    /// Creates a strategy with the given fallback.
    #[must_use]
    pub const fn new(default: Duration) -> Self {
        Self { default }
    }

    /// Fallback used when the server sends no usable timeout.
    #[must_use]
    pub const fn default_duration(&self) -> Duration {
        self.default
    }

    /// How long a connection may stay idle after a response with `headers`.
    #[must_use]
    pub fn duration_for(&self, headers: &HeaderMap) -> Duration {
        headers
            .get_all(KEEP_ALIVE)
            .iter()
            .find_map(timeout_of)
            .unwrap_or(self.default)
    }
}

fn timeout_of(value: &HeaderValue) -> Option<Duration> {
    value.to_str().ok()?.split(',').find_map(|element| {
        let (name, seconds) = element.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("timeout") {
            return None;
        }
        seconds
            .trim()
            .trim_matches('"')
            .parse::<u64>()
            .ok()
            .map(Duration::from_secs)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(KEEP_ALIVE, HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn test_uses_server_timeout() {
        let strategy = KeepAliveStrategy::new(Duration::from_secs(30));
        assert_eq!(
            strategy.duration_for(&headers("timeout=5, max=1000")),
            Duration::from_secs(5)
        );
        assert_eq!(
            strategy.duration_for(&headers("max=10, Timeout = 7")),
            Duration::from_secs(7)
        );
    }

    #[test]
    fn test_falls_back_to_default() {
        let strategy = KeepAliveStrategy::new(Duration::from_secs(30));
        assert_eq!(strategy.duration_for(&HeaderMap::new()), Duration::from_secs(30));
        assert_eq!(
            strategy.duration_for(&headers("timeout=soon")),
            Duration::from_secs(30)
        );
        assert_eq!(strategy.duration_for(&headers("max=5")), Duration::from_secs(30));
    }
}
