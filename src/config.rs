//! Client configuration.

use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{DEFAULT_TIMEOUT, Shard};

/// RSO client configuration.
///
/// Pure data holder: credentials, redirect URI, shard and request timeout.
/// Immutable after construction; operations only ever borrow it.
#[derive(Debug, Clone)]
pub struct RsoConfig {
    /// Client identifier issued by the provider.
    pub client_id: String,
    /// Client secret issued by the provider.
    pub client_secret: String,
    /// Redirect URI registered for the authorization code flow.
    pub redirect_uri: String,
    /// Shard serving account-data requests.
    pub shard: Shard,
    /// Request timeout; zero means unset and the default applies.
    pub timeout: Duration,
}

impl RsoConfig {
    /// Create a new configuration with the default shard and timeout.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            shard: Shard::default(),
            timeout: Duration::ZERO,
        }
    }

    /// Set the shard.
    #[must_use]
    pub const fn with_shard(mut self, shard: Shard) -> Self {
        self.shard = shard;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured timeout, or the 10 second default when unset.
    #[must_use]
    pub const fn effective_timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        }
    }

    /// HTTP Basic authorization value: base64 of `client_id:client_secret`.
    #[must_use]
    pub fn basic_auth_value(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_timeout_default() {
        let config = RsoConfig::new("id", "secret", "https://example.com/cb");
        assert_eq!(config.effective_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_effective_timeout_configured() {
        let config = RsoConfig::new("id", "secret", "https://example.com/cb")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.effective_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_basic_auth_value() {
        let config = RsoConfig::new("id", "secret", "https://example.com/cb");
        assert_eq!(config.basic_auth_value(), "aWQ6c2VjcmV0");
    }
}
