//! Configuration for the Bluesky client.

use std::env;

use crate::error::BskyError;

/// Default ATProto service URL.
pub const DEFAULT_SERVICE_URL: &str = "https://bsky.social";

/// Configuration for connecting to a Bluesky/ATProto service.
#[derive(Debug, Clone)]
pub struct BskyConfig {
    /// Service base URL (e.g. "https://bsky.social").
    pub service_url: String,
    /// Account identifier (handle or email).
    pub identifier: String,
    /// App password.
    pub password: String,
}

impl BskyConfig {
    /// Create a new configuration with the default service URL.
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `BSKYUNAME` - account identifier
    /// - `BSKYPASSWD` - app password
    ///
    /// Optional:
    /// - `BSKY_SERVICE_URL` - service base URL (default: https://bsky.social)
    pub fn from_env() -> Result<Self, BskyError> {
        let identifier = env::var("BSKYUNAME")
            .map_err(|_| BskyError::Config("BSKYUNAME not set".to_string()))?;
        let password = env::var("BSKYPASSWD")
            .map_err(|_| BskyError::Config("BSKYPASSWD not set".to_string()))?;

        let mut config = Self::new(identifier, password);
        if let Ok(url) = env::var("BSKY_SERVICE_URL") {
            config.service_url = url;
        }
        Ok(config)
    }

    /// URL for a named XRPC endpoint.
    pub fn xrpc_url(&self, nsid: &str) -> String {
        format!("{}/xrpc/{}", self.service_url.trim_end_matches('/'), nsid)
    }
}
