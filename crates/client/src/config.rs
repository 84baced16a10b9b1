use eyre::{eyre, Result};
use std::env;

/// Connection settings for the availability API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the availability API (required)
    pub api_url: String,
    /// Per-request timeout (defaults to 10 seconds)
    pub timeout_seconds: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("AVAILABILITY_API_URL")
            .map_err(|_| eyre!("AVAILABILITY_API_URL environment variable not set"))?;

        let timeout_seconds = env::var("AVAILABILITY_API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            api_url,
            timeout_seconds,
        })
    }
}
