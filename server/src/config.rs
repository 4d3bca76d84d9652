//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Default listen address when `LISTEN` is unset.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:9001";

/// Default request body limit in bytes (64KB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 64 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address (e.g., "127.0.0.1:9001")
    pub listen: SocketAddr,

    /// Shared secret expected in the `token` form field.
    /// `None` disables the check.
    pub token: Option<String>,

    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let listen = env::var("LISTEN")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN.into());

        Ok(Self {
            listen: listen
                .trim()
                .parse()
                .with_context(|| format!("LISTEN is not a valid socket address: {listen}"))?,
            token: env::var("TOKEN").ok().filter(|t| !t.is_empty()),
            max_body_size: env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),
        })
    }

    /// Check if the shared-secret check is enabled.
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 0)),
            token: None,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }

    /// Test configuration with a shared secret set.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default_for_test()
        }
    }
}
