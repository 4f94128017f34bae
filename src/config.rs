//! Relay configuration
//!
//! Values come from the environment (or matching CLI flags):
//! 1. `WEBHOOK_URL` - ingestion endpoint, defaults to the local dev server
//! 2. `WEBHOOK_SECRET` - bearer credential, required
//! 3. `CACHE_ROOT` - scraper cache directory, defaults to `./cache`

use crate::error::{Error, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Environment variable holding the endpoint URL
pub const ENV_WEBHOOK_URL: &str = "WEBHOOK_URL";
/// Environment variable holding the shared secret
pub const ENV_WEBHOOK_SECRET: &str = "WEBHOOK_SECRET";
/// Environment variable holding the cache root
pub const ENV_CACHE_ROOT: &str = "CACHE_ROOT";

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/webhooks/load-data";
/// Cache root used when none is configured
pub const DEFAULT_CACHE_ROOT: &str = "./cache";

/// Resolved relay configuration
#[derive(Clone)]
pub struct RelayConfig {
    /// Webhook endpoint
    pub endpoint: Url,
    /// Shared bearer secret
    pub secret: String,
    /// Root of the scraper cache
    pub cache_root: PathBuf,
}

impl RelayConfig {
    /// Validate raw settings
    ///
    /// A missing or empty secret is [`Error::MissingSecret`].
    pub fn new(
        endpoint: &str,
        secret: Option<String>,
        cache_root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let secret = secret
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingSecret)?;

        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid webhook URL `{endpoint}`: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "webhook URL must be http or https, got `{}`",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            endpoint,
            secret,
            cache_root: cache_root.into(),
        })
    }

    /// Load configuration from the process environment
    ///
    /// For library callers. The binary resolves the same variables through
    /// its clap arguments, so flags can override them, then calls [`Self::new`].
    pub fn from_env() -> Result<Self> {
        let endpoint =
            env::var(ENV_WEBHOOK_URL).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let cache_root =
            env::var(ENV_CACHE_ROOT).unwrap_or_else(|_| DEFAULT_CACHE_ROOT.to_string());
        Self::new(&endpoint, env::var(ENV_WEBHOOK_SECRET).ok(), cache_root)
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("secret", &"<redacted>")
            .field("cache_root", &self.cache_root)
            .finish()
    }
}
