//! Environment-driven configuration tests
//!
//! These mutate process environment variables, so they run serially.

use catalog_relay::config::{
    DEFAULT_CACHE_ROOT, DEFAULT_ENDPOINT, ENV_CACHE_ROOT, ENV_WEBHOOK_SECRET, ENV_WEBHOOK_URL,
    RelayConfig,
};
use catalog_relay::error::Error;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

/// Replace the relay's environment for one test
#[allow(unsafe_code)]
fn set_env(url: Option<&str>, secret: Option<&str>, cache_root: Option<&str>) {
    for (key, value) in [
        (ENV_WEBHOOK_URL, url),
        (ENV_WEBHOOK_SECRET, secret),
        (ENV_CACHE_ROOT, cache_root),
    ] {
        // SAFETY: tests touching the environment are #[serial]
        unsafe {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    set_env(None, Some("s3cret"), None);

    let config = RelayConfig::from_env().unwrap();
    assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
    assert_eq!(config.secret, "s3cret");
    assert_eq!(config.cache_root, PathBuf::from(DEFAULT_CACHE_ROOT));
}

#[test]
#[serial]
fn test_from_env_overrides() {
    set_env(
        Some("https://example.com/api/webhooks/load-data"),
        Some("s3cret"),
        Some("/srv/static/cache"),
    );

    let config = RelayConfig::from_env().unwrap();
    assert_eq!(
        config.endpoint.as_str(),
        "https://example.com/api/webhooks/load-data"
    );
    assert_eq!(config.cache_root, PathBuf::from("/srv/static/cache"));
}

#[test]
#[serial]
fn test_from_env_missing_secret() {
    set_env(None, None, None);
    assert!(matches!(RelayConfig::from_env(), Err(Error::MissingSecret)));
}

#[test]
#[serial]
fn test_from_env_empty_secret() {
    set_env(None, Some(""), None);
    assert!(matches!(RelayConfig::from_env(), Err(Error::MissingSecret)));
}
