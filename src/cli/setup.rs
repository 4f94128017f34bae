//! Setup instructions shown when the relay is not configured

use crate::cli::style::Stylize;
use anstream::eprintln;
use catalog_relay::config::{
    DEFAULT_CACHE_ROOT, DEFAULT_ENDPOINT, ENV_CACHE_ROOT, ENV_WEBHOOK_SECRET, ENV_WEBHOOK_URL,
};

/// Explain how to provide the webhook secret
pub fn print_setup() {
    eprintln!(
        "{}: {ENV_WEBHOOK_SECRET} environment variable is required",
        "error".error()
    );
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  export {ENV_WEBHOOK_SECRET}=your_secret_token");
    eprintln!("  export {ENV_WEBHOOK_URL}={DEFAULT_ENDPOINT}");
    eprintln!("  export {ENV_CACHE_ROOT}={DEFAULT_CACHE_ROOT}");
    eprintln!("  catalog-relay");
    eprintln!();
    eprintln!(
        "{}",
        "The secret can also be passed with --secret; see --help for all flags.".muted()
    );
}
