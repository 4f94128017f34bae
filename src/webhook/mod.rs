//! Webhook submission
//!
//! [`WebhookSink`] is the seam between the relay pipeline and the network.
//! [`WebhookClient`] is the HTTP implementation; tests substitute their own.

mod client;

pub use client::WebhookClient;

use crate::error::Result;
use crate::types::{Envelope, SubmitResponse};
use async_trait::async_trait;

/// Destination for submission envelopes
#[async_trait]
pub trait WebhookSink: Send + Sync {
    /// Submit one envelope, single attempt
    async fn submit(&self, envelope: &Envelope) -> Result<SubmitResponse>;

    /// Where envelopes are sent (for display)
    fn endpoint(&self) -> &str;
}
