//! HTTP webhook client

use crate::config::RelayConfig;
use crate::error::{Error, ErrorBody, Result};
use crate::types::{Envelope, SubmitResponse};
use crate::webhook::WebhookSink;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Authenticated client for the ingestion webhook
///
/// The bearer credential is attached to every request and fixed for the
/// lifetime of the client.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    endpoint: Url,
}

impl WebhookClient {
    /// Create a client for `endpoint`, authenticating with `secret`
    pub fn new(endpoint: Url, secret: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {secret}"))
            .map_err(|_| Error::Config("webhook secret contains invalid characters".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), &config.secret)
    }
}

#[async_trait]
impl WebhookSink for WebhookClient {
    async fn submit(&self, envelope: &Envelope) -> Result<SubmitResponse> {
        info!(
            kind = %envelope.kind,
            semester = ?envelope.semester_jw_id,
            records = envelope.record_count(),
            "submitting envelope"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = ErrorBody::from_text(text);
            debug!(status = status.as_u16(), %body, "webhook rejected envelope");
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SubmitResponse = serde_json::from_str(&text)
            .map_err(|e| Error::InvalidResponse(format!("{e} (body: {text})")))?;
        debug!(message = parsed.message_or_default(), "webhook accepted envelope");
        Ok(parsed)
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}
