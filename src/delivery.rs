use crate::traits::DeliveryObserver;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Identifies this client to the webhook host.
pub const USER_AGENT: &str = concat!("Slackless-rs @ ", env!("CARGO_PKG_VERSION"));

/// Observer that only writes delivery outcomes to the log.
#[derive(Clone, Debug)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryObserver for LogObserver {
    fn delivered(&self, status: StatusCode) {
        if status.is_success() {
            info!(status = %status, "Webhook request accepted");
        } else {
            warn!(status = %status, "Webhook request rejected");
        }
    }

    fn failed(&self, error: &reqwest::Error) {
        error!(error = %error, "Webhook request failed");
    }
}

/// POST an already serialized body and hand the outcome to `observer`.
///
/// Never returns an error: whatever happens is reported to the observer.
#[tracing::instrument(name = "deliver", skip_all, fields(bytes = body.len()))]
pub async fn deliver(
    http: reqwest::Client,
    endpoint: String,
    body: String,
    observer: Arc<dyn DeliveryObserver>,
) {
    let result = http
        .post(&endpoint)
        .header(USER_AGENT_HEADER, USER_AGENT)
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, body.len())
        .body(body)
        .send()
        .await;

    match result {
        Ok(response) => observer.delivered(response.status()),
        // The URL carries the webhook secret
        Err(e) => observer.failed(&e.without_url()),
    }
}
