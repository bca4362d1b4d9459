use thiserror::Error;

/// Errors raised before a webhook request is dispatched.
///
/// Nothing that happens on the wire ends up here: delivery failures are
/// reported to a [`DeliveryObserver`](crate::traits::DeliveryObserver).
#[derive(Debug, Error)]
pub enum SlackError {
    /// The webhook address is missing or malformed
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The message passed to `send` cannot be turned into a payload
    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SlackError {
    pub(crate) fn address_required() -> Self {
        Self::Configuration("address is required".to_string())
    }

    pub(crate) fn invalid_address() -> Self {
        Self::Configuration("invalid address".to_string())
    }

    pub(crate) fn invalid_payload_type() -> Self {
        Self::Validation("invalid payload type".to_string())
    }
}
