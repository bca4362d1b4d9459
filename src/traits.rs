use reqwest::StatusCode;

#[cfg(test)]
use mockall::automock;

/// Receives the outcome of a webhook request after `send` has returned
#[cfg_attr(test, automock)]
pub trait DeliveryObserver: Send + Sync {
    /// The remote answered, with any status
    fn delivered(&self, status: StatusCode);

    /// The request never got a response (DNS, connect, TLS, ...)
    fn failed(&self, error: &reqwest::Error);
}
