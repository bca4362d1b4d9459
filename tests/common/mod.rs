/// Shared test fixtures and utilities for test modules
#[allow(dead_code)]
pub mod fixtures {
    use slackless::{WebhookClient, WebhookSegments};
    use wiremock::MockServer;

    pub const TEAM: &str = "T00000000";
    pub const BOT: &str = "B00000000";
    pub const SECRET: &str = "XXXXXXXXXXXXXXXXXXXXXXXX";

    /// A well-formed webhook URL
    pub fn valid_url() -> String {
        format!("https://hooks.slack.com/services/{TEAM}/{BOT}/{SECRET}")
    }

    /// The path every valid fixture address normalizes to
    pub fn valid_path() -> String {
        format!("/services/{TEAM}/{BOT}/{SECRET}")
    }

    pub fn valid_segments() -> WebhookSegments {
        WebhookSegments::new(TEAM, BOT, SECRET)
    }

    /// A client whose requests land on `mock_server`
    pub fn client_for(mock_server: &MockServer) -> WebhookClient {
        WebhookClient::new(valid_url())
            .expect("fixture address is valid")
            .with_base_url(mock_server.uri())
    }
}
