use crate::address::AddressInput;
use crate::client::WebhookClient;
use crate::error::SlackError;
use tracing::debug;

pub const ENV_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";
pub const ENV_USERNAME: &str = "SLACK_USERNAME";
pub const ENV_ICON_EMOJI: &str = "SLACK_ICON_EMOJI";
pub const ENV_CHANNEL: &str = "SLACK_CHANNEL";
pub const ENV_LINK_NAMES: &str = "SLACK_LINK_NAMES";

/// Everything needed to set up a [`WebhookClient`], usually read from the
/// environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub webhook_url: Option<String>,
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
    pub channel: Option<String>,
    pub link_names: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            webhook_url: None,
            username: None,
            icon_emoji: None,
            channel: None,
            link_names: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let link_names = get(ENV_LINK_NAMES)
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        Self {
            webhook_url: get(ENV_WEBHOOK_URL),
            username: get(ENV_USERNAME),
            icon_emoji: get(ENV_ICON_EMOJI),
            channel: get(ENV_CHANNEL),
            link_names,
        }
    }

    pub fn into_client(self) -> Result<WebhookClient, SlackError> {
        let mut client = WebhookClient::resolve(self.webhook_url.map(AddressInput::from))?;

        if let Some(username) = self.username {
            client.set_username(username);
        }
        if let Some(icon) = self.icon_emoji {
            client.set_icon(icon);
        }
        if let Some(channel) = self.channel {
            client.set_channel(channel);
        }
        if !self.link_names {
            client.disable_link_names();
        }

        debug!(address = ?client.address(), "Webhook client configured");

        Ok(client)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
