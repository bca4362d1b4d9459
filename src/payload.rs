use crate::error::SlackError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What a caller hands to `send`: a bare string or a structured message.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Structured(Message),
}

impl Payload {
    /// Validate the payload and view it as a structured message.
    pub fn into_message(self) -> Result<Message, SlackError> {
        match self {
            Payload::Text(text) if text.is_empty() => {
                Err(SlackError::Validation("empty text".to_string()))
            }
            Payload::Text(text) => Ok(Message::text(text)),
            Payload::Structured(message) if message.is_empty() => {
                Err(SlackError::Validation("empty payload".to_string()))
            }
            Payload::Structured(message) => Ok(message),
        }
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Text(value)
    }
}

impl From<Message> for Payload {
    fn from(value: Message) -> Self {
        Payload::Structured(value)
    }
}

/// Dynamic dispatch for untyped input such as JSON read from the command line.
///
/// Strings become text, objects become structured messages, everything else
/// (null, arrays, numbers, booleans) is rejected.
impl TryFrom<Value> for Payload {
    type Error = SlackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Payload::Text(text)),
            Value::Object(object) => {
                let nulls: Vec<String> = object
                    .iter()
                    .filter(|(_, value)| value.is_null())
                    .map(|(key, _)| key.clone())
                    .collect();

                let mut message: Message = serde_json::from_value(Value::Object(object))
                    .map_err(|e| SlackError::Validation(format!("invalid payload: {e}")))?;

                // Known keys set to null deserialize to None but are still
                // present, so the object is not empty.
                for key in nulls {
                    message.extra.entry(key).or_insert(Value::Null);
                }

                Ok(Payload::Structured(message))
            }
            _ => Err(SlackError::invalid_payload_type()),
        }
    }
}

/// Per-call message fields. Any field set here overrides the session default.
///
/// `icon_emoji` is the bare token; it is wrapped in colons when sent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    pub text: Option<String>,
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
    pub channel: Option<String>,
    pub attachments: Option<Vec<Value>>,
    /// Keys this client does not know. They make a message non-empty but
    /// are never sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_icon(mut self, icon_emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(icon_emoji.into());
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Append a typed attachment.
    pub fn with_attachment(mut self, attachment: Attachment) -> Result<Self, SlackError> {
        let value = serde_json::to_value(attachment)?;
        self.attachments.get_or_insert_with(Vec::new).push(value);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.username.is_none()
            && self.icon_emoji.is_none()
            && self.channel.is_none()
            && self.attachments.is_none()
            && self.extra.is_empty()
    }
}

/// Legacy Slack message attachment.
///
/// Only a convenience for building attachments; attachments inside a
/// [`Message`] are forwarded as-is and never inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub short: bool,
}

/// The JSON document posted to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundMessage {
    pub link_names: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Value>>,
}

impl OutboundMessage {
    /// Lay the fields present in `message` over the current values.
    pub fn apply(&mut self, message: Message) {
        if let Some(text) = message.text {
            self.text = Some(text);
        }
        if let Some(username) = message.username {
            self.username = Some(username);
        }
        if let Some(icon) = message.icon_emoji {
            self.icon_emoji = Some(wrap_icon(&icon));
        }
        if let Some(channel) = message.channel {
            self.channel = Some(channel);
        }
        if let Some(attachments) = message.attachments {
            self.attachments = Some(attachments);
        }
    }

    pub fn to_json(&self) -> Result<String, SlackError> {
        Ok(serde_json::to_string(self)?)
    }
}

// TODO: strip whitespace and colons from the token before wrapping
pub fn wrap_icon(token: &str) -> String {
    format!(":{token}:")
}
