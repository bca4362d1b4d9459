pub mod address;
pub mod client;
pub mod config;
pub mod delivery;
pub mod error;
pub mod payload;
pub mod telemetry;
pub mod traits;

pub use address::{AddressInput, WebhookAddress, WebhookSegments};
pub use client::{SessionDefaults, WebhookClient};
pub use error::SlackError;
pub use payload::{Attachment, AttachmentField, Message, OutboundMessage, Payload};
pub use traits::DeliveryObserver;
