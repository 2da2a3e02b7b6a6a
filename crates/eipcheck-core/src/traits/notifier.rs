// # Notifier Trait
//
// Defines the interface for publishing the audit report.
//
// ## Implementations
//
// - SNS topics: `eipcheck-notifier-sns` crate

use async_trait::async_trait;

/// Acknowledgement of a published message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Provider-assigned message ID, if the provider returned one
    pub message_id: Option<String>,
}

impl PublishReceipt {
    /// Receipt for a message the provider accepted
    pub fn sent(message_id: impl Into<String>) -> Self {
        Self {
            message_id: Some(message_id.into()),
        }
    }
}

/// Trait for notifier implementations
///
/// A notifier delivers one plain-text, UTF-8 message to one topic per call.
/// It must not retry: a failed publish is reported to the caller and the
/// message is dropped.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish a message to a topic
    ///
    /// # Parameters
    ///
    /// - `topic`: Destination topic identifier (e.g. an SNS topic ARN)
    /// - `message`: The message body
    async fn publish(&self, topic: &str, message: &str) -> Result<PublishReceipt, crate::Error>;

    /// Get the notifier name (for logging/debugging)
    fn notifier_name(&self) -> &'static str;
}
