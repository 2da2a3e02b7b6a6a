// # SNS Notifier
//
// This crate provides a `Notifier` that publishes the audit report to an
// Amazon SNS topic.
//
// ## Behaviour
//
// - One `Publish` call per `publish()`, carrying `TopicArn` and `Message`
// - No retry, no batching (a failure is fatal for the audit run)
// - Dry-run is decided by the auditor; this notifier always publishes
//
// ## API Reference
//
// - https://docs.aws.amazon.com/sns/latest/api/API_Publish.html

use async_trait::async_trait;
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata};
use eipcheck_core::traits::{Notifier, PublishReceipt};
use eipcheck_core::{Error, Result};

/// Provider name used in errors and logs
const PROVIDER: &str = "sns";

/// Error codes SNS returns for credential or permission problems
const AUTH_ERROR_CODES: &[&str] = &[
    "AuthorizationError",
    "InvalidClientTokenId",
    "ExpiredToken",
    "SignatureDoesNotMatch",
];

/// Error codes SNS returns when throttling
const THROTTLE_ERROR_CODES: &[&str] = &["Throttled", "Throttling"];

/// SNS topic notifier
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    /// SNS API client
    client: aws_sdk_sns::Client,
}

impl SnsNotifier {
    /// Create a new SNS notifier
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }

    /// Create a notifier from shared SDK configuration
    pub fn from_conf(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_sns::Client::new(sdk_config))
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, topic: &str, message: &str) -> Result<PublishReceipt> {
        tracing::debug!("Publishing {} byte(s) to {}", message.len(), topic);

        let output = self
            .client
            .publish()
            .topic_arn(topic)
            .message(message)
            .send()
            .await
            .map_err(|e| classify_error(e.code(), DisplayErrorContext(&e).to_string()))?;

        Ok(PublishReceipt {
            message_id: output.message_id().map(str::to_string),
        })
    }

    fn notifier_name(&self) -> &'static str {
        PROVIDER
    }
}

/// Map an SNS error code onto the core error type
fn classify_error(code: Option<&str>, detail: String) -> Error {
    match code {
        Some(code) if AUTH_ERROR_CODES.contains(&code) => {
            Error::auth(format!("Publish rejected ({}): {}", code, detail))
        }
        Some(code) if THROTTLE_ERROR_CODES.contains(&code) => {
            Error::rate_limited(format!("Publish throttled ({}): {}", code, detail))
        }
        Some("NotFound") => Error::not_found(format!("Topic does not exist: {}", detail)),
        Some("InvalidParameter" | "InvalidParameterValue") => {
            Error::invalid_input(format!("Publish request invalid: {}", detail))
        }
        _ => Error::notifier(format!("{} Publish failed: {}", PROVIDER, detail)),
    }
}
