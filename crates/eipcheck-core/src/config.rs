//! Configuration types for the audit
//!
//! This module defines the configuration consumed by [`crate::AddressAuditor`].

use serde::{Deserialize, Serialize};

/// Auditor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditorConfig {
    /// Destination topic ARN for the report
    pub topic_arn: String,

    /// Log the report instead of publishing it
    #[serde(default)]
    pub dry_run: bool,
}

impl AuditorConfig {
    /// Create a new configuration publishing to the given topic
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        validate_topic_arn(&self.topic_arn)
    }
}

/// Check that a string looks like `arn:<partition>:sns:<region>:<account>:<name>`
fn validate_topic_arn(arn: &str) -> Result<(), crate::Error> {
    if arn.is_empty() {
        return Err(crate::Error::config("Topic ARN cannot be empty"));
    }

    let parts: Vec<&str> = arn.split(':').collect();
    if parts.len() != 6 || parts[0] != "arn" {
        return Err(crate::Error::config(format!(
            "Topic ARN must look like arn:<partition>:sns:<region>:<account>:<name>. Got: {}",
            arn
        )));
    }

    if parts[2] != "sns" {
        return Err(crate::Error::config(format!(
            "Topic ARN must reference the sns service, not '{}'",
            parts[2]
        )));
    }

    if parts[1].is_empty() || parts[3].is_empty() || parts[5].is_empty() {
        return Err(crate::Error::config(format!(
            "Topic ARN has an empty partition, region or topic name: {}",
            arn
        )));
    }

    if parts[4].len() != 12 || !parts[4].chars().all(|c| c.is_ascii_digit()) {
        return Err(crate::Error::config(format!(
            "Topic ARN account must be 12 digits. Got: '{}'",
            parts[4]
        )));
    }

    Ok(())
}
