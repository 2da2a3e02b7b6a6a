//! Unattached address auditor
//!
//! The AddressAuditor is responsible for:
//! - Fetching every allocated address via an AddressLister
//! - Filtering for addresses without an instance association
//! - Publishing a text report via a Notifier when any are found
//!
//! ## Flow
//!
//! ```text
//! ┌───────────────┐   Vec<Address>   ┌────────────────┐   Report   ┌────────────┐
//! │ AddressLister │ ───────────────▶ │ AddressAuditor │ ─────────▶ │  Notifier  │
//! │ (fetch)       │                  │ (filter)       │            │ (publish)  │
//! └───────────────┘                  └────────────────┘            └────────────┘
//! ```
//!
//! 1. List addresses (failure aborts the run, nothing is published)
//! 2. Keep the unattached ones, in fetch order
//! 3. If none, stop without publishing
//! 4. Render the report and publish it once (failure aborts the run);
//!    in dry-run mode the report is only logged

use crate::config::AuditorConfig;
use crate::error::Result;
use crate::report::Report;
use crate::traits::{AddressLister, Notifier};
use serde::Serialize;
use tracing::{debug, error, info};

/// Status code reported for a successful run
pub const STATUS_OK: u16 = 200;

/// Result of a successful audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    /// No unattached addresses; nothing was published
    Clean,

    /// A report was built but only logged (dry-run)
    DryRun {
        /// Number of unattached addresses in the report
        unattached: usize,
    },

    /// A report was published
    Published {
        /// Number of unattached addresses in the report
        unattached: usize,
        /// Message ID assigned by the notifier, if any
        message_id: Option<String>,
    },
}

impl AuditOutcome {
    /// Number of unattached addresses found
    pub fn unattached(&self) -> usize {
        match self {
            AuditOutcome::Clean => 0,
            AuditOutcome::DryRun { unattached } => *unattached,
            AuditOutcome::Published { unattached, .. } => *unattached,
        }
    }

    /// The response returned to the invoking environment
    ///
    /// Every outcome is a success and shares the same response shape.
    pub fn response(&self) -> AuditResponse {
        AuditResponse {
            status_code: STATUS_OK,
        }
    }
}

/// Response handed back to the trigger, serialized as `{"statusCode":200}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    /// HTTP-style status code
    pub status_code: u16,
}

/// Unattached address auditor
///
/// Holds the injected capabilities and performs one audit per call to
/// [`AddressAuditor::run()`]. There is no retry, caching or state between
/// runs; concurrent runs may publish duplicate reports.
pub struct AddressAuditor {
    /// Source of allocated addresses
    lister: Box<dyn AddressLister>,

    /// Destination for the report
    notifier: Box<dyn Notifier>,

    /// Topic the report is published to
    topic_arn: String,

    /// Log the report instead of publishing it
    dry_run: bool,
}

impl AddressAuditor {
    /// Create a new auditor
    ///
    /// # Parameters
    ///
    /// - `lister`: Address lister implementation
    /// - `notifier`: Notifier implementation
    /// - `config`: Auditor configuration (validated here)
    pub fn new(
        lister: Box<dyn AddressLister>,
        notifier: Box<dyn Notifier>,
        config: AuditorConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            lister,
            notifier,
            topic_arn: config.topic_arn,
            dry_run: config.dry_run,
        })
    }

    /// Handle a trigger event
    ///
    /// The payload is accepted for compatibility with schedulers and event
    /// buses but does not influence the audit.
    pub async fn handle(&self, event: &serde_json::Value) -> Result<AuditOutcome> {
        debug!("Trigger event received (ignored): {}", event);
        self.run().await
    }

    /// Run one audit
    ///
    /// # Returns
    ///
    /// - `Ok(AuditOutcome::Clean)`: No unattached addresses, nothing published
    /// - `Ok(AuditOutcome::DryRun { .. })`: Report built and logged, not published
    /// - `Ok(AuditOutcome::Published { .. })`: Report published
    /// - `Err(Error)`: Listing or publishing failed
    pub async fn run(&self) -> Result<AuditOutcome> {
        let addresses = self.lister.list_addresses().await.inspect_err(|e| {
            error!("Failed to list addresses via {}: {}", self.lister.lister_name(), e);
        })?;
        debug!(
            "Fetched {} address(es) via {}",
            addresses.len(),
            self.lister.lister_name()
        );

        let Some(report) = Report::from_addresses(&addresses) else {
            info!("No unattached EIPs found");
            return Ok(AuditOutcome::Clean);
        };

        for address in report.entries() {
            info!(
                "unattached EIP: {} ({})",
                address.public_ip, address.network_border_group
            );
        }

        let payload = report.render();
        info!("Payload:\n {}", payload);

        if self.dry_run {
            info!(
                "[DRY-RUN] Skipping publish to {} via {}",
                self.topic_arn,
                self.notifier.notifier_name()
            );
            return Ok(AuditOutcome::DryRun {
                unattached: report.len(),
            });
        }

        let receipt = self
            .notifier
            .publish(&self.topic_arn, &payload)
            .await
            .inspect_err(|e| {
                error!(
                    "Failed to publish report via {}: {}",
                    self.notifier.notifier_name(),
                    e
                );
            })?;
        info!(
            "Published to topic {} (message id: {})",
            self.topic_arn,
            receipt.message_id.as_deref().unwrap_or("none")
        );

        Ok(AuditOutcome::Published {
            unattached: report.len(),
            message_id: receipt.message_id,
        })
    }
}
