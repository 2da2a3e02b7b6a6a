//! Test doubles and common utilities for audit contract tests
//!
//! These doubles record how the auditor drives its capabilities without
//! talking to any cloud provider.

#![allow(dead_code)]

use eipcheck_core::error::{Error, Result};
use eipcheck_core::traits::{Address, AddressLister, Notifier, PublishReceipt};
use eipcheck_core::{AddressAuditor, AuditorConfig};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Topic used by every contract test
pub const TEST_TOPIC: &str = "arn:aws:sns:ap-southeast-2:123456789012:EIPCheckNotifier";

/// A lister returning a fixed address list
pub struct StaticAddressLister {
    addresses: Vec<Address>,
    /// Call counter for list_addresses()
    list_call_count: Arc<AtomicUsize>,
}

impl StaticAddressLister {
    pub fn new(addresses: Vec<Address>) -> Self {
        Self {
            addresses,
            list_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times list_addresses() was called
    pub fn list_call_count(&self) -> usize {
        self.list_call_count.load(Ordering::SeqCst)
    }

    /// Create a new lister that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            addresses: other.addresses.clone(),
            list_call_count: Arc::clone(&other.list_call_count),
        }
    }
}

#[async_trait::async_trait]
impl AddressLister for StaticAddressLister {
    async fn list_addresses(&self) -> Result<Vec<Address>> {
        self.list_call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.addresses.clone())
    }

    fn lister_name(&self) -> &'static str {
        "static"
    }
}

/// A lister whose only call fails
pub struct FailingAddressLister;

#[async_trait::async_trait]
impl AddressLister for FailingAddressLister {
    async fn list_addresses(&self) -> Result<Vec<Address>> {
        Err(Error::auth("AuthFailure: credentials rejected"))
    }

    fn lister_name(&self) -> &'static str {
        "failing"
    }
}

/// A notifier that records every message it is asked to publish
pub struct RecordingNotifier {
    /// Recorded (topic, message) pairs
    published: Arc<std::sync::Mutex<Vec<(String, String)>>>,
    /// Fail every publish when set
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            published: Arc::new(std::sync::Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A notifier that records the attempt and then fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Get the number of publish attempts
    pub fn publish_call_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }

    /// Get the recorded (topic, message) pairs
    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }

    /// Create a new notifier that shares its record with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            published: Arc::clone(&other.published),
            fail: other.fail,
        }
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(&self, topic: &str, message: &str) -> Result<PublishReceipt> {
        let mut published = self.published.lock().unwrap();
        published.push((topic.to_string(), message.to_string()));

        if self.fail {
            return Err(Error::notifier("recording: topic unavailable"));
        }
        Ok(PublishReceipt::sent(format!("msg-{}", published.len())))
    }

    fn notifier_name(&self) -> &'static str {
        "recording"
    }
}

/// Build an auditor over a fixed address list, returning handles for inspection
pub fn auditor_for(
    addresses: Vec<Address>,
) -> (AddressAuditor, Arc<StaticAddressLister>, Arc<RecordingNotifier>) {
    auditor_with_config(addresses, AuditorConfig::new(TEST_TOPIC))
}

/// Same as [`auditor_for`] with an explicit configuration
pub fn auditor_with_config(
    addresses: Vec<Address>,
    config: AuditorConfig,
) -> (AddressAuditor, Arc<StaticAddressLister>, Arc<RecordingNotifier>) {
    let lister = Arc::new(StaticAddressLister::new(addresses));
    let notifier = Arc::new(RecordingNotifier::new());

    let auditor = AddressAuditor::new(
        Box::new(StaticAddressLister::sharing_counters_with(&lister)),
        Box::new(RecordingNotifier::sharing_counters_with(&notifier)),
        config,
    )
    .expect("auditor construction succeeds");

    (auditor, lister, notifier)
}
