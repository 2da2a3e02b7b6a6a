//! Contract Test: Failure Propagation
//!
//! Listing and publishing failures are fatal for the run and never retried.
//!
//! Constraints verified:
//! - A listing failure is returned and nothing is published
//! - A publish failure is returned after exactly one attempt
//! - An invalid topic is rejected before any call is made

mod common;

use common::*;
use eipcheck_core::{Address, AddressAuditor, AuditorConfig, Error};
use std::sync::Arc;

#[tokio::test]
async fn listing_failure_skips_publish() {
    let notifier = Arc::new(RecordingNotifier::new());

    let auditor = AddressAuditor::new(
        Box::new(FailingAddressLister),
        Box::new(RecordingNotifier::sharing_counters_with(&notifier)),
        AuditorConfig::new(TEST_TOPIC),
    )
    .expect("auditor construction succeeds");

    let err = auditor.run().await.expect_err("run fails");

    assert!(matches!(err, Error::Authentication(_)), "got {:?}", err);
    assert_eq!(
        notifier.publish_call_count(),
        0,
        "Publish must not be attempted after a listing failure"
    );
}

#[tokio::test]
async fn publish_failure_is_not_retried() {
    let lister = Arc::new(StaticAddressLister::new(vec![Address::new(
        "1.2.3.4",
        "ap-southeast-2",
    )]));
    let notifier = Arc::new(RecordingNotifier::failing());

    let auditor = AddressAuditor::new(
        Box::new(StaticAddressLister::sharing_counters_with(&lister)),
        Box::new(RecordingNotifier::sharing_counters_with(&notifier)),
        AuditorConfig::new(TEST_TOPIC),
    )
    .expect("auditor construction succeeds");

    let err = auditor.run().await.expect_err("run fails");

    assert!(matches!(err, Error::Notifier(_)), "got {:?}", err);
    assert_eq!(lister.list_call_count(), 1);
    assert_eq!(notifier.publish_call_count(), 1, "Expected a single attempt");
}

#[tokio::test]
async fn invalid_topic_is_rejected_up_front() {
    let lister = Arc::new(StaticAddressLister::new(Vec::new()));

    let result = AddressAuditor::new(
        Box::new(StaticAddressLister::sharing_counters_with(&lister)),
        Box::new(RecordingNotifier::new()),
        AuditorConfig::new("not-a-topic"),
    );

    match result {
        Err(err) => assert!(err.is_config(), "got {:?}", err),
        Ok(_) => panic!("expected a configuration error"),
    }
    assert_eq!(lister.list_call_count(), 0);
}
