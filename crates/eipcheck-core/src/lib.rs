// # eipcheck-core
//
// Core library for the unattached Elastic IP audit.
//
// ## Architecture Overview
//
// This library provides everything the audit needs except the cloud SDKs:
// - **AddressLister**: Trait for enumerating allocated public addresses
// - **Notifier**: Trait for publishing the report to a topic
// - **Report**: Builds the text report from the unattached addresses
// - **AddressAuditor**: Runs fetch → filter → report/publish once
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Audit logic is separate from the AWS adapters
// 2. **Injected Capabilities**: Listers and notifiers are passed in, never built here
// 3. **Single Pass**: One invocation performs one audit and terminates
// 4. **Library-First**: The binary is a thin wrapper around this crate

pub mod traits;
pub mod auditor;
pub mod report;
pub mod config;
pub mod error;

// Re-export core types for convenience
pub use traits::{Address, AddressLister, Notifier, PublishReceipt};
pub use auditor::{AddressAuditor, AuditOutcome, AuditResponse};
pub use report::Report;
pub use config::AuditorConfig;
pub use error::{Error, Result};
