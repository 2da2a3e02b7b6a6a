//! Capability traits for the audit
//!
//! This module defines the abstract interfaces the auditor is built on.
//!
//! - [`AddressLister`]: Enumerate allocated public addresses
//! - [`Notifier`]: Publish a text message to a topic

pub mod address_lister;
pub mod notifier;

pub use address_lister::{Address, AddressLister};
pub use notifier::{Notifier, PublishReceipt};
