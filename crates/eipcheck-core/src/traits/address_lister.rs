// # Address Lister Trait
//
// Defines the interface for enumerating allocated public addresses.
//
// ## Implementations
//
// - EC2 Elastic IPs: `eipcheck-lister-ec2` crate
//
// ## Usage
//
// ```rust,ignore
// use eipcheck_core::AddressLister;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let lister = /* AddressLister implementation */;
//
//     for address in lister.list_addresses().await? {
//         println!("{} attached={}", address.public_ip, !address.is_unattached());
//     }
//
//     Ok(())
// }
// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An allocated public address as reported by the cloud provider
///
/// Addresses are read-only snapshots taken once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// The public IP address
    pub public_ip: String,
    /// The network border group (region) the address is advertised from
    pub network_border_group: String,
    /// The instance the address is associated with, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

impl Address {
    /// Create an address with no instance association
    pub fn new(public_ip: impl Into<String>, network_border_group: impl Into<String>) -> Self {
        Self {
            public_ip: public_ip.into(),
            network_border_group: network_border_group.into(),
            instance_id: None,
        }
    }

    /// Associate the address with an instance
    pub fn with_instance(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    /// True iff the address has no instance association
    pub fn is_unattached(&self) -> bool {
        self.instance_id.is_none()
    }
}

/// Trait for address lister implementations
///
/// Listers are single-shot: each call performs exactly one listing request
/// against the provider and returns every allocated address for the current
/// account and region, in the order the provider returned them.
///
/// # Forbidden Capabilities
///
/// - Retrying failed requests (a failure is fatal for the invocation)
/// - Filtering by attachment (owned by `AddressAuditor`)
/// - Caching results between calls
#[async_trait]
pub trait AddressLister: Send + Sync {
    /// List all allocated public addresses
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Address>)`: Every address, possibly empty
    /// - `Err(Error)`: Transport, authentication or throttling failure
    async fn list_addresses(&self) -> Result<Vec<Address>, crate::Error>;

    /// Get the lister name (for logging/debugging)
    fn lister_name(&self) -> &'static str;
}
