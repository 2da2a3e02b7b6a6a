// # EC2 Address Lister
//
// This crate provides an `AddressLister` backed by the EC2 `DescribeAddresses`
// API.
//
// ## Behaviour
//
// - One `DescribeAddresses` call per `list_addresses()`, with no filters
// - Addresses are returned in the order EC2 lists them
// - No retry, no caching (a failure is fatal for the audit run)
//
// ## Field Mapping
//
// | EC2 field            | Address field          |
// |----------------------|------------------------|
// | `PublicIp`           | `public_ip`            |
// | `NetworkBorderGroup` | `network_border_group` |
// | `InstanceId`         | `instance_id`          |
//
// When `NetworkBorderGroup` is missing the client's region is used instead.
// Records without a `PublicIp` cannot be reported and are skipped.
//
// ## API Reference
//
// - https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeAddresses.html

use async_trait::async_trait;
use aws_sdk_ec2::error::{DisplayErrorContext, ProvideErrorMetadata};
use eipcheck_core::traits::{Address, AddressLister};
use eipcheck_core::{Error, Result};

/// Provider name used in errors and logs
const PROVIDER: &str = "ec2";

/// Error codes EC2 returns for credential or permission problems
const AUTH_ERROR_CODES: &[&str] = &[
    "AuthFailure",
    "UnauthorizedOperation",
    "InvalidClientTokenId",
    "ExpiredToken",
    "SignatureDoesNotMatch",
];

/// Error codes EC2 returns when throttling
const THROTTLE_ERROR_CODES: &[&str] = &["RequestLimitExceeded", "Throttling"];

/// EC2-backed address lister
#[derive(Debug, Clone)]
pub struct Ec2AddressLister {
    /// EC2 API client
    client: aws_sdk_ec2::Client,

    /// Region reported for addresses without a network border group
    fallback_region: String,
}

impl Ec2AddressLister {
    /// Create a lister from an EC2 client
    ///
    /// The client should have a region configured: it is reported for any
    /// address EC2 returns without a network border group. Without one such
    /// addresses are reported with an empty region.
    pub fn new(client: aws_sdk_ec2::Client) -> Self {
        let fallback_region = match client.config().region() {
            Some(region) => region.to_string(),
            None => {
                tracing::warn!(
                    "EC2 client has no region; addresses without a network border group will report an empty region"
                );
                String::new()
            }
        };

        Self {
            client,
            fallback_region,
        }
    }

    /// Create a lister from shared SDK configuration
    pub fn from_conf(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_ec2::Client::new(sdk_config))
    }
}

#[async_trait]
impl AddressLister for Ec2AddressLister {
    async fn list_addresses(&self) -> Result<Vec<Address>> {
        tracing::debug!("Calling DescribeAddresses (region: {})", self.fallback_region);

        let response = self
            .client
            .describe_addresses()
            .send()
            .await
            .map_err(|e| classify_error(e.code(), DisplayErrorContext(&e).to_string()))?;

        let addresses = response
            .addresses()
            .iter()
            .filter_map(|raw| to_address(raw, &self.fallback_region))
            .collect::<Vec<_>>();

        tracing::debug!("DescribeAddresses returned {} address(es)", addresses.len());
        Ok(addresses)
    }

    fn lister_name(&self) -> &'static str {
        PROVIDER
    }
}

/// Convert an EC2 address record, skipping records without a public IP
fn to_address(raw: &aws_sdk_ec2::types::Address, fallback_region: &str) -> Option<Address> {
    let Some(public_ip) = raw.public_ip() else {
        tracing::warn!(
            "Skipping address without a public IP (allocation: {})",
            raw.allocation_id().unwrap_or("unknown")
        );
        return None;
    };

    let region = raw.network_border_group().unwrap_or(fallback_region);
    let address = Address::new(public_ip, region);

    Some(match raw.instance_id() {
        Some(instance_id) => address.with_instance(instance_id),
        None => address,
    })
}

/// Map an EC2 error code onto the core error type
fn classify_error(code: Option<&str>, detail: String) -> Error {
    match code {
        Some(code) if AUTH_ERROR_CODES.contains(&code) => {
            Error::auth(format!("DescribeAddresses rejected ({}): {}", code, detail))
        }
        Some(code) if THROTTLE_ERROR_CODES.contains(&code) => {
            Error::rate_limited(format!("DescribeAddresses throttled ({}): {}", code, detail))
        }
        _ => Error::lister(format!("{} DescribeAddresses failed: {}", PROVIDER, detail)),
    }
}
