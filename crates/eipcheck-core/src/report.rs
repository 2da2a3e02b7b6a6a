//! Unattached address report
//!
//! Turns the fetched address list into the text body that gets published.

use crate::traits::Address;

/// Header line preceding the address lines (followed by a blank line)
pub const REPORT_HEADER: &str = "List of unattached EIPs: \n\n";

/// A report of unattached addresses, in fetch order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    entries: Vec<Address>,
}

impl Report {
    /// Build a report from the fetched addresses
    ///
    /// Returns `None` when every address is attached (or the list is empty),
    /// so a `Report` is never empty.
    pub fn from_addresses(addresses: &[Address]) -> Option<Self> {
        let entries: Vec<Address> = addresses
            .iter()
            .filter(|address| address.is_unattached())
            .cloned()
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// The unattached addresses in the report
    pub fn entries(&self) -> &[Address] {
        &self.entries
    }

    /// Number of unattached addresses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no entries (`from_addresses` never returns one that does)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the message body
    pub fn render(&self) -> String {
        let mut message = String::from(REPORT_HEADER);
        for address in &self.entries {
            message.push_str(&format_line(address));
        }
        message
    }
}

/// Format a single report line, newline-terminated
fn format_line(address: &Address) -> String {
    format!(
        "Region: {} EIP: {}\n",
        address.network_border_group, address.public_ip
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_report_for_empty_list() {
        assert!(Report::from_addresses(&[]).is_none());
    }

    #[test]
    fn no_report_when_all_attached() {
        let addresses = vec![
            Address::new("1.2.3.4", "us-east-1").with_instance("i-1"),
            Address::new("5.6.7.8", "us-east-1").with_instance("i-2"),
        ];
        assert!(Report::from_addresses(&addresses).is_none());
    }

    #[test]
    fn single_unattached_address() {
        let addresses = vec![Address::new("1.2.3.4", "ap-southeast-2")];
        let report = Report::from_addresses(&addresses).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.render(),
            "List of unattached EIPs: \n\nRegion: ap-southeast-2 EIP: 1.2.3.4\n"
        );
    }

    #[test]
    fn keeps_fetch_order_and_skips_attached() {
        let addresses = vec![
            Address::new("9.9.9.9", "eu-west-1"),
            Address::new("1.1.1.1", "eu-west-1").with_instance("i-1"),
            Address::new("2.2.2.2", "eu-west-1-lax-1"),
        ];
        let report = Report::from_addresses(&addresses).unwrap();

        assert!(!report.is_empty());
        assert_eq!(
            report.render(),
            "List of unattached EIPs: \n\n\
             Region: eu-west-1 EIP: 9.9.9.9\n\
             Region: eu-west-1-lax-1 EIP: 2.2.2.2\n"
        );
        assert_eq!(report.entries()[0].public_ip, "9.9.9.9");
    }
}
