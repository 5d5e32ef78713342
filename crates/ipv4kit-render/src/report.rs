//! Multi-line detail reports for addresses and subnets.

use ipv4kit::{Address, Subnet};

use crate::{
    quantity::{format_count, CountFormat},
    style::{emphasize, BitTheme},
};

const OCTET_SEPARATOR: &str = ".";

/// Which rendering the four-line address report uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressReportStyle {
    /// Dotted-decimal columns only.
    #[default]
    Decimal,
    /// Plain binary columns, no styling.
    Binary,
    /// Color-emphasized binary columns.
    EmphasizedBinary,
    /// Dotted-decimal columns with the emphasized binary alongside.
    Full,
}

/// Renders the four-line report for an address: the address itself, its
/// mask, its network id, and its host id.
///
/// The network-id row dims its host bits and the host-id row dims its
/// network bits, so the meaningful half of each row stands out.
pub fn address_report(address: &Address, style: AddressReportStyle, theme: &BitTheme) -> String {
    let mask = address.mask();
    let network_id = address.network_id();
    let host_id = address.host_id();

    let rows = [
        (
            "IP Address ",
            address.octets(),
            address.binary_spans(OCTET_SEPARATOR),
            *theme,
        ),
        (
            "Subnet Mask",
            mask.octets(),
            mask.binary_spans(OCTET_SEPARATOR),
            *theme,
        ),
        (
            "Network ID ",
            network_id.octets(),
            network_id.binary_spans(OCTET_SEPARATOR),
            BitTheme {
                dim_host: true,
                ..*theme
            },
        ),
        (
            "Host ID    ",
            host_id.octets(),
            host_id.binary_spans(OCTET_SEPARATOR),
            BitTheme {
                dim_network: true,
                ..*theme
            },
        ),
    ];

    let mut report = String::new();
    for (label, octets, spans, row_theme) in rows {
        let decimal = format!(
            "{:>3}.{:>3}.{:>3}.{:>3}",
            octets[0], octets[1], octets[2], octets[3]
        );
        let line = match style {
            AddressReportStyle::Decimal => format!("{label} : {decimal}"),
            AddressReportStyle::Binary => format!("{label} : {}", spans.plain()),
            AddressReportStyle::EmphasizedBinary => {
                format!("{label} : {}", emphasize(&spans, &row_theme))
            }
            AddressReportStyle::Full => {
                format!("{label} : {decimal}  [ {} ]", emphasize(&spans, &row_theme))
            }
        };
        report.push_str(&line);
        report.push('\n');
    }

    report
}

/// Renders a summary block for a subnet: CIDR, range bounds, and size.
pub fn subnet_report(subnet: &Subnet, count_format: CountFormat) -> String {
    format!(
        "CIDR     : {subnet}\nFirst IP : {first}\nLast IP  : {last}\nSize     : {size}\n",
        first = subnet.first_ip(),
        last = subnet.last_ip(),
        size = format_count(subnet.size(), count_format),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_report_pads_octet_columns() {
        let address: Address = "192.168.1.42/24".parse().unwrap();
        let report = address_report(&address, AddressReportStyle::Decimal, &BitTheme::default());

        let lines: Vec<_> = report.lines().collect();
        assert_eq!(
            lines,
            [
                "IP Address  : 192.168.  1. 42",
                "Subnet Mask : 255.255.255.  0",
                "Network ID  : 192.168.  1.  0",
                "Host ID     :   0.  0.  0. 42",
            ]
        );
    }

    #[test]
    fn binary_report_shows_all_32_bits_per_row() {
        let address: Address = "10.0.0.1/8".parse().unwrap();
        let report = address_report(&address, AddressReportStyle::Binary, &BitTheme::default());

        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[0], "IP Address  : 00001010.00000000.00000000.00000001");
        assert_eq!(lines[1], "Subnet Mask : 11111111.00000000.00000000.00000000");
    }

    #[test]
    fn emphasized_report_matches_binary_when_color_is_disabled() {
        colored::control::set_override(false);

        let address: Address = "10.0.0.1/8".parse().unwrap();
        let plain = address_report(&address, AddressReportStyle::Binary, &BitTheme::default());
        let emphasized = address_report(
            &address,
            AddressReportStyle::EmphasizedBinary,
            &BitTheme::default(),
        );

        assert_eq!(plain, emphasized);
    }

    #[test]
    fn subnet_report_includes_bounds_and_size() {
        let subnet: Subnet = "10.0.0.0/8".parse().unwrap();
        let report = subnet_report(&subnet, CountFormat::Grouped);

        let lines: Vec<_> = report.lines().collect();
        assert_eq!(
            lines,
            [
                "CIDR     : 10.0.0.0/8",
                "First IP : 10.0.0.0",
                "Last IP  : 10.255.255.255",
                "Size     : 16,777,216",
            ]
        );
    }
}
