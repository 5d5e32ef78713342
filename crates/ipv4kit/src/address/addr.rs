use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    net::Ipv4Addr,
    str::FromStr,
};

use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::{error::AddressKind, octets, AddressParseError, Mask};
use crate::{binary::BinarySpans, error::Error, subnet::Subnet};

/// An IPv4 address with an associated prefix length.
///
/// The prefix length defaults to 32 (a host route) when not given. An
/// address fully owns its [`Mask`]; replacing the prefix length via
/// [`with_prefix_length`][Self::with_prefix_length] swaps the mask without
/// touching the stored octets, so callers wanting a normalized network
/// address re-mask explicitly through [`network_id`][Self::network_id].
///
/// # Examples
///
/// ```
/// # use ipv4kit::Address;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let address: Address = "192.168.1.42/24".parse()?;
/// assert_eq!(address.network_id().to_string(), "192.168.1.0");
/// assert_eq!(address.host_id().to_string(), "0.0.0.42");
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    octets: [u8; 4],
    mask: Mask,
}

impl Address {
    /// Creates an address from four octets and a prefix length.
    ///
    /// Fails with [`Error::InvalidArgument`] when `prefix_length` exceeds 32.
    pub fn new(octets: [u8; 4], prefix_length: u8) -> Result<Self, Error> {
        Ok(Self {
            octets,
            mask: Mask::from_prefix_length(prefix_length)?,
        })
    }

    /// Creates a host-route (`/32`) address from four octets.
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self {
            octets,
            mask: Mask::HOST,
        }
    }

    /// Creates an address from its 32-bit value and a prefix length.
    pub fn from_value(value: u32, prefix_length: u8) -> Result<Self, Error> {
        Self::new(octets::octets_from_value(value), prefix_length)
    }

    pub(crate) const fn from_parts(octets: [u8; 4], mask: Mask) -> Self {
        Self { octets, mask }
    }

    /// Returns the four octets, most significant first.
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Returns the 32-bit value of the address.
    pub const fn value(&self) -> u32 {
        octets::value_from_octets(self.octets)
    }

    /// Returns the subnet mask associated with the address.
    pub const fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the prefix length of the associated mask.
    pub const fn prefix_length(&self) -> u8 {
        self.mask.prefix_length()
    }

    /// Returns the same octets under a different prefix length.
    ///
    /// The octets are not re-masked: `"10.1.2.3/24"` with prefix length 16
    /// is `10.1.2.3/16`, not `10.1.0.0/16`. Apply
    /// [`network_id`][Self::network_id] afterwards to normalize.
    pub fn with_prefix_length(&self, prefix_length: u8) -> Result<Self, Error> {
        Ok(Self {
            octets: self.octets,
            mask: Mask::from_prefix_length(prefix_length)?,
        })
    }

    /// Returns the address with all host bits cleared, under the same mask.
    pub fn network_id(&self) -> Self {
        Self::from_parts(
            octets::octets_from_value(self.value() & self.mask.value()),
            self.mask,
        )
    }

    /// Returns the address with all network bits cleared, under the same mask.
    pub fn host_id(&self) -> Self {
        Self::from_parts(
            octets::octets_from_value(self.value() & !self.mask.value()),
            self.mask,
        )
    }

    /// Returns true when no host bit is set.
    pub fn is_network_id(&self) -> bool {
        self.value() & !self.mask.value() == 0
    }

    /// Returns true when no network bit is set.
    pub fn is_host_id(&self) -> bool {
        self.value() & self.mask.value() == 0
    }

    /// Returns the full ancestor chain of the address: the subnet covering
    /// it under every prefix length, ordered from the host route (`/32`)
    /// down to the default route (`/0`). Always 33 subnets.
    pub fn all_covering_subnets(&self) -> Vec<Subnet> {
        Mask::all()
            .into_iter()
            .rev()
            .map(|mask| Subnet::from_address(Self::from_parts(self.octets, mask)))
            .collect()
    }

    /// Generates an address with four independently uniform octets and a
    /// uniform prefix length in `0..=32`.
    ///
    /// Intended for sample generation only; the distribution carries no
    /// cryptographic significance.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let prefix_length = rng.gen_range(0..=Mask::BITS);
        Self {
            octets: rng.gen(),
            mask: Mask::from_prefix_length(prefix_length).expect("prefix length is in range"),
        }
    }

    /// Renders the address as 8-bit binary groups joined by `separator`.
    pub fn to_binary(&self, separator: &str) -> String {
        crate::binary::to_binary(self.octets, separator)
    }

    /// Splits the address's binary rendering into network and host spans.
    ///
    /// See [`BinarySpans`] for the separator placement rules.
    pub fn binary_spans(&self, separator: &str) -> BinarySpans {
        BinarySpans::new(self.octets, self.prefix_length(), separator)
    }

    /// Parses CIDR text, rejecting plain dotted-decimal without a prefix.
    pub(crate) fn parse_cidr(text: &str) -> Result<Self, AddressParseError> {
        if text.contains('/') {
            text.parse()
        } else {
            Err(AddressKind::Cidr.into())
        }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.octets[0], self.octets[1], self.octets[2], self.octets[3]
        )
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.split_once('/') {
            None => {
                let octets = parse_octets(text).ok_or(AddressKind::Address)?;
                Ok(Self::from_octets(octets))
            }
            Some((address, prefix)) => {
                let octets = parse_octets(address).ok_or(AddressKind::Cidr)?;
                let prefix_length = parse_decimal(prefix, 32).ok_or(AddressKind::Cidr)?;
                Ok(Self::from_parts(
                    octets,
                    Mask::from_prefix_length(prefix_length as u8)
                        .map_err(|_| AddressKind::Cidr)?,
                ))
            }
        }
    }
}

/// Ordering is big-endian over the octets, equivalent to comparing the
/// 32-bit values; the prefix length breaks ties so that ordering stays
/// consistent with equality.
impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.octets
            .cmp(&other.octets)
            .then_with(|| self.prefix_length().cmp(&other.prefix_length()))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Ipv4Addr> for Address {
    fn from(value: Ipv4Addr) -> Self {
        Self::from_octets(value.octets())
    }
}

impl From<Address> for Ipv4Addr {
    fn from(value: Address) -> Self {
        Ipv4Addr::from(value.octets())
    }
}

impl From<Address> for u32 {
    fn from(value: Address) -> Self {
        value.value()
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}/{}", self, self.prefix_length()))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

fn parse_octets(text: &str) -> Option<[u8; 4]> {
    let mut parts = text.split('.');
    let octets = [
        parse_decimal(parts.next()?, 255)? as u8,
        parse_decimal(parts.next()?, 255)? as u8,
        parse_decimal(parts.next()?, 255)? as u8,
        parse_decimal(parts.next()?, 255)? as u8,
    ];

    parts.next().is_none().then_some(octets)
}

// Strict decimal field: 1-3 ASCII digits, no leading zero on multi-digit
// values, at most `max`. Whitespace and signs are rejected by the digit
// check.
fn parse_decimal(text: &str, max: u32) -> Option<u32> {
    if text.is_empty() || text.len() > 3 || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }

    let value: u32 = text.parse().ok()?;
    (value <= max).then_some(value)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use test_utils::param_test;

    use super::*;

    param_test! {
        parses_valid_addresses: [
            host_route_default: ("10.0.0.1", [10, 0, 0, 1], 32),
            zeros: ("0.0.0.0", [0, 0, 0, 0], 32),
            octet_maximums: ("255.255.255.255", [255, 255, 255, 255], 32),
            with_prefix: ("192.168.1.42/24", [192, 168, 1, 42], 24),
            default_route: ("0.0.0.0/0", [0, 0, 0, 0], 0),
            full_prefix: ("10.1.2.3/32", [10, 1, 2, 3], 32),
        ]
    }
    fn parses_valid_addresses(text: &str, octets: [u8; 4], prefix_length: u8) {
        let address: Address = text.parse().unwrap();
        assert_eq!(address.octets(), octets);
        assert_eq!(address.prefix_length(), prefix_length);
    }

    param_test! {
        rejects_malformed_addresses: [
            octet_too_large: ("999.1.1.1"),
            octet_256: ("256.0.0.0"),
            three_octets: ("10.0.0"),
            five_octets: ("10.0.0.0.0"),
            empty_octet: ("10..0.1"),
            leading_zero: ("10.0.0.01"),
            leading_whitespace: (" 10.0.0.1"),
            trailing_whitespace: ("10.0.0.1 "),
            embedded_sign: ("10.0.0.+1"),
            empty: (""),
            prefix_too_large: ("10.0.0.0/33"),
            prefix_leading_zero: ("10.0.0.0/08"),
            prefix_empty: ("10.0.0.0/"),
            prefix_not_numeric: ("10.0.0.0/x"),
            double_slash: ("10.0.0.0//24"),
        ]
    }
    fn rejects_malformed_addresses(text: &str) {
        assert!(text.parse::<Address>().is_err());
    }

    param_test! {
        derives_network_and_host_ids: [
            classful_c: ("192.168.1.42/24", "192.168.1.0", "0.0.0.42"),
            unaligned: ("10.1.130.7/20", "10.1.128.0", "0.0.2.7"),
            default_route: ("10.1.2.3/0", "0.0.0.0", "10.1.2.3"),
            host_route: ("10.1.2.3/32", "10.1.2.3", "0.0.0.0"),
        ]
    }
    fn derives_network_and_host_ids(text: &str, network_id: &str, host_id: &str) {
        let address: Address = text.parse().unwrap();
        assert_eq!(address.network_id().to_string(), network_id);
        assert_eq!(address.host_id().to_string(), host_id);
    }

    #[test]
    fn network_and_host_ids_partition_the_value() {
        for text in ["172.16.254.17/19", "8.8.8.8/5", "1.2.3.4/31"] {
            let address: Address = text.parse().unwrap();
            let network_id = address.network_id();
            let host_id = address.host_id();

            assert_eq!(network_id.value() & !address.mask().value(), 0);
            assert_eq!(host_id.value() & address.mask().value(), 0);
            assert_eq!(network_id.value() & host_id.value(), 0);
            assert_eq!(network_id.value() | host_id.value(), address.value());
            assert!(network_id.is_network_id());
            assert!(host_id.is_host_id());
        }
    }

    #[test]
    fn with_prefix_length_does_not_remask() {
        let address: Address = "10.1.2.3/24".parse().unwrap();
        let widened = address.with_prefix_length(16).unwrap();

        assert_eq!(widened.octets(), [10, 1, 2, 3]);
        assert_eq!(widened.prefix_length(), 16);
        assert_eq!(widened.network_id().to_string(), "10.1.0.0");
        assert!(address.with_prefix_length(33).is_err());
    }

    #[test]
    fn covering_subnets_run_from_host_route_to_default_route() {
        let address: Address = "192.168.1.42".parse().unwrap();
        let subnets = address.all_covering_subnets();

        assert_eq!(subnets.len(), 33);
        assert_eq!(subnets[0].to_string(), "192.168.1.42/32");
        assert_eq!(subnets[8].to_string(), "192.168.1.0/24");
        assert_eq!(subnets[32].to_string(), "0.0.0.0/0");
        for (i, subnet) in subnets.iter().enumerate() {
            assert_eq!(usize::from(subnet.prefix_length()), 32 - i);
            assert!(subnet.network_address().is_network_id());
        }
    }

    param_test! {
        orders_by_most_significant_octet_first: [
            first_octet: ("9.255.255.255", "10.0.0.0"),
            last_octet: ("10.0.0.1", "10.0.0.2"),
            middle_octet: ("10.0.255.0", "10.1.0.0"),
        ]
    }
    fn orders_by_most_significant_octet_first(smaller: &str, larger: &str) {
        let smaller: Address = smaller.parse().unwrap();
        let larger: Address = larger.parse().unwrap();
        assert!(smaller < larger);
        assert_eq!(smaller.cmp(&larger), smaller.value().cmp(&larger.value()));
    }

    #[test]
    fn renders_binary_forms() {
        let address: Address = "192.168.1.130/20".parse().unwrap();
        assert_eq!(address.to_binary(" "), "11000000 10101000 00000001 10000010");

        let spans = address.binary_spans(".");
        assert_eq!(spans.network, "11000000.10101000.0000");
        assert_eq!(spans.host, "0001.10000010");
    }

    #[test]
    fn random_addresses_are_always_valid() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        for _ in 0..100 {
            let address = Address::random(&mut rng);
            assert!(address.prefix_length() <= 32);
            // reparse through the strict grammar
            let cidr = format!("{}/{}", address, address.prefix_length());
            assert_eq!(cidr.parse::<Address>().unwrap(), address);
        }
    }

    #[test]
    fn serde_round_trips_as_cidr_string() {
        let address: Address = "172.16.5.9/12".parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"172.16.5.9/12\"");
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);
        assert!(serde_json::from_str::<Address>("\"999.1.1.1\"").is_err());
    }

    #[test]
    fn converts_to_and_from_std_types() {
        let address: Address = "127.0.0.1".parse().unwrap();
        assert_eq!(Ipv4Addr::from(address), Ipv4Addr::LOCALHOST);
        assert_eq!(Address::from(Ipv4Addr::LOCALHOST), address);
        assert_eq!(u32::from(address), 0x7f00_0001);
    }
}
