//! Normalized IPv4 subnets: division into equal children and
//! least-common-supernet summarization.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    address::{octets, Address, AddressParseError, Mask},
    error::Error,
};

/// A contiguous IPv4 address range in CIDR form.
///
/// The stored network address is always normalized: host bits are cleared
/// at every construction point and at every prefix-length change, so
/// `subnet.network_address() == subnet.network_address().network_id()`
/// holds unconditionally.
///
/// # Examples
///
/// ```
/// # use ipv4kit::Subnet;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let subnet: Subnet = "192.168.1.0/24".parse()?;
/// let children = subnet.divide(2)?;
/// assert_eq!(children.len(), 4);
/// assert_eq!(children[1].to_string(), "192.168.1.64/26");
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subnet {
    network_address: Address,
}

impl Subnet {
    /// Creates a subnet from four octets and a prefix length, clearing any
    /// host bits that are set.
    ///
    /// Fails with [`Error::InvalidArgument`] when `prefix_length` exceeds 32.
    pub fn new(octets: [u8; 4], prefix_length: u8) -> Result<Self, Error> {
        Ok(Self::from_address(Address::new(octets, prefix_length)?))
    }

    /// Creates the subnet covering `address` at the address's own prefix
    /// length, i.e. the subnet whose network id is `address.network_id()`.
    pub fn from_address(address: Address) -> Self {
        Self {
            network_address: address.network_id(),
        }
    }

    /// Returns the normalized network address.
    pub const fn network_address(&self) -> Address {
        self.network_address
    }

    /// Returns the subnet mask.
    pub const fn mask(&self) -> Mask {
        self.network_address.mask()
    }

    /// Returns the prefix length.
    pub const fn prefix_length(&self) -> u8 {
        self.network_address.prefix_length()
    }

    /// Returns the number of addresses in the subnet.
    pub const fn size(&self) -> u64 {
        self.mask().network_size()
    }

    /// Returns the first address of the range, the network address itself.
    pub const fn first_ip(&self) -> Address {
        self.network_address
    }

    /// Returns the last address of the range, with all host bits set.
    ///
    /// At `/31` and `/32` this degenerates to the adjacent or the same
    /// address; it is still the exact upper bound of the range.
    pub fn last_ip(&self) -> Address {
        let value = self.network_address.value() | !self.mask().value();
        Address::from_parts(octets::octets_from_value(value), self.mask())
    }

    /// Returns the CIDR notation of the subnet, `a.b.c.d/p`.
    pub fn cidr(&self) -> String {
        self.to_string()
    }

    /// Returns the same range re-masked to a different prefix length.
    ///
    /// Unlike [`Address::with_prefix_length`], this renormalizes: host bits
    /// exposed by a shorter prefix are cleared.
    pub fn with_prefix_length(&self, prefix_length: u8) -> Result<Self, Error> {
        Ok(Self::from_address(
            self.network_address.with_prefix_length(prefix_length)?,
        ))
    }

    /// Splits the subnet into `2^bits` equal children of prefix length
    /// `prefix_length + bits`, in ascending network-address order.
    ///
    /// Fails with [`Error::InvalidArgument`] when `bits` is 0 or greater
    /// than 32, and with [`Error::Overflow`] when the children would need
    /// more than 32 network bits.
    pub fn divide(&self, bits: u8) -> Result<Vec<Subnet>, Error> {
        if bits == 0 || bits > Mask::BITS {
            return Err(Error::InvalidArgument("bits must be between 1 and 32"));
        }
        if u32::from(self.prefix_length()) + u32::from(bits) > u32::from(Mask::BITS) {
            return Err(Error::Overflow);
        }

        self.divide_by(1u64 << bits)
    }

    /// Splits the subnet into `divisor` equal children.
    ///
    /// Fails with [`Error::InvalidArgument`] unless `divisor` is a power of
    /// two between 2 and the subnet size.
    pub fn divide_by(&self, divisor: u64) -> Result<Vec<Subnet>, Error> {
        if divisor < 2 || !divisor.is_power_of_two() || divisor > self.size() {
            return Err(Error::InvalidArgument(
                "divisor must be a power of two between 2 and the subnet size",
            ));
        }

        let bits = divisor.trailing_zeros() as u8;
        let child_prefix_length = self.prefix_length() + bits;
        let child_mask = Mask::from_prefix_length(child_prefix_length)?;
        // number of host bits remaining after the split; the new network
        // bits occupy the positions immediately after the parent's
        let offset = u32::from(Mask::BITS - child_prefix_length);
        let parent_value = self.network_address.value();

        tracing::trace!(parent = %self, divisor, "dividing subnet");

        Ok((0..divisor)
            .map(|child| {
                let value = parent_value + ((child as u32) << offset);
                Self {
                    network_address: Address::from_parts(
                        octets::octets_from_value(value),
                        child_mask,
                    ),
                }
            })
            .collect())
    }

    /// Iterates over every address in the range, ascending, each carrying
    /// the subnet's prefix length.
    ///
    /// A `/0` subnet yields `2^32` addresses; bounding how much of the
    /// range is consumed is the caller's responsibility.
    pub fn addresses(&self) -> Addresses {
        Addresses {
            base: self.network_address.value(),
            mask: self.mask(),
            index: 0,
            size: self.size(),
        }
    }

    /// Computes the smallest subnet containing every network id in
    /// `subnets`: the bitwise longest common prefix of the members'
    /// network addresses, which may be shorter than any member's own
    /// prefix length.
    ///
    /// Fails with [`Error::InvalidArgument`] when `subnets` is empty.
    pub fn summarize(subnets: &[Subnet]) -> Result<Subnet, Error> {
        let (first, rest) = subnets
            .split_first()
            .ok_or(Error::InvalidArgument("cannot summarize an empty set of subnets"))?;

        tracing::trace!(count = subnets.len(), "summarizing subnets");

        let reference = first.network_address.value();
        let disagreement = rest.iter().fold(0u32, |acc, subnet| {
            acc | (reference ^ subnet.network_address.value())
        });

        // count of leading bits on which every member agrees
        let prefix_length = disagreement.leading_zeros() as u8;
        let mask = Mask::from_prefix_length(prefix_length)?;

        Ok(Self {
            network_address: Address::from_parts(
                octets::octets_from_value(reference & mask.value()),
                mask,
            ),
        })
    }

    /// Generates a random, normalized subnet with a uniform prefix length
    /// in `0..=32`. Sample generation only.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_address(Address::random(rng))
    }
}

impl Display for Subnet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.network_address, self.prefix_length())
    }
}

impl FromStr for Subnet {
    type Err = AddressParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        Ok(Self::from_address(Address::parse_cidr(&stripped)?))
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Iterator over every address of a subnet, in ascending order.
///
/// The cursor is a `u64` so that the full `/0` range of `2^32` addresses
/// can be traversed without wraparound.
#[derive(Debug, Clone)]
pub struct Addresses {
    base: u32,
    mask: Mask,
    index: u64,
    size: u64,
}

impl Addresses {
    /// Returns the number of addresses remaining.
    pub const fn len(&self) -> u64 {
        self.size - self.index
    }

    /// Returns true when the iterator is exhausted.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for Addresses {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.size {
            return None;
        }

        let value = self.base + self.index as u32;
        self.index += 1;
        Some(Address::from_parts(
            octets::octets_from_value(value),
            self.mask,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.len()) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}
