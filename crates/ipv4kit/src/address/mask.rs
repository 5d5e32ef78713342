use std::fmt::{Display, Formatter};

use super::octets;
use crate::{binary::BinarySpans, error::Error};

/// An IPv4 subnet mask derived from a prefix length.
///
/// The 32-bit mask value always consists of exactly `prefix_length` leading
/// one-bits followed by zero-bits: `/0` is all zeros and `/32` is all ones.
/// Masks are immutable; an address that changes its prefix length replaces
/// its mask wholesale.
///
/// # Examples
///
/// ```
/// # use ipv4kit::Mask;
/// # fn main() -> Result<(), ipv4kit::Error> {
/// let mask = Mask::from_prefix_length(24)?;
/// assert_eq!(mask.value(), 0xffff_ff00);
/// assert_eq!(mask.octets(), [255, 255, 255, 0]);
/// assert_eq!(mask.network_size(), 256);
/// assert_eq!(mask.to_string(), "255.255.255.0");
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mask {
    prefix_length: u8,
}

impl Mask {
    /// The number of bits in an IPv4 address.
    pub const BITS: u8 = 32;

    /// The mask of a host route, `/32`.
    pub const HOST: Self = Self { prefix_length: 32 };

    /// The mask of the default route, `/0`.
    pub const DEFAULT_ROUTE: Self = Self { prefix_length: 0 };

    /// Creates a mask from a prefix length.
    ///
    /// Fails with [`Error::InvalidArgument`] when `prefix_length` exceeds 32.
    pub fn from_prefix_length(prefix_length: u8) -> Result<Self, Error> {
        if prefix_length > Self::BITS {
            Err(Error::InvalidArgument("prefix length must be at most 32"))
        } else {
            Ok(Self { prefix_length })
        }
    }

    /// Returns the prefix length, the count of leading one-bits.
    pub const fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Returns the 32-bit mask value.
    pub const fn value(&self) -> u32 {
        if self.prefix_length == 0 {
            0
        } else {
            u32::MAX << (Self::BITS - self.prefix_length)
        }
    }

    /// Returns the mask as four octets, most significant first.
    pub const fn octets(&self) -> [u8; 4] {
        octets::octets_from_value(self.value())
    }

    /// Returns the number of addresses covered by the mask,
    /// `2^(32 - prefix_length)`.
    ///
    /// The count is a `u64`: a `/0` mask covers `2^32` addresses, which does
    /// not fit in 32-bit unsigned arithmetic.
    pub const fn network_size(&self) -> u64 {
        1u64 << (Self::BITS - self.prefix_length)
    }

    /// Lists all 33 masks, from `/0` through `/32`.
    pub fn all() -> Vec<Mask> {
        (0..=Self::BITS)
            .map(|prefix_length| Self { prefix_length })
            .collect()
    }

    /// Renders the mask as 8-bit binary groups joined by `separator`.
    pub fn to_binary(&self, separator: &str) -> String {
        crate::binary::to_binary(self.octets(), separator)
    }

    /// Splits the mask's binary rendering into network and host spans.
    ///
    /// See [`BinarySpans`] for the separator placement rules.
    pub fn binary_spans(&self, separator: &str) -> BinarySpans {
        BinarySpans::new(self.octets(), self.prefix_length, separator)
    }
}

impl Display for Mask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let octets = self.octets();
        write!(f, "{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
    }
}

impl TryFrom<u8> for Mask {
    type Error = Error;

    fn try_from(prefix_length: u8) -> Result<Self, Self::Error> {
        Self::from_prefix_length(prefix_length)
    }
}
