//! Conversions between the 4-octet and 32-bit forms of an IPv4 address.
//!
//! Octets are ordered most significant first, matching the dotted-decimal
//! notation `a.b.c.d`.

/// Packs four octets, most significant first, into a 32-bit value.
///
/// # Examples
///
/// ```
/// # use ipv4kit::address::octets::value_from_octets;
/// assert_eq!(value_from_octets([192, 168, 1, 0]), 0xc0a8_0100);
/// ```
pub const fn value_from_octets(octets: [u8; 4]) -> u32 {
    u32::from_be_bytes(octets)
}

/// Unpacks a 32-bit value into four octets, most significant first.
///
/// # Examples
///
/// ```
/// # use ipv4kit::address::octets::octets_from_value;
/// assert_eq!(octets_from_value(0xc0a8_0100), [192, 168, 1, 0]);
/// ```
pub const fn octets_from_value(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use test_utils::param_test;

    use super::*;

    param_test! {
        converts_between_forms: [
            zero: ([0, 0, 0, 0], 0),
            loopback: ([127, 0, 0, 1], 0x7f00_0001),
            private: ([10, 0, 1, 2], 0x0a00_0102),
            broadcast: ([255, 255, 255, 255], u32::MAX),
            single_octet_significance: ([0, 0, 1, 0], 256),
        ]
    }
    fn converts_between_forms(octets: [u8; 4], value: u32) {
        assert_eq!(value_from_octets(octets), value);
        assert_eq!(octets_from_value(value), octets);
    }
}
