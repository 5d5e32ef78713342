//! Binary renderings of 32-bit addresses and their network/host bit split.

/// Renders four octets as 8-bit binary groups joined by `separator`.
pub(crate) fn to_binary(octets: [u8; 4], separator: &str) -> String {
    octets
        .map(|octet| format!("{octet:08b}"))
        .join(separator)
}

/// The binary rendering of a 32-bit value, split at the prefix length into
/// a network-bit span and a host-bit span.
///
/// Separators are inserted at every absolute 8-bit boundary (after bits 8,
/// 16, and 24), so octet boundaries stay aligned to the original 32-bit
/// layout rather than to the split point: the first separator inside the
/// host span falls `8 - (prefix_length mod 8)` bits after the split. A
/// boundary that coincides with the split belongs to the network span.
///
/// The spans carry no styling. Terminal emphasis is applied by a separate
/// renderer, which keeps escape sequences out of the core entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySpans {
    /// The leading `prefix_length` bits, with any embedded separators.
    pub network: String,
    /// The trailing `32 - prefix_length` bits, with any embedded separators.
    pub host: String,
}

impl BinarySpans {
    pub(crate) fn new(octets: [u8; 4], prefix_length: u8, separator: &str) -> Self {
        let prefix_length = usize::from(prefix_length);
        let mut network = String::new();
        let mut host = String::new();

        for bit in 0..32 {
            if bit > 0 && bit % 8 == 0 {
                let span = if bit <= prefix_length { &mut network } else { &mut host };
                span.push_str(separator);
            }

            let value = (octets[bit / 8] >> (7 - bit % 8)) & 1;
            let span = if bit < prefix_length { &mut network } else { &mut host };
            span.push(if value == 1 { '1' } else { '0' });
        }

        Self { network, host }
    }

    /// Concatenates the two spans without any styling.
    pub fn plain(&self) -> String {
        format!("{}{}", self.network, self.host)
    }
}
