//! Mapping from the core's binary span model to terminal styling.

use colored::{Color, Colorize};
use ipv4kit::BinarySpans;

/// How to paint the two spans of an emphasized binary rendering.
///
/// The defaults match the classic scheme: bright magenta network bits,
/// bright cyan host bits, nothing dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTheme {
    /// Color of the network-bit span.
    pub network: Color,
    /// Color of the host-bit span.
    pub host: Color,
    /// Dim the network-bit span.
    pub dim_network: bool,
    /// Dim the host-bit span.
    pub dim_host: bool,
}

impl Default for BitTheme {
    fn default() -> Self {
        Self {
            network: Color::BrightMagenta,
            host: Color::BrightCyan,
            dim_network: false,
            dim_host: false,
        }
    }
}

/// Applies a theme to a pair of binary spans, producing a styled string.
pub fn emphasize(spans: &BinarySpans, theme: &BitTheme) -> String {
    let mut network = spans.network.color(theme.network);
    if theme.dim_network {
        network = network.dimmed();
    }

    let mut host = spans.host.color(theme.host);
    if theme.dim_host {
        host = host.dimmed();
    }

    format!("{network}{host}")
}

#[cfg(test)]
mod tests {
    use ipv4kit::Address;

    use super::*;

    #[test]
    fn emphasize_concatenates_network_then_host() {
        // disable coloring so the output is stable regardless of tty
        colored::control::set_override(false);

        let address: Address = "192.168.1.130/20".parse().unwrap();
        let spans = address.binary_spans(".");

        let styled = emphasize(&spans, &BitTheme::default());
        assert_eq!(styled, spans.plain());
        assert_eq!(styled, "11000000.10101000.00000001.10000010");
    }

    #[test]
    fn dim_flags_do_not_reorder_spans() {
        colored::control::set_override(false);

        let address: Address = "10.0.0.1/8".parse().unwrap();
        let spans = address.binary_spans(" ");
        let theme = BitTheme {
            dim_network: true,
            dim_host: true,
            ..BitTheme::default()
        };

        assert_eq!(emphasize(&spans, &theme), spans.plain());
    }
}
