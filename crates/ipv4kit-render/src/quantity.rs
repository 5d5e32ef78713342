//! Human-oriented formatting of address counts and byte quantities.
//!
//! The formatting mode is an explicit argument at every call site rather
//! than a process-wide toggle, so two callers can render the same value
//! differently without coordinating.

/// How to render an address count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountFormat {
    /// Plain digits: `4294967296`.
    Plain,
    /// Digits grouped in thousands: `4,294,967,296`.
    #[default]
    Grouped,
    /// Magnitude-suffixed with a factor of 1000 per step: `4.3 B`.
    Human,
}

/// How to render a byte quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteFormat {
    /// Plain digits: `1048576`.
    Plain,
    /// Digits grouped in thousands: `1,048,576`.
    Grouped,
    /// Magnitude-suffixed with a factor of 1024 per step: `1.0 MB`.
    #[default]
    Human,
}

const COUNT_SUFFIXES: [&str; 7] = ["", " K", " M", " B", " T", " q", " Q"];
const BYTE_SUFFIXES: [&str; 7] = [" B", " KB", " MB", " GB", " TB", " PB", " EB"];

/// Formats an address count, e.g. a subnet's `network_size`.
pub fn format_count(count: u64, format: CountFormat) -> String {
    match format {
        CountFormat::Plain => count.to_string(),
        CountFormat::Grouped => group_thousands(count),
        CountFormat::Human => scaled(count, 1000.0, &COUNT_SUFFIXES),
    }
}

/// Formats a byte quantity.
pub fn format_bytes(bytes: u64, format: ByteFormat) -> String {
    match format {
        ByteFormat::Plain => bytes.to_string(),
        ByteFormat::Grouped => group_thousands(bytes),
        ByteFormat::Human => scaled(bytes, 1024.0, &BYTE_SUFFIXES),
    }
}

fn scaled(value: u64, step: f64, suffixes: &[&str; 7]) -> String {
    let mut value = value as f64;
    let mut order = 0;

    while value >= step && order + 1 < suffixes.len() {
        value /= step;
        order += 1;
    }

    format!("{value:.1}{}", suffixes[order])
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use test_utils::param_test;

    use super::*;

    param_test! {
        formats_counts: [
            plain: (4_294_967_296, CountFormat::Plain, "4294967296"),
            grouped: (4_294_967_296, CountFormat::Grouped, "4,294,967,296"),
            grouped_small: (256, CountFormat::Grouped, "256"),
            grouped_exact_thousand: (1_000, CountFormat::Grouped, "1,000"),
            human_units: (256, CountFormat::Human, "256.0"),
            human_kilo: (65_536, CountFormat::Human, "65.5 K"),
            human_billions: (4_294_967_296, CountFormat::Human, "4.3 B"),
            zero: (0, CountFormat::Grouped, "0"),
        ]
    }
    fn formats_counts(count: u64, format: CountFormat, expected: &str) {
        assert_eq!(format_count(count, format), expected);
    }

    param_test! {
        formats_bytes: [
            human_bytes: (512, ByteFormat::Human, "512.0 B"),
            human_exact_megabyte: (1_048_576, ByteFormat::Human, "1.0 MB"),
            human_gigabytes: (3 * 1024 * 1024 * 1024, ByteFormat::Human, "3.0 GB"),
            grouped: (1_048_576, ByteFormat::Grouped, "1,048,576"),
            plain: (1_048_576, ByteFormat::Plain, "1048576"),
        ]
    }
    fn formats_bytes(bytes: u64, format: ByteFormat, expected: &str) {
        assert_eq!(format_bytes(bytes, format), expected);
    }
}
