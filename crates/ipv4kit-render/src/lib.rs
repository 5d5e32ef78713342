//! Terminal presentation for `ipv4kit` types.
//!
//! The core crate exposes unstyled network/host bit spans and raw `u64`
//! counts; this crate maps the spans to terminal styling, formats the
//! counts for humans, and assembles multi-line detail reports. All
//! formatting choices are explicit arguments — nothing here reads or
//! writes process-wide state, and nothing in the core emits an escape
//! sequence.

pub mod quantity;
pub mod report;
pub mod style;

pub use quantity::{format_bytes, format_count, ByteFormat, CountFormat};
pub use report::{address_report, subnet_report, AddressReportStyle};
pub use style::{emphasize, BitTheme};
