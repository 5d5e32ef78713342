//! Types, parsing, and bit-exact arithmetic for IPv4 addresses, masks, and subnets.
//!
//! The crate is pure and synchronous: every operation either returns a fully
//! valid value or an error, and nothing here performs I/O or holds shared
//! mutable state. Presentation concerns (terminal styling, human-readable
//! quantities) live in the companion `ipv4kit-render` crate; this crate only
//! exposes the unstyled span model they consume.

pub mod address;
pub mod binary;
pub mod error;
pub mod subnet;

pub use address::{Address, AddressParseError, Mask};
pub use binary::BinarySpans;
pub use error::Error;
pub use subnet::{Addresses, Subnet};
