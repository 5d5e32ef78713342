//! IPv4 addresses and prefix-length-derived subnet masks.

mod addr;
pub use addr::Address;

mod mask;
pub use mask::Mask;

mod error;
pub use error::AddressParseError;

pub mod octets;
