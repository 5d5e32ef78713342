//! Errors returned by mask construction and subnet arithmetic.

use crate::address::AddressParseError;

/// An error returned by mask construction or subnet arithmetic.
///
/// Every operation in this crate detects its errors synchronously and
/// returns them to the immediate caller; out-of-range input is never
/// clamped or truncated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The provided address or CIDR text was malformed.
    #[error(transparent)]
    Parse(#[from] AddressParseError),
    /// An argument was outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The operation would require more than 32 network bits.
    #[error("network bits would exceed 32")]
    Overflow,
}
