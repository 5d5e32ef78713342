use std::fmt::Display;

/// An error which can be returned when parsing IPv4 address or CIDR text.
#[derive(Eq, PartialEq, Clone, Debug, thiserror::Error)]
pub struct AddressParseError(pub(super) AddressKind);

impl Display for AddressParseError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self.0 {
            AddressKind::Address => "invalid dotted-decimal IPv4 address syntax",
            AddressKind::Cidr => "invalid CIDR subnet syntax",
        };

        fmt.write_str(description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AddressKind {
    Address,
    Cidr,
}

impl From<AddressKind> for AddressParseError {
    fn from(value: AddressKind) -> Self {
        Self(value)
    }
}
