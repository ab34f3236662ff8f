//! Attribute type tags.

use std::fmt;

use crate::attribute_value::AttributeValue;

/// The wire type tags accepted by `attribute_type(path, tag)` assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// String.
    S,
    /// String set.
    Ss,
    /// Number.
    N,
    /// Number set.
    Ns,
    /// Binary.
    B,
    /// Binary set.
    Bs,
    /// Boolean.
    Bool,
    /// Null.
    Null,
    /// List.
    L,
    /// Map.
    M,
}

impl AttributeType {
    /// Returns the wire-format tag string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::Ss => "SS",
            Self::N => "N",
            Self::Ns => "NS",
            Self::B => "B",
            Self::Bs => "BS",
            Self::Bool => "BOOL",
            Self::Null => "NULL",
            Self::L => "L",
            Self::M => "M",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AttributeType> for AttributeValue {
    /// Type tags travel in expressions as ordinary string values.
    fn from(tag: AttributeType) -> Self {
        Self::S(tag.as_str().to_owned())
    }
}
