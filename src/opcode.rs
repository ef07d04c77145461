//! DNS operation codes.
//!
//! OpCodes specify the kind of query in a DNS message header.
//! Defined in RFC 1035 Section 4.1.1.

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};

/// DNS operation code.
///
/// Occupies bits 11..=14 of the flags word. Values outside the
/// documented set are preserved verbatim through a round trip.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum OpCode {
    /// Standard query (QUERY) - RFC 1035
    StandardQuery = 0,

    /// Inverse query (IQUERY) - RFC 1035 (obsoleted by RFC 3425)
    InverseQuery = 1,

    /// Server status request (STATUS) - RFC 1035
    ServerStatusRequest = 2,

    /// Unassigned or reserved opcode value.
    #[num_enum(catch_all)]
    Unassigned(u8),
}

impl OpCode {
    /// Returns the numeric value of the opcode.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::StandardQuery => 0,
            Self::InverseQuery => 1,
            Self::ServerStatusRequest => 2,
            Self::Unassigned(v) => v,
        }
    }

    /// Returns the human-readable name of the opcode.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StandardQuery => "QUERY",
            Self::InverseQuery => "IQUERY",
            Self::ServerStatusRequest => "STATUS",
            Self::Unassigned(_) => "UNASSIGNED",
        }
    }
}

impl std::fmt::Display for OpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unassigned(v) => write!(f, "OPCODE{v}"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl Default for OpCode {
    fn default() -> Self {
        Self::StandardQuery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(OpCode::StandardQuery.to_u8(), 0);
        assert_eq!(OpCode::InverseQuery.to_u8(), 1);
        assert_eq!(OpCode::ServerStatusRequest.to_u8(), 2);
    }

    #[test]
    fn test_unassigned_preserved() {
        let op = OpCode::from(9u8);
        assert_eq!(op, OpCode::Unassigned(9));
        assert_eq!(op.to_u8(), 9);
    }

    #[test]
    fn test_opcode_display() {
        assert_eq!(OpCode::StandardQuery.to_string(), "QUERY");
        assert_eq!(OpCode::Unassigned(7).to_string(), "OPCODE7");
    }
}
