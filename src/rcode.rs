//! DNS response codes.
//!
//! Response codes indicate the status of a DNS operation.
//! Defined in RFC 1035 Section 4.1.1.

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};

/// DNS response code.
///
/// Occupies the low four bits of the flags word. Values outside the
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
pub enum ResponseCode {
    /// No error condition.
    NoError = 0,

    /// The name server was unable to interpret the query.
    FormatError = 1,

    /// The name server was unable to process the query due to a problem
    /// with the name server.
    ServerFailure = 2,

    /// The domain name referenced in the query does not exist.
    NameError = 3,

    /// The name server does not support the requested kind of query.
    NotImplemented = 4,

    /// The name server refuses to perform the operation for policy
    /// reasons.
    Refused = 5,

    /// Unassigned or reserved response code value.
    #[num_enum(catch_all)]
    Unassigned(u8),
}

impl ResponseCode {
    /// Returns the numeric value of the response code.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::NoError => 0,
            Self::FormatError => 1,
            Self::ServerFailure => 2,
            Self::NameError => 3,
            Self::NotImplemented => 4,
            Self::Refused => 5,
            Self::Unassigned(v) => v,
        }
    }

    /// Returns true if this code indicates success.
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::NoError)
    }

    /// Returns the human-readable name of the response code.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoError => "NoError",
            Self::FormatError => "FormatError",
            Self::ServerFailure => "ServerFailure",
            Self::NameError => "NameError",
            Self::NotImplemented => "NotImplemented",
            Self::Refused => "Refused",
            Self::Unassigned(_) => "Unassigned",
        }
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unassigned(v) => write!(f, "RCODE{v}"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl Default for ResponseCode {
    fn default() -> Self {
        Self::NoError
    }
}
