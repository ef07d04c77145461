//! The DNS header flags word.
//!
//! The second 16 bits of a DNS header pack the QR bit, the opcode, four
//! boolean flags, three reserved bits, and the response code:
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

use crate::opcode::OpCode;
use crate::rcode::ResponseCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a message is a query or a response (the QR bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    /// A query (QR = 0).
    Query,
    /// A response (QR = 1).
    Response,
}

/// The 16-bit DNS header flags word.
///
/// Stored as the raw wire value so that reserved bits and unassigned
/// opcode/rcode values round-trip verbatim. Accessors decode individual
/// fields; the `with_*` setters replace one field and preserve every
/// other bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Flags(u16);

const QR_BIT: u8 = 15;
const AA_BIT: u8 = 10;
const TC_BIT: u8 = 9;
const RD_BIT: u8 = 8;
const RA_BIT: u8 = 7;

const OPCODE_SHIFT: u8 = 11;
const OPCODE_MASK: u16 = 0xF << OPCODE_SHIFT;
const RCODE_MASK: u16 = 0xF;

impl Flags {
    /// Creates a flags word from its raw wire value.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw wire value.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    const fn bool_in_bit(self, bit: u8) -> bool {
        self.0 & (1 << bit) != 0
    }

    #[inline]
    const fn with_bool_in_bit(self, bit: u8, value: bool) -> Self {
        if value {
            Self(self.0 | (1 << bit))
        } else {
            Self(self.0 & !(1 << bit))
        }
    }

    /// Returns whether the message is a query or a response.
    #[inline]
    pub const fn message_type(self) -> MessageType {
        if self.bool_in_bit(QR_BIT) {
            MessageType::Response
        } else {
            MessageType::Query
        }
    }

    /// Returns a copy with the QR bit set for `mtype`.
    #[inline]
    #[must_use]
    pub const fn with_message_type(self, mtype: MessageType) -> Self {
        self.with_bool_in_bit(QR_BIT, matches!(mtype, MessageType::Response))
    }

    /// Returns the operation code.
    #[inline]
    pub fn opcode(self) -> OpCode {
        OpCode::from(((self.0 >> OPCODE_SHIFT) & 0xF) as u8)
    }

    /// Returns a copy with the opcode replaced.
    #[inline]
    #[must_use]
    pub fn with_opcode(self, opcode: OpCode) -> Self {
        let value = u16::from(opcode.to_u8() & 0xF) << OPCODE_SHIFT;
        Self(self.0 & !OPCODE_MASK | value)
    }

    /// Returns true if the responding server is authoritative (AA).
    #[inline]
    pub const fn authoritative(self) -> bool {
        self.bool_in_bit(AA_BIT)
    }

    /// Returns a copy with the AA bit replaced.
    #[inline]
    #[must_use]
    pub const fn with_authoritative(self, value: bool) -> Self {
        self.with_bool_in_bit(AA_BIT, value)
    }

    /// Returns true if the message was truncated (TC).
    #[inline]
    pub const fn truncated(self) -> bool {
        self.bool_in_bit(TC_BIT)
    }

    /// Returns a copy with the TC bit replaced.
    #[inline]
    #[must_use]
    pub const fn with_truncated(self, value: bool) -> Self {
        self.with_bool_in_bit(TC_BIT, value)
    }

    /// Returns true if the client wants recursive resolution (RD).
    #[inline]
    pub const fn recursion_desired(self) -> bool {
        self.bool_in_bit(RD_BIT)
    }

    /// Returns a copy with the RD bit replaced.
    #[inline]
    #[must_use]
    pub const fn with_recursion_desired(self, value: bool) -> Self {
        self.with_bool_in_bit(RD_BIT, value)
    }

    /// Returns true if the server supports recursion (RA).
    #[inline]
    pub const fn recursion_available(self) -> bool {
        self.bool_in_bit(RA_BIT)
    }

    /// Returns a copy with the RA bit replaced.
    #[inline]
    #[must_use]
    pub const fn with_recursion_available(self, value: bool) -> Self {
        self.with_bool_in_bit(RA_BIT, value)
    }

    /// Returns the response code.
    #[inline]
    pub fn response_code(self) -> ResponseCode {
        ResponseCode::from((self.0 & RCODE_MASK) as u8)
    }

    /// Returns a copy with the response code replaced.
    #[inline]
    #[must_use]
    pub fn with_response_code(self, rcode: ResponseCode) -> Self {
        Self(self.0 & !RCODE_MASK | u16::from(rcode.to_u8() & 0xF))
    }
}

impl From<u16> for Flags {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<Flags> for u16 {
    fn from(flags: Flags) -> Self {
        flags.0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.opcode(), self.response_code())?;
        if matches!(self.message_type(), MessageType::Response) {
            write!(f, " QR")?;
        }
        if self.authoritative() {
            write!(f, " AA")?;
        }
        if self.truncated() {
            write!(f, " TC")?;
        }
        if self.recursion_desired() {
            write!(f, " RD")?;
        }
        if self.recursion_available() {
            write!(f, " RA")?;
        }
        Ok(())
    }
}
