//! The DNS question section.

use crate::class::{Class, RecordClass};
use crate::error::Result;
use crate::name::{parse_name, Name, NameCompressor};
use crate::rtype::{RecordType, Type};
use crate::wire::WireReader;
use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A DNS question: the name, type, and class being asked about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// The domain name being queried.
    pub name: Name,
    /// The type of record being requested.
    pub qtype: Type,
    /// The class of the query (almost always IN).
    pub qclass: Class,
}

impl Question {
    /// Creates a new question.
    #[inline]
    pub fn new(name: Name, qtype: RecordType, qclass: RecordClass) -> Self {
        Self {
            name,
            qtype: Type::Known(qtype),
            qclass: Class::Known(qclass),
        }
    }

    /// Creates a question for an A record lookup.
    #[inline]
    pub fn a(name: Name) -> Self {
        Self::new(name, RecordType::A, RecordClass::IN)
    }

    /// Creates a question for an AAAA record lookup.
    #[inline]
    pub fn aaaa(name: Name) -> Self {
        Self::new(name, RecordType::AAAA, RecordClass::IN)
    }

    /// Creates a question for an MX record lookup.
    #[inline]
    pub fn mx(name: Name) -> Self {
        Self::new(name, RecordType::MX, RecordClass::IN)
    }

    pub(crate) fn decode(reader: &mut WireReader<'_>) -> Result<Self> {
        let name = parse_name(reader)?;
        let qtype = Type::from_u16(reader.read_u16()?);
        let qclass = Class::from_u16(reader.read_u16()?);

        Ok(Self {
            name,
            qtype,
            qclass,
        })
    }

    pub(crate) fn encode(&self, buf: &mut BytesMut, compressor: &mut NameCompressor) {
        compressor.write_name(buf, &self.name);
        buf.put_u16(self.qtype.to_u16());
        buf.put_u16(self.qclass.to_u16());
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.qclass, self.qtype)
    }
}
