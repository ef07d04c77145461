//! DNS resource records.
//!
//! A resource record is the fundamental unit of DNS data: a name, a
//! type, a class, a TTL, and type-specific data.
//!
//! # Wire Format
//!
//! ```text
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! /                      NAME                     /
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      TYPE                     |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                     CLASS                     |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      TTL                      |
//! |                                               |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                   RDLENGTH                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! /                     RDATA                     /
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

use crate::class::{Class, RecordClass};
use crate::error::{Error, Result};
use crate::name::{parse_name, Name, NameCompressor};
use crate::rdata::{Mx, RData};
use crate::rtype::{RecordType, Type};
use crate::wire::WireReader;
use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

/// A DNS resource record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    /// The domain name this record is for.
    pub name: Name,
    /// The record type.
    pub rtype: Type,
    /// The record class.
    pub rclass: Class,
    /// Time to live in seconds.
    pub ttl: u32,
    /// The record data.
    pub data: RData,
}

impl Resource {
    /// Creates a new resource record.
    pub fn new(name: Name, rtype: Type, rclass: Class, ttl: u32, data: RData) -> Self {
        Self {
            name,
            rtype,
            rclass,
            ttl,
            data,
        }
    }

    /// Creates an A record.
    pub fn a(name: Name, ttl: u32, addr: Ipv4Addr) -> Self {
        Self::new(
            name,
            Type::Known(RecordType::A),
            Class::Known(RecordClass::IN),
            ttl,
            RData::A(addr),
        )
    }

    /// Creates an AAAA record.
    pub fn aaaa(name: Name, ttl: u32, addr: Ipv6Addr) -> Self {
        Self::new(
            name,
            Type::Known(RecordType::AAAA),
            Class::Known(RecordClass::IN),
            ttl,
            RData::AAAA(addr),
        )
    }

    /// Creates a CNAME record.
    pub fn cname(name: Name, ttl: u32, target: Name) -> Self {
        Self::new(
            name,
            Type::Known(RecordType::CNAME),
            Class::Known(RecordClass::IN),
            ttl,
            RData::CNAME(target),
        )
    }

    /// Creates an MX record.
    pub fn mx(name: Name, ttl: u32, preference: u16, exchange: Name) -> Self {
        Self::new(
            name,
            Type::Known(RecordType::MX),
            Class::Known(RecordClass::IN),
            ttl,
            RData::MX(Mx {
                preference,
                exchange,
            }),
        )
    }

    /// Returns the TTL as a [`Duration`].
    #[inline]
    pub fn ttl_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.ttl))
    }

    pub(crate) fn decode(reader: &mut WireReader<'_>) -> Result<Self> {
        let name = parse_name(reader)?;
        let rtype = Type::from_u16(reader.read_u16()?);
        let rclass = Class::from_u16(reader.read_u16()?);
        let ttl = reader.read_u32()?;
        let rdlen = reader.read_u16()?;

        if (rdlen as usize) > reader.remaining() {
            return Err(Error::ShortBuffer);
        }

        let rdata_start = reader.position();
        let data = RData::decode(rtype, reader, rdlen)?;

        // An embedded name may end before RDLEN is consumed (its tail
        // compressed away); snap to the declared end of the RDATA.
        reader.set_position(rdata_start + rdlen as usize);

        Ok(Self {
            name,
            rtype,
            rclass,
            ttl,
            data,
        })
    }

    pub(crate) fn encode(&self, buf: &mut BytesMut, compressor: &mut NameCompressor) -> Result<()> {
        compressor.write_name(buf, &self.name);
        buf.put_u16(self.rtype.to_u16());
        buf.put_u16(self.rclass.to_u16());
        buf.put_u32(self.ttl);
        self.data.encode(self.rtype, buf, compressor)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.rclass, self.rtype, self.data
        )
    }
}
