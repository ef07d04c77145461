//! DNS record data (RDATA) types.
//!
//! [`RData`] is a tagged union keyed on the record type. Encoders and
//! decoders dispatch on the tag; record types without a typed variant
//! are preserved as opaque bytes.

use crate::error::{Error, Result};
use crate::name::{parse_name, Name, NameCompressor};
use crate::rtype::{RecordType, Type};
use crate::wire::{write_length_prefixed, WireReader};
use bytes::{BufMut, BytesMut};
use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Typed record data.
///
/// The variant must agree with the record's declared type when
/// serializing; a disagreement fails with
/// [`Error::MismatchedRecordType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RData {
    /// IPv4 address (A record).
    A(Ipv4Addr),
    /// IPv6 address (AAAA record).
    AAAA(Ipv6Addr),
    /// Authoritative name server (NS record).
    NS(Name),
    /// Canonical name (CNAME record).
    CNAME(Name),
    /// Domain name pointer (PTR record).
    PTR(Name),
    /// Mail exchange (MX record).
    MX(Mx),
    /// Start of authority (SOA record).
    SOA(Soa),
    /// Text strings (TXT record), one or more length-prefixed octet
    /// strings.
    TXT(Vec<Vec<u8>>),
    /// Any other record type, preserved as raw RDATA bytes.
    Unknown(Vec<u8>),
}

/// MX record data (RFC 1035).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mx {
    /// The preference (lower is more preferred).
    pub preference: u16,
    /// The mail exchange domain name.
    pub exchange: Name,
}

/// SOA record data (RFC 1035).
///
/// Refresh, retry, and expire are signed on the wire; the serial and
/// minimum TTL are unsigned. All interval fields are whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Soa {
    /// Primary name server for the zone.
    pub mname: Name,
    /// Mailbox of the person responsible for the zone.
    pub rname: Name,
    /// Zone serial number.
    pub serial: u32,
    /// Refresh interval in seconds.
    pub refresh: i32,
    /// Retry interval in seconds.
    pub retry: i32,
    /// Expire time in seconds.
    pub expire: i32,
    /// Minimum TTL in seconds.
    pub minimum: u32,
}

impl RData {
    /// Decodes RDATA of the given declared type.
    ///
    /// The reader sits at the start of the RDATA; the caller has
    /// already verified that `rdlen` bytes are available and snaps the
    /// cursor to the end of the RDATA afterwards. A and AAAA records
    /// whose RDLEN is not the address width fall back to opaque bytes.
    pub(crate) fn decode(rtype: Type, reader: &mut WireReader<'_>, rdlen: u16) -> Result<Self> {
        let rdlen = rdlen as usize;

        match rtype.known() {
            Some(RecordType::A) if rdlen == 4 => {
                let octets: [u8; 4] = reader.read_slice(4)?.try_into().unwrap();
                Ok(Self::A(Ipv4Addr::from(octets)))
            }
            Some(RecordType::AAAA) if rdlen == 16 => {
                let octets: [u8; 16] = reader.read_slice(16)?.try_into().unwrap();
                Ok(Self::AAAA(Ipv6Addr::from(octets)))
            }
            Some(RecordType::NS) => Ok(Self::NS(parse_name(reader)?)),
            Some(RecordType::CNAME) => Ok(Self::CNAME(parse_name(reader)?)),
            Some(RecordType::PTR) => Ok(Self::PTR(parse_name(reader)?)),
            Some(RecordType::MX) => {
                let preference = reader.read_u16()?;
                let exchange = parse_name(reader)?;
                Ok(Self::MX(Mx {
                    preference,
                    exchange,
                }))
            }
            Some(RecordType::SOA) => {
                let mname = parse_name(reader)?;
                let rname = parse_name(reader)?;
                let serial = reader.read_u32()?;
                let refresh = reader.read_i32()?;
                let retry = reader.read_i32()?;
                let expire = reader.read_i32()?;
                let minimum = reader.read_u32()?;
                Ok(Self::SOA(Soa {
                    mname,
                    rname,
                    serial,
                    refresh,
                    retry,
                    expire,
                    minimum,
                }))
            }
            Some(RecordType::TXT) => Self::decode_txt(reader, rdlen),
            _ => Ok(Self::Unknown(reader.read_vec(rdlen)?)),
        }
    }

    fn decode_txt(reader: &mut WireReader<'_>, rdlen: usize) -> Result<Self> {
        let end = reader.position() + rdlen;
        let mut strings = Vec::new();
        while reader.position() < end {
            let len = reader.read_u8()? as usize;
            // A string may not reach past the record's own RDATA into
            // whatever follows it.
            if reader.position() + len > end {
                return Err(Error::ShortBuffer);
            }
            strings.push(reader.read_vec(len)?);
        }
        Ok(Self::TXT(strings))
    }

    /// Encodes the RDLEN field and the RDATA body.
    ///
    /// Variable-length bodies reserve a length placeholder that is
    /// patched once the body is written, since embedded names shrink
    /// under compression.
    pub(crate) fn encode(
        &self,
        rtype: Type,
        buf: &mut BytesMut,
        compressor: &mut NameCompressor,
    ) -> Result<()> {
        match (rtype.known(), self) {
            (Some(RecordType::A), Self::A(addr)) => {
                buf.put_u16(4);
                buf.put_slice(&addr.octets());
                Ok(())
            }
            (Some(RecordType::AAAA), Self::AAAA(addr)) => {
                buf.put_u16(16);
                buf.put_slice(&addr.octets());
                Ok(())
            }
            (Some(RecordType::NS), Self::NS(name))
            | (Some(RecordType::CNAME), Self::CNAME(name))
            | (Some(RecordType::PTR), Self::PTR(name)) => write_length_prefixed(buf, |buf| {
                compressor.write_name(buf, name);
                Ok(())
            }),
            (Some(RecordType::MX), Self::MX(mx)) => write_length_prefixed(buf, |buf| {
                buf.put_u16(mx.preference);
                compressor.write_name(buf, &mx.exchange);
                Ok(())
            }),
            (Some(RecordType::SOA), Self::SOA(soa)) => write_length_prefixed(buf, |buf| {
                compressor.write_name(buf, &soa.mname);
                compressor.write_name(buf, &soa.rname);
                buf.put_u32(soa.serial);
                buf.put_i32(soa.refresh);
                buf.put_i32(soa.retry);
                buf.put_i32(soa.expire);
                buf.put_u32(soa.minimum);
                Ok(())
            }),
            (Some(RecordType::TXT), Self::TXT(strings)) => write_length_prefixed(buf, |buf| {
                for s in strings {
                    if s.is_empty() {
                        buf.put_u8(0);
                        continue;
                    }
                    for chunk in s.chunks(255) {
                        buf.put_u8(chunk.len() as u8);
                        buf.put_slice(chunk);
                    }
                }
                Ok(())
            }),
            (known, Self::Unknown(bytes)) if !has_typed_variant(known) => {
                buf.put_u16(bytes.len() as u16);
                buf.put_slice(bytes);
                Ok(())
            }
            (_, data) => Err(Error::mismatched(rtype, data.variant_name())),
        }
    }

    /// Returns the IPv4 address if this is A data.
    #[inline]
    pub fn as_a(&self) -> Option<Ipv4Addr> {
        match self {
            Self::A(addr) => Some(*addr),
            _ => None,
        }
    }

    /// Returns the IPv6 address if this is AAAA data.
    #[inline]
    pub fn as_aaaa(&self) -> Option<Ipv6Addr> {
        match self {
            Self::AAAA(addr) => Some(*addr),
            _ => None,
        }
    }

    /// Returns the target name if this is CNAME data.
    #[inline]
    pub fn as_cname(&self) -> Option<&Name> {
        match self {
            Self::CNAME(name) => Some(name),
            _ => None,
        }
    }

    const fn variant_name(&self) -> &'static str {
        match self {
            Self::A(_) => "A",
            Self::AAAA(_) => "AAAA",
            Self::NS(_) => "NS",
            Self::CNAME(_) => "CNAME",
            Self::PTR(_) => "PTR",
            Self::MX(_) => "MX",
            Self::SOA(_) => "SOA",
            Self::TXT(_) => "TXT",
            Self::Unknown(_) => "opaque",
        }
    }
}

/// Returns true if records of this type carry a typed [`RData`]
/// variant rather than opaque bytes.
const fn has_typed_variant(rtype: Option<RecordType>) -> bool {
    matches!(
        rtype,
        Some(
            RecordType::A
                | RecordType::AAAA
                | RecordType::NS
                | RecordType::CNAME
                | RecordType::PTR
                | RecordType::MX
                | RecordType::SOA
                | RecordType::TXT
        )
    )
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(addr) => write!(f, "{addr}"),
            Self::AAAA(addr) => write!(f, "{addr}"),
            Self::NS(name) | Self::CNAME(name) | Self::PTR(name) => write!(f, "{name}"),
            Self::MX(mx) => write!(f, "{mx}"),
            Self::SOA(soa) => write!(f, "{soa}"),
            Self::TXT(strings) => {
                for (i, s) in strings.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "\"")?;
                    for &byte in s {
                        if byte == b'"' || byte == b'\\' {
                            write!(f, "\\{}", byte as char)?;
                        } else if byte.is_ascii_graphic() || byte == b' ' {
                            write!(f, "{}", byte as char)?;
                        } else {
                            write!(f, "\\{byte:03}")?;
                        }
                    }
                    write!(f, "\"")?;
                }
                Ok(())
            }
            // RFC 3597 opaque format
            Self::Unknown(bytes) => {
                write!(f, "\\# {} {}", bytes.len(), HEXLOWER.encode(bytes))
            }
        }
    }
}

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname, self.rname, self.serial, self.refresh, self.retry, self.expire,
            self.minimum
        )
    }
}
