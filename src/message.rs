//! DNS message representation.
//!
//! A message is a fixed 12-byte header followed by four sections:
//! questions, answers, authority records, and additional records.
//!
//! # Wire Format
//!
//! ```text
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA| Z|      RCODE      |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    QDCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    ANCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    NSCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

use crate::error::Result;
use crate::flags::{Flags, MessageType};
use crate::name::NameCompressor;
use crate::question::Question;
use crate::record::Resource;
use crate::wire::WireReader;
use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the DNS header in bytes.
pub const HEADER_SIZE: usize = 12;

/// A complete DNS message.
///
/// A parsed message owns all of its data; nothing borrows from the
/// input buffer. Once constructed a message is a plain value and may
/// be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier for matching responses to queries.
    pub id: u16,
    /// The header flags word.
    pub flags: Flags,
    /// The question section.
    pub questions: Vec<Question>,
    /// The answer section.
    pub answers: Vec<Resource>,
    /// The authority section.
    pub authorities: Vec<Resource>,
    /// The additional section.
    pub additionals: Vec<Resource>,
}

impl Message {
    /// Creates a query for the given question with a random ID and
    /// recursion desired.
    pub fn query(question: Question) -> Self {
        Self {
            id: rand::random(),
            flags: Flags::default().with_recursion_desired(true),
            questions: vec![question],
            ..Self::default()
        }
    }

    /// Creates a response skeleton for a query: same ID, same
    /// questions, flags copied with the QR bit set to response, and
    /// empty record sections.
    pub fn response_from(query: &Message) -> Self {
        Self {
            id: query.id,
            flags: query.flags.with_message_type(MessageType::Response),
            questions: query.questions.clone(),
            ..Self::default()
        }
    }

    /// Appends an answer record.
    pub fn add_answer(&mut self, record: Resource) {
        self.answers.push(record);
    }

    /// Appends an authority record.
    pub fn add_authority(&mut self, record: Resource) {
        self.authorities.push(record);
    }

    /// Appends an additional record.
    pub fn add_additional(&mut self, record: Resource) {
        self.additionals.push(record);
    }

    /// Parses a message from wire format.
    ///
    /// All label octets and RDATA bytes are copied; the returned
    /// message does not reference `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(data);

        let id = reader.read_u16()?;
        let flags = Flags::from_bits(reader.read_u16()?);
        let num_questions = reader.read_u16()?;
        let num_answers = reader.read_u16()?;
        let num_authorities = reader.read_u16()?;
        let num_additionals = reader.read_u16()?;

        let mut questions = Vec::new();
        for _ in 0..num_questions {
            questions.push(Question::decode(&mut reader)?);
        }

        let answers = Self::parse_section(&mut reader, num_answers)?;
        let authorities = Self::parse_section(&mut reader, num_authorities)?;
        let additionals = Self::parse_section(&mut reader, num_additionals)?;

        Ok(Self {
            id,
            flags,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    fn parse_section(reader: &mut WireReader<'_>, count: u16) -> Result<Vec<Resource>> {
        let mut records = Vec::new();
        for _ in 0..count {
            records.push(Resource::decode(reader)?);
        }
        Ok(records)
    }

    /// Appends the wire representation of the message to `buf`.
    ///
    /// Section counts are computed from the section lengths, clamped
    /// to u16. One name compressor spans the whole write, so repeated
    /// suffixes anywhere in the message become backreferences. On
    /// failure the buffer's prior contents remain valid but trailing
    /// bytes may have been written.
    pub fn write_to(&self, buf: &mut BytesMut) -> Result<()> {
        let mut compressor = NameCompressor::with_base(buf.len());

        buf.put_u16(self.id);
        buf.put_u16(self.flags.bits());
        buf.put_u16(clamp_count(self.questions.len()));
        buf.put_u16(clamp_count(self.answers.len()));
        buf.put_u16(clamp_count(self.authorities.len()));
        buf.put_u16(clamp_count(self.additionals.len()));

        for question in &self.questions {
            question.encode(buf, &mut compressor);
        }
        for record in &self.answers {
            record.encode(buf, &mut compressor)?;
        }
        for record in &self.authorities {
            record.encode(buf, &mut compressor)?;
        }
        for record in &self.additionals {
            record.encode(buf, &mut compressor)?;
        }

        Ok(())
    }

    /// Serializes the message into freshly allocated bytes.
    pub fn to_wire(&self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        self.write_to(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Returns true if this is a query.
    #[inline]
    pub fn is_query(&self) -> bool {
        matches!(self.flags.message_type(), MessageType::Query)
    }

    /// Returns true if this is a response.
    #[inline]
    pub fn is_response(&self) -> bool {
        matches!(self.flags.message_type(), MessageType::Response)
    }
}

#[inline]
fn clamp_count(len: usize) -> u16 {
    len.min(usize::from(u16::MAX)) as u16
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ";; ->>HEADER<<- id: {:#06x} {}", self.id, self.flags)?;

        writeln!(f, ";; QUESTION SECTION:")?;
        for question in &self.questions {
            writeln!(f, ";{question}")?;
        }

        for (title, section) in [
            ("ANSWER", &self.answers),
            ("AUTHORITY", &self.authorities),
            ("ADDITIONAL", &self.additionals),
        ] {
            if !section.is_empty() {
                writeln!(f, ";; {title} SECTION:")?;
                for record in section {
                    writeln!(f, "{record}")?;
                }
            }
        }

        Ok(())
    }
}
