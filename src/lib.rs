//! # dnswire
//!
//! This crate provides DNS message types, wire format parsing, and
//! serialization following RFC 1035.
//!
//! ## Features
//!
//! - **Bounds-safe parsing** of the full six-section message layout,
//!   including adversarial inputs (truncated buffers, compression
//!   pointer loops) without panics or unbounded work
//! - **Name compression** on the write path: repeated label suffixes
//!   anywhere in a message are emitted as two-byte backreferences, so a
//!   parse/serialize round trip never grows a message
//! - **Typed RDATA** for A, NS, CNAME, SOA, PTR, MX, TXT, and AAAA
//!   records, with unknown types preserved as opaque bytes
//! - **Verbatim round-trips**: reserved flag bits and unrecognized
//!   OPCODE/RCODE/type/class values survive reserialization unchanged
//!
//! ## Example
//!
//! ```rust
//! use bytes::BytesMut;
//! use dnswire::{Message, Name, Question, RecordClass, RecordType};
//! use std::str::FromStr;
//!
//! let question = Question::new(
//!     Name::from_str("example.com").unwrap(),
//!     RecordType::A,
//!     RecordClass::IN,
//! );
//! let query = Message::query(question);
//!
//! let mut buf = BytesMut::new();
//! query.write_to(&mut buf).unwrap();
//!
//! let parsed = Message::parse(&buf).unwrap();
//! assert_eq!(parsed.id, query.id);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod error;
pub mod flags;
pub mod message;
pub mod name;
pub mod opcode;
pub mod question;
pub mod rcode;
pub mod rdata;
pub mod record;
pub mod rtype;
pub mod wire;

// Re-exports for convenience
pub use class::{Class, RecordClass};
pub use error::{Error, Result};
pub use flags::{Flags, MessageType};
pub use message::Message;
pub use name::{Label, Name, NameCompressor};
pub use opcode::OpCode;
pub use question::Question;
pub use rcode::ResponseCode;
pub use rdata::{Mx, RData, Soa};
pub use record::Resource;
pub use rtype::{RecordType, Type};

/// Maximum length of a DNS label (63 bytes per RFC 1035).
pub const MAX_LABEL_LENGTH: usize = 63;
