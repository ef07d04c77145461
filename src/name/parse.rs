//! Wire-format name decoding with compression support.
//!
//! Names on the wire are sequences of length-prefixed labels terminated
//! by a zero octet. A length octet with the top two bits set is instead
//! a compression pointer: its low 14 bits (together with the following
//! octet) give the message offset at which the rest of the name lives
//! (RFC 1035 Section 4.1.4).

use super::{Label, Name};
use crate::error::{Error, Result};
use crate::wire::WireReader;
use smallvec::SmallVec;

/// Maximum number of compression redirects followed for a single name.
///
/// Defends against reference loops (including self-pointers) and
/// runaway chains in malicious messages. A name is at most 255 bytes
/// including separators, so 128 is more than any honest message can
/// use.
const MAX_COMPRESSION_REDIRECTS: usize = 128;

/// Top two bits of a length octet marking a compression pointer.
const POINTER_MASK: u8 = 0b1100_0000;

/// Parses a name starting at the reader's current position.
///
/// The reader ends up just past the name as it appears at the starting
/// position: after the terminating zero, or after the two pointer
/// octets if the name was compressed. Label octets are copied, so the
/// returned name does not borrow the message buffer.
pub(crate) fn parse_name(reader: &mut WireReader<'_>) -> Result<Name> {
    let mut labels = SmallVec::new();
    parse_labels(reader, &mut labels, MAX_COMPRESSION_REDIRECTS)?;
    Ok(Name::from_raw(labels))
}

fn parse_labels(
    reader: &mut WireReader<'_>,
    labels: &mut SmallVec<[Label; 4]>,
    remaining_redirects: usize,
) -> Result<()> {
    if remaining_redirects == 0 {
        return Err(Error::InvalidCompression);
    }

    let mut len = reader.read_u8()?;
    while len > 0 {
        if len & POINTER_MASK == POINTER_MASK {
            // Re-read both octets as one u16 and mask off the flag
            // bits. The name is complete once the target resolves; no
            // further bytes are consumed from this position.
            reader.step_back();
            let offset = reader.read_u16()? & 0x3FFF;
            let mut target = reader.at(offset as usize);
            return parse_labels(&mut target, labels, remaining_redirects - 1);
        }

        if len & POINTER_MASK != 0 {
            // 0x40..=0xBF: reserved label types
            return Err(Error::InvalidCompression);
        }

        let octets = reader.read_slice(len as usize)?;
        labels.push(Label::from_octets(octets));
        len = reader.read_u8()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse_at(message: &[u8], offset: usize) -> (Result<Name>, usize) {
        let mut reader = WireReader::new(message).at(offset);
        let result = parse_name(&mut reader);
        let pos = reader.position();
        (result, pos)
    }

    #[test]
    fn test_parse_simple_name() {
        let wire = [
            3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm',
            0,
        ];

        let (name, pos) = parse_at(&wire, 0);
        assert_eq!(name.unwrap(), Name::from_str("www.example.com").unwrap());
        assert_eq!(pos, wire.len());
    }

    #[test]
    fn test_parse_root_name() {
        let (name, pos) = parse_at(&[0x00, 0xFF], 0);
        assert!(name.unwrap().is_root());
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_parse_compressed_name() {
        // offset 0: example.com.  offset 13: www.<ptr to 0>
        let wire = [
            7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, //
            3, b'w', b'w', b'w', 0xC0, 0x00,
        ];

        let (name, pos) = parse_at(&wire, 13);
        assert_eq!(name.unwrap(), Name::from_str("www.example.com").unwrap());
        // the cursor rests just past the two pointer octets
        assert_eq!(pos, 19);
    }

    #[test]
    fn test_pointer_chain() {
        // offset 0: com.  offset 5: example.<ptr to 0>
        // offset 15: www.<ptr to 5>
        let wire = [
            3, b'c', b'o', b'm', 0, //
            7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0xC0, 0x00, //
            3, b'w', b'w', b'w', 0xC0, 0x05,
        ];

        let (name, _) = parse_at(&wire, 15);
        assert_eq!(name.unwrap(), Name::from_str("www.example.com").unwrap());
    }

    #[test]
    fn test_self_pointer_is_rejected() {
        let wire = [0xC0, 0x00];
        let (result, _) = parse_at(&wire, 0);
        assert_eq!(result, Err(Error::InvalidCompression));
    }

    #[test]
    fn test_pointer_cycle_is_rejected() {
        // two pointers referencing each other
        let wire = [0xC0, 0x02, 0xC0, 0x00];
        let (result, _) = parse_at(&wire, 0);
        assert_eq!(result, Err(Error::InvalidCompression));
    }

    #[test]
    fn test_reserved_label_type_is_rejected() {
        let wire = [0x40, b'x', 0x00];
        let (result, _) = parse_at(&wire, 0);
        assert_eq!(result, Err(Error::InvalidCompression));
    }

    #[test]
    fn test_truncated_label_is_short_buffer() {
        let wire = [3, b'w', b'w'];
        let (result, _) = parse_at(&wire, 0);
        assert_eq!(result, Err(Error::ShortBuffer));
    }

    #[test]
    fn test_missing_terminator_is_short_buffer() {
        let wire = [3, b'w', b'w', b'w'];
        let (result, _) = parse_at(&wire, 0);
        assert_eq!(result, Err(Error::ShortBuffer));
    }

    #[test]
    fn test_pointer_past_end_is_short_buffer() {
        let wire = [0xC0, 0x20];
        let (result, _) = parse_at(&wire, 0);
        assert_eq!(result, Err(Error::ShortBuffer));
    }
}
