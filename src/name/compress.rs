//! Name compression for the serialization path.
//!
//! The compressor remembers, for every label suffix already emitted
//! into the output buffer, the offset at which that suffix begins.
//! Suffixes are stored in a tree rooted at the terminating zero, with
//! names entered in reverse (TLD first) so shared suffixes share a
//! path. Children are owned by their parent; there are no back-edges.

use super::{Label, Name};
use bytes::{BufMut, BytesMut};
use smallvec::SmallVec;

/// Largest message offset a 14-bit compression pointer can address.
const MAX_POINTER_OFFSET: usize = 0x3FFF;

/// Flag bits marking a two-octet compression pointer.
const POINTER_FLAG: u16 = 0xC000;

/// Tracks which name suffixes have been written at which offsets in a
/// message being serialized.
///
/// One compressor is exclusively owned for the duration of a single
/// message write; the offsets it records are only meaningful for the
/// buffer that write appends to.
#[derive(Debug, Default)]
pub struct NameCompressor {
    /// Buffer position where the message starts. Pointer offsets are
    /// measured from here, so a message may be appended to a buffer
    /// that already holds other data (a TCP length prefix, say).
    base: usize,
    root: RecordedLabel,
}

#[derive(Debug)]
struct RecordedLabel {
    label: Label,
    offset: u16,
    children: Vec<RecordedLabel>,
}

impl Default for RecordedLabel {
    fn default() -> Self {
        Self {
            label: Label::from_octets(b""),
            offset: 0,
            children: Vec::new(),
        }
    }
}

impl NameCompressor {
    /// Creates an empty compressor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty compressor for a message starting at `base`
    /// within the output buffer.
    pub(crate) fn with_base(base: usize) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Looks up the longest already-written suffix of `name` and
    /// records the remaining labels at their future positions.
    ///
    /// Returns the leading labels the caller must write literally,
    /// starting at `cur_offset`, and the offset to reference with a
    /// compression pointer afterwards. A pointer of `0` means no
    /// suffix has been written yet and the caller ends the name with a
    /// plain zero octet instead (no name can live in the first 12
    /// bytes of a message, so `0` is never a valid target).
    pub fn compress<'n>(&mut self, cur_offset: usize, name: &'n Name) -> (&'n [Label], u16) {
        let labels = name.labels();

        // Walk the matched suffix, TLD first.
        let mut node = &mut self.root;
        let mut unmatched = labels.len();
        while unmatched > 0 {
            let label = &labels[unmatched - 1];
            match node
                .children
                .iter()
                .position(|c| c.label.eq_ignore_ascii_case(label))
            {
                Some(idx) => {
                    node = &mut node.children[idx];
                    unmatched -= 1;
                }
                None => break,
            }
        }

        let pointer = node.offset;

        // The unmatched prefix labels will be written contiguously from
        // `cur_offset`; predict each label's offset from there. Labels
        // that would land past the 14-bit pointer range are not
        // recorded, and neither is offset 0, which is reserved as the
        // no-suffix sentinel.
        let mut offsets = SmallVec::<[usize; 8]>::with_capacity(unmatched);
        let mut running = cur_offset;
        for label in &labels[..unmatched] {
            offsets.push(running);
            running += label.len() + 1;
        }

        for i in (0..unmatched).rev() {
            if offsets[i] == 0 || offsets[i] > MAX_POINTER_OFFSET {
                break;
            }
            node.children.push(RecordedLabel {
                label: labels[i].clone(),
                offset: offsets[i] as u16,
                children: Vec::new(),
            });
            let last = node.children.len() - 1;
            node = &mut node.children[last];
        }

        (&labels[..unmatched], pointer)
    }

    /// Appends `name` to `buf` in wire format, compressed against
    /// everything previously written through this compressor.
    ///
    /// Each prefix label is emitted as `length || octets`, followed by
    /// either a pointer to the shared suffix or the terminating zero.
    pub fn write_name(&mut self, buf: &mut BytesMut, name: &Name) {
        let offset = buf.len().saturating_sub(self.base);
        let (prefix, pointer) = self.compress(offset, name);

        for label in prefix {
            buf.put_u8(label.len() as u8);
            buf.put_slice(label.as_bytes());
        }

        if pointer > 0 {
            buf.put_u16(POINTER_FLAG | pointer);
        } else {
            buf.put_u8(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::parse_name;
    use crate::wire::WireReader;
    use std::str::FromStr;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    #[test]
    fn test_repeated_name_becomes_pointer() {
        let mut nc = NameCompressor::new();
        nc.compress(5, &name("foo.com"));

        let n = name("foo.com");
        let (prefix, offset) = nc.compress(20, &n);
        assert!(prefix.is_empty());
        assert_eq!(offset, 5);
    }

    #[test]
    fn test_reference_suffix_of_longer_name() {
        let mut nc = NameCompressor::new();
        nc.compress(5, &name("foo.bar.com"));

        let n = name("bar.com");
        let (prefix, offset) = nc.compress(20, &n);
        assert!(prefix.is_empty());
        assert_eq!(offset, 9); // 5 + len("foo") + 1
    }

    #[test]
    fn test_extend_shorter_name() {
        let mut nc = NameCompressor::new();
        nc.compress(5, &name("bar.com"));

        let n = name("foo.bar.com");
        let (prefix, offset) = nc.compress(20, &n);
        assert_eq!(offset, 5);
        assert_eq!(prefix, name("foo").labels());
    }

    #[test]
    fn test_shared_parent() {
        let mut nc = NameCompressor::new();
        nc.compress(5, &name("qux.bar.com"));

        let n = name("foo.bar.com");
        let (prefix, offset) = nc.compress(20, &n);
        assert_eq!(offset, 9); // start of "bar"
        assert_eq!(prefix, name("foo").labels());
    }

    #[test]
    fn test_unknown_name_writes_everything() {
        let mut nc = NameCompressor::new();
        let n = name("foo.com");
        let (prefix, offset) = nc.compress(20, &n);
        assert_eq!(offset, 0);
        assert_eq!(prefix, n.labels());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut nc = NameCompressor::new();
        nc.compress(12, &name("Foo.COM"));

        let n = name("foo.com");
        let (prefix, offset) = nc.compress(30, &n);
        assert!(prefix.is_empty());
        assert_eq!(offset, 12);
    }

    #[test]
    fn test_offsets_past_pointer_range_are_not_recorded() {
        let mut nc = NameCompressor::new();
        nc.compress(0x4000, &name("foo.com"));

        let n = name("foo.com");
        let (prefix, offset) = nc.compress(0x5000, &n);
        assert_eq!(offset, 0);
        assert_eq!(prefix.len(), 2);
    }

    #[test]
    fn test_write_name_round_trip() {
        let mut nc = NameCompressor::new();
        let mut buf = BytesMut::new();
        buf.resize(12, 0); // stand-in for the fixed header

        let first = name("example.com");
        let second = name("www.example.com");
        nc.write_name(&mut buf, &first);
        let second_at = buf.len();
        nc.write_name(&mut buf, &second);

        // second name: 1 + len("www") + 2-byte pointer
        assert_eq!(buf.len() - second_at, 6);

        let mut reader = WireReader::new(&buf).at(12);
        assert_eq!(parse_name(&mut reader).unwrap(), first);
        assert_eq!(parse_name(&mut reader).unwrap(), second);
    }

    #[test]
    fn test_write_root_name() {
        let mut nc = NameCompressor::new();
        let mut buf = BytesMut::new();
        nc.write_name(&mut buf, &Name::root());
        assert_eq!(&buf[..], &[0x00]);
    }
}
