//! DNS domain name representation and operations.
//!
//! A domain name is an ordered sequence of labels. Labels are opaque
//! octet strings on the wire; this module performs no character-set
//! transformation, only the RFC 1035 length checks. Comparison is
//! case-insensitive over ASCII letters per DNS semantics.

mod compress;
mod parse;

pub use compress::NameCompressor;
pub(crate) use parse::parse_name;

use crate::error::{Error, Result};
use crate::MAX_LABEL_LENGTH;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Maximum wire length of the labels of a name, excluding the
/// terminating root byte.
const MAX_LABELS_WIRE_LENGTH: usize = 254;

/// A single component of a domain name.
///
/// On the wire a label is 1..=63 octets prefixed by its length. Labels
/// compare case-insensitively over ASCII letters; all other octets
/// compare bitwise.
#[derive(Clone)]
pub struct Label(SmallVec<[u8; 16]>);

impl Label {
    /// Creates a label, checking the 63-byte limit and rejecting empty
    /// input.
    pub fn new(octets: impl AsRef<[u8]>) -> Result<Self> {
        let octets = octets.as_ref();
        if octets.is_empty() {
            return Err(Error::EmptyLabel);
        }
        if octets.len() > MAX_LABEL_LENGTH {
            return Err(Error::label_too_long(octets.len()));
        }
        Ok(Self(SmallVec::from_slice(octets)))
    }

    /// Creates a label from octets already known to be within limits.
    #[inline]
    pub(crate) fn from_octets(octets: &[u8]) -> Self {
        Self(SmallVec::from_slice(octets))
    }

    /// Returns the raw octets of the label.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the label in octets.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the label holds no octets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive comparison with another label.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, other: &Label) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialEq for Label {
    /// Case-insensitive equality per DNS semantics.
    fn eq(&self, other: &Self) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in &self.0 {
            byte.to_ascii_lowercase().hash(state);
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.0 {
            if byte == b'.' || byte == b'\\' {
                write!(f, "\\{}", byte as char)?;
            } else if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\{byte:03}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label(\"{self}\")")
    }
}

/// A DNS domain name: an ordered sequence of [`Label`]s.
///
/// The empty sequence is the root. The wire form (length-prefixed
/// labels plus the terminating zero) may not exceed 255 octets.
///
/// # Example
///
/// ```rust
/// use dnswire::Name;
/// use std::str::FromStr;
///
/// let name = Name::from_str("www.example.com").unwrap();
/// assert_eq!(name.label_count(), 3);
/// assert_eq!(name.to_string(), "www.example.com");
///
/// // Case-insensitive comparison
/// assert_eq!(Name::from_str("WWW.Example.COM").unwrap(), name);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Name {
    labels: SmallVec<[Label; 4]>,
}

impl Name {
    /// Creates the root (empty) name.
    #[inline]
    pub fn root() -> Self {
        Self {
            labels: SmallVec::new(),
        }
    }

    /// Creates a name from a sequence of labels, enforcing the label
    /// and name length limits.
    pub fn from_labels<I>(labels: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut name = Self::root();
        let mut total = 0usize;
        for label in labels {
            let label = Label::new(label)?;
            total += label.len() + 1;
            if total > MAX_LABELS_WIRE_LENGTH {
                return Err(Error::name_too_long(total + 1));
            }
            name.labels.push(label);
        }
        Ok(name)
    }

    #[inline]
    pub(crate) fn from_raw(labels: SmallVec<[Label; 4]>) -> Self {
        Self { labels }
    }

    /// Returns the labels of the name, leftmost first.
    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the number of labels.
    #[inline]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if this is the root name.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the wire-format length, including per-label length
    /// octets and the terminating zero.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|l| 1 + l.len()).sum::<usize>() + 1
    }

    /// Returns true if this name is a strict parent of `other`.
    ///
    /// `a.is_parent_of(b)` holds iff `b` has more labels than `a` and
    /// the tail of `b` equals `a`. No name is its own parent.
    pub fn is_parent_of(&self, other: &Name) -> bool {
        if other.label_count() <= self.label_count() {
            return false;
        }
        other.labels[other.label_count() - self.label_count()..] == self.labels[..]
    }

    /// Returns true if this name is a strict subdomain of `other`.
    #[inline]
    pub fn is_subdomain_of(&self, other: &Name) -> bool {
        other.is_parent_of(self)
    }

    /// Returns the parent name (the name without its leftmost label),
    /// or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            labels: self.labels[1..].iter().cloned().collect(),
        })
    }
}

impl FromStr for Name {
    type Err = Error;

    /// Parses a name from dotted text form.
    ///
    /// A single trailing dot is permitted and removed; the empty string
    /// parses to the root name. Fails with [`Error::EmptyLabel`] for an
    /// empty non-terminal label, [`Error::LabelTooLong`] past 63
    /// octets, or [`Error::NameTooLong`] when the wire form would
    /// exceed 255 octets.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.strip_suffix('.').unwrap_or(s);
        if s.is_empty() {
            return Ok(Self::root());
        }
        Self::from_labels(s.split('.').map(str::as_bytes))
    }
}

impl fmt::Display for Name {
    /// Formats the labels joined by dots with no trailing dot; the
    /// root name formats to the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name(\"{self}\")")
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(D::Error::custom)
    }
}
