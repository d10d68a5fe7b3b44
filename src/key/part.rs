//! Runtime key representation shared with the host store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One segment of a key: a piece of text or a number.
///
/// Segments order by kind first (text before number), then by value.
/// This matches the ordering the host store applies when scanning ranges.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyPart {
    Text(String),
    Number(u64),
}

impl KeyPart {
    /// Size of this segment in the host's packed key encoding.
    /// Text costs its byte length plus a tag and terminator; numbers are
    /// a tag plus eight bytes.
    pub(crate) fn packed_size(&self) -> usize {
        match self {
            KeyPart::Text(s) => s.len() + 2,
            KeyPart::Number(_) => 9,
        }
    }
}

impl From<&str> for KeyPart {
    fn from(text: &str) -> Self {
        KeyPart::Text(text.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(text: String) -> Self {
        KeyPart::Text(text)
    }
}

impl From<u64> for KeyPart {
    fn from(n: u64) -> Self {
        KeyPart::Number(n)
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Text(s) => write!(f, "{:?}", s),
            KeyPart::Number(n) => write!(f, "{}", n),
        }
    }
}

/// An ordered sequence of [`KeyPart`]s identifying one entry in the store.
///
/// Keys compare segment-wise, so a key always sorts before any of its
/// extensions. Displayed in bracket form: `["user", 42]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct KvKey(Vec<KeyPart>);

impl KvKey {
    pub fn new(parts: Vec<KeyPart>) -> Self {
        Self(parts)
    }

    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether `prefix` is a leading run of this key's segments.
    /// Every key is a prefix of itself.
    pub fn starts_with(&self, prefix: &KvKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0.iter().zip(&prefix.0).all(|(a, b)| a == b)
    }

    /// Size of this key in the host's packed encoding, used for key
    /// size limit checks.
    pub fn packed_size(&self) -> usize {
        self.0.iter().map(KeyPart::packed_size).sum()
    }
}

impl From<Vec<KeyPart>> for KvKey {
    fn from(parts: Vec<KeyPart>) -> Self {
        Self(parts)
    }
}

impl FromIterator<KeyPart> for KvKey {
    fn from_iter<I: IntoIterator<Item = KeyPart>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for KvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, "]")
    }
}
