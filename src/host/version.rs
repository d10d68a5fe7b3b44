//! Commit version tokens attached to store entries.

use std::fmt;

use thiserror::Error;

/// Error returned when parsing a [`Versionstamp`] from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseVersionstampError {
    #[error("versionstamp must be {expected} hex characters, got {got}")]
    BadLength { expected: usize, got: usize },

    #[error("versionstamp contains a non-hex character: {0:?}")]
    BadCharacter(char),
}

/// An opaque 10-byte version token assigned by the host store to every
/// committed write.
///
/// Versionstamps are totally ordered and strictly increase across commits
/// observed by one store handle. The text form is 20 lowercase hex
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Versionstamp([u8; Versionstamp::LEN]);

impl Versionstamp {
    /// Byte length of a versionstamp.
    pub const LEN: usize = 10;

    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Build a versionstamp from a commit sequence number. The sequence
    /// occupies the trailing bytes, so higher sequences order later.
    pub fn from_sequence(sequence: u64) -> Self {
        let mut bytes = [0u8; Self::LEN];
        for (dst, src) in bytes.iter_mut().skip(2).zip(sequence.to_be_bytes()) {
            *dst = src;
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Parse from the 20-character hex text form.
    pub fn parse(s: &str) -> Result<Self, ParseVersionstampError> {
        let expected = Self::LEN * 2;
        if s.len() != expected {
            return Err(ParseVersionstampError::BadLength {
                expected,
                got: s.len(),
            });
        }
        let mut bytes = [0u8; Self::LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = s
                .get(i * 2..i * 2 + 2)
                .ok_or(ParseVersionstampError::BadLength {
                    expected,
                    got: s.len(),
                })?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| {
                let bad = pair
                    .chars()
                    .find(|c| !c.is_ascii_hexdigit())
                    .unwrap_or_default();
                ParseVersionstampError::BadCharacter(bad)
            })?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for Versionstamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Versionstamp {
    type Err = ParseVersionstampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
