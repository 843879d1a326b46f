//! The identifier value type and its textual parser.

use crate::{FormatOptions, GuidError, GuidResult};
use std::{fmt, str::FromStr};

/// A 128-bit identifier stored as 16 canonical bytes.
///
/// The bytes follow the RFC 4122 big-endian field layout and are the only
/// state the type carries. Two identifiers are equal iff their bytes are
/// equal, and the derived `Ord` is the lexicographic unsigned byte-wise
/// order, so a `Guid` is safe to use as a key in both `HashMap` and
/// `BTreeMap`.
///
/// # Construction
/// - [`Guid::parse`] validates a textual identifier and fails with
///   [`GuidError::InvalidInput`] on anything malformed.
/// - [`Guid::set`] is the non-failing counterpart for routine validation:
///   it returns `false` and leaves the value at nil instead of erroring.
/// - [`Guid::from_bytes`] ingests 16 raw bytes, e.g. from another binary
///   UUID producer or from a [`ByteSource`](crate::ByteSource).
/// - [`Guid::default`] is the nil identifier, [`Guid::NIL`].
///
/// # Display format
/// `Display` renders the default textual form: uppercase hex, hyphenated,
/// no braces. Other renderings go through [`Guid::format`].
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guid([u8; 16]);

impl Guid {
    /// The all-zero identifier, used as an "unset" sentinel.
    pub const NIL: Guid = Guid([0; 16]);

    /// Wraps 16 raw bytes already in canonical field order.
    ///
    /// No validation is needed: every 16-byte value is a well-formed
    /// identifier.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Validates and parses a textual identifier.
    ///
    /// Accepts the 36-character hyphenated layout and the 38-character
    /// brace-wrapped layout, with hex digits in any mix of case. All layouts
    /// for the same underlying value decode to the same bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::InvalidInput`] if `input` matches no accepted
    /// layout. On failure no value is produced, partial or otherwise.
    pub fn parse(input: &str) -> GuidResult<Self> {
        decode(input).map(Self)
    }

    /// Replaces this identifier with the value parsed from `input`.
    ///
    /// Returns `true` if `input` was accepted. On rejection the identifier
    /// is left at nil — including when it previously held a valid value —
    /// and `false` is returned. Intended for routine validation of external
    /// input where a failed parse is not exceptional.
    pub fn set(&mut self, input: &str) -> bool {
        match decode(input) {
            Ok(bytes) => {
                self.0 = bytes;
                true
            }
            Err(_) => {
                self.0 = [0; 16];
                false
            }
        }
    }

    /// Returns `true` iff this identifier is the all-zero [`Guid::NIL`].
    pub fn is_nil(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Returns the canonical bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the identifier, returning the canonical bytes.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl From<[u8; 16]> for Guid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Guid {
    type Error = GuidError;

    /// Ingests a byte slice, which must be exactly 16 bytes long.
    fn try_from(slice: &[u8]) -> GuidResult<Self> {
        let bytes: [u8; 16] = slice.try_into().map_err(|_| {
            GuidError::InvalidInput(format!("expected exactly 16 bytes, got {}", slice.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Guid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Guid {
    type Err = GuidError;

    /// Parses a string into a `Guid`. Equivalent to [`Guid::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::InvalidInput`] if the string matches no accepted
    /// layout.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guid::parse(s)
    }
}

impl fmt::Display for Guid {
    /// Formats the identifier in the default form: uppercase, hyphenated,
    /// unbracketed, 36 characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(FormatOptions::NONE))
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Guid {
    /// Serializes as the default textual form.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Guid {
    /// Deserializes from any accepted textual layout.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Guid::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Offsets of the required hyphens within the 36-character body.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn invalid(input: &str) -> GuidError {
    GuidError::InvalidInput(format!(
        "expected a 36-character hyphenated GUID, optionally wrapped in braces, got: '{input}'"
    ))
}

/// Shared validate-and-decode routine behind both [`Guid::parse`] and
/// [`Guid::set`].
///
/// Validation order: overall length, brace pair, then a single pass that
/// checks hyphen placement and decodes hex digits two per byte. Any
/// violation rejects the whole input.
fn decode(input: &str) -> GuidResult<[u8; 16]> {
    let raw = input.as_bytes();
    let body = match raw.len() {
        36 => raw,
        38 => {
            if raw[0] != b'{' || raw[37] != b'}' {
                return Err(invalid(input));
            }
            &raw[1..37]
        }
        _ => return Err(invalid(input)),
    };

    let mut bytes = [0u8; 16];
    let mut digits = 0;
    for (pos, &byte) in body.iter().enumerate() {
        if HYPHENS.contains(&pos) {
            if byte != b'-' {
                return Err(invalid(input));
            }
            continue;
        }
        let nibble = hex_value(byte).ok_or_else(|| invalid(input))?;
        bytes[digits / 2] = (bytes[digits / 2] << 4) | nibble;
        digits += 1;
    }

    Ok(bytes)
}
