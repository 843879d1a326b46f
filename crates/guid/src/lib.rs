//! 128-bit identifier (GUID) value type.
//!
//! A [`Guid`] is an immutable 16-byte value in RFC 4122 big-endian field
//! order. Equality, ordering, and hashing are defined on those bytes alone,
//! so textual artefacts (digit case, brace wrapping) can never leak into
//! comparisons.
//!
//! This crate provides:
//! - The [`Guid`] value itself, with a well-known [`Guid::NIL`] constant.
//! - A strict parser accepting the hyphenated and brace-wrapped textual
//!   layouts, in either digit case.
//! - A formatter driven by a small [`FormatOptions`] flag set.
//! - A narrow generation bridge ([`ByteSource`]) so any entropy source can
//!   supply the bytes behind a fresh identifier.
//!
//! ## Accepted textual layouts
//! - `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX` (36 characters, hyphens at
//!   offsets 8, 13, 18, 23)
//! - `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}` (38 characters)
//!
//! Hex digits are accepted in any mix of case. Anything else — wrong length,
//! a one-sided brace, a misplaced or missing hyphen, a non-hex character —
//! rejects the whole input. Parsing never produces a partial value.
//!
//! ## Output
//! The default rendering is uppercase, hyphenated, and unbracketed.
//! [`FormatOptions::LOWERCASE`] and [`FormatOptions::BRACKETS`] compose with
//! `|`; every combination round-trips through the parser.
//!
//! ```
//! use guid::{FormatOptions, Guid};
//!
//! let id = Guid::parse("{d1abe846-63d3-4c0a-89ef-68f1a306f6d3}")?;
//! assert_eq!(id.to_string(), "D1ABE846-63D3-4C0A-89EF-68F1A306F6D3");
//! assert_eq!(
//!     id.format(FormatOptions::LOWERCASE | FormatOptions::BRACKETS),
//!     "{d1abe846-63d3-4c0a-89ef-68f1a306f6d3}",
//! );
//! # Ok::<(), guid::GuidError>(())
//! ```

mod entropy;
mod format;
mod value;

// Re-export public types
pub use entropy::{ByteSource, OsEntropy};
pub use format::FormatOptions;
pub use value::Guid;

/// Error type for GUID operations.
#[derive(Debug, thiserror::Error)]
pub enum GuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for GUID operations.
pub type GuidResult<T> = Result<T, GuidError>;
