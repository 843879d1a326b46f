//! Formatting options and textual rendering.

use crate::Guid;
use std::ops::{BitOr, BitOrAssign};

/// Flag set controlling how a [`Guid`] is rendered as text.
///
/// Flags combine with `|` and are independent of one another; every
/// combination produces a distinct, fully specified output. Options affect
/// rendering only — the stored bytes and all comparisons are untouched.
///
/// The set is closed: [`FormatOptions::LOWERCASE`] and
/// [`FormatOptions::BRACKETS`] are the only defined flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions(u8);

impl FormatOptions {
    /// Default rendering: uppercase hex digits, hyphenated, no braces.
    pub const NONE: FormatOptions = FormatOptions(0);

    /// Render hex digits in lowercase.
    pub const LOWERCASE: FormatOptions = FormatOptions(1);

    /// Wrap the 36-character body in `{` and `}`.
    pub const BRACKETS: FormatOptions = FormatOptions(1 << 1);

    /// Returns `true` if every flag set in `other` is also set in `self`.
    pub const fn contains(self, other: FormatOptions) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FormatOptions {
    type Output = FormatOptions;

    fn bitor(self, rhs: FormatOptions) -> FormatOptions {
        FormatOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatOptions {
    fn bitor_assign(&mut self, rhs: FormatOptions) {
        self.0 |= rhs.0;
    }
}

const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl Guid {
    /// Renders this identifier under the given option combination.
    ///
    /// With [`FormatOptions::NONE`] the output is the 36-character uppercase
    /// hyphenated form. [`FormatOptions::LOWERCASE`] lowers the hex digits;
    /// [`FormatOptions::BRACKETS`] wraps the body in `{`/`}` for the
    /// 38-character Microsoft-style form.
    ///
    /// Parsing the output under any combination yields a value equal to
    /// `self`.
    pub fn format(&self, options: FormatOptions) -> String {
        let digits = if options.contains(FormatOptions::LOWERCASE) {
            LOWER_DIGITS
        } else {
            UPPER_DIGITS
        };
        let braced = options.contains(FormatOptions::BRACKETS);

        let mut out = String::with_capacity(38);
        if braced {
            out.push('{');
        }
        for (index, &byte) in self.as_bytes().iter().enumerate() {
            // Group boundaries fall after bytes 4, 6, 8, and 10.
            if matches!(index, 4 | 6 | 8 | 10) {
                out.push('-');
            }
            out.push(digits[(byte >> 4) as usize] as char);
            out.push(digits[(byte & 0x0F) as usize] as char);
        }
        if braced {
            out.push('}');
        }
        out
    }
}
