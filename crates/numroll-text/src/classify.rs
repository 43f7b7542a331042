#![forbid(unsafe_code)]

//! Single-character classification.
//!
//! Every other module decides "does this character carry raw value content,
//! or is it display chrome?" through these predicates.

use numroll_i18n::Separators;

/// True if `ch` is part of a raw value under the given locale decimal:
/// an ASCII digit, `.`, `-`, or the locale decimal separator itself.
#[inline]
#[must_use]
pub fn is_raw_char(ch: char, decimal: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '-' || ch == decimal
}

/// True if `ch` can never be raw content: anything outside `[0-9.-]`.
///
/// Locale-blind. For formatted strings use [`is_group_separator`], which
/// knows that e.g. `.` is a group separator when the decimal is `,`.
#[inline]
#[must_use]
pub fn is_separator(ch: char) -> bool {
    !(ch.is_ascii_digit() || ch == '.' || ch == '-')
}

/// True if `ch` is display chrome (a group separator) in a formatted
/// string under `seps`.
///
/// The configured group character is chrome even when it falls inside
/// `[0-9.-]` (German `1.234`), and the configured decimal is content even
/// when it falls outside (`1,5` under a comma decimal).
#[inline]
#[must_use]
pub fn is_group_separator(ch: char, seps: &Separators) -> bool {
    if ch == seps.decimal {
        return false;
    }
    ch == seps.group || !is_raw_char(ch, seps.decimal)
}
