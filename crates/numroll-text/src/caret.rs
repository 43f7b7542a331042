#![forbid(unsafe_code)]

//! Caret mapping between raw and formatted offsets.
//!
//! A raw offset counts value characters only; a formatted offset counts
//! every display character including group separators. Both directions
//! walk the formatted string counting non-separator characters.
//!
//! # Invariants
//!
//! 1. `raw_to_formatted` is monotonic non-decreasing in the raw offset.
//! 2. `formatted_to_raw(raw_to_formatted(p, s), s) == p` for every raw
//!    offset `p` up to the raw length of `s`.

use crate::classify::is_group_separator;
use numroll_i18n::Separators;

/// Map a raw offset to a formatted offset.
///
/// Returns the first formatted index with exactly `raw_pos` value
/// characters to its left, so a caret at a group boundary lands before
/// the separator, not after it. Offsets past the raw length clamp to the
/// end of the formatted string.
#[must_use]
pub fn raw_to_formatted(raw_pos: usize, formatted: &str, seps: &Separators) -> usize {
    let mut count = 0usize;
    for (idx, ch) in formatted.chars().enumerate() {
        if count == raw_pos {
            return idx;
        }
        if !is_group_separator(ch, seps) {
            count += 1;
        }
    }
    formatted.chars().count()
}

/// Map a formatted offset back to a raw offset: the number of value
/// characters strictly before it. Offsets past the end clamp to the raw
/// length.
#[must_use]
pub fn formatted_to_raw(formatted_pos: usize, formatted: &str, seps: &Separators) -> usize {
    formatted
        .chars()
        .take(formatted_pos)
        .filter(|&ch| !is_group_separator(ch, seps))
        .count()
}

/// The raw length of a formatted string: its count of value characters.
#[must_use]
pub fn raw_len(formatted: &str, seps: &Separators) -> usize {
    formatted
        .chars()
        .filter(|&ch| !is_group_separator(ch, seps))
        .count()
}
