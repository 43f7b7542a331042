#![forbid(unsafe_code)]

//! Position-shift detection between two formatted strings.
//!
//! Finds characters that persist across a reformat but sit at a different
//! display index, so the renderer can slide them instead of fading them.
//! Two kinds: separators whose Nth occurrence moved, and digits that
//! migrated into an adjacent thousands group. Always LCS-based — the
//! question is where persisting characters went, not what was inserted.

use crate::changes::PositionChange;
use crate::classify::is_group_separator;
use crate::lcs::lcs_match;
use numroll_i18n::Separators;
use rustc_hash::FxHashMap;

/// Detect separators and digits that moved between `old_fmt` and
/// `new_fmt`, ordered by position in the new string.
#[must_use]
pub fn detect_position_shifts(
    old_fmt: &str,
    new_fmt: &str,
    seps: &Separators,
) -> Vec<PositionChange> {
    let old_chars: Vec<char> = old_fmt.chars().collect();
    let new_chars: Vec<char> = new_fmt.chars().collect();

    let mut shifts = Vec::new();
    separator_shifts(&old_chars, &new_chars, seps, &mut shifts);
    group_crossings(&old_chars, &new_chars, seps, &mut shifts);
    shifts.sort_by_key(|change| change.new_index);
    shifts
}

/// Align the Nth occurrence of each separator character in the new string
/// with its Nth occurrence in the old string; a differing index is a shift.
fn separator_shifts(
    old: &[char],
    new: &[char],
    seps: &Separators,
    out: &mut Vec<PositionChange>,
) {
    let old_occurrences = separator_occurrences(old, seps);
    let new_occurrences = separator_occurrences(new, seps);

    for (ch, new_indices) in &new_occurrences {
        let Some(old_indices) = old_occurrences.get(ch) else {
            continue;
        };
        for (old_index, new_index) in old_indices.iter().zip(new_indices.iter()) {
            if old_index != new_index {
                out.push(PositionChange {
                    new_index: *new_index,
                    old_index: *old_index,
                    ch: *ch,
                    is_separator: true,
                    crossed_group: false,
                });
            }
        }
    }
}

/// Indices of every separator, grouped by character, left to right.
fn separator_occurrences(chars: &[char], seps: &Separators) -> FxHashMap<char, Vec<usize>> {
    let mut occurrences: FxHashMap<char, Vec<usize>> = FxHashMap::default();
    for (idx, &ch) in chars.iter().enumerate() {
        if is_group_separator(ch, seps) {
            occurrences.entry(ch).or_default().push(idx);
        }
    }
    occurrences
}

/// Match persisting value characters by LCS and flag the ones whose
/// thousands-group number changed.
fn group_crossings(old: &[char], new: &[char], seps: &Separators, out: &mut Vec<PositionChange>) {
    let old_values = value_positions(old, seps);
    let new_values = value_positions(new, seps);
    let old_value_chars: Vec<char> = old_values.iter().map(|&idx| old[idx]).collect();
    let new_value_chars: Vec<char> = new_values.iter().map(|&idx| new[idx]).collect();

    let old_groups = group_numbers(old, seps);
    let new_groups = group_numbers(new, seps);

    for (old_ordinal, new_ordinal) in lcs_match(&old_value_chars, &new_value_chars) {
        let old_index = old_values[old_ordinal];
        let new_index = new_values[new_ordinal];
        if old_groups[old_index] != new_groups[new_index] {
            out.push(PositionChange {
                new_index,
                old_index,
                ch: new[new_index],
                is_separator: false,
                crossed_group: true,
            });
        }
    }
}

/// Indices of value (non-separator) characters, left to right.
fn value_positions(chars: &[char], seps: &Separators) -> Vec<usize> {
    chars
        .iter()
        .enumerate()
        .filter(|&(_, &ch)| !is_group_separator(ch, seps))
        .map(|(idx, _)| idx)
        .collect()
}

/// Group number per index: the count of separators to the left. Group 0 is
/// before the first separator.
fn group_numbers(chars: &[char], seps: &Separators) -> Vec<usize> {
    let mut groups = Vec::with_capacity(chars.len());
    let mut group = 0usize;
    for &ch in chars {
        groups.push(group);
        if is_group_separator(ch, seps) {
            group += 1;
        }
    }
    groups
}
