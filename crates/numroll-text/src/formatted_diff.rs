#![forbid(unsafe_code)]

//! Formatted-string edit classification.
//!
//! The raw diff says which value characters are new; this module re-expresses
//! that over the display string. The subtlety is separators: a comma that
//! merely shifted because digits were added in front of it must not animate
//! as new. Only separators the old string did not have — by per-character
//! occurrence count — are added, and never more of them than the count
//! difference allows.

use crate::caret::{raw_len, raw_to_formatted};
use crate::changes::{EditContext, FormattedChangeSet};
use crate::classify::is_group_separator;
use crate::lcs::lcs_match;
use numroll_i18n::Separators;
use rustc_hash::FxHashMap;

/// Classify each index of `new_fmt` as added or unchanged relative to
/// `old_fmt`.
///
/// With raw cursor context, the inserted raw span is mapped into formatted
/// space and marks its value characters added. Without context (or with
/// context that does not fit the strings), an LCS alignment over the value
/// characters decides. Separators are classified by occurrence budget in
/// both modes.
#[must_use]
pub fn diff_formatted(
    old_fmt: &str,
    new_fmt: &str,
    ctx: Option<&EditContext>,
    seps: &Separators,
) -> FormattedChangeSet {
    let new_chars: Vec<char> = new_fmt.chars().collect();
    let mut budget = separator_budget(old_fmt, &new_chars, seps);

    let span = ctx.and_then(|ctx| mapped_insertion_span(new_fmt, ctx, seps));
    let mut set = FormattedChangeSet::default();

    match span {
        Some(span) => {
            // Separators inside the edit span consume budget first; any
            // remaining budget goes to the leftmost separators outside it,
            // since groups re-chunk from the right and the genuinely new
            // separator surfaces at the front.
            for (idx, &ch) in new_chars.iter().enumerate() {
                if !is_group_separator(ch, seps) {
                    continue;
                }
                if span.contains(&idx) && consume(&mut budget, ch) {
                    set.added.insert(idx);
                }
            }
            for (idx, &ch) in new_chars.iter().enumerate() {
                if !is_group_separator(ch, seps) || set.added.contains(&idx) {
                    continue;
                }
                if consume(&mut budget, ch) {
                    set.added.insert(idx);
                } else {
                    set.unchanged.insert(idx);
                }
            }
            for (idx, &ch) in new_chars.iter().enumerate() {
                if is_group_separator(ch, seps) {
                    continue;
                }
                if span.contains(&idx) {
                    set.added.insert(idx);
                } else {
                    set.unchanged.insert(idx);
                }
            }
        }
        None => {
            if ctx.is_some() {
                tracing::debug!("raw context does not fit formatted string, using LCS");
            }
            let old_values: Vec<char> = old_fmt
                .chars()
                .filter(|&ch| !is_group_separator(ch, seps))
                .collect();
            let new_value_indices: Vec<usize> = new_chars
                .iter()
                .enumerate()
                .filter(|&(_, &ch)| !is_group_separator(ch, seps))
                .map(|(idx, _)| idx)
                .collect();
            let new_values: Vec<char> = new_value_indices
                .iter()
                .map(|&idx| new_chars[idx])
                .collect();

            let mut matched = vec![false; new_values.len()];
            for (_, ni) in lcs_match(&old_values, &new_values) {
                matched[ni] = true;
            }
            for (ordinal, &idx) in new_value_indices.iter().enumerate() {
                if matched[ordinal] {
                    set.unchanged.insert(idx);
                } else {
                    set.added.insert(idx);
                }
            }
            for (idx, &ch) in new_chars.iter().enumerate() {
                if !is_group_separator(ch, seps) {
                    continue;
                }
                if consume(&mut budget, ch) {
                    set.added.insert(idx);
                } else {
                    set.unchanged.insert(idx);
                }
            }
        }
    }
    set
}

/// Per-character count of separators present in `new` but not in `old`.
fn separator_budget(
    old_fmt: &str,
    new_chars: &[char],
    seps: &Separators,
) -> FxHashMap<char, usize> {
    let mut old_counts: FxHashMap<char, usize> = FxHashMap::default();
    for ch in old_fmt.chars().filter(|&ch| is_group_separator(ch, seps)) {
        *old_counts.entry(ch).or_insert(0) += 1;
    }
    let mut budget: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in new_chars.iter().filter(|&&ch| is_group_separator(ch, seps)) {
        *budget.entry(ch).or_insert(0) += 1;
    }
    for (ch, count) in &mut budget {
        *count = count.saturating_sub(old_counts.get(ch).copied().unwrap_or(0));
    }
    budget
}

/// Take one unit of budget for `ch` if any remains.
fn consume(budget: &mut FxHashMap<char, usize>, ch: char) -> bool {
    match budget.get_mut(&ch) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

/// Map the raw span `[selection_start, cursor)` into formatted indices.
/// `None` when the context does not describe a position inside `new_fmt`.
fn mapped_insertion_span(
    new_fmt: &str,
    ctx: &EditContext,
    seps: &Separators,
) -> Option<std::ops::Range<usize>> {
    if ctx.cursor > raw_len(new_fmt, seps) {
        return None;
    }
    let start = ctx.selection_start.min(ctx.cursor);
    Some(raw_to_formatted(start, new_fmt, seps)..raw_to_formatted(ctx.cursor, new_fmt, seps))
}
