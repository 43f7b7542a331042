#![forbid(unsafe_code)]

//! Raw-string edit classification.
//!
//! Two strategies. When the host supplies cursor context, the edit site is
//! known exactly and a position-based scan resolves even edits that are
//! ambiguous by content (typing a second `8` into `"8888"`). Without
//! context, a common prefix/suffix strip classifies conservatively.

use crate::changes::{ChangeSet, EditContext};

/// Classify an edit from `old` to `new`.
///
/// Prefers the position-based strategy when `ctx` is present; degrades to
/// the content-based fallback when `ctx` is missing or does not describe a
/// span inside the two strings.
#[must_use]
pub fn diff_raw(old: &str, new: &str, ctx: Option<&EditContext>) -> ChangeSet {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();

    if let Some(ctx) = ctx {
        match diff_with_context(&old_chars, &new_chars, ctx) {
            Some(set) => return set,
            None => {
                tracing::debug!(
                    cursor = ctx.cursor,
                    selection_start = ctx.selection_start,
                    old_len = ctx.old_len,
                    "edit context inconsistent, using content diff"
                );
            }
        }
    }
    diff_by_content(&old_chars, &new_chars)
}

/// Position-based classification. `None` when the context does not fit the
/// strings (caller then falls back rather than emitting bad indices).
fn diff_with_context(old: &[char], new: &[char], ctx: &EditContext) -> Option<ChangeSet> {
    if ctx.old_len != old.len() {
        return None;
    }

    let mut set = ChangeSet::new();
    if new.len() > old.len() {
        // Insertion of `inserted` chars ending at the cursor.
        let inserted = new.len() - old.len();
        if ctx.cursor < inserted || ctx.cursor > new.len() {
            return None;
        }
        let span = (ctx.cursor - inserted)..ctx.cursor;
        for i in 0..span.start {
            if new[i] == old[i] {
                set.unchanged.insert(i);
            } else {
                set.changed.insert(i);
            }
        }
        for i in span.clone() {
            set.added.insert(i);
        }
        for i in span.end..new.len() {
            if new[i] == old[i - inserted] {
                set.unchanged.insert(i);
            } else {
                set.changed.insert(i);
            }
        }
    } else if new.len() < old.len() {
        // Deletion of `deleted` chars starting at the selection.
        let deleted = old.len() - new.len();
        if ctx.selection_start + deleted > old.len() {
            return None;
        }
        for i in ctx.selection_start..ctx.selection_start + deleted {
            set.removed.insert(i);
        }
        for i in 0..new.len() {
            if i < ctx.selection_start {
                set.unchanged.insert(i);
            } else if new[i] == old[i + deleted] {
                set.unchanged.insert(i);
            } else {
                set.changed.insert(i);
            }
        }
    } else {
        // Pure in-place replacement.
        for i in 0..new.len() {
            if new[i] == old[i] {
                set.unchanged.insert(i);
            } else {
                set.changed.insert(i);
            }
        }
    }
    Some(set)
}

/// Content-based fallback: strip the common prefix and suffix, then
/// classify the middle.
fn diff_by_content(old: &[char], new: &[char]) -> ChangeSet {
    let shorter = old.len().min(new.len());

    let mut prefix = 0usize;
    while prefix < shorter && old[prefix] == new[prefix] {
        prefix += 1;
    }
    let mut suffix = 0usize;
    while suffix < shorter - prefix && old[old.len() - 1 - suffix] == new[new.len() - 1 - suffix] {
        suffix += 1;
    }

    let mut set = ChangeSet::new();
    for i in 0..prefix {
        set.unchanged.insert(i);
    }
    for i in (new.len() - suffix)..new.len() {
        set.unchanged.insert(i);
    }

    let old_mid = prefix..(old.len() - suffix);
    let new_mid = prefix..(new.len() - suffix);
    if old_mid.len() == new_mid.len() {
        // Same-length middles compare in place.
        for (oi, ni) in old_mid.zip(new_mid) {
            if old[oi] == new[ni] {
                set.unchanged.insert(ni);
            } else {
                set.changed.insert(ni);
            }
        }
    } else {
        for i in old_mid {
            set.removed.insert(i);
        }
        for i in new_mid {
            set.added.insert(i);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn idx(items: &[usize]) -> FxHashSet<usize> {
        items.iter().copied().collect()
    }

    // -----------------------------------------------------------------------
    // Position-based: insertion
    // -----------------------------------------------------------------------

    #[test]
    fn insertion_at_the_end() {
        let ctx = EditContext::new(4, 3, 3);
        let set = diff_raw("123", "1234", Some(&ctx));
        assert_eq!(set.added, idx(&[3]));
        assert_eq!(set.unchanged, idx(&[0, 1, 2]));
        assert!(set.removed.is_empty());
        assert!(set.changed.is_empty());
    }

    #[test]
    fn insertion_in_the_middle() {
        // "1234" → "12934", typed at index 2, cursor lands at 3.
        let ctx = EditContext::new(3, 2, 4);
        let set = diff_raw("1234", "12934", Some(&ctx));
        assert_eq!(set.added, idx(&[2]));
        assert_eq!(set.unchanged, idx(&[0, 1, 3, 4]));
    }

    #[test]
    fn repeated_digit_is_resolved_by_cursor() {
        // Typing an 8 at the front of "8888": content alone cannot tell
        // which 8 is new; the cursor can.
        let ctx = EditContext::new(1, 0, 4);
        let set = diff_raw("8888", "88888", Some(&ctx));
        assert_eq!(set.added, idx(&[0]));
        assert_eq!(set.unchanged, idx(&[1, 2, 3, 4]));
    }

    #[test]
    fn multi_char_paste() {
        // Paste "99" into "14" at index 1: "1994", cursor 3.
        let ctx = EditContext::new(3, 1, 2);
        let set = diff_raw("14", "1994", Some(&ctx));
        assert_eq!(set.added, idx(&[1, 2]));
        assert_eq!(set.unchanged, idx(&[0, 3]));
    }

    // -----------------------------------------------------------------------
    // Position-based: deletion
    // -----------------------------------------------------------------------

    #[test]
    fn backspace_at_the_end() {
        let ctx = EditContext::new(3, 3, 4);
        let set = diff_raw("1234", "123", Some(&ctx));
        assert_eq!(set.removed, idx(&[3]));
        assert_eq!(set.unchanged, idx(&[0, 1, 2]));
        assert!(set.added.is_empty());
    }

    #[test]
    fn delete_selection_in_the_middle() {
        // "12345" minus "23" (selection [1,3)): "145".
        let ctx = EditContext::new(1, 1, 5);
        let set = diff_raw("12345", "145", Some(&ctx));
        assert_eq!(set.removed, idx(&[1, 2]));
        assert_eq!(set.unchanged, idx(&[0, 1, 2]));
    }

    // -----------------------------------------------------------------------
    // Position-based: replacement
    // -----------------------------------------------------------------------

    #[test]
    fn same_length_replacement() {
        let ctx = EditContext::new(2, 1, 3);
        let set = diff_raw("123", "153", Some(&ctx));
        assert_eq!(set.changed, idx(&[1]));
        assert_eq!(set.unchanged, idx(&[0, 2]));
    }

    // -----------------------------------------------------------------------
    // Fallback
    // -----------------------------------------------------------------------

    #[test]
    fn fallback_insertion() {
        let set = diff_raw("123", "1423", None);
        assert_eq!(set.added, idx(&[1]));
        assert_eq!(set.unchanged, idx(&[0, 2, 3]));
    }

    #[test]
    fn fallback_deletion() {
        let set = diff_raw("1423", "123", None);
        assert_eq!(set.removed, idx(&[1]));
        assert_eq!(set.unchanged, idx(&[0, 1, 2]));
    }

    #[test]
    fn fallback_equal_length_middle() {
        let set = diff_raw("1234", "1934", None);
        assert_eq!(set.changed, idx(&[1]));
        assert_eq!(set.unchanged, idx(&[0, 2, 3]));
    }

    #[test]
    fn fallback_unequal_middle_is_remove_plus_add() {
        // "1234" → "19994": middle "23" vs "999".
        let set = diff_raw("1234", "19994", None);
        assert_eq!(set.removed, idx(&[1, 2]));
        assert_eq!(set.added, idx(&[1, 2, 3]));
        assert_eq!(set.unchanged, idx(&[0, 4]));
    }

    #[test]
    fn inconsistent_context_degrades_to_fallback() {
        // Cursor outside the new string: must not panic or emit bad indices.
        let ctx = EditContext::new(99, 0, 3);
        let set = diff_raw("123", "1234", Some(&ctx));
        assert_eq!(set.added, idx(&[3]));
        assert_eq!(set.unchanged, idx(&[0, 1, 2]));
    }

    #[test]
    fn stale_old_len_degrades_to_fallback() {
        let ctx = EditContext::new(4, 3, 7);
        let set = diff_raw("123", "1234", Some(&ctx));
        assert_eq!(set.added, idx(&[3]));
    }

    // -----------------------------------------------------------------------
    // Identity
    // -----------------------------------------------------------------------

    #[test]
    fn diff_against_self_is_all_unchanged() {
        for ctx in [None, Some(EditContext::new(2, 2, 4))] {
            let set = diff_raw("1234", "1234", ctx.as_ref());
            assert_eq!(set, ChangeSet::all_unchanged(4));
        }
    }

    #[test]
    fn empty_to_empty() {
        let set = diff_raw("", "", None);
        assert_eq!(set, ChangeSet::new());
    }

    #[test]
    fn empty_to_value() {
        let ctx = EditContext::new(3, 0, 0);
        let set = diff_raw("", "123", Some(&ctx));
        assert_eq!(set.added, idx(&[0, 1, 2]));
    }
}
