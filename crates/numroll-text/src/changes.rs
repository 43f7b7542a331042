#![forbid(unsafe_code)]

//! Result records shared by the diff engines.
//!
//! All index sets use char indices. Sets are always present; a category
//! that does not apply to a given edit is simply empty.

use rustc_hash::FxHashSet;

/// Per-character classification of a raw-string edit.
///
/// `removed` holds old-string indices; `added`, `unchanged`, and `changed`
/// hold new-string indices. Every new-string index lands in exactly one of
/// the latter three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// New-string indices of inserted characters.
    pub added: FxHashSet<usize>,
    /// Old-string indices of deleted characters.
    pub removed: FxHashSet<usize>,
    /// New-string indices that survived the edit in place.
    pub unchanged: FxHashSet<usize>,
    /// New-string indices replaced in place (same position, new character).
    pub changed: FxHashSet<usize>,
}

impl ChangeSet {
    /// An empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A change set marking `0..len` as unchanged (the identity edit).
    #[must_use]
    pub fn all_unchanged(len: usize) -> Self {
        Self {
            unchanged: (0..len).collect(),
            ..Self::default()
        }
    }
}

/// Per-character classification of a formatted-string transition.
///
/// Indices are into the *new* formatted string only; every index lands in
/// exactly one of the two sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedChangeSet {
    /// Indices that should animate in (new digits, truly new separators).
    pub added: FxHashSet<usize>,
    /// Indices that persist (including separators that merely shifted).
    pub unchanged: FxHashSet<usize>,
}

/// A persisting character whose display position moved between two
/// formatted strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionChange {
    /// Index in the new formatted string.
    pub new_index: usize,
    /// Index in the old formatted string.
    pub old_index: usize,
    /// The character that moved.
    pub ch: char,
    /// Whether the character is a group separator.
    pub is_separator: bool,
    /// Whether a digit migrated into an adjacent thousands group.
    pub crossed_group: bool,
}

/// Cursor/selection context captured in raw-string space at edit time.
///
/// Supplied by the host when it knows where the edit happened; lets the
/// diff engines resolve edits that are ambiguous by content alone (typing
/// a second `8` into `"8888"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditContext {
    /// Caret position in the new raw string, after the edit.
    pub cursor: usize,
    /// Selection start in the old raw string at the time of the edit.
    pub selection_start: usize,
    /// Length of the old raw string.
    pub old_len: usize,
}

impl EditContext {
    /// Context for a caret edit (no selection) at `cursor`.
    #[must_use]
    pub const fn new(cursor: usize, selection_start: usize, old_len: usize) -> Self {
        Self {
            cursor,
            selection_start,
            old_len,
        }
    }
}
