#![forbid(unsafe_code)]

//! Formatted-number editing engine.
//!
//! The algorithms behind an animated number input: given the raw numeric
//! string before and after an edit, classify every character as
//! added/removed/unchanged/changed, re-derive that classification over the
//! locale-formatted display string, detect digits and separators that moved
//! across a thousands-group boundary, map caret offsets between raw and
//! formatted space, and detect single-digit replacements that should play a
//! rolling "barrel wheel" transition.
//!
//! All indices are char indices. Every function is total over the raw-value
//! grammar (`-?` digits `(.` digits `)?` plus the in-progress states `""`,
//! `"-"`, `"."`, `"-."`); inconsistent cursor context degrades to a
//! conservative content-based classification instead of erroring.
//!
//! The per-edit flow is bundled in [`edit::process_edit`]:
//!
//! 1. [`raw_diff::diff_raw`] classifies the raw edit.
//! 2. [`barrel::detect_barrel_wheel`] probes for a single-digit roll.
//! 3. [`format::format_value`] produces the display string.
//! 4. [`formatted_diff::diff_formatted`] re-expresses the diff over it.
//! 5. [`shift::detect_position_shifts`] finds group-crossing movement.
//! 6. [`caret::raw_to_formatted`] places the caret in the new display.

pub mod barrel;
pub mod caret;
pub mod changes;
pub mod classify;
pub mod edit;
pub mod format;
pub mod formatted_diff;
mod lcs;
pub mod raw_diff;
pub mod shift;

pub use barrel::{BarrelWheelSpec, WheelDirection, detect_barrel_wheel, shift_barrel_wheel};
pub use caret::{formatted_to_raw, raw_len, raw_to_formatted};
pub use changes::{ChangeSet, EditContext, FormattedChangeSet, PositionChange};
pub use classify::{is_group_separator, is_raw_char, is_separator};
pub use edit::{EditOutcome, process_edit};
pub use format::{FormatOptions, format_value, normalize_raw, strip_formatting};
pub use formatted_diff::diff_formatted;
pub use raw_diff::diff_raw;
pub use shift::detect_position_shifts;

pub use numroll_i18n::{Separators, resolve_separators};
