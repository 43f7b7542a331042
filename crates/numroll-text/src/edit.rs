#![forbid(unsafe_code)]

//! Per-edit pipeline.
//!
//! One call per host input event: classify the raw edit, probe for a
//! barrel-wheel roll, format old and new values, re-express the diff over
//! the display string, detect group-crossing movement, and place the
//! caret. The host serializes calls — each edit is processed to completion
//! against the previously committed raw value before the next one.

use crate::barrel::{BarrelWheelSpec, detect_barrel_wheel};
use crate::caret::raw_to_formatted;
use crate::changes::{ChangeSet, EditContext, FormattedChangeSet, PositionChange};
use crate::format::{FormatOptions, format_value};
use crate::formatted_diff::diff_formatted;
use crate::raw_diff::diff_raw;
use crate::shift::detect_position_shifts;

/// Everything a host needs to render one edit.
#[derive(Debug, Clone)]
pub struct EditOutcome {
    /// The new display string.
    pub formatted: String,
    /// Raw-space classification of the edit.
    pub changes: ChangeSet,
    /// Display-space classification (what fades in vs. persists).
    pub formatted_changes: FormattedChangeSet,
    /// Persisting characters that moved (what slides).
    pub position_changes: Vec<PositionChange>,
    /// Single-digit roll, when the edit was one.
    pub wheel: Option<BarrelWheelSpec>,
    /// Caret offset into `formatted`.
    pub caret: usize,
}

/// Process one edit from `old_raw` to `new_raw`.
///
/// `ctx`, when present, carries the selection offsets captured at edit
/// time; without it every stage falls back to its content-based strategy
/// and the caret lands at the end of the value.
#[must_use]
pub fn process_edit(
    old_raw: &str,
    new_raw: &str,
    ctx: Option<&EditContext>,
    opts: &FormatOptions,
) -> EditOutcome {
    let changes = diff_raw(old_raw, new_raw, ctx);
    let wheel = ctx.and_then(|ctx| wheel_for_edit(old_raw, new_raw, ctx));

    let old_formatted = format_value(old_raw, opts);
    let formatted = format_value(new_raw, opts);

    let formatted_changes = diff_formatted(&old_formatted, &formatted, ctx, &opts.separators);
    let position_changes = detect_position_shifts(&old_formatted, &formatted, &opts.separators);

    let caret_raw = ctx.map_or_else(|| new_raw.chars().count(), |ctx| ctx.cursor);
    let caret = raw_to_formatted(caret_raw, &formatted, &opts.separators);

    EditOutcome {
        formatted,
        changes,
        formatted_changes,
        position_changes,
        wheel,
        caret,
    }
}

/// Recover the selection end from the context and the two lengths, then
/// probe for a wheel. The replaced span is however much of the old string
/// the typed span did not account for.
fn wheel_for_edit(old_raw: &str, new_raw: &str, ctx: &EditContext) -> Option<BarrelWheelSpec> {
    let old_len = old_raw.chars().count();
    let new_len = new_raw.chars().count();
    if ctx.old_len != old_len || ctx.cursor < ctx.selection_start {
        return None;
    }
    let typed = ctx.cursor - ctx.selection_start;
    let replaced = (old_len + typed).checked_sub(new_len)?;
    let selection_end = ctx.selection_start + replaced;
    detect_barrel_wheel(old_raw, new_raw, ctx.selection_start, selection_end, ctx.cursor)
}
