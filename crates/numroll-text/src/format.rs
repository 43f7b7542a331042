#![forbid(unsafe_code)]

//! Raw → formatted number rendering.
//!
//! Turns a canonical raw value (`.` decimal, optional leading `-`) into a
//! locale display string, preserving every in-progress typing state the
//! raw value carries: a bare `-`, a trailing `.`, user-typed trailing
//! zeros. Grouping is applied to the raw digit text itself, never to a
//! parsed float, so the display always strips back to the exact raw value.

use crate::classify::is_group_separator;
use numroll_i18n::Separators;

/// Formatting behavior for [`format_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Insert group separators. When false, only the decimal separator is
    /// localized.
    pub format: bool,
    /// Whether the caller normalizes bare-decimal input (`".5"` → `"0.5"`).
    /// [`format_value`] itself never inserts the zero; see [`normalize_raw`].
    pub auto_add_leading_zero: bool,
    /// Separators for the display locale.
    pub separators: Separators,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: true,
            auto_add_leading_zero: false,
            separators: Separators::INVARIANT,
        }
    }
}

/// Format a raw value for display.
///
/// The four in-progress states (`""`, `"-"`, `"."`, `"-."`) render
/// verbatim (with the decimal localized) and never reach numeric parsing.
/// Unparseable input falls back to literal decimal substitution so the
/// display never breaks mid-edit.
#[must_use]
pub fn format_value(raw: &str, opts: &FormatOptions) -> String {
    let decimal = opts.separators.decimal;

    match raw {
        "" => return String::new(),
        "-" => return "-".to_string(),
        "." => return decimal.to_string(),
        "-." => return format!("-{decimal}"),
        _ => {}
    }

    if raw.parse::<f64>().is_err() {
        return substitute_decimal(raw, decimal);
    }

    let bare_decimal = raw.starts_with('.') || raw.starts_with("-.");
    if bare_decimal && !opts.auto_add_leading_zero {
        // The user typed ".5"; leave it alone. Zero-prefixing is the
        // caller's raw-value normalization, not a display concern.
        return substitute_decimal(raw, decimal);
    }

    if !opts.format {
        return substitute_decimal(raw, decimal);
    }

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    // A raw value has at most one dot. `"123."` splits to `("123", "")`,
    // which keeps the just-typed trailing decimal in the display.
    let (int_digits, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(raw.len() + int_digits.len() / 3);
    out.push_str(sign);
    push_grouped(int_digits, opts.separators.group, &mut out);
    if let Some(frac) = fraction {
        out.push(decimal);
        out.push_str(frac);
    }
    out
}

/// Replace the raw `.` with the locale decimal, leaving digits and sign.
fn substitute_decimal(raw: &str, decimal: char) -> String {
    raw.chars()
        .map(|ch| if ch == '.' { decimal } else { ch })
        .collect()
}

/// Append `digits` with a group separator every three digits from the right.
fn push_grouped(digits: &str, group: char, out: &mut String) {
    let len = digits.chars().count();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(group);
        }
        out.push(ch);
    }
}

/// Strip a formatted string back to its raw value: group separators
/// dropped, the locale decimal restored to `.`.
///
/// Inverse of [`format_value`] for every raw value.
#[must_use]
pub fn strip_formatting(formatted: &str, seps: &Separators) -> String {
    formatted
        .chars()
        .filter(|&ch| !is_group_separator(ch, seps))
        .map(|ch| if ch == seps.decimal { '.' } else { ch })
        .collect()
}

/// Caller-side raw normalization: prefix the leading zero for bare-decimal
/// input when requested. In-progress states pass through verbatim.
#[must_use]
pub fn normalize_raw(raw: &str, auto_add_leading_zero: bool) -> String {
    if !auto_add_leading_zero {
        return raw.to_string();
    }
    match raw {
        "" | "-" | "." | "-." => raw.to_string(),
        _ if raw.starts_with("-.") => format!("-0{}", &raw[1..]),
        _ if raw.starts_with('.') => format!("0{raw}"),
        _ => raw.to_string(),
    }
}
