#![forbid(unsafe_code)]

//! Locale separator resolution for the numroll editing engine.
//!
//! Maps a BCP 47-ish locale tag to the decimal and group separator
//! characters used when displaying a number. Resolution never fails:
//! unknown or malformed tags fall back through a region → language →
//! invariant chain, so a caller can hand us whatever the platform
//! reported without pre-validating it.
//!
//! # Role in numroll
//! `numroll-i18n` isolates locale knowledge so the editing engine in
//! `numroll-text` stays a pure string-algorithms crate. It depends on
//! nothing and can be reused by any display layer.
//!
//! # Invariants
//!
//! 1. `resolve_separators` is total: every input (including `None` and
//!    garbage tags) resolves to some `Separators`.
//! 2. For every resolvable locale, `decimal != group`.

// ---------------------------------------------------------------------------
// Separators
// ---------------------------------------------------------------------------

/// Decimal and group separator characters for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separators {
    /// Character between the integer and fractional parts.
    pub decimal: char,
    /// Character between digit groups (thousands).
    pub group: char,
}

impl Separators {
    /// The invariant (en-style) separators: `.` decimal, `,` group.
    pub const INVARIANT: Self = Self {
        decimal: '.',
        group: ',',
    };

    /// Create separators with explicit characters.
    #[must_use]
    pub const fn new(decimal: char, group: char) -> Self {
        Self { decimal, group }
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::INVARIANT
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve the separators for a locale tag.
///
/// Accepts tags in any case with `-` or `_` subtag delimiters
/// (`"de-DE"`, `"de_de"`, `"DE"`). Resolution order:
///
/// 1. full normalized tag (region-specific overrides like `de-CH`),
/// 2. primary language subtag (`de-DE` → `de`),
/// 3. [`Separators::INVARIANT`].
///
/// `None` and unrecognized tags resolve to the invariant separators.
#[must_use]
pub fn resolve_separators(locale: Option<&str>) -> Separators {
    let Some(tag) = locale else {
        return Separators::INVARIANT;
    };

    let normalized = normalize_tag(tag);
    if let Some(seps) = region_override(&normalized) {
        return seps;
    }

    let language = normalized.split('-').next().unwrap_or("");
    language_separators(language).unwrap_or(Separators::INVARIANT)
}

/// Lowercase the tag and fold `_` delimiters to `-`.
fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .chars()
        .map(|ch| {
            if ch == '_' {
                '-'
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Region-specific overrides that differ from the language default.
fn region_override(tag: &str) -> Option<Separators> {
    match tag {
        // Switzerland groups with the right single quotation mark in every
        // national language, against each language's own default.
        "de-ch" | "fr-ch" | "it-ch" | "rm-ch" => Some(Separators::new('.', '\u{2019}')),
        _ => None,
    }
}

/// Default separators for a primary language subtag.
fn language_separators(language: &str) -> Option<Separators> {
    match language {
        // Dot decimal, comma grouping.
        "en" | "ja" | "zh" | "ko" | "th" | "hi" | "ms" | "fil" | "he" | "ga" | "cy" => {
            Some(Separators::INVARIANT)
        }
        // Comma decimal, dot grouping.
        "de" | "es" | "it" | "nl" | "pt" | "da" | "el" | "tr" | "id" | "ro" | "hr" | "sl"
        | "sr" | "bs" | "mk" | "sq" | "ca" | "vi" | "is" => Some(Separators::new(',', '.')),
        // Comma decimal, no-break space grouping.
        "fr" | "fi" | "sv" | "nb" | "nn" | "no" | "pl" | "cs" | "sk" | "ru" | "uk" | "bg"
        | "lv" | "lt" | "et" | "hu" | "kk" | "be" | "hy" | "az" | "uz" => {
            Some(Separators::new(',', '\u{a0}'))
        }
        // Arabic-script separators.
        "ar" => Some(Separators::new('\u{66b}', '\u{66c}')),
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
