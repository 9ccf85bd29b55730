//! Path segment classification service.
//!
//! Classifies a single path segment as one of a closed set of identifier
//! kinds (UUID, numeric ID, ISO date, ULID, CUID, CUID2, NanoID, file name)
//! or else as a generic slug or literal text. Classification is a total,
//! deterministic function of the segment text: every input maps to exactly
//! one kind, and unrecognized segments degrade to `Literal` rather than
//! signaling an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The kind of identifier a path segment was classified as.
///
/// `Literal` means the segment did not match any identifier pattern and
/// should be kept unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    Uuid,
    NumericId,
    IsoDate,
    Ulid,
    Cuid,
    Cuid2,
    NanoId,
    File,
    Slug,
    Literal,
}

impl IdentifierKind {
    /// Canonical replacement label for this kind, or `None` for `Literal`.
    ///
    /// Labels are chosen so that no label itself matches an identifier
    /// pattern, which makes path normalization idempotent.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            IdentifierKind::Uuid => Some("uuid"),
            IdentifierKind::NumericId => Some("numeric_id"),
            IdentifierKind::IsoDate => Some("iso_date"),
            IdentifierKind::Ulid => Some("ulid"),
            IdentifierKind::Cuid => Some("cuid"),
            IdentifierKind::Cuid2 => Some("cuid2"),
            IdentifierKind::NanoId => Some("nanoid"),
            IdentifierKind::File => Some("file"),
            IdentifierKind::Slug => Some("slug"),
            IdentifierKind::Literal => None,
        }
    }

    /// Whether the segment should be kept as-is.
    pub fn is_literal(&self) -> bool {
        matches!(self, IdentifierKind::Literal)
    }
}

// Pre-compiled patterns using once_cell. All character classes are spelled
// out in ASCII so that unicode digits or letters never match an ID rule.
static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});
static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
// ISO 8601 date or datetime: YYYY-MM-DD, optional [Tt]HH:MM:SS, optional
// fractional seconds (1-9 digits), optional Z/z or +-HH:MM offset.
static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}([Tt][0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]{1,9})?([Zz]|[+-][0-9]{2}:[0-9]{2})?)?$",
    )
    .unwrap()
});
// ULID: exactly 26 chars of Crockford Base32 (excludes I, L, O, U).
static ULID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-HJ-NP-TV-Za-hj-np-tv-z]{26}$").unwrap());
// CUID v1: exactly 25 chars, leading 'c', rest lowercase alphanumeric.
static CUID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^c[a-z0-9]{24}$").unwrap());
// CUID2: exactly 24 chars, leading lowercase letter.
static CUID2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]{23}$").unwrap());
// NanoID charset; length and the at-least-one-digit heuristic are checked
// in `is_nanoid` below.
static NANOID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{21}$").unwrap());
// File: anything followed by a dot and a 1-15 char extension.
static FILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+\.[0-9A-Za-z_]{1,15}$").unwrap());
static SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
// Alphanumeric prefix for prefixed IDs like "usr:..." or "order_...".
static PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// One entry in the ordered classification table.
struct Rule {
    kind: IdentifierKind,
    matches: fn(&str) -> bool,
}

/// Whole-segment rules, evaluated top to bottom; the first match wins.
/// Ordering is the disambiguation contract: rules are not mutually
/// exclusive on their own (a NanoID is also a valid slug), so later rules
/// are never consulted once an earlier one matches.
static RULES: &[Rule] = &[
    Rule {
        kind: IdentifierKind::Uuid,
        matches: |s| UUID_RE.is_match(s),
    },
    Rule {
        kind: IdentifierKind::NumericId,
        matches: |s| NUMERIC_RE.is_match(s),
    },
    Rule {
        kind: IdentifierKind::IsoDate,
        matches: |s| ISO_DATE_RE.is_match(s),
    },
    Rule {
        kind: IdentifierKind::Ulid,
        matches: |s| ULID_RE.is_match(s),
    },
    Rule {
        kind: IdentifierKind::Cuid,
        matches: |s| CUID_RE.is_match(s),
    },
    Rule {
        kind: IdentifierKind::Cuid2,
        matches: |s| CUID2_RE.is_match(s),
    },
    Rule {
        kind: IdentifierKind::NanoId,
        matches: is_nanoid,
    },
    Rule {
        kind: IdentifierKind::File,
        matches: |s| FILE_RE.is_match(s),
    },
];

/// NanoID heuristic: 21 URL-safe chars with at least one digit. The digit
/// requirement disambiguates against slugs and CUID2-like strings of the
/// same length; ~3% of genuine random NanoIDs contain no digit and are
/// accepted as a known false-negative rate.
fn is_nanoid(segment: &str) -> bool {
    NANOID_RE.is_match(segment) && segment.bytes().any(|b| b.is_ascii_digit())
}

/// Slug heuristic: URL-safe charset with at least one digit and at least
/// one `-`/`_` separator. Plain words like `users` stay literal.
fn is_slug(segment: &str) -> bool {
    SLUG_RE.is_match(segment)
        && segment.bytes().any(|b| b.is_ascii_digit())
        && segment.bytes().any(|b| b == b'-' || b == b'_')
}

/// Suffix kinds eligible for underscore-prefixed promotion. Numeric
/// suffixes are handled separately with a minimum-length threshold.
fn is_prefixable_id(suffix: &str) -> bool {
    UUID_RE.is_match(suffix)
        || ISO_DATE_RE.is_match(suffix)
        || ULID_RE.is_match(suffix)
        || CUID_RE.is_match(suffix)
        || CUID2_RE.is_match(suffix)
        || is_nanoid(suffix)
}

// Prefix stripping recurses into classification on the suffix only; only
// the immediate suffix is retried, so adversarial input like "a:b:c:..."
// cannot recurse further.
const MAX_PREFIX_DEPTH: usize = 1;

// Numeric suffixes shorter than this are more likely natural-language
// slugs ("user_42") than deliberately prefixed IDs.
const MIN_PREFIXED_NUMERIC_LEN: usize = 3;

/// Classify a single path segment.
///
/// Total function: every string input, including empty, unicode, and
/// arbitrarily long segments, returns exactly one kind.
pub fn classify(segment: &str) -> IdentifierKind {
    classify_at_depth(segment, 0)
}

fn classify_at_depth(segment: &str, depth: usize) -> IdentifierKind {
    if segment.is_empty() {
        return IdentifierKind::Literal;
    }

    for rule in RULES {
        if (rule.matches)(segment) {
            return rule.kind;
        }
    }

    if depth < MAX_PREFIX_DEPTH {
        if let Some(kind) = classify_prefixed(segment, depth) {
            return kind;
        }
    }

    if is_slug(segment) {
        return IdentifierKind::Slug;
    }

    IdentifierKind::Literal
}

/// Prefixed-ID extraction for segments like `usr:V1StGXR8_Z5jdHi6B-myT` or
/// `order_01ARZ3NDEKTSV4RRFFQ69G5FAV`. Only reached when no whole-segment
/// rule matched. A colon separator takes precedence over underscore; when
/// the segment contains a colon past position 0, the underscore branch is
/// not consulted.
fn classify_prefixed(segment: &str, depth: usize) -> Option<IdentifierKind> {
    if let Some(idx) = segment.find(':').filter(|&i| i > 0) {
        let prefix = &segment[..idx];
        let suffix = &segment[idx + 1..];
        if PREFIX_RE.is_match(prefix) && !suffix.is_empty() {
            let kind = classify_at_depth(suffix, depth + 1);
            if !kind.is_literal() {
                return Some(kind);
            }
        }
        return None;
    }

    if let Some(idx) = segment.find('_').filter(|&i| i > 0) {
        let prefix = &segment[..idx];
        let suffix = &segment[idx + 1..];
        if PREFIX_RE.is_match(prefix) && !suffix.is_empty() {
            if NUMERIC_RE.is_match(suffix) {
                // Underscore is a common word separator, so only promote
                // numeric suffixes long enough to look like real IDs.
                if suffix.len() >= MIN_PREFIXED_NUMERIC_LEN {
                    return Some(IdentifierKind::NumericId);
                }
            } else if is_prefixable_id(suffix) {
                return Some(classify_at_depth(suffix, depth + 1));
            }
        }
    }

    None
}
