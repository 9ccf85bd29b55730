//! Path normalization service.
//!
//! Collapses many concrete request paths into one canonical template by
//! replacing identifier segments with stable labels. The mapping is
//! many-to-one by design; the concrete path is not recoverable from the
//! template.

use crate::services::classifier::{classify, IdentifierKind};
use serde::{Deserialize, Serialize};

/// Replacement for identified segments in the legacy wildcard mode.
const WILDCARD_LABEL: &str = "*";

/// How identified segments are rendered in the template.
///
/// `Named` substitutes each identified segment with its kind label
/// (`uuid`, `numeric_id`, ...) and is the canonical scheme. `Wildcard` is
/// a legacy mode that replaces every identified segment with `*`; it is
/// strictly less informative and exists only for backward compatibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Named,
    Wildcard,
}

impl OutputMode {
    /// Parse a mode name, returning `None` for unrecognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "named" => Some(OutputMode::Named),
            "wildcard" => Some(OutputMode::Wildcard),
            _ => None,
        }
    }
}

/// Stateless path-to-template normalizer.
///
/// Cheap to construct and to clone; safe for unbounded concurrent use.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathNormalizer {
    mode: OutputMode,
}

impl PathNormalizer {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Normalize a request path into its template.
    ///
    /// Empty and root paths are returned unchanged. Otherwise the path is
    /// split on `/` (empty segments from doubled or trailing slashes are
    /// dropped), each segment is classified, identified segments are
    /// replaced by their label, and the result is rejoined with a leading
    /// `/`.
    pub fn normalize(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return path.to_string();
        }

        let mut template = String::with_capacity(path.len());
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            template.push('/');
            match classify(segment) {
                IdentifierKind::Literal => template.push_str(segment),
                kind => template.push_str(self.render(segment, kind)),
            }
        }

        // Paths made of slashes only collapse to the root
        if template.is_empty() {
            template.push('/');
        }
        template
    }

    fn render<'a>(&self, segment: &'a str, kind: IdentifierKind) -> &'a str {
        match self.mode {
            OutputMode::Named => kind.label().unwrap_or(segment),
            OutputMode::Wildcard => WILDCARD_LABEL,
        }
    }
}

/// Normalize a path with the canonical named-label scheme.
pub fn normalize_path(path: &str) -> String {
    PathNormalizer::default().normalize(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_empty_are_unchanged() {
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn replaces_identifier_segments_with_labels() {
        assert_eq!(
            normalize_path("/api/v1/users/550e8400-e29b-41d4-a716-446655440000/profile"),
            "/api/v1/users/uuid/profile"
        );
        assert_eq!(
            normalize_path("/api/v1/courts/42/bookings"),
            "/api/v1/courts/numeric_id/bookings"
        );
        assert_eq!(
            normalize_path("/v1/matches/by_created_at/2026-02-26T00:01:55.123Z"),
            "/v1/matches/by_created_at/iso_date"
        );
    }

    #[test]
    fn keeps_literal_segments() {
        assert_eq!(
            normalize_path("/api/v1/bookings/booking-abc-99/details"),
            "/api/v1/bookings/slug/details"
        );
        assert_eq!(
            normalize_path("/api/v1/users/not_a_prefix_123/profile"),
            "/api/v1/users/slug/profile"
        );
        assert_eq!(normalize_path("/about/team"), "/about/team");
    }

    #[test]
    fn strips_prefixed_ids() {
        assert_eq!(
            normalize_path("/api/v1/users/usr:V1StGXR8_Z5jdHi6B-myT/profile"),
            "/api/v1/users/nanoid/profile"
        );
    }

    #[test]
    fn replaces_every_file_segment() {
        assert_eq!(
            normalize_path("/static/css/style.css/js/app.js"),
            "/static/css/file/js/file"
        );
    }

    #[test]
    fn collapses_repeated_and_trailing_slashes() {
        assert_eq!(normalize_path("//api//v1//users//42//"), "/api/v1/users/numeric_id");
        assert_eq!(normalize_path("/api/v1/users/"), "/api/v1/users");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn adds_leading_slash() {
        assert_eq!(normalize_path("api/v1/42"), "/api/v1/numeric_id");
    }

    #[test]
    fn normalization_is_idempotent() {
        let fixtures = [
            "/api/v1/users/550e8400-e29b-41d4-a716-446655440000/profile",
            "/api/v1/courts/42/bookings",
            "/api/v1/bookings/booking-abc-99/details",
            "/v1/matches/by_created_at/2026-02-26T00:01:55.123Z",
            "/api/v1/users/usr:V1StGXR8_Z5jdHi6B-myT/profile",
            "/static/css/style.css/js/app.js",
            "/orders/01ARZ3NDEKTSV4RRFFQ69G5FAV/items/cjld2cjxh0000qzrmn831i7rn",
            "",
            "/",
        ];
        for path in fixtures {
            let once = normalize_path(path);
            assert_eq!(normalize_path(&once), once, "path {path}");
        }
    }

    #[test]
    fn wildcard_mode_uses_single_symbol() {
        let normalizer = PathNormalizer::new(OutputMode::Wildcard);
        assert_eq!(
            normalizer.normalize("/api/v1/users/550e8400-e29b-41d4-a716-446655440000/profile"),
            "/api/v1/users/*/profile"
        );
        assert_eq!(
            normalizer.normalize("/api/v1/courts/42/bookings"),
            "/api/v1/courts/*/bookings"
        );
        // Wildcard output is idempotent too: "*" never matches a rule
        assert_eq!(normalizer.normalize("/api/v1/users/*/profile"), "/api/v1/users/*/profile");
    }

    #[test]
    fn output_mode_parsing() {
        assert_eq!(OutputMode::parse("named"), Some(OutputMode::Named));
        assert_eq!(OutputMode::parse("WILDCARD"), Some(OutputMode::Wildcard));
        assert_eq!(OutputMode::parse("bogus"), None);
    }
}
