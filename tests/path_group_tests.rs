//! End-to-end tests for the path grouping core: classifier totality,
//! normalization scenarios, and the properties the grouping contract
//! relies on (determinism, ordering, idempotence).

use path_group_api::{classify, normalize_path, IdentifierKind, OutputMode, PathNormalizer};

/// Concrete path-to-template scenarios covering every identifier kind.
#[test]
fn test_concrete_grouping_scenarios() {
    let cases = [
        (
            "/api/v1/users/550e8400-e29b-41d4-a716-446655440000/profile",
            "/api/v1/users/uuid/profile",
        ),
        ("/api/v1/courts/42/bookings", "/api/v1/courts/numeric_id/bookings"),
        (
            "/api/v1/bookings/booking-abc-99/details",
            "/api/v1/bookings/slug/details",
        ),
        (
            "/v1/matches/by_created_at/2026-02-26T00:01:55.123Z",
            "/v1/matches/by_created_at/iso_date",
        ),
        (
            "/api/v1/users/usr:V1StGXR8_Z5jdHi6B-myT/profile",
            "/api/v1/users/nanoid/profile",
        ),
        (
            "/api/v1/users/not_a_prefix_123/profile",
            "/api/v1/users/slug/profile",
        ),
        ("/static/css/style.css/js/app.js", "/static/css/file/js/file"),
        (
            "/orders/01ARZ3NDEKTSV4RRFFQ69G5FAV/items",
            "/orders/ulid/items",
        ),
        (
            "/sessions/cjld2cjxh0000qzrmn831i7rn",
            "/sessions/cuid",
        ),
        (
            "/workspaces/tz4a98xxat96iws9zmbrgj3a/members",
            "/workspaces/cuid2/members",
        ),
        ("/reports/2026-02-26/daily", "/reports/iso_date/daily"),
    ];

    for (path, expected) in cases {
        assert_eq!(normalize_path(path), expected, "path {path}");
    }
}

/// Classification terminates and returns exactly one kind for arbitrary
/// input, including empty, unicode, and very long segments.
#[test]
fn test_classifier_totality() {
    let inputs = [
        "",
        "/",
        "héllo-wörld",
        "日本語のセグメント",
        "with spaces and %20 escapes",
        "\u{0}\u{1}\u{2}",
        "----____----",
        "a:b:c:d:e:f",
    ];
    for input in inputs {
        // No panic, and exactly one deterministic result
        let first = classify(input);
        let second = classify(input);
        assert_eq!(first, second, "input {input:?}");
    }

    let very_long = "ab-1".repeat(50_000);
    assert_eq!(classify(&very_long), IdentifierKind::Slug);
}

/// Paths with no identifiable segments pass through unchanged.
#[test]
fn test_literal_preservation() {
    let paths = ["/about", "/api/users/profile", "/docs/getting-started"];
    for path in paths {
        assert_eq!(normalize_path(path), path, "path {path}");
    }
}

/// Normalizing a template again is a no-op: kind labels never re-match an
/// identifier rule.
#[test]
fn test_near_idempotence() {
    let fixtures = [
        "/api/v1/users/550e8400-e29b-41d4-a716-446655440000/profile",
        "/api/v1/courts/42/bookings",
        "/api/v1/bookings/booking-abc-99/details",
        "/v1/matches/by_created_at/2026-02-26T00:01:55.123Z",
        "/api/v1/users/usr:V1StGXR8_Z5jdHi6B-myT/profile",
        "/api/v1/users/not_a_prefix_123/profile",
        "/static/css/style.css/js/app.js",
        "/orders/01ARZ3NDEKTSV4RRFFQ69G5FAV/items/cjld2cjxh0000qzrmn831i7rn",
        "",
        "/",
        "//double//slashes//42//",
    ];
    for path in fixtures {
        let once = normalize_path(path);
        let twice = normalize_path(&once);
        assert_eq!(twice, once, "path {path}");
    }
}

/// Digit-only segments are numeric IDs regardless of length.
#[test]
fn test_numeric_generality() {
    for segment in ["0", "7", "42", "12345", "00001", &"9".repeat(512)] {
        assert_eq!(classify(segment), IdentifierKind::NumericId, "segment {segment}");
    }
}

/// A segment matching both a specific ID pattern and the generic slug
/// pattern always resolves to the earlier rule.
#[test]
fn test_disambiguation_ordering() {
    // NanoID is also slug-shaped (digits plus separators)
    let nanoid = "V1StGXR8_Z5jdHi6B-myT";
    assert_eq!(nanoid.len(), 21);
    assert_eq!(classify(nanoid), IdentifierKind::NanoId);

    // A CUID v1 is also CUID2-shaped at the prefix level; the CUID rule
    // comes first.
    assert_eq!(
        classify("cjld2cjxh0000qzrmn831i7rn"),
        IdentifierKind::Cuid
    );

    // An all-digit date-like string stays numeric (numeric is checked
    // before the date rule).
    assert_eq!(classify("20260226"), IdentifierKind::NumericId);
}

/// The legacy wildcard scheme replaces every identified segment with `*`.
#[test]
fn test_wildcard_output_mode() {
    let normalizer = PathNormalizer::new(OutputMode::Wildcard);
    assert_eq!(
        normalizer.normalize("/api/v1/users/550e8400-e29b-41d4-a716-446655440000/posts/42"),
        "/api/v1/users/*/posts/*"
    );
    assert_eq!(normalizer.normalize("/about/team"), "/about/team");
    assert_eq!(normalizer.normalize("/"), "/");
}
