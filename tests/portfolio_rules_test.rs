//! Tests for the pure rules behind the portfolio write path: lenient date
//! normalization, collaborator link construction, and upload validation.
//!
//! Run with: `cargo test --test portfolio_rules_test`
use chrono::{TimeZone, Utc};

use horus_backend::db::portfolio::{collaborator_ids, parse_date_as_utc, replacement_link_ids};
use horus_backend::errors::ApiError;
use horus_backend::uploads::{generate_filename, remove_image, store_image, validate_extension};

// ── Date normalization ──

#[test]
fn test_offset_is_discarded_not_converted() {
    // Wall-clock fields are kept; the +05:00 zone is dropped.
    let parsed = parse_date_as_utc("2024-03-15T10:00:00+05:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap());
    assert_ne!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 5, 0, 0).unwrap());
}

#[test]
fn test_utc_suffix_parses_unchanged() {
    let parsed = parse_date_as_utc("2024-03-15T10:00:00Z").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap());
}

#[test]
fn test_naive_datetime_parses_as_utc() {
    let parsed = parse_date_as_utc("2024-03-15T10:30:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap());

    let parsed = parse_date_as_utc("2024-03-15 10:30:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap());
}

#[test]
fn test_bare_date_parses_to_midnight_utc() {
    let parsed = parse_date_as_utc("2024-03-15").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
}

#[test]
fn test_empty_and_garbage_dates_return_none() {
    // The create path maps None to "now"; the update path leaves the stored
    // value untouched.
    assert!(parse_date_as_utc("").is_none());
    assert!(parse_date_as_utc("   ").is_none());
    assert!(parse_date_as_utc("not-a-date").is_none());
    assert!(parse_date_as_utc("15/03/2024").is_none());
}

#[test]
fn test_create_fallback_is_now() {
    // Mirrors the create path: unparsable input falls back to the current
    // instant rather than an error.
    let before = Utc::now();
    let stored = parse_date_as_utc("garbage").unwrap_or_else(Utc::now);
    let after = Utc::now();
    assert!(stored >= before && stored <= after);
}

// ── Collaborator links ──

#[test]
fn test_creator_is_always_linked_first() {
    let ids = collaborator_ids("creator", &[]);
    assert_eq!(ids, vec!["creator"]);
}

#[test]
fn test_extras_skip_empty_and_creator() {
    let extras = vec![
        "bob".to_string(),
        "".to_string(),
        "creator".to_string(),
        "carol".to_string(),
    ];
    let ids = collaborator_ids("creator", &extras);
    assert_eq!(ids, vec!["creator", "bob", "carol"]);
}

#[test]
fn test_in_list_duplicates_are_kept() {
    // Dedup happens against the creator only; duplicate extras pass through
    // and are rejected by the composite key at insert.
    let extras = vec!["bob".to_string(), "bob".to_string()];
    let ids = collaborator_ids("creator", &extras);
    assert_eq!(ids, vec!["creator", "bob", "bob"]);
}

#[test]
fn test_replacement_skips_empty_without_readding_creator() {
    let supplied = vec!["dave".to_string(), "".to_string(), "erin".to_string()];
    assert_eq!(replacement_link_ids(&supplied), vec!["dave", "erin"]);
}

#[test]
fn test_empty_replacement_removes_everyone() {
    assert!(replacement_link_ids(&[]).is_empty());
}

// ── Upload validation ──

#[test]
fn test_extension_allow_list_is_case_insensitive() {
    assert_eq!(validate_extension("photo.PNG").unwrap(), "png");
    assert_eq!(validate_extension("shot.jpeg").unwrap(), "jpeg");
    assert_eq!(validate_extension("anim.GIF").unwrap(), "gif");
}

#[test]
fn test_disallowed_extensions_are_rejected() {
    assert!(validate_extension("malware.exe").is_err());
    assert!(validate_extension("doc.pdf").is_err());
    assert!(validate_extension("no_extension").is_err());
}

#[tokio::test]
async fn test_empty_payload_is_rejected_before_any_write() {
    // The zero-length guard fires ahead of validation and disk I/O.
    let result = store_image("photo.png", &[]).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

#[tokio::test]
async fn test_disallowed_extension_is_rejected_before_any_write() {
    let result = store_image("malware.exe", b"not really an image").await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

#[tokio::test]
async fn test_removing_a_missing_image_is_a_quiet_noop() {
    // Old-image cleanup runs only after the new path is persisted and must
    // never fail the request, even when the file is already gone.
    remove_image("/images/does-not-exist.png").await;
    remove_image("not-an-images-path.png").await;
    remove_image("/images/../escape.png").await;
}

#[test]
fn test_generated_filenames_preserve_extension_and_differ() {
    let a = generate_filename("png");
    let b = generate_filename("png");
    assert!(a.ends_with(".png"));
    assert!(b.ends_with(".png"));
    assert_ne!(a, b);
}
