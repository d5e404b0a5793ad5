//! Integration tests for magnet address validation

use common::magnet::{is_valid_magnet, MagnetLink};

#[test]
fn test_valid_magnet() {
    assert!(is_valid_magnet("magnet://example.com/x"));
}

#[test]
fn test_magnet_forms() {
    assert!(is_valid_magnet("magnet://example.com"));
    assert!(is_valid_magnet("magnet://example.com/path/to/content?v=3"));

    assert!(!is_valid_magnet(""));
    assert!(!is_valid_magnet("magnet://"));
    assert!(!is_valid_magnet("http://example.com/x"));
    assert!(!is_valid_magnet("example.com/x"));
}

#[test]
fn test_magnet_components() {
    let link = MagnetLink::parse("magnet://example.com/x").unwrap();
    assert_eq!(link.host(), "example.com");
    assert_eq!(link.path(), "/x");
    assert_eq!(link.to_string(), "magnet://example.com/x");
}
