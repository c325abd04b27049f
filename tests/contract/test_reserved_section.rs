//! Contract tests for the reserved default-section name
//!
//! The default section is stored on disk under the name "none", yet a
//! caller naming that section explicitly can neither read nor write it.
//! These tests pin that asymmetry as existing behavior.

use crate::{fresh_path, write_fixture};
use inistore::{ConfigStore, Section};

#[test]
fn test_read_through_reserved_name_misses() {
    let (_dir, path) = fresh_path();
    let mut store = ConfigStore::new(&path).unwrap();
    store.set_in(None::<&str>, "k", "v");

    assert_eq!(store.get_in("none", "k"), None);
    assert_eq!(store.get_in(None::<&str>, "k"), Some("v"));
    assert_eq!(store.get("k"), Some("v"));
}

#[test]
fn test_write_through_reserved_name_is_ignored() {
    let (_dir, path) = fresh_path();
    let mut store = ConfigStore::new(&path).unwrap();
    store.set_in("none", "k", "v");
    store.set_bool_in(Section::named("none"), "flag", true);

    assert!(store.is_empty());
    assert!(!store.exists("k"));
}

#[test]
fn test_reserved_header_in_file_feeds_default_section() {
    let (_dir, path) = write_fixture("[s]\na = 1\n[none]\nk = v\n");
    let mut store = ConfigStore::new(&path).unwrap();

    assert!(store.load());
    assert_eq!(store.get("k"), Some("v"));
    assert_eq!(store.get_in("none", "k"), None);
    assert_eq!(store.get_in("s", "a"), Some("1"));
}
