//! Unit tests for the line parser
//!
//! Feeds the parser through a real file backing to cover line classification,
//! section commits and the end-of-stream rule.

use crate::write_fixture;
use inistore::{Backing, FileBacking, Section, StoreError};
use inistore::store::{IniParser, LineKind};

fn parse_file(content: &str) -> Result<inistore::Sections, StoreError> {
    let (_dir, path) = write_fixture(content);
    let backing = FileBacking::new(&path);
    let reader = backing.open_reader().unwrap();
    IniParser::new().unwrap().parse(reader, &backing.location())
}

#[test]
fn test_sections_in_file_order_are_all_committed() {
    let sections = parse_file("top = 1\n[b]\nx = 2\n[a]\ny = 3\n").unwrap();

    let names: Vec<_> = sections.keys().cloned().collect();
    assert_eq!(
        names,
        vec![Section::Default, Section::named("b"), Section::named("a")]
    );
}

#[test]
fn test_intermediate_empty_section_is_kept() {
    let sections = parse_file("[empty]\n[full]\nk = v\n").unwrap();

    assert_eq!(sections.get(&Section::named("empty")).map(|d| d.len()), Some(0));
    assert_eq!(sections.get(&Section::named("full")).map(|d| d.len()), Some(1));
}

#[test]
fn test_trailing_comment_after_last_pair_is_fine() {
    let sections = parse_file("[s]\nk = v\n# end of file\n\n").unwrap();
    assert_eq!(sections.len(), 2);
}

#[test]
fn test_trailing_header_fails_with_its_name() {
    let err = parse_file("[s]\nk = v\n[tail]\n# nothing here\n").unwrap_err();

    match err {
        StoreError::EmptySection { section } => assert_eq!(section, Section::named("tail")),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_unicode_keys_and_values() {
    let sections = parse_file("grüße = héllo wörld\n").unwrap();
    assert_eq!(
        sections
            .get(&Section::Default)
            .and_then(|d| d.get("grüße"))
            .map(String::as_str),
        Some("héllo wörld")
    );
}

#[test]
fn test_non_ascii_header_is_not_a_section() {
    let parser = IniParser::new().unwrap();
    assert_eq!(parser.classify("[grüße]"), LineKind::Malformed);
}
