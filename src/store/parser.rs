use crate::models::{Section, SectionData, Sections};
use crate::StoreError;
use regex::Regex;
use std::io::BufRead;
use tracing::trace;

/// Separator between a key and its raw value. Only the first occurrence counts.
pub const KEY_VALUE_SEPARATOR: &str = " = ";

/// Marker that turns a whole line into a comment when it comes first.
pub const COMMENT_MARKER: char = '#';

/// How a single input line is treated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Comment,
    Header(&'a str),
    Pair(&'a str, &'a str),
    /// Anything else; skipped without error
    Malformed,
}

/// Rebuilds the section map from a line stream
pub struct IniParser {
    section_header_regex: Regex,
}

impl IniParser {
    pub fn new() -> Result<Self, StoreError> {
        let section_header_regex = Regex::new(r"^\[([A-Za-z0-9_]+)\]$")?;

        Ok(Self {
            section_header_regex,
        })
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if line.starts_with(COMMENT_MARKER) {
            return LineKind::Comment;
        }

        if let Some(captures) = self.section_header_regex.captures(line) {
            if let Some(name) = captures.get(1) {
                return LineKind::Header(name.as_str());
            }
        }

        match line.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, value)) => LineKind::Pair(key, value),
            None => LineKind::Malformed,
        }
    }

    /// Parse a complete stream into a fresh section map.
    ///
    /// Each header commits the pairs gathered so far under the section that
    /// was open, even when there are none. At end of stream the open section
    /// is committed only if it holds at least one pair; an empty final
    /// section fails the whole parse with [`StoreError::EmptySection`].
    /// Read failures surface as [`StoreError::Io`] tagged with `location`.
    pub fn parse<R: BufRead>(&self, reader: R, location: &str) -> Result<Sections, StoreError> {
        let mut sections = Sections::new();
        let mut current = Section::Default;
        let mut buffer = SectionData::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| StoreError::Io {
                location: location.to_string(),
                source,
            })?;

            match self.classify(&line) {
                LineKind::Comment => {}
                LineKind::Header(name) => {
                    let previous = std::mem::replace(&mut current, Section::from_header(name));
                    commit(&mut sections, previous, std::mem::take(&mut buffer));
                }
                LineKind::Pair(key, value) => {
                    buffer.insert(key.to_string(), value.to_string());
                }
                LineKind::Malformed => {
                    if !line.is_empty() {
                        trace!(
                            "Skipping line {} of {}: no key-value separator",
                            index + 1,
                            location
                        );
                    }
                }
            }
        }

        if buffer.is_empty() {
            return Err(StoreError::EmptySection { section: current });
        }
        commit(&mut sections, current, buffer);

        Ok(sections)
    }
}

/// A section declared again takes the position of its latest declaration,
/// so the last section read is also the last one written.
fn commit(sections: &mut Sections, section: Section, data: SectionData) {
    sections.shift_remove(&section);
    sections.insert(section, data);
}
