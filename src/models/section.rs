//! Section model for inistore
//!
//! Identifies which group of key-value pairs an operation targets. The group of
//! pairs declared before any `[header]` line is the default section; it is
//! written without a header and reserves the name `"none"`.

use indexmap::IndexMap;
use std::fmt;

/// Key-value pairs of a single section, in insertion order. Values are
/// always kept as strings.
pub type SectionData = IndexMap<String, String>;

/// The full in-memory model: every present section and its pairs, in the
/// order they were read or first written.
pub type Sections = IndexMap<Section, SectionData>;

/// Target of a lookup or mutation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Section {
    /// Pairs that precede the first section header
    #[default]
    Default,
    /// Pairs under a `[name]` header
    Named(String),
}

impl Section {
    /// Reserved name of the default section.
    pub const DEFAULT_NAME: &'static str = "none";

    pub fn named(name: impl Into<String>) -> Self {
        Section::Named(name.into())
    }

    /// Section opened by a `[name]` header line.
    ///
    /// A header spelling the reserved name folds into [`Section::Default`],
    /// since files share a single namespace with it.
    pub fn from_header(name: &str) -> Self {
        if name == Self::DEFAULT_NAME {
            Section::Default
        } else {
            Section::Named(name.to_string())
        }
    }

    /// True for a named section spelling the reserved default name.
    ///
    /// Such a section can never be written, and reads through it always
    /// miss, even when the default section holds the requested key.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Section::Named(name) if name == Self::DEFAULT_NAME)
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Section::Default)
    }

    /// Name as it appears on disk (`"none"` for the default section).
    pub fn name(&self) -> &str {
        match self {
            Section::Default => Self::DEFAULT_NAME,
            Section::Named(name) => name,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Default => write!(f, "<default>"),
            Section::Named(name) => write!(f, "[{}]", name),
        }
    }
}

impl From<&str> for Section {
    fn from(name: &str) -> Self {
        Section::Named(name.to_string())
    }
}

impl From<String> for Section {
    fn from(name: String) -> Self {
        Section::Named(name)
    }
}

impl From<&String> for Section {
    fn from(name: &String) -> Self {
        Section::Named(name.clone())
    }
}

impl From<Option<&str>> for Section {
    fn from(name: Option<&str>) -> Self {
        name.map(Section::from).unwrap_or_default()
    }
}

impl From<&Section> for Section {
    fn from(section: &Section) -> Self {
        section.clone()
    }
}
