//! inistore - Sectioned Key-Value Configuration Store
//!
//! inistore loads an INI-style file into memory, offers string and typed
//! lookups and updates per section, and writes the result back with a
//! selectable policy for what stays cached afterwards.
//!
//! ```text
//! # comment line, skipped on read
//! key1 = value1
//! [sectionName]
//! key2 = value2
//! ```

pub mod logging;
pub mod models;
pub mod store;

pub use models::*;
pub use store::{Backing, ConfigStore, FileBacking, ParseError, StoreOptions, DEFAULT_HEADER};

/// Result type alias for inistore operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types specific to inistore operations
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error accessing {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Final section {section} has no key-value pairs")]
    EmptySection { section: Section },

    #[error("File header {header:?} must be a single line starting with '#'")]
    InvalidHeader { header: String },

    #[error("Invalid section header pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Value error: {0}")]
    Value(#[from] ParseError),
}
