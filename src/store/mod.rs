//! Sectioned key-value store: parsing, rendering, typed access and persistence

pub mod accessors;
pub mod backing;
pub mod config_store;
pub mod parser;
pub mod serializer;

pub use accessors::ParseError;
pub use backing::{Backing, FileBacking};
pub use config_store::{ConfigStore, StoreOptions, DEFAULT_HEADER};
pub use parser::{IniParser, LineKind};
