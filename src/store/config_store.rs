use crate::models::{SavePolicy, Section, SectionData, Sections};
use crate::store::backing::{Backing, FileBacking};
use crate::store::parser::{IniParser, COMMENT_MARKER};
use crate::store::serializer;
use crate::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Comment line written at the top of every saved file by default.
pub const DEFAULT_HEADER: &str = "# Created by inistore";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// First line of every saved file. Must be a single line starting with `#`
    /// so it reads back as a comment.
    pub header: String,
    /// Replace the file through a temp file and rename
    pub atomic_writes: bool,
    /// Unix mode applied after each save, if any
    pub file_permissions: Option<u32>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            atomic_writes: true,
            file_permissions: None,
        }
    }
}

/// In-memory view of one sectioned key-value file.
///
/// The store is populated by [`load`](Self::load) or by the `set*` accessors,
/// and written back with [`save`](Self::save). It is meant for a single owner;
/// every state change takes `&mut self`.
pub struct ConfigStore {
    pub(super) sections: Sections,
    backing: Box<dyn Backing>,
    path: Option<PathBuf>,
    header: String,
    parser: IniParser,
}

impl ConfigStore {
    /// Store backed by the file at `path`, using default options.
    ///
    /// Nothing is read until [`load`](Self::load) is called.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_options(path, StoreOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: StoreOptions) -> Result<Self> {
        let path = path.into();
        let backing = FileBacking::new(path.clone())
            .with_atomic_writes(options.atomic_writes)
            .with_file_permissions(options.file_permissions);

        let mut store = Self::with_backing(backing, options)?;
        store.path = Some(path);
        Ok(store)
    }

    /// Store over any [`Backing`]. `options.atomic_writes` and
    /// `options.file_permissions` only apply to file backings built by
    /// [`with_options`](Self::with_options).
    ///
    /// Fails with [`StoreError::InvalidHeader`] when `options.header` would
    /// not read back as a comment line.
    pub fn with_backing(backing: impl Backing + 'static, options: StoreOptions) -> Result<Self> {
        validate_header(&options.header)?;

        Ok(Self {
            sections: Sections::new(),
            backing: Box::new(backing),
            path: None,
            header: options.header,
            parser: IniParser::new()?,
        })
    }

    /// Path of the backing file, when the store is file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Rebuild every section from the backing.
    ///
    /// Returns `false` when the backing cannot be read or the last section of
    /// the file holds no pairs; the store is left empty in both cases.
    pub fn load(&mut self) -> bool {
        match self.try_load() {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to load {}: {}", self.backing.location(), e);
                false
            }
        }
    }

    /// Same as [`load`](Self::load), reporting why a load failed.
    pub fn try_load(&mut self) -> Result<()> {
        let location = self.backing.location();
        let parsed = self
            .backing
            .open_reader()
            .map_err(|source| StoreError::Io {
                location: location.clone(),
                source,
            })
            .and_then(|reader| self.parser.parse(reader, &location));

        match parsed {
            Ok(sections) => {
                debug!("Loaded {} sections from {}", sections.len(), location);
                self.sections = sections;
                Ok(())
            }
            Err(e) => {
                self.sections.clear();
                Err(e)
            }
        }
    }

    /// Write every section back, keeping the in-memory data.
    pub fn save(&mut self) -> bool {
        self.save_with(SavePolicy::Keep)
    }

    /// Write every section back, then apply `policy` to the in-memory data.
    ///
    /// The policy runs even when the write fails, so `Unload` and `Reload`
    /// can drop unsaved changes.
    pub fn save_with(&mut self, policy: SavePolicy) -> bool {
        match self.try_save(policy) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save {}: {}", self.backing.location(), e);
                false
            }
        }
    }

    /// Same as [`save_with`](Self::save_with), reporting why a write failed.
    pub fn try_save(&mut self, policy: SavePolicy) -> Result<()> {
        let text = serializer::render(&self.header, &self.sections);
        let written = self
            .backing
            .write_all(&text)
            .map_err(|source| StoreError::Io {
                location: self.backing.location(),
                source,
            });

        if written.is_ok() {
            debug!(
                "Saved {} sections to {}",
                self.sections.len(),
                self.backing.location()
            );
        }

        self.apply_policy(policy);
        written
    }

    fn apply_policy(&mut self, policy: SavePolicy) {
        match policy {
            SavePolicy::Keep => {}
            SavePolicy::Unload => self.sections.clear(),
            SavePolicy::Reload => {
                self.sections.clear();
                self.load();
            }
        }
    }

    /// Sections currently held in memory, in the order they were read or first written.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.keys()
    }

    /// Keys of one section, in insertion order. Empty for absent or reserved sections.
    pub fn keys_in(&self, section: impl Into<Section>) -> Vec<&str> {
        self.section_data(&section.into())
            .map(|data| data.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub(super) fn section_data(&self, section: &Section) -> Option<&SectionData> {
        if section.is_reserved() {
            return None;
        }
        self.sections.get(section)
    }
}

fn validate_header(header: &str) -> Result<()> {
    if !header.starts_with(COMMENT_MARKER) || header.contains(['\n', '\r']) {
        return Err(StoreError::InvalidHeader {
            header: header.to_string(),
        });
    }
    Ok(())
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("location", &self.backing.location())
            .field("sections", &self.sections)
            .finish()
    }
}
