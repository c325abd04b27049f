//! Typed lookups and updates on top of the string-valued store.
//!
//! Every accessor comes in two forms: a key-only form addressing the default
//! section and an `_in` form taking anything convertible into a [`Section`]
//! (`&str`, `String`, `Option<&str>`, or a `Section`). A named section spelled
//! `"none"` is reserved: writes to it are ignored and reads through it always
//! miss, even though the default section is stored under that name on disk.
//!
//! Integer and float getters are strict and fail with [`ParseError`]; the
//! boolean getter is lenient and falls back to `false`.

use crate::models::Section;
use crate::store::config_store::ConfigStore;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No value for key '{key}' in section {section}")]
    Missing { section: Section, key: String },
    #[error("Value '{value}' for key '{key}' in section {section} is not an integer: {source}")]
    InvalidInt {
        section: Section,
        key: String,
        value: String,
        source: ParseIntError,
    },
    #[error("Value '{value}' for key '{key}' in section {section} is not a float: {source}")]
    InvalidFloat {
        section: Section,
        key: String,
        value: String,
        source: ParseFloatError,
    },
}

impl ConfigStore {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_in(Section::Default, key)
    }

    /// Raw value of `key`, or `None` when the key, the section, or both are absent.
    pub fn get_in(&self, section: impl Into<Section>, key: &str) -> Option<&str> {
        self.section_data(&section.into())?
            .get(key)
            .map(String::as_str)
    }

    pub fn get_int(&self, key: &str) -> Result<i64, ParseError> {
        self.get_int_in(Section::Default, key)
    }

    /// Value of `key` as a base-10 integer. The text is parsed as stored,
    /// so surrounding whitespace makes it invalid.
    pub fn get_int_in(&self, section: impl Into<Section>, key: &str) -> Result<i64, ParseError> {
        let section = section.into();
        let value = self.require(&section, key)?;

        value.parse::<i64>().map_err(|source| ParseError::InvalidInt {
            section,
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
    }

    pub fn get_float(&self, key: &str) -> Result<f64, ParseError> {
        self.get_float_in(Section::Default, key)
    }

    /// Value of `key` as a float. Surrounding whitespace is ignored.
    pub fn get_float_in(&self, section: impl Into<Section>, key: &str) -> Result<f64, ParseError> {
        let section = section.into();
        let value = self.require(&section, key)?;

        value.trim().parse::<f64>().map_err(|source| ParseError::InvalidFloat {
            section,
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get_bool_in(Section::Default, key)
    }

    /// `true` only for a value equal to `"true"` ignoring ASCII case.
    pub fn get_bool_in(&self, section: impl Into<Section>, key: &str) -> bool {
        self.get_in(section, key)
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.exists_in(Section::Default, key)
    }

    pub fn exists_in(&self, section: impl Into<Section>, key: &str) -> bool {
        self.get_in(section, key).is_some()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set_in(Section::Default, key, value);
    }

    /// Insert or overwrite `key`, creating the section when needed.
    /// Ignored when `section` is the reserved name.
    pub fn set_in(
        &mut self,
        section: impl Into<Section>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        let section = section.into();
        let key = key.into();

        if section.is_reserved() {
            debug!(
                "Ignoring write of '{}' to reserved section name '{}'",
                key,
                Section::DEFAULT_NAME
            );
            return;
        }

        self.sections
            .entry(section)
            .or_default()
            .insert(key, value.into());
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.set_int_in(Section::Default, key, value);
    }

    pub fn set_int_in(&mut self, section: impl Into<Section>, key: impl Into<String>, value: i64) {
        self.set_in(section, key, value.to_string());
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f64) {
        self.set_float_in(Section::Default, key, value);
    }

    pub fn set_float_in(&mut self, section: impl Into<Section>, key: impl Into<String>, value: f64) {
        self.set_in(section, key, value.to_string());
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set_bool_in(Section::Default, key, value);
    }

    pub fn set_bool_in(&mut self, section: impl Into<Section>, key: impl Into<String>, value: bool) {
        self.set_in(section, key, value.to_string());
    }

    fn require(&self, section: &Section, key: &str) -> Result<&str, ParseError> {
        self.get_in(section, key).ok_or_else(|| ParseError::Missing {
            section: section.clone(),
            key: key.to_string(),
        })
    }
}
