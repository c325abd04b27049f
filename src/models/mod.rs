//! Data models for inistore

pub mod save_policy;
pub mod section;

pub use save_policy::*;
pub use section::*;
