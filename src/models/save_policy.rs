//! Post-save cache policy for inistore

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What happens to the in-memory sections once a save attempt finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SavePolicy {
    /// Leave the in-memory data untouched
    #[default]
    Keep,
    /// Clear every in-memory section
    Unload,
    /// Clear, then load the just-written file again
    Reload,
}

impl SavePolicy {
    /// Whether the policy drops the in-memory sections.
    pub fn clears_cache(self) -> bool {
        !matches!(self, SavePolicy::Keep)
    }
}

impl FromStr for SavePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(SavePolicy::Keep),
            "unload" => Ok(SavePolicy::Unload),
            "reload" => Ok(SavePolicy::Reload),
            _ => Err(format!("Invalid save policy: {}", s)),
        }
    }
}
