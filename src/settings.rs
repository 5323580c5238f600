//! Runtime settings
//!
//! Loaded from an optional JSON file; command-line flags override individual fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which rectangle counts as "on the asteroid"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// `0 <= x <= size.x` and `0 <= y <= size.y`
    #[default]
    Origin,
    /// `-size.x <= x <= size.x` and `-size.y <= y <= size.y`
    Symmetric,
}

impl Boundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Boundary::Origin => "origin",
            Boundary::Symmetric => "symmetric",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "origin" => Some(Boundary::Origin),
            "symmetric" | "sym" => Some(Boundary::Symmetric),
            _ => None,
        }
    }
}

/// What to do when a second `asteroid` message arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Redeclaration {
    /// Overwrite the bounds; the active robot is not re-checked
    #[default]
    Replace,
    /// Fail the run
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Longest accepted instruction line in bytes (unbounded when `None`)
    pub max_line_length: Option<usize>,
    pub boundary: Boundary,
    pub redeclaration: Redeclaration,
}

impl Settings {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn with_max_line_length(mut self, limit: usize) -> Self {
        self.max_line_length = Some(limit);
        self
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_redeclaration(mut self, redeclaration: Redeclaration) -> Self {
        self.redeclaration = redeclaration;
        self
    }
}
