//! Analysis settings loaded from an optional JSON file.
//!
//! ```json
//! {
//!   "max_keywords": 8,
//!   "aggregate": { "top_keywords": 15, "trend_weeks": 12 }
//! }
//! ```
//!
//! Missing keys keep their defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::analyzers::aggregate::AggregateOptions;
use crate::analyzers::keywords::DEFAULT_MAX_KEYWORDS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keyword limit used when analyzing a newly submitted comment.
    pub max_keywords: usize,
    pub aggregate: AggregateOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            aggregate: AggregateOptions::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(content)?;
        if settings.max_keywords == 0 {
            anyhow::bail!("max_keywords must be greater than zero");
        }
        Ok(settings)
    }

    /// Loads from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
