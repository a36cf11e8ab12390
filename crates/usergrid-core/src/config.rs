//! Grid configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{GridError, Result};

/// Rows per page used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fields the search term is matched against when nothing else is configured
pub const DEFAULT_SEARCH_FIELDS: [&str; 3] = ["name", "email", "role"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Records shown per page, at least 1
    pub page_size: usize,
    /// Record fields searched by the filter stage
    pub search_fields: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_fields: DEFAULT_SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl GridConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(GridError::Configuration(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.search_fields.is_empty() {
            return Err(GridError::Configuration(
                "search_fields must name at least one field".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults when it does not exist
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No grid config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid config from {:?}", path))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse grid config {:?}", path))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
