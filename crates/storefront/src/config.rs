//! Storefront configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields a working golf storefront.

use crate::pagination::DEFAULT_PAGE_SIZE;
use anyhow::{Context, Result, bail};
use facets::FacetVocabulary;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Products requested per page
    pub page_size: usize,
    /// Category and brand options offered in the filter panel
    pub vocabulary: FacetVocabulary,
}

impl StorefrontConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;

        info!(
            "Loaded config from {} (page size {}, {} categories, {} brands)",
            path.display(),
            config.page_size,
            config.vocabulary.categories.len(),
            config.vocabulary.brands.len()
        );
        Ok(config)
    }

    /// Config file if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        Ok(())
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            vocabulary: FacetVocabulary::golf_defaults(),
        }
    }
}
