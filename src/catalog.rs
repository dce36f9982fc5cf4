use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogEntry, Category},
};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Read-only collection of recommendable titles
///
/// Titles are unique case-insensitively. Entries are shared with favorites
/// and derived results through `Arc`, never copied or mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Arc<CatalogEntry>>,
}

impl Catalog {
    /// Builds a catalog, rejecting titles that collide case-insensitively
    pub fn new(entries: Vec<CatalogEntry>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.title.to_lowercase()) {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate catalog title: {}",
                    entry.title
                )));
            }
            if entry.genres.is_empty() {
                tracing::warn!(title = %entry.title, "Catalog entry has no genres, it will never be recommended");
            }
        }

        Ok(Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), entries = catalog.len(), "Loaded catalog from file");
        Ok(catalog)
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> AppResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn entries(&self) -> &[Arc<CatalogEntry>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive title lookup
    pub fn find(&self, title: &str) -> Option<&Arc<CatalogEntry>> {
        let needle = title.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.title.to_lowercase() == needle)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Arc<CatalogEntry>> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }
}
