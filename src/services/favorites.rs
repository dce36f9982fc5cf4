use std::sync::Arc;

use crate::{
    catalog::Catalog,
    models::{CatalogEntry, Category},
};

/// Ordered set of favorited catalog entries
///
/// Titles are unique case-insensitively and insertion order is kept, since
/// cross recommendations walk favorites in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesSet {
    entries: Vec<Arc<CatalogEntry>>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a set from a saved title list
    ///
    /// Titles missing from the catalog and repeated titles are skipped.
    pub fn restore<I>(catalog: &Catalog, titles: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut favorites = Self::new();
        for title in titles {
            let title = title.as_ref();
            if favorites.add(catalog, title).is_none() {
                tracing::debug!(title = %title, "Skipped saved favorite");
            }
        }
        favorites
    }

    /// Favorites a catalog title
    ///
    /// Returns the added entry, or `None` when the title is unknown or
    /// already favorited. Neither case is an error.
    pub fn add(&mut self, catalog: &Catalog, title: &str) -> Option<Arc<CatalogEntry>> {
        let entry = catalog.find(title)?;
        if self.entries.iter().any(|fav| fav.has_title(&entry.title)) {
            return None;
        }

        self.entries.push(Arc::clone(entry));
        Some(Arc::clone(entry))
    }

    /// Removes a favorite by case-insensitive title
    pub fn remove(&mut self, title: &str) -> bool {
        match self.entries.iter().position(|fav| fav.has_title(title)) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Exact-match title membership, as used by search and recommendation exclusion
    pub fn contains_exact(&self, title: &str) -> bool {
        self.entries.iter().any(|fav| fav.title == title)
    }

    /// Favorite titles in insertion order, the shape profiles persist
    pub fn titles(&self) -> Vec<String> {
        self.entries.iter().map(|fav| fav.title.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CatalogEntry>> {
        self.entries.iter()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Arc<CatalogEntry>> {
        self.entries
            .iter()
            .filter(move |fav| fav.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
