use std::sync::Arc;

use crate::{catalog::Catalog, models::CatalogEntry, services::favorites::FavoritesSet};

pub const DEFAULT_SEARCH_LIMIT: usize = 8;

/// Substring search over catalog titles
///
/// Matching is case-insensitive. Favorites are excluded by exact title, which
/// is stricter than the case-insensitive check `FavoritesSet::add` applies.
/// Titles starting with the query rank before titles that only contain it,
/// each group ordered by title ignoring case.
pub fn search(
    catalog: &Catalog,
    favorites: &FavoritesSet,
    query: &str,
    limit: usize,
) -> Vec<Arc<CatalogEntry>> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut results: Vec<(bool, &Arc<CatalogEntry>)> = catalog
        .entries()
        .iter()
        .filter_map(|entry| {
            let title = entry.title.to_lowercase();
            title
                .contains(&needle)
                .then(|| (title.starts_with(&needle), entry))
        })
        .filter(|(_, entry)| !favorites.contains_exact(&entry.title))
        .collect();

    results.sort_by(|(a_starts, a), (b_starts, b)| {
        b_starts.cmp(a_starts).then_with(|| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title))
        })
    });

    tracing::debug!(query = %query, matches = results.len(), "Catalog search");

    results
        .into_iter()
        .take(limit)
        .map(|(_, entry)| Arc::clone(entry))
        .collect()
}
