use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    catalog::Catalog,
    models::{CatalogEntry, CrossRecommendation},
    services::favorites::FavoritesSet,
};

pub const MAX_CROSS_RECOMMENDATIONS: usize = 6;
const MIN_SHARED_GENRES: usize = 2;

/// Picks one cross-category match per favorite
///
/// Candidates must differ in category from the favorite and share at least two
/// genres with it. The first candidate with the highest overlap wins. Picks are
/// gathered in favorites order, deduplicated by title and capped at six.
pub fn cross_recommend(catalog: &Catalog, favorites: &FavoritesSet) -> Vec<CrossRecommendation> {
    let mut seen = HashSet::new();
    let picks: Vec<CrossRecommendation> = favorites
        .iter()
        .filter_map(|favorite| best_match(catalog, favorites, favorite))
        .filter(|pick| seen.insert(pick.entry.title.clone()))
        .take(MAX_CROSS_RECOMMENDATIONS)
        .collect();

    tracing::debug!(picks = picks.len(), "Computed cross recommendations");

    picks
}

fn best_match(
    catalog: &Catalog,
    favorites: &FavoritesSet,
    favorite: &Arc<CatalogEntry>,
) -> Option<CrossRecommendation> {
    let mut best: Option<CrossRecommendation> = None;

    let candidates = catalog.entries().iter().filter(|candidate| {
        candidate.category != favorite.category && !favorites.contains_exact(&candidate.title)
    });

    for candidate in candidates {
        let shared_genres: Vec<String> = candidate
            .genres
            .iter()
            .filter(|genre| favorite.has_genre(genre))
            .cloned()
            .collect();
        let overlap = shared_genres.len();

        if overlap < MIN_SHARED_GENRES {
            continue;
        }
        // Strictly greater, so the earliest candidate wins a tie
        if best.as_ref().map_or(true, |b| overlap > b.overlap) {
            best = Some(CrossRecommendation {
                entry: Arc::clone(candidate),
                shared_with: Arc::clone(favorite),
                shared_genres,
                overlap,
            });
        }
    }

    best
}
