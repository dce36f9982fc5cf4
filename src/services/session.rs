use std::sync::Arc;

use crate::{
    catalog::Catalog,
    models::{
        CatalogEntry, CrossRecommendation, GenreDistribution, Insights, ScoredRecommendation,
    },
    services::{
        cross_recommendations, favorites::FavoritesSet, genres, profile_label, recommendations,
        search,
    },
};

/// A user's favorites paired with the catalog they were picked from
///
/// Holds no derived state: every query recomputes from the current favorites.
#[derive(Debug, Clone)]
pub struct RecommendationSession {
    catalog: Arc<Catalog>,
    favorites: FavoritesSet,
}

impl RecommendationSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_favorites(catalog, FavoritesSet::new())
    }

    pub fn with_favorites(catalog: Arc<Catalog>, favorites: FavoritesSet) -> Self {
        Self { catalog, favorites }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn replace_favorites(&mut self, favorites: FavoritesSet) {
        self.favorites = favorites;
    }

    pub fn add_favorite(&mut self, title: &str) -> Option<Arc<CatalogEntry>> {
        let added = self.favorites.add(&self.catalog, title);
        match &added {
            Some(entry) => tracing::info!(title = %entry.title, favorites = self.favorites.len(), "Favorite added"),
            None => tracing::debug!(title = %title, "Favorite not added"),
        }
        added
    }

    pub fn remove_favorite(&mut self, title: &str) -> bool {
        let removed = self.favorites.remove(title);
        if removed {
            tracing::info!(title = %title, favorites = self.favorites.len(), "Favorite removed");
        }
        removed
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<Arc<CatalogEntry>> {
        search::search(&self.catalog, &self.favorites, query, limit)
    }

    pub fn analyze_genres(&self) -> GenreDistribution {
        genres::analyze(&self.favorites)
    }

    pub fn top_genre(&self) -> Option<String> {
        genres::top_genre(&self.favorites)
    }

    pub fn recommend(&self, limit: usize) -> Vec<ScoredRecommendation> {
        recommendations::recommend(&self.catalog, &self.favorites, limit)
    }

    pub fn cross_recommend(&self) -> Vec<CrossRecommendation> {
        cross_recommendations::cross_recommend(&self.catalog, &self.favorites)
    }

    pub fn profile_label(&self) -> Option<&'static str> {
        profile_label::label(&self.favorites)
    }

    /// Recomputes every derived view in one pass
    pub fn insights(&self, recommendation_limit: usize) -> Insights {
        let distribution = genres::analyze(&self.favorites);
        let top_genre = distribution.top_genre().map(str::to_string);
        let profile_label = profile_label::label_for_distribution(&distribution);

        Insights {
            favorites_count: self.favorites.len(),
            genres: distribution,
            top_genre,
            profile_label,
            recommendations: self.recommend(recommendation_limit),
            cross_recommendations: self.cross_recommend(),
        }
    }
}
